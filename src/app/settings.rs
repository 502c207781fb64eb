use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    pub file_path: String,
    pub diameter: f32,
    pub line_weight: f32,
    pub history_limit: Option<usize>,
    pub show_grid: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            file_path: "circles.json".to_string(),
            diameter: 40.0,
            line_weight: 3.0,
            history_limit: None,
            show_grid: true,
        }
    }
}

impl AppSettings {
    /// Keeps sizes usable no matter what the file says.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.diameter.is_finite() || self.diameter < 4.0 {
            self.diameter = defaults.diameter;
        }
        if !self.line_weight.is_finite() || self.line_weight <= 0.0 {
            self.line_weight = defaults.line_weight;
        }
        self
    }
}

pub(super) fn config_path() -> Option<String> {
    if let Some(home) = std::env::var_os("HOME") {
        let path = std::path::PathBuf::from(home).join(".config").join("circlepad.toml");
        if path.exists() {
            return Some(path.display().to_string());
        }
    }
    if std::path::Path::new("settings.toml").exists() {
        return Some("settings.toml".to_string());
    }
    None
}

pub(super) fn parse_settings(path: &str, s: &str) -> Result<AppSettings> {
    let settings = if path.ends_with(".toml") {
        match toml::from_str::<AppSettings>(s) {
            Ok(settings) => settings,
            Err(toml_err) => serde_json::from_str::<AppSettings>(s).map_err(|_| toml_err)?,
        }
    } else {
        match serde_json::from_str::<AppSettings>(s) {
            Ok(settings) => settings,
            Err(json_err) => toml::from_str::<AppSettings>(s).map_err(|_| json_err)?,
        }
    };
    Ok(settings.sanitized())
}

pub(super) fn load_settings(path: &str) -> Result<AppSettings> {
    let s = std::fs::read_to_string(path)?;
    parse_settings(path, &s)
}

/// Loads from `path`, then `settings.json`, then falls back to defaults.
pub(super) fn load_or_default(path: &str) -> AppSettings {
    load_with_fallback(path, "settings.json")
}

fn load_with_fallback(primary: &str, fallback: &str) -> AppSettings {
    match load_settings(primary) {
        Ok(settings) => {
            log::info!("loaded settings from {primary}");
            return settings;
        }
        Err(e) => log::debug!("settings not loaded from {primary}: {e}"),
    }
    match load_settings(fallback) {
        Ok(settings) => {
            log::info!("loaded settings from {fallback}");
            settings
        }
        Err(e) => {
            log::warn!("using default settings: {e}");
            AppSettings::default()
        }
    }
}

pub(super) fn save_settings(path: &str, settings: &AppSettings) -> Result<()> {
    if path.ends_with(".toml") {
        let toml = toml::to_string_pretty(settings)?;
        std::fs::write(path, toml)?;
    } else {
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(path, json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let settings = parse_settings("settings.toml", "diameter = 60.0\nhistory_limit = 50\n").unwrap();
        assert_eq!(settings.diameter, 60.0);
        assert_eq!(settings.history_limit, Some(50));
        assert_eq!(settings.line_weight, 3.0);
        assert_eq!(settings.file_path, "circles.json");
    }

    #[test]
    fn json_is_accepted_under_toml_name() {
        let settings = parse_settings("settings.toml", r#"{ "show_grid": false }"#).unwrap();
        assert!(!settings.show_grid);
    }

    #[test]
    fn nonsense_sizes_are_reset() {
        let settings = parse_settings("settings.toml", "diameter = 0.0\nline_weight = -2.0\n").unwrap();
        assert_eq!(settings.diameter, 40.0);
        assert_eq!(settings.line_weight, 3.0);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_settings("settings.toml", "diameter = [").is_err());
    }

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("circlepad-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_primary_falls_back_to_json() {
        let dir = scratch_dir("fallback");
        let primary = dir.join("missing.toml").display().to_string();
        let fallback = dir.join("settings.json").display().to_string();
        std::fs::write(&fallback, r#"{ "diameter": 24.0, "file_path": "board.json" }"#).unwrap();

        let settings = load_with_fallback(&primary, &fallback);
        assert_eq!(settings.diameter, 24.0);
        assert_eq!(settings.file_path, "board.json");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn primary_wins_over_fallback() {
        let dir = scratch_dir("primary");
        let primary = dir.join("settings.toml").display().to_string();
        let fallback = dir.join("settings.json").display().to_string();
        std::fs::write(&primary, "diameter = 50.0\n").unwrap();
        std::fs::write(&fallback, r#"{ "diameter": 24.0 }"#).unwrap();

        assert_eq!(load_with_fallback(&primary, &fallback).diameter, 50.0);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unreadable_settings_give_defaults() {
        let dir = scratch_dir("defaults");
        let primary = dir.join("settings.toml").display().to_string();
        let fallback = dir.join("settings.json").display().to_string();
        std::fs::write(&primary, "diameter = [").unwrap();

        assert_eq!(load_with_fallback(&primary, &fallback), AppSettings::default());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_then_load_toml() {
        let dir = std::env::temp_dir().join(format!("circlepad-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml").display().to_string();
        let settings = AppSettings {
            history_limit: Some(10),
            ..AppSettings::default()
        };
        save_settings(&path, &settings).unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
        std::fs::remove_dir_all(&dir).ok();
    }
}
