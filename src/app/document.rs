use crate::error::Result;
use crate::model::Board;
use std::path::Path;

pub(super) fn save_board(path: impl AsRef<Path>, board: &Board) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub(super) fn load_board(path: impl AsRef<Path>) -> Result<Board> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Point;

    fn scratch_file(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("circlepad-doc-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn saved_board_loads_back() {
        let path = scratch_file("board.json");
        let mut board = Board::default();
        board.add_circle(Point::new(10.0, 20.0)).unwrap();
        let removed = board.add_circle(Point::new(30.0, 40.0)).unwrap();
        board.remove_circle(removed);

        save_board(&path, &board).unwrap();
        let loaded = load_board(&path).unwrap();
        assert_eq!(loaded, board);
        let mut loaded = loaded;
        assert_eq!(loaded.add_circle(Point::default()).unwrap(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_board(scratch_file("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let path = scratch_file("bad.json");
        std::fs::write(&path, "{ \"circles\": [").unwrap();
        let err = load_board(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        std::fs::remove_file(&path).ok();
    }
}
