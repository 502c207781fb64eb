use crate::error::{Error, Result};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type CircleId = u64;

/// Circle positions keyed by id. This is also the snapshot type kept in history.
pub type Circles = BTreeMap<CircleId, Point>;

/// Top-left corner of a circle's bounding box, in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Board {
    #[serde(default)]
    circles: Circles,
    #[serde(default)]
    next_id: CircleId,
}

impl Board {
    pub fn circles(&self) -> &Circles {
        &self.circles
    }

    pub fn get(&self, id: CircleId) -> Option<Point> {
        self.circles.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Fails once the id space is used up rather than wrapping onto live ids.
    pub fn add_circle(&mut self, position: Point) -> Result<CircleId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::IdsExhausted)?;
        self.circles.insert(id, position);
        Ok(id)
    }

    pub fn remove_circle(&mut self, id: CircleId) -> bool {
        self.circles.remove(&id).is_some()
    }

    pub fn move_circle(&mut self, id: CircleId, position: Point) -> bool {
        match self.circles.get_mut(&id) {
            Some(p) => {
                *p = position;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.circles.clear();
    }

    /// Replaces the circle map. `next_id` keeps counting forward so ids dropped
    /// from history are never handed out again.
    pub fn restore(&mut self, circles: Circles) {
        self.circles = circles;
    }

    /// Replaces the whole board with a loaded one, keeping the id counter ahead
    /// of every id in the file and of every id handed out so far. Nothing is
    /// changed on error.
    pub fn replace_with_loaded(&mut self, loaded: Board) -> Result<()> {
        let past_max = match loaded.circles.keys().next_back() {
            Some(id) => id.checked_add(1).ok_or(Error::IdsExhausted)?,
            None => 0,
        };
        self.next_id = self.next_id.max(loaded.next_id).max(past_max);
        self.circles = loaded.circles;
        Ok(())
    }
}
