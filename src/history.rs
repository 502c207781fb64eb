//! Snapshot history with a cursor.
//!
//! Every recorded state is a full copy. Undo and redo move the cursor and hand
//! back the snapshot under it; recording after an undo drops everything past
//! the cursor.

#[derive(Clone, Debug)]
pub struct History<T: Clone> {
    snapshots: Vec<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T: Clone> History<T> {
    /// An unbounded history holding just `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    pub fn record(&mut self, state: T) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state);
        self.cursor = self.snapshots.len() - 1;
        self.enforce_limit();
    }

    /// Caps the number of snapshots kept, including the current one; `None`
    /// keeps everything. If the history is already over the cap the oldest
    /// snapshots go first and redo steps last.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.map(|n| n.max(1));
        self.enforce_limit();
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.snapshots.len() <= limit {
            return;
        }
        let overflow = self.snapshots.len() - limit;
        let from_past = overflow.min(self.cursor);
        self.snapshots.drain(0..from_past);
        self.cursor -= from_past;
        self.snapshots.truncate(limit);
    }

    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn current(&self) -> &T {
        &self.snapshots[self.cursor]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn reset(&mut self, state: T) {
        self.snapshots.clear();
        self.snapshots.push(state);
        self.cursor = 0;
    }
}
