//! Column rectangles known to the drag engine.

use super::geometry::Rect;

/// Maps a column id to its on-screen rectangle.
///
/// Entries iterate in registration order. Re-registering an id replaces its
/// rectangle in place, so a column keeps its position in the scan order.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    entries: Vec<(String, Rect)>,
}

impl ColumnRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the rectangle for `column_id`
    pub fn register(&mut self, column_id: &str, rect: Rect) {
        match self.entries.iter_mut().find(|(id, _)| id == column_id) {
            Some(entry) => entry.1 = rect,
            None => self.entries.push((column_id.to_string(), rect)),
        }
    }

    /// Forget a column so it can no longer answer hit-tests
    pub fn unregister(&mut self, column_id: &str) {
        self.entries.retain(|(id, _)| id != column_id);
    }

    pub fn get(&self, column_id: &str) -> Option<Rect> {
        self.entries.iter().find(|(id, _)| id == column_id).map(|(_, rect)| *rect)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.entries.iter().map(|(id, rect)| (id.as_str(), rect))
    }

    pub fn column_ids(&self) -> Vec<String> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
