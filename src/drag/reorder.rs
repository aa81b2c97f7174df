//! In-column reordering after a long-press.
//!
//! Purely index based: the column registry and hit-testing are not involved.

use crate::model::KanbanCard;

/// The complete new card sequence for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderedColumn {
    pub column_id: String,
    pub cards: Vec<KanbanCard>,
}

#[derive(Debug, Clone)]
struct ActiveReorder {
    column_id: String,
    cards: Vec<KanbanCard>,
    from_index: usize,
    current_index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ListReorder {
    active: Option<ActiveReorder>,
}

impl ListReorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lift the card at `index`; returns `false` when the index is out of range
    pub fn begin(&mut self, column_id: &str, cards: Vec<KanbanCard>, index: usize) -> bool {
        if index >= cards.len() {
            return false;
        }
        log::debug!("Reorder started in column {} at index {}", column_id, index);
        self.active = Some(ActiveReorder {
            column_id: column_id.to_string(),
            cards,
            from_index: index,
            current_index: index,
        });
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn column_id(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.column_id.as_str())
    }

    pub fn from_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.from_index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.current_index)
    }

    /// Working order, with the lifted card at its current slot
    pub fn cards(&self) -> Option<&[KanbanCard]> {
        self.active.as_ref().map(|a| a.cards.as_slice())
    }

    pub fn lifted_card(&self) -> Option<&KanbanCard> {
        self.active.as_ref().map(|a| &a.cards[a.current_index])
    }

    /// Move the lifted card to `index`, clamped to the list bounds
    pub fn hover_index(&mut self, index: usize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let target = index.min(active.cards.len() - 1);
        if target == active.current_index {
            return;
        }
        let card = active.cards.remove(active.current_index);
        active.cards.insert(target, card);
        active.current_index = target;
    }

    /// Drop the lifted card and emit the full new order
    pub fn finish(&mut self) -> Option<ReorderedColumn> {
        self.active.take().map(|a| {
            log::debug!(
                "Reorder finished in column {}: {} -> {}",
                a.column_id,
                a.from_index,
                a.current_index
            );
            ReorderedColumn {
                column_id: a.column_id,
                cards: a.cards,
            }
        })
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

/// Slot index for a vertical offset into a list of equally tall rows
pub fn index_for_offset(offset_y: f32, slot_height: f32, len: usize) -> usize {
    if len == 0 || slot_height <= 0.0 || offset_y <= 0.0 {
        return 0;
    }
    ((offset_y / slot_height) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[&str]) -> Vec<KanbanCard> {
        ids.iter()
            .map(|id| {
                let mut card = KanbanCard::new("b", "col", id);
                card.id = id.to_string();
                card
            })
            .collect()
    }

    fn ids(column: &ReorderedColumn) -> Vec<&str> {
        column.cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_move_down_then_finish() {
        let mut reorder = ListReorder::new();
        assert!(reorder.begin("col", cards(&["a", "b", "c"]), 0));
        reorder.hover_index(2);
        assert_eq!(reorder.current_index(), Some(2));
        let result = reorder.finish().unwrap();
        assert_eq!(result.column_id, "col");
        assert_eq!(ids(&result), vec!["b", "c", "a"]);
        assert!(!reorder.is_active());
    }

    #[test]
    fn test_hover_index_clamps() {
        let mut reorder = ListReorder::new();
        reorder.begin("col", cards(&["a", "b", "c"]), 1);
        reorder.hover_index(99);
        assert_eq!(reorder.lifted_card().unwrap().id, "b");
        assert_eq!(ids(&reorder.finish().unwrap()), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_begin_out_of_range_and_cancel() {
        let mut reorder = ListReorder::new();
        assert!(!reorder.begin("col", cards(&["a"]), 3));
        assert!(reorder.begin("col", cards(&["a", "b"]), 0));
        reorder.cancel();
        assert!(reorder.finish().is_none());
    }

    #[test]
    fn test_index_for_offset() {
        assert_eq!(index_for_offset(-3.0, 4.0, 5), 0);
        assert_eq!(index_for_offset(3.9, 4.0, 5), 0);
        assert_eq!(index_for_offset(4.0, 4.0, 5), 1);
        assert_eq!(index_for_offset(100.0, 4.0, 5), 4);
        assert_eq!(index_for_offset(10.0, 4.0, 0), 0);
    }
}
