//! Board, column and card data types.
//!
//! These types are serialized as the JSON array persisted under
//! [`BOARDS_KEY`](crate::constants::BOARDS_KEY); field names use camelCase so
//! the stored blob keeps its established shape.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_COLUMN_TITLES;
use crate::utils::datetime;

/// Card priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Next priority in the Low -> Medium -> High -> Low cycle
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanCard {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    pub column_id: String,
    pub board_id: String,
    pub created_at: String,
}

impl KanbanCard {
    pub fn new(board_id: &str, column_id: &str, title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.trim().to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            column_id: column_id.to_string(),
            board_id: board_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Whether the due date lies strictly before `now`
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        datetime::parse_date_value(self.due_date.as_deref())
            .map(|due| due < now.naive_local())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanColumn {
    pub id: String,
    pub title: String,
    pub board_id: String,
    #[serde(default)]
    pub cards: Vec<KanbanCard>,
    #[serde(default)]
    pub order: u32,
}

impl KanbanColumn {
    pub fn new(board_id: &str, title: &str, order: u32) -> Self {
        Self {
            id: format!("{}-col-{}", board_id, Uuid::new_v4().simple()),
            title: title.trim().to_string(),
            board_id: board_id.to_string(),
            cards: Vec::new(),
            order,
        }
    }

    pub fn card(&self, card_id: &str) -> Option<&KanbanCard> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanBoard {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<KanbanColumn>,
    pub created_at: String,
    pub color: String,
}

impl KanbanBoard {
    /// Create a board with the default "To Do / In Progress / Done" columns
    pub fn new(title: &str, color: &str) -> Self {
        let id = Uuid::new_v4().to_string();
        let columns = DEFAULT_COLUMN_TITLES
            .iter()
            .enumerate()
            .map(|(order, title)| KanbanColumn::new(&id, title, order as u32))
            .collect();

        Self {
            id,
            title: title.trim().to_string(),
            description: None,
            columns,
            created_at: Utc::now().to_rfc3339(),
            color: color.to_string(),
        }
    }

    pub fn column(&self, column_id: &str) -> Option<&KanbanColumn> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_mut(&mut self, column_id: &str) -> Option<&mut KanbanColumn> {
        self.columns.iter_mut().find(|c| c.id == column_id)
    }

    /// Locate a card anywhere on the board
    pub fn find_card(&self, card_id: &str) -> Option<&KanbanCard> {
        self.columns.iter().find_map(|c| c.card(card_id))
    }

    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Cards in the first column whose title mentions "done"
    pub fn completed_count(&self) -> usize {
        self.columns
            .iter()
            .find(|c| c.title.to_lowercase().contains("done"))
            .map_or(0, |c| c.cards.len())
    }
}

/// A card with a due date, flattened for the calendar view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub board_title: String,
    pub card_id: String,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_uses_camel_case() {
        let mut card = KanbanCard::new("b1", "b1-col-1", "Write docs");
        card.due_date = Some("2025-03-09".to_string());
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"columnId\":\"b1-col-1\""));
        assert!(json.contains("\"dueDate\":\"2025-03-09\""));
        assert!(json.contains("\"priority\":\"medium\""));
        assert!(!json.contains("description"));
    }

    #[test]
    fn test_board_parses_stored_shape() {
        let raw = r##"{
            "id": "b1", "title": "Work", "color": "#3B82F6", "createdAt": "2025-01-01T00:00:00Z",
            "columns": [{"id": "b1-col-1", "title": "To Do", "boardId": "b1", "order": 0,
                "cards": [{"id": "c1", "title": "Setup", "priority": "high",
                           "columnId": "b1-col-1", "boardId": "b1", "createdAt": "2025-01-01T00:00:00Z"}]}]
        }"##;
        let board: KanbanBoard = serde_json::from_str(raw).unwrap();
        assert_eq!(board.columns.len(), 1);
        assert_eq!(board.find_card("c1").unwrap().priority, Priority::High);
    }

    #[test]
    fn test_completed_count_reads_done_column() {
        let mut board = KanbanBoard::new("Chores", "#10B981");
        assert_eq!(board.completed_count(), 0);

        let (todo, done) = (board.columns[0].id.clone(), board.columns[2].id.clone());
        let dishes = KanbanCard::new(&board.id, &done, "Dishes");
        let laundry = KanbanCard::new(&board.id, &todo, "Laundry");
        board.columns[2].cards.push(dishes);
        board.columns[0].cards.push(laundry);
        assert_eq!(board.completed_count(), 1);
        assert_eq!(board.card_count(), 2);

        board.columns.remove(2);
        assert_eq!(board.completed_count(), 0);
    }

    #[test]
    fn test_new_board_has_default_columns() {
        let board = KanbanBoard::new("  Personal ", "#10B981");
        assert_eq!(board.title, "Personal");
        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert!(board.columns.iter().all(|c| c.board_id == board.id));
        assert_eq!(board.columns[2].order, 2);
    }

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.cycle(), Priority::Medium);
        assert_eq!(Priority::High.cycle(), Priority::Low);
    }
}
