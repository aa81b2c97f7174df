use std::sync::Arc;

use log::error;

use super::{KeyValueStore, StorageError};
use crate::constants::{BOARDS_KEY, ERROR_LOAD_BOARDS, ERROR_SAVE_BOARDS};
use crate::model::KanbanBoard;

/// Reads and writes the board array stored under [`BOARDS_KEY`].
///
/// Failures are logged and absorbed: a failed load yields no boards and a
/// failed save leaves the caller's in-memory state as it is.
#[derive(Clone)]
pub struct BoardStorage {
    store: Arc<dyn KeyValueStore>,
}

impl BoardStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn get_boards(&self) -> Vec<KanbanBoard> {
        match self.try_get_boards().await {
            Ok(boards) => boards,
            Err(e) => {
                error!("{}: {}", ERROR_LOAD_BOARDS, e);
                Vec::new()
            }
        }
    }

    pub async fn save_boards(&self, boards: &[KanbanBoard]) {
        if let Err(e) = self.try_save_boards(boards).await {
            error!("{}: {}", ERROR_SAVE_BOARDS, e);
        }
    }

    pub async fn add_board(&self, board: KanbanBoard) {
        let mut boards = self.get_boards().await;
        boards.push(board);
        self.save_boards(&boards).await;
    }

    /// Replace the stored board with the same id; unknown ids are ignored
    pub async fn update_board(&self, updated: &KanbanBoard) {
        let mut boards = self.get_boards().await;
        if let Some(slot) = boards.iter_mut().find(|b| b.id == updated.id) {
            *slot = updated.clone();
            self.save_boards(&boards).await;
        }
    }

    pub async fn delete_board(&self, board_id: &str) {
        let mut boards = self.get_boards().await;
        boards.retain(|b| b.id != board_id);
        self.save_boards(&boards).await;
    }

    async fn try_get_boards(&self) -> Result<Vec<KanbanBoard>, StorageError> {
        match self.store.get_item(BOARDS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn try_save_boards(&self, boards: &[KanbanBoard]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(boards)?;
        self.store.set_item(BOARDS_KEY, &raw).await
    }
}
