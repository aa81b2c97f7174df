//! Board state and the reducers that change it.
//!
//! [`BoardService`] keeps the loaded boards in memory and persists the
//! affected board through [`BoardStorage`] after every successful change.
//! Operations that reference a missing board, column or card change nothing
//! and return `false`.

use log::{debug, info};

use crate::model::{KanbanBoard, KanbanCard, KanbanColumn};
use crate::storage::BoardStorage;

pub struct BoardService {
    boards: Vec<KanbanBoard>,
    storage: BoardStorage,
    loaded: bool,
}

impl BoardService {
    pub fn new(storage: BoardStorage) -> Self {
        Self {
            boards: Vec::new(),
            storage,
            loaded: false,
        }
    }

    /// (Re)load every board from storage
    pub async fn load(&mut self) {
        self.boards = self.storage.get_boards().await;
        self.loaded = true;
        info!("Loaded {} boards", self.boards.len());
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn boards(&self) -> &[KanbanBoard] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&KanbanBoard> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    // Boards

    pub async fn add_board(&mut self, board: KanbanBoard) {
        self.storage.add_board(board.clone()).await;
        info!("Added board {} ({})", board.title, board.id);
        self.boards.push(board);
    }

    pub async fn update_board(&mut self, updated: KanbanBoard) -> bool {
        self.mutate_board(&updated.id.clone(), |board| {
            *board = updated;
            true
        })
        .await
    }

    pub async fn delete_board(&mut self, board_id: &str) -> bool {
        let before = self.boards.len();
        self.boards.retain(|b| b.id != board_id);
        if self.boards.len() == before {
            debug!("delete_board: unknown board {}", board_id);
            return false;
        }
        self.storage.delete_board(board_id).await;
        true
    }

    // Columns

    pub async fn add_column(&mut self, board_id: &str, column: KanbanColumn) -> bool {
        self.mutate_board(board_id, |board| {
            board.columns.push(column);
            true
        })
        .await
    }

    pub async fn update_column(&mut self, board_id: &str, column: KanbanColumn) -> bool {
        self.mutate_board(board_id, |board| match board.column_mut(&column.id) {
            Some(slot) => {
                *slot = column;
                true
            }
            None => false,
        })
        .await
    }

    pub async fn delete_column(&mut self, board_id: &str, column_id: &str) -> bool {
        self.mutate_board(board_id, |board| {
            let before = board.columns.len();
            board.columns.retain(|c| c.id != column_id);
            board.columns.len() != before
        })
        .await
    }

    /// Replace the column sequence, renumbering `order` to match
    pub async fn reorder_columns(&mut self, board_id: &str, columns: Vec<KanbanColumn>) -> bool {
        self.mutate_board(board_id, |board| {
            board.columns = columns;
            for (order, column) in board.columns.iter_mut().enumerate() {
                column.order = order as u32;
            }
            true
        })
        .await
    }

    // Cards

    pub async fn add_card(&mut self, board_id: &str, column_id: &str, mut card: KanbanCard) -> bool {
        self.mutate_board(board_id, |board| {
            let owner = board.id.clone();
            match board.column_mut(column_id) {
                Some(column) => {
                    card.column_id = column_id.to_string();
                    card.board_id = owner;
                    column.cards.push(card);
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Replace a card by id.
    ///
    /// When the card's `column_id` names a different column than the one
    /// currently holding it, the card is moved to the end of that column.
    pub async fn update_card(&mut self, board_id: &str, card: KanbanCard) -> bool {
        self.mutate_board(board_id, |board| {
            if board.column(&card.column_id).is_none() {
                return false;
            }
            let Some((column_idx, card_idx)) = locate_card(board, &card.id) else {
                return false;
            };

            if board.columns[column_idx].id == card.column_id {
                board.columns[column_idx].cards[card_idx] = card;
            } else {
                board.columns[column_idx].cards.remove(card_idx);
                if let Some(target) = board.column_mut(&card.column_id) {
                    target.cards.push(card);
                }
            }
            true
        })
        .await
    }

    pub async fn delete_card(&mut self, board_id: &str, column_id: &str, card_id: &str) -> bool {
        self.mutate_board(board_id, |board| match board.column_mut(column_id) {
            Some(column) => {
                let before = column.cards.len();
                column.cards.retain(|c| c.id != card_id);
                column.cards.len() != before
            }
            None => false,
        })
        .await
    }

    /// Take a card out of `from_column_id` and append it to `to_column_id`
    pub async fn move_card(&mut self, card_id: &str, from_column_id: &str, to_column_id: &str, board_id: &str) -> bool {
        self.mutate_board(board_id, |board| {
            if board.column(to_column_id).is_none() {
                return false;
            }
            let Some(from) = board.column_mut(from_column_id) else {
                return false;
            };
            let Some(index) = from.card_index(card_id) else {
                return false;
            };

            let mut card = from.cards.remove(index);
            card.column_id = to_column_id.to_string();
            if let Some(to) = board.column_mut(to_column_id) {
                to.cards.push(card);
            }
            true
        })
        .await
    }

    /// Replace a column's card sequence verbatim
    pub async fn reorder_cards(&mut self, board_id: &str, column_id: &str, cards: Vec<KanbanCard>) -> bool {
        self.mutate_board(board_id, |board| match board.column_mut(column_id) {
            Some(column) => {
                column.cards = cards
                    .into_iter()
                    .map(|mut card| {
                        card.column_id = column_id.to_string();
                        card
                    })
                    .collect();
                true
            }
            None => false,
        })
        .await
    }

    async fn mutate_board<F>(&mut self, board_id: &str, apply: F) -> bool
    where
        F: FnOnce(&mut KanbanBoard) -> bool,
    {
        let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) else {
            debug!("Unknown board {}", board_id);
            return false;
        };
        if !apply(board) {
            debug!("No change applied to board {}", board_id);
            return false;
        }
        self.storage.update_board(board).await;
        true
    }
}

fn locate_card(board: &KanbanBoard, card_id: &str) -> Option<(usize, usize)> {
    board
        .columns
        .iter()
        .enumerate()
        .find_map(|(ci, column)| column.card_index(card_id).map(|idx| (ci, idx)))
}
