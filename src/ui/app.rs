//! Application state and input handling.
//!
//! The [`App`] owns the board view's [`DragSession`]. Pointer input for a
//! card goes to that card's [`CardGestureRecognizer`], which drives the
//! session; committed moves come back as [`Action::MoveCard`] through the
//! action channel and are persisted after the session has already cleared.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::core::{Action, DialogType, EventType, InputPurpose, View};
use super::layout::BoardLayout;
use crate::boards::BoardService;
use crate::config::Config;
use crate::constants::{
    CARD_HEIGHT, ERROR_EMPTY_TITLE, SUCCESS_BOARD_CREATED, SUCCESS_BOARD_DELETED, SUCCESS_BOARD_UPDATED,
    SUCCESS_CARDS_REORDERED, SUCCESS_CARD_CREATED, SUCCESS_CARD_DELETED, SUCCESS_CARD_MOVED, SUCCESS_CARD_UPDATED,
    SUCCESS_COLUMN_CREATED,
};
use crate::drag::{reorder, CardGestureRecognizer, DragSession, GestureConfig, GestureEvent, ListReorder, Point};
use crate::logger::Logger;
use crate::model::{KanbanBoard, KanbanCard, KanbanColumn};
use crate::utils::{color, datetime};

pub struct App {
    pub config: Config,
    pub boards: BoardService,
    pub logger: Logger,

    // Navigation
    pub view: View,
    pub dialog: Option<DialogType>,
    pub status_message: Option<String>,
    pub selected_board: usize,
    pub selected_column: usize,
    pub selected_card: usize,
    pub first_column: usize,
    pub calendar_month: NaiveDate,

    // Last frame's geometry
    pub layout: BoardLayout,

    // Drag-and-drop
    pub drag: DragSession,
    pub reorder: ListReorder,
    recognizers: HashMap<String, CardGestureRecognizer>,
    active_card: Option<String>,
    gesture_config: GestureConfig,

    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, boards: BoardService, logger: Logger) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let gesture_config = config.drag.gesture_config();
        let view = if config.ui.default_view == "calendar" {
            View::Calendar
        } else {
            View::Boards
        };

        Self {
            config,
            boards,
            logger,
            view,
            dialog: None,
            status_message: None,
            selected_board: 0,
            selected_column: 0,
            selected_card: 0,
            first_column: 0,
            calendar_month: Local::now().date_naive(),
            layout: BoardLayout::default(),
            drag: DragSession::new(),
            reorder: ListReorder::new(),
            recognizers: HashMap::new(),
            active_card: None,
            gesture_config,
            action_tx,
            action_rx,
            should_quit: false,
        }
    }

    pub async fn load(&mut self) {
        self.boards.load().await;
        self.logger.log(format!("App: loaded {} boards", self.boards.boards().len()));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dispatch(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn current_board(&self) -> Option<&KanbanBoard> {
        match &self.view {
            View::Board(board_id) => self.boards.board(board_id),
            _ => None,
        }
    }

    fn current_board_id(&self) -> Option<String> {
        match &self.view {
            View::Board(board_id) => Some(board_id.clone()),
            _ => None,
        }
    }

    fn selected_column(&self) -> Option<&KanbanColumn> {
        self.current_board()?.columns.get(self.selected_column)
    }

    fn selected_card(&self) -> Option<&KanbanCard> {
        self.selected_column()?.cards.get(self.selected_card)
    }

    /// Whether the card with `card_id` is the one being dragged
    pub fn is_card_dragged(&self, card_id: &str) -> bool {
        self.drag.is_dragging_card(card_id)
    }

    // Board view lifecycle

    fn open_board(&mut self, board_id: &str) {
        self.terminate_gestures();
        self.view = View::Board(board_id.to_string());
        self.drag = self.new_drag_session(board_id);
        self.recognizers.clear();
        self.selected_column = 0;
        self.selected_card = 0;
        self.first_column = 0;
        self.logger.log(format!("App: opened board {}", board_id));
    }

    /// A fresh session whose committed moves become [`Action::MoveCard`]
    fn new_drag_session(&self, board_id: &str) -> DragSession {
        let tx = self.action_tx.clone();
        let board_id = board_id.to_string();
        DragSession::with_move_handler(move |card_id: &str, from: &str, to: &str| {
            let _ = tx.send(Action::MoveCard {
                board_id: board_id.clone(),
                card_id: card_id.to_string(),
                from_column_id: from.to_string(),
                to_column_id: to.to_string(),
            });
        })
    }

    fn leave_board(&mut self) {
        self.terminate_gestures();
        self.drag = DragSession::new();
        self.recognizers.clear();
    }

    /// Recompute geometry for `area` and publish column and card bounds
    pub fn relayout(&mut self, area: Rect) {
        let Some(board_id) = self.current_board_id() else {
            self.layout = BoardLayout::frame(area);
            return;
        };
        let Some(board) = self.boards.board(&board_id) else {
            self.layout = BoardLayout::frame(area);
            return;
        };

        let layout = BoardLayout::compute(board, area, self.config.ui.column_width, self.first_column);

        for column_id in self.drag.registry().column_ids() {
            if layout.column(&column_id).is_none() {
                self.drag.unregister_column(&column_id);
            }
        }
        for column in &layout.columns {
            self.drag.register_column(&column.column_id, crate::drag::Rect::from(column.area));
        }

        let mut visible = Vec::new();
        for column in &layout.columns {
            let Some(model_column) = board.column(&column.column_id) else {
                continue;
            };
            for card_area in &column.cards {
                let Some(card) = model_column.card(&card_area.card_id) else {
                    continue;
                };
                let bounds = crate::drag::Rect::from(card_area.area);
                self.recognizers
                    .entry(card.id.clone())
                    .and_modify(|r| r.update(card.clone(), &column.column_id, bounds))
                    .or_insert_with(|| {
                        CardGestureRecognizer::new(card.clone(), &column.column_id, bounds, self.gesture_config)
                    });
                visible.push(card.id.clone());
            }
        }

        let active = self.active_card.clone();
        self.recognizers.retain(|id, r| {
            visible.contains(id) || active.as_deref() == Some(id.as_str()) || r.is_active() || r.has_pending_tap()
        });
        self.layout = layout;
    }

    /// Route one terminal event. Losing focus or resizing abandons any gesture.
    pub fn handle_event(&mut self, event: EventType, now: Instant) {
        match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse, now),
            EventType::Resize(width, height) => {
                self.logger.log(format!("UI: terminal resized to {}x{}", width, height));
                self.terminate_gestures();
            }
            EventType::FocusLost => self.terminate_gestures(),
            EventType::Tick | EventType::Other => {}
        }
    }

    // Pointer input

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.dialog.is_some() || !self.config.ui.mouse_enabled {
            return;
        }
        let position = Point::new(f32::from(mouse.column), f32::from(mouse.row));

        match self.view {
            View::Boards => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.click_board_row(mouse.row);
                }
            }
            View::Board(_) => self.handle_board_mouse(mouse.kind, position, now),
            View::Calendar => {}
        }
    }

    fn click_board_row(&mut self, row: u16) {
        let first_row = self.layout.body.y + 1;
        if row < first_row {
            return;
        }
        let index = usize::from(row - first_row);
        if let Some(board) = self.boards.boards().get(index) {
            let board_id = board.id.clone();
            self.selected_board = index;
            self.open_board(&board_id);
        }
    }

    fn handle_board_mouse(&mut self, kind: MouseEventKind, position: Point, now: Instant) {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some((column, card)) = self.layout.card_at(position) else {
                    return;
                };
                let card_id = card.card_id.clone();
                self.selected_column = column.index;
                self.selected_card = card.index;

                if let Some(recognizer) = self.recognizers.get_mut(&card_id) {
                    if recognizer.on_pointer_down(&self.drag, position, now) {
                        self.active_card = Some(card_id);
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.reorder.is_active() {
                    self.update_reorder(position);
                    return;
                }
                let Some(card_id) = self.active_card.clone() else {
                    return;
                };
                let event = self
                    .recognizers
                    .get_mut(&card_id)
                    .and_then(|r| r.on_pointer_move(&mut self.drag, position, now));
                if let Some(event) = event {
                    self.handle_gesture(&card_id, event);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(card_id) = self.active_card.take() else {
                    return;
                };
                let event = self
                    .recognizers
                    .get_mut(&card_id)
                    .and_then(|r| r.on_pointer_up(&mut self.drag, position, now));
                if let Some(event) = event {
                    self.handle_gesture(&card_id, event);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_columns(1),
            MouseEventKind::ScrollUp => self.scroll_columns(-1),
            _ => {}
        }
    }

    /// Deliver time-based gesture outcomes (confirmed taps, long-presses)
    pub fn tick(&mut self, now: Instant) {
        let mut events = Vec::new();
        for (card_id, recognizer) in self.recognizers.iter_mut() {
            while let Some(event) = recognizer.poll(now) {
                events.push((card_id.clone(), event));
            }
        }
        for (card_id, event) in events {
            self.handle_gesture(&card_id, event);
        }
    }

    /// Abandon whatever gesture is in flight
    pub fn terminate_gestures(&mut self) {
        if let Some(card_id) = self.active_card.take() {
            let event = self
                .recognizers
                .get_mut(&card_id)
                .and_then(|r| r.on_terminate(&mut self.drag));
            if let Some(event) = event {
                self.handle_gesture(&card_id, event);
            }
        }
        self.drag.end_drag();
        self.reorder.cancel();
    }

    fn handle_gesture(&mut self, card_id: &str, event: GestureEvent) {
        let Some(board_id) = self.current_board_id() else {
            return;
        };

        match event {
            // A modal already owns input; late taps don't replace it
            GestureEvent::Open | GestureEvent::Edit if self.dialog.is_some() => {}
            GestureEvent::Open => {
                self.show_dialog(DialogType::CardDetail {
                    board_id,
                    card_id: card_id.to_string(),
                });
            }
            GestureEvent::Edit => {
                let title = self.boards.board(&board_id).and_then(|b| b.find_card(card_id)).map(|c| c.title.clone());
                if let Some(buffer) = title {
                    let purpose = InputPurpose::EditTitle {
                        board_id,
                        card_id: card_id.to_string(),
                    };
                    self.open_input(purpose, buffer);
                }
            }
            GestureEvent::ReorderRequested => self.begin_reorder(&board_id, card_id),
            GestureEvent::ReorderReleased => {
                if let Some(result) = self.reorder.finish() {
                    self.dispatch(Action::ReorderCards {
                        board_id,
                        column_id: result.column_id,
                        cards: result.cards,
                    });
                }
            }
            GestureEvent::DragStarted => {
                if let Some(card) = self.drag.dragged_card() {
                    self.status_message = Some(format!("Dragging '{}'", card.title));
                }
            }
            GestureEvent::Dropped(Some(card_move)) => {
                self.logger.log(format!(
                    "App: dropped card {} from {} into {}",
                    card_move.card_id, card_move.from_column_id, card_move.to_column_id
                ));
            }
            GestureEvent::Dropped(None) => {
                self.status_message = None;
            }
            GestureEvent::Cancelled => {
                self.reorder.cancel();
                self.status_message = None;
            }
        }
    }

    fn begin_reorder(&mut self, board_id: &str, card_id: &str) {
        let Some(board) = self.boards.board(board_id) else {
            return;
        };
        let Some(column) = board.columns.iter().find(|c| c.card(card_id).is_some()) else {
            return;
        };
        let Some(index) = column.card_index(card_id) else {
            return;
        };
        let (column_id, cards) = (column.id.clone(), column.cards.clone());
        if self.reorder.begin(&column_id, cards, index) {
            self.status_message = Some("Reordering: move vertically, release to drop".to_string());
        }
    }

    fn update_reorder(&mut self, position: Point) {
        let Some(column_id) = self.reorder.column_id() else {
            return;
        };
        let Some(column) = self.layout.column(column_id) else {
            return;
        };
        let len = self.reorder.cards().map_or(0, <[KanbanCard]>::len);
        let offset = position.y - f32::from(column.inner().y);
        let index = reorder::index_for_offset(offset, f32::from(CARD_HEIGHT), len);
        self.reorder.hover_index(index);
    }

    fn scroll_columns(&mut self, delta: isize) {
        let count = self.current_board().map_or(0, |b| b.columns.len());
        let next = self.first_column.saturating_add_signed(delta);
        self.first_column = next.min(count.saturating_sub(1));
    }

    // Keyboard input

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.dispatch(Action::Quit),
            KeyCode::Char('C') => self.dispatch(Action::Navigate(View::Calendar)),
            KeyCode::Char('G') => self.dispatch(Action::ShowDialog(DialogType::Logs)),
            KeyCode::Char('?') => self.dispatch(Action::ShowDialog(DialogType::Help)),
            _ => match self.view.clone() {
                View::Boards => self.handle_boards_key(key),
                View::Board(board_id) => self.handle_board_key(&board_id, key),
                View::Calendar => self.handle_calendar_key(key),
            },
        }
    }

    fn handle_boards_key(&mut self, key: KeyEvent) {
        let count = self.boards.boards().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') if count > 0 => {
                self.selected_board = (self.selected_board + 1).min(count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_board = self.selected_board.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(board) = self.boards.boards().get(self.selected_board) {
                    self.dispatch(Action::Navigate(View::Board(board.id.clone())));
                }
            }
            KeyCode::Char('n') => self.open_input(InputPurpose::NewBoard, String::new()),
            KeyCode::Char('e') => {
                if let Some(board) = self.boards.boards().get(self.selected_board) {
                    let purpose = InputPurpose::EditBoardDescription {
                        board_id: board.id.clone(),
                    };
                    let buffer = board.description.clone().unwrap_or_default();
                    self.open_input(purpose, buffer);
                }
            }
            KeyCode::Char('D') => {
                if let Some(board) = self.boards.boards().get(self.selected_board) {
                    let board_id = board.id.clone();
                    self.show_dialog(DialogType::ConfirmDeleteBoard { board_id });
                }
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, board_id: &str, key: KeyEvent) {
        let column_count = self.current_board().map_or(0, |b| b.columns.len());
        let card_count = self.selected_column().map_or(0, |c| c.cards.len());

        match key.code {
            KeyCode::Esc => {
                if self.drag.is_dragging() || self.reorder.is_active() || self.active_card.is_some() {
                    self.terminate_gestures();
                } else {
                    self.dispatch(Action::Navigate(View::Boards));
                }
            }
            KeyCode::Char('H') => self.move_selected_card(board_id, -1),
            KeyCode::Char('L') => self.move_selected_card(board_id, 1),
            KeyCode::Char('K') => self.shift_selected_card(board_id, -1),
            KeyCode::Char('J') => self.shift_selected_card(board_id, 1),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
                self.selected_card = 0;
                self.keep_selection_visible();
            }
            KeyCode::Right | KeyCode::Char('l') if column_count > 0 => {
                self.selected_column = (self.selected_column + 1).min(column_count - 1);
                self.selected_card = 0;
                self.keep_selection_visible();
            }
            KeyCode::Down | KeyCode::Char('j') if card_count > 0 => {
                self.selected_card = (self.selected_card + 1).min(card_count - 1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(card) = self.selected_card() {
                    let card_id = card.id.clone();
                    self.dispatch(Action::ShowDialog(DialogType::CardDetail {
                        board_id: board_id.to_string(),
                        card_id,
                    }));
                }
            }
            KeyCode::Char('a') => {
                if let Some(column) = self.selected_column() {
                    let purpose = InputPurpose::NewCard {
                        board_id: board_id.to_string(),
                        column_id: column.id.clone(),
                    };
                    self.open_input(purpose, String::new());
                }
            }
            KeyCode::Char('c') => {
                let purpose = InputPurpose::NewColumn {
                    board_id: board_id.to_string(),
                };
                self.open_input(purpose, String::new());
            }
            KeyCode::Char('X') => {
                if let Some(column) = self.selected_column() {
                    self.dispatch(Action::DeleteColumn {
                        board_id: board_id.to_string(),
                        column_id: column.id.clone(),
                    });
                }
            }
            KeyCode::Char('x') => {
                if let (Some(column), Some(card)) = (self.selected_column(), self.selected_card()) {
                    self.dispatch(Action::DeleteCard {
                        board_id: board_id.to_string(),
                        column_id: column.id.clone(),
                        card_id: card.id.clone(),
                    });
                }
            }
            KeyCode::Char('p') => {
                if let Some(card) = self.selected_card() {
                    let mut card = card.clone();
                    card.priority = card.priority.cycle();
                    self.dispatch(Action::UpdateCard {
                        board_id: board_id.to_string(),
                        card,
                    });
                }
            }
            _ => {}
        }
    }

    /// Keyboard counterpart of a cross-column drag
    fn move_selected_card(&mut self, board_id: &str, delta: isize) {
        let Some(board) = self.current_board() else {
            return;
        };
        let Some(target_index) = self.selected_column.checked_add_signed(delta) else {
            return;
        };
        let (Some(from), Some(to)) = (board.columns.get(self.selected_column), board.columns.get(target_index)) else {
            return;
        };
        let Some(card) = from.cards.get(self.selected_card) else {
            return;
        };
        self.dispatch(Action::MoveCard {
            board_id: board_id.to_string(),
            card_id: card.id.clone(),
            from_column_id: from.id.clone(),
            to_column_id: to.id.clone(),
        });
    }

    /// Keyboard counterpart of a long-press reorder
    fn shift_selected_card(&mut self, board_id: &str, delta: isize) {
        let Some(column) = self.selected_column() else {
            return;
        };
        let (column_id, cards) = (column.id.clone(), column.cards.clone());
        let Some(target) = self.selected_card.checked_add_signed(delta) else {
            return;
        };
        if target >= cards.len() || !self.reorder.begin(&column_id, cards, self.selected_card) {
            return;
        }
        self.reorder.hover_index(target);
        if let Some(result) = self.reorder.finish() {
            self.selected_card = target;
            self.dispatch(Action::ReorderCards {
                board_id: board_id.to_string(),
                column_id: result.column_id,
                cards: result.cards,
            });
        }
    }

    fn keep_selection_visible(&mut self) {
        if self.selected_column < self.first_column {
            self.first_column = self.selected_column;
        } else if !self.layout.columns.iter().any(|c| c.index == self.selected_column) {
            self.first_column = self.selected_column;
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.calendar_month = crate::calendar::shift_month(self.calendar_month, -1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.calendar_month = crate::calendar::shift_month(self.calendar_month, 1);
            }
            KeyCode::Char('t') => self.calendar_month = Local::now().date_naive(),
            KeyCode::Esc => self.dispatch(Action::Navigate(View::Boards)),
            _ => {}
        }
    }

    // Dialogs

    /// Open a modal. Whatever gesture was in flight is terminated first.
    fn show_dialog(&mut self, dialog: DialogType) {
        self.terminate_gestures();
        self.dialog = Some(dialog);
    }

    fn open_input(&mut self, purpose: InputPurpose, buffer: String) {
        self.show_dialog(DialogType::Input { purpose, buffer });
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match dialog {
            DialogType::Input { purpose, mut buffer } => match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => self.submit_input(purpose, buffer.trim().to_string()),
                KeyCode::Backspace => {
                    buffer.pop();
                    self.dialog = Some(DialogType::Input { purpose, buffer });
                }
                KeyCode::Char(c) => {
                    buffer.push(c);
                    self.dialog = Some(DialogType::Input { purpose, buffer });
                }
                _ => self.dialog = Some(DialogType::Input { purpose, buffer }),
            },
            DialogType::ColorPicker {
                title,
                description,
                selected,
            } => {
                let count = color::BOARD_COLORS.len();
                let selected = match key.code {
                    KeyCode::Esc => return,
                    KeyCode::Enter => {
                        let color = color::board_color(selected).to_string();
                        self.dispatch(Action::CreateBoard {
                            title,
                            description,
                            color,
                        });
                        return;
                    }
                    KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => (selected + count - 1) % count,
                    KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => (selected + 1) % count,
                    _ => selected,
                };
                self.dialog = Some(DialogType::ColorPicker {
                    title,
                    description,
                    selected,
                });
            }
            DialogType::ConfirmDeleteBoard { board_id } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.dispatch(Action::DeleteBoard(board_id)),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
                _ => self.dialog = Some(DialogType::ConfirmDeleteBoard { board_id }),
            },
            DialogType::CardDetail { board_id, card_id } => {
                self.handle_card_detail_key(key, board_id, card_id);
            }
            other => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('G') | KeyCode::Char('?') => {}
                _ => self.dialog = Some(other),
            },
        }
    }

    fn handle_card_detail_key(&mut self, key: KeyEvent, board_id: String, card_id: String) {
        let Some(card) = self.boards.board(&board_id).and_then(|b| b.find_card(&card_id)).cloned() else {
            return;
        };

        match key.code {
            KeyCode::Char('e') => {
                self.open_input(InputPurpose::EditTitle { board_id, card_id }, card.title);
            }
            KeyCode::Char('n') => {
                let current = card.description.unwrap_or_default();
                self.open_input(InputPurpose::EditDescription { board_id, card_id }, current);
            }
            KeyCode::Char('d') => {
                let current = card.due_date.unwrap_or_default();
                self.open_input(InputPurpose::EditDueDate { board_id, card_id }, current);
            }
            KeyCode::Char('p') => {
                let mut updated = card;
                updated.priority = updated.priority.cycle();
                self.dispatch(Action::UpdateCard {
                    board_id: board_id.clone(),
                    card: updated,
                });
                self.dialog = Some(DialogType::CardDetail { board_id, card_id });
            }
            KeyCode::Char('x') => {
                self.dispatch(Action::DeleteCard {
                    board_id,
                    column_id: card.column_id,
                    card_id,
                });
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {}
            _ => self.dialog = Some(DialogType::CardDetail { board_id, card_id }),
        }
    }

    fn submit_input(&mut self, purpose: InputPurpose, value: String) {
        if value.is_empty() && !purpose.allows_empty() {
            self.status_message = Some(ERROR_EMPTY_TITLE.to_string());
            return;
        }
        let optional = |value: String| (!value.is_empty()).then_some(value);

        match purpose {
            InputPurpose::NewBoard => {
                self.open_input(InputPurpose::NewBoardDescription { title: value }, String::new());
            }
            InputPurpose::NewBoardDescription { title } => {
                let selected = self.boards.boards().len() % color::BOARD_COLORS.len();
                self.show_dialog(DialogType::ColorPicker {
                    title,
                    description: optional(value),
                    selected,
                });
            }
            InputPurpose::EditBoardDescription { board_id } => {
                if let Some(mut board) = self.boards.board(&board_id).cloned() {
                    board.description = optional(value);
                    self.dispatch(Action::UpdateBoard(board));
                }
            }
            InputPurpose::NewColumn { board_id } => self.dispatch(Action::CreateColumn { board_id, title: value }),
            InputPurpose::NewCard { board_id, column_id } => {
                let purpose = InputPurpose::NewCardDescription {
                    board_id,
                    column_id,
                    title: value,
                };
                self.open_input(purpose, String::new());
            }
            InputPurpose::NewCardDescription {
                board_id,
                column_id,
                title,
            } => self.dispatch(Action::CreateCard {
                board_id,
                column_id,
                title,
                description: optional(value),
            }),
            InputPurpose::EditTitle { board_id, card_id } => {
                if let Some(mut card) = self.boards.board(&board_id).and_then(|b| b.find_card(&card_id)).cloned() {
                    card.title = value;
                    self.dispatch(Action::UpdateCard { board_id, card });
                }
            }
            InputPurpose::EditDescription { board_id, card_id } => {
                if let Some(mut card) = self.boards.board(&board_id).and_then(|b| b.find_card(&card_id)).cloned() {
                    card.description = optional(value);
                    self.dispatch(Action::UpdateCard { board_id, card });
                }
            }
            InputPurpose::EditDueDate { board_id, card_id } => {
                let due_date = if value.is_empty() {
                    None
                } else if datetime::parse_date_value(Some(&value)).is_some() {
                    Some(value)
                } else {
                    self.show_dialog(DialogType::Error(format!("Invalid date '{}'", value)));
                    return;
                };
                if let Some(mut card) = self.boards.board(&board_id).and_then(|b| b.find_card(&card_id)).cloned() {
                    card.due_date = due_date;
                    self.dispatch(Action::UpdateCard { board_id, card });
                }
            }
        }
    }

    // Actions

    /// Apply every queued action
    pub async fn process_pending_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action).await;
        }
    }

    pub async fn handle_action(&mut self, action: Action) {
        match action {
            Action::CreateBoard {
                title,
                description,
                color,
            } => {
                let mut board = KanbanBoard::new(&title, &color);
                board.description = description;
                self.boards.add_board(board).await;
                self.selected_board = self.boards.boards().len().saturating_sub(1);
                self.status_message = Some(SUCCESS_BOARD_CREATED.to_string());
            }
            Action::UpdateBoard(board) => {
                if self.boards.update_board(board).await {
                    self.status_message = Some(SUCCESS_BOARD_UPDATED.to_string());
                }
            }
            Action::DeleteBoard(board_id) => {
                if self.boards.delete_board(&board_id).await {
                    let count = self.boards.boards().len();
                    self.selected_board = self.selected_board.min(count.saturating_sub(1));
                    self.status_message = Some(SUCCESS_BOARD_DELETED.to_string());
                }
            }
            Action::CreateColumn { board_id, title } => {
                let order = self.boards.board(&board_id).map_or(0, |b| b.columns.len() as u32);
                let column = KanbanColumn::new(&board_id, &title, order);
                if self.boards.add_column(&board_id, column).await {
                    self.status_message = Some(SUCCESS_COLUMN_CREATED.to_string());
                }
            }
            Action::DeleteColumn { board_id, column_id } => {
                if self.boards.delete_column(&board_id, &column_id).await {
                    self.drag.unregister_column(&column_id);
                    let count = self.boards.board(&board_id).map_or(0, |b| b.columns.len());
                    self.selected_column = self.selected_column.min(count.saturating_sub(1));
                    self.selected_card = 0;
                }
            }
            Action::CreateCard {
                board_id,
                column_id,
                title,
                description,
            } => {
                let mut card = KanbanCard::new(&board_id, &column_id, &title);
                card.description = description;
                if self.boards.add_card(&board_id, &column_id, card).await {
                    self.status_message = Some(SUCCESS_CARD_CREATED.to_string());
                }
            }
            Action::UpdateCard { board_id, card } => {
                if self.boards.update_card(&board_id, card).await {
                    self.status_message = Some(SUCCESS_CARD_UPDATED.to_string());
                }
            }
            Action::DeleteCard {
                board_id,
                column_id,
                card_id,
            } => {
                if self.boards.delete_card(&board_id, &column_id, &card_id).await {
                    self.recognizers.remove(&card_id);
                    self.selected_card = self.selected_card.saturating_sub(1);
                    self.status_message = Some(SUCCESS_CARD_DELETED.to_string());
                }
            }
            Action::MoveCard {
                board_id,
                card_id,
                from_column_id,
                to_column_id,
            } => {
                let moved = self
                    .boards
                    .move_card(&card_id, &from_column_id, &to_column_id, &board_id)
                    .await;
                if moved {
                    self.select_card(&board_id, &card_id);
                    self.status_message = Some(SUCCESS_CARD_MOVED.to_string());
                    self.logger
                        .log(format!("App: moved card {} to column {}", card_id, to_column_id));
                }
            }
            Action::ReorderCards {
                board_id,
                column_id,
                cards,
            } => {
                if self.boards.reorder_cards(&board_id, &column_id, cards).await {
                    self.status_message = Some(SUCCESS_CARDS_REORDERED.to_string());
                }
            }
            Action::Navigate(view) => match view {
                View::Board(board_id) => self.open_board(&board_id),
                other => {
                    self.leave_board();
                    self.view = other;
                }
            },
            Action::ShowDialog(dialog) => self.show_dialog(dialog),
            Action::HideDialog => self.dialog = None,
            Action::Quit => {
                self.terminate_gestures();
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Point the keyboard selection at `card_id`
    fn select_card(&mut self, board_id: &str, card_id: &str) {
        let Some(board) = self.boards.board(board_id) else {
            return;
        };
        for (column_index, column) in board.columns.iter().enumerate() {
            if let Some(card_index) = column.card_index(card_id) {
                self.selected_column = column_index;
                self.selected_card = card_index;
                return;
            }
        }
    }
}
