use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use kanbanist::boards::BoardService;
use kanbanist::config::Config;
use kanbanist::logger::Logger;
use kanbanist::model::{KanbanBoard, KanbanCard};
use kanbanist::storage::{BoardStorage, MemoryStore};
use kanbanist::ui::core::{Action, DialogType, EventType, InputPurpose, View};
use kanbanist::ui::App;
use ratatui::layout::Rect;

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 30,
};

/// An app showing one board whose first column holds `titles`
async fn app_on_board(titles: &[&str]) -> (App, String, Vec<String>) {
    let storage = BoardStorage::new(Arc::new(MemoryStore::new()));
    let mut board = KanbanBoard::new("Sprint", "#3B82F6");
    let column_id = board.columns[0].id.clone();
    for title in titles {
        board.columns[0].cards.push(KanbanCard::new(&board.id, &column_id, title));
    }
    let board_id = board.id.clone();
    let columns = board.columns.iter().map(|c| c.id.clone()).collect();
    storage.add_board(board).await;

    let mut config = Config::default();
    config.ui.column_width = 30;
    let mut app = App::new(config, BoardService::new(storage), Logger::new());
    app.load().await;
    app.handle_action(Action::Navigate(View::Board(board_id.clone()))).await;
    app.relayout(SCREEN);
    (app, board_id, columns)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

fn card_titles(app: &App, board_id: &str, column: usize) -> Vec<String> {
    app.boards.board(board_id).unwrap().columns[column]
        .cards
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

fn later(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}

#[tokio::test]
async fn test_columns_are_registered_for_hit_testing() {
    let (app, _board_id, columns) = app_on_board(&["a"]).await;
    assert_eq!(app.drag.registry().column_ids(), columns);
}

#[tokio::test]
async fn test_mouse_drag_moves_card_to_other_column() {
    let (mut app, board_id, columns) = app_on_board(&["a", "b"]).await;
    let t0 = Instant::now();
    let second_column_x = app.layout.columns[1].area.x + 5;

    // Card "a" occupies rows 3..7 of the first column
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), second_column_x, 4), later(t0, 20));
    assert!(app.drag.is_dragging());
    assert_eq!(app.drag.hover_column_id(), Some(columns[1].as_str()));
    assert!(app.drag.is_drop_target(&columns[1]));

    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), second_column_x, 4), later(t0, 40));
    assert!(!app.drag.is_dragging());

    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["b"]);
    assert_eq!(card_titles(&app, &board_id, 1), ["a"]);
}

#[tokio::test]
async fn test_drag_released_in_same_column_keeps_card() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
    let t0 = Instant::now();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 20), later(t0, 20));
    assert!(app.drag.is_dragging());
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 20), later(t0, 40));

    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["a"]);
}

#[tokio::test]
async fn test_escape_cancels_drag_without_moving() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
    let t0 = Instant::now();
    let second_column_x = app.layout.columns[1].area.x + 5;

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), second_column_x, 4), later(t0, 20));
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.drag.is_dragging());

    // The release that follows is ignored
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), second_column_x, 4), later(t0, 40));
    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["a"]);
    assert_eq!(app.view, View::Board(board_id));
}

#[tokio::test]
async fn test_focus_loss_and_resize_end_drag() {
    for interruption in [EventType::FocusLost, EventType::Resize(80, 24)] {
        let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
        let t0 = Instant::now();
        let second_column_x = app.layout.columns[1].area.x + 5;

        app.handle_event(EventType::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4)), t0);
        app.handle_event(
            EventType::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), second_column_x, 4)),
            later(t0, 20),
        );
        assert!(app.drag.is_dragging());

        app.handle_event(interruption, later(t0, 30));
        assert!(!app.drag.is_dragging());

        app.handle_event(
            EventType::Mouse(mouse(MouseEventKind::Up(MouseButton::Left), second_column_x, 4)),
            later(t0, 40),
        );
        app.process_pending_actions().await;
        assert_eq!(card_titles(&app, &board_id, 0), ["a"]);
    }
}

#[tokio::test]
async fn test_dialog_opening_mid_drag_ends_it() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
    let t0 = Instant::now();
    let second_column_x = app.layout.columns[1].area.x + 5;

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), second_column_x, 4), later(t0, 20));
    assert!(app.drag.is_dragging());

    app.handle_action(Action::ShowDialog(DialogType::Help)).await;
    assert!(!app.drag.is_dragging());

    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), second_column_x, 4), later(t0, 40));
    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["a"]);
}

#[tokio::test]
async fn test_delayed_tap_on_other_card_ends_drag() {
    let (mut app, board_id, _columns) = app_on_board(&["a", "b"]).await;
    let tapped = app.boards.board(&board_id).unwrap().columns[0].cards[0].id.clone();
    let t0 = Instant::now();
    let second_column_x = app.layout.columns[1].area.x + 5;

    // Tap "a", then drag "b" before the tap is confirmed
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4), later(t0, 10));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 8), later(t0, 50));
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), second_column_x, 8), later(t0, 80));
    assert!(app.drag.is_dragging_card(&app.boards.board(&board_id).unwrap().columns[0].cards[1].id));

    app.tick(later(t0, 400));
    assert_eq!(
        app.dialog,
        Some(DialogType::CardDetail {
            board_id: board_id.clone(),
            card_id: tapped
        })
    );
    assert!(!app.drag.is_dragging());

    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), second_column_x, 8), later(t0, 420));
    assert!(!app.drag.is_dragging());
    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["a", "b"]);
}

#[tokio::test]
async fn test_tap_confirms_after_card_scrolls_out_of_view() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
    let card_id = app.boards.board(&board_id).unwrap().columns[0].cards[0].id.clone();
    let t0 = Instant::now();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4), later(t0, 30));
    app.handle_mouse(mouse(MouseEventKind::ScrollDown, 5, 4), later(t0, 60));
    app.relayout(SCREEN);
    assert!(app.layout.column(&app.boards.board(&board_id).unwrap().columns[0].id).is_none());

    app.tick(later(t0, 400));
    assert_eq!(app.dialog, Some(DialogType::CardDetail { board_id, card_id }));
}

#[tokio::test]
async fn test_tap_opens_card_details_after_window() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;
    let card_id = app.boards.board(&board_id).unwrap().columns[0].cards[0].id.clone();
    let t0 = Instant::now();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4), later(t0, 30));
    app.tick(later(t0, 100));
    assert!(app.dialog.is_none());

    app.tick(later(t0, 400));
    assert_eq!(app.dialog, Some(DialogType::CardDetail { board_id, card_id }));
}

#[tokio::test]
async fn test_double_tap_edits_title() {
    let (mut app, _board_id, _columns) = app_on_board(&["a"]).await;
    let t0 = Instant::now();

    for start in [0, 120] {
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), later(t0, start));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4), later(t0, start + 30));
    }
    assert!(matches!(
        app.dialog,
        Some(DialogType::Input { ref buffer, .. }) if buffer == "a"
    ));

    app.tick(later(t0, 1000));
    assert!(matches!(app.dialog, Some(DialogType::Input { .. })));
}

#[tokio::test]
async fn test_long_press_reorders_within_column() {
    let (mut app, board_id, _columns) = app_on_board(&["a", "b", "c"]).await;
    let t0 = Instant::now();

    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 4), t0);
    app.tick(later(t0, 600));
    assert!(app.reorder.is_active());

    // Third slot starts 8 rows below the first
    app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 12), later(t0, 700));
    assert_eq!(app.reorder.current_index(), Some(2));
    assert!(!app.drag.is_dragging());

    app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 12), later(t0, 800));
    assert!(!app.reorder.is_active());

    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["b", "c", "a"]);
}

#[tokio::test]
async fn test_keyboard_moves_and_reorders_selected_card() {
    let (mut app, board_id, _columns) = app_on_board(&["a", "b"]).await;

    app.handle_key(key(KeyCode::Char('J')));
    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["b", "a"]);
    assert_eq!(app.selected_card, 1);

    app.handle_key(key(KeyCode::Char('L')));
    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["b"]);
    assert_eq!(card_titles(&app, &board_id, 1), ["a"]);
    assert_eq!((app.selected_column, app.selected_card), (1, 0));
}

#[tokio::test]
async fn test_create_card_through_input_dialog() {
    let (mut app, board_id, _columns) = app_on_board(&[]).await;

    app.handle_key(key(KeyCode::Char('a')));
    type_text(&mut app, "Write tests");
    app.handle_key(key(KeyCode::Enter));
    assert!(matches!(
        app.dialog,
        Some(DialogType::Input {
            purpose: InputPurpose::NewCardDescription { .. },
            ..
        })
    ));

    type_text(&mut app, "Cover the dialogs");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.dialog.is_none());

    app.process_pending_actions().await;
    assert_eq!(card_titles(&app, &board_id, 0), ["Write tests"]);
    let card = &app.boards.board(&board_id).unwrap().columns[0].cards[0];
    assert_eq!(card.description.as_deref(), Some("Cover the dialogs"));
}

#[tokio::test]
async fn test_card_description_edited_from_details() {
    let (mut app, board_id, _columns) = app_on_board(&["a"]).await;

    app.handle_key(key(KeyCode::Enter));
    app.process_pending_actions().await;
    assert!(matches!(app.dialog, Some(DialogType::CardDetail { .. })));

    app.handle_key(key(KeyCode::Char('n')));
    type_text(&mut app, "Details");
    app.handle_key(key(KeyCode::Enter));
    app.process_pending_actions().await;

    let card = &app.boards.board(&board_id).unwrap().columns[0].cards[0];
    assert_eq!(card.description.as_deref(), Some("Details"));
}

#[tokio::test]
async fn test_new_board_takes_description_and_colour() {
    let (mut app, _board_id, _columns) = app_on_board(&[]).await;
    app.handle_key(key(KeyCode::Esc));
    app.process_pending_actions().await;

    app.handle_key(key(KeyCode::Char('n')));
    type_text(&mut app, "Home");
    app.handle_key(key(KeyCode::Enter));
    type_text(&mut app, "Chores");
    app.handle_key(key(KeyCode::Enter));
    // One board exists, so the second palette entry is preselected
    assert!(matches!(app.dialog, Some(DialogType::ColorPicker { selected: 1, .. })));

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.dialog.is_none());
    app.process_pending_actions().await;

    let board = &app.boards.boards()[1];
    assert_eq!(board.title, "Home");
    assert_eq!(board.description.as_deref(), Some("Chores"));
    assert_eq!(board.color, "#10B981");
    assert_eq!(app.selected_board, 1);
}

#[tokio::test]
async fn test_board_description_edited_from_list() {
    let (mut app, board_id, _columns) = app_on_board(&[]).await;
    app.handle_key(key(KeyCode::Esc));
    app.process_pending_actions().await;

    app.handle_key(key(KeyCode::Char('e')));
    type_text(&mut app, "Q3 goals");
    app.handle_key(key(KeyCode::Enter));
    app.process_pending_actions().await;

    assert_eq!(app.boards.board(&board_id).unwrap().description.as_deref(), Some("Q3 goals"));
}

#[tokio::test]
async fn test_board_delete_requires_confirmation() {
    let (mut app, board_id, _columns) = app_on_board(&[]).await;
    app.handle_key(key(KeyCode::Esc));
    app.process_pending_actions().await;

    app.handle_key(key(KeyCode::Char('D')));
    assert_eq!(
        app.dialog,
        Some(DialogType::ConfirmDeleteBoard {
            board_id: board_id.clone()
        })
    );
    app.handle_key(key(KeyCode::Char('n')));
    app.process_pending_actions().await;
    assert!(app.dialog.is_none());
    assert!(app.boards.board(&board_id).is_some());

    app.handle_key(key(KeyCode::Char('D')));
    app.handle_key(key(KeyCode::Char('y')));
    app.process_pending_actions().await;
    assert!(app.boards.boards().is_empty());
}

#[tokio::test]
async fn test_empty_title_is_rejected() {
    let (mut app, board_id, _columns) = app_on_board(&[]).await;

    app.handle_key(key(KeyCode::Char('a')));
    app.handle_key(key(KeyCode::Char(' ')));
    app.handle_key(key(KeyCode::Enter));
    app.process_pending_actions().await;

    assert!(card_titles(&app, &board_id, 0).is_empty());
    assert!(app.status_message.is_some());
}

#[tokio::test]
async fn test_leaving_board_resets_drag_session() {
    let (mut app, _board_id, _columns) = app_on_board(&["a"]).await;
    app.handle_key(key(KeyCode::Esc));
    app.process_pending_actions().await;

    assert_eq!(app.view, View::Boards);
    assert!(app.drag.registry().is_empty());
}
