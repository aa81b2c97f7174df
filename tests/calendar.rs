use chrono::NaiveDate;
use kanbanist::calendar::{calendar_events, group_by_date, upcoming};
use kanbanist::model::{KanbanBoard, KanbanCard, Priority};

fn board_with_due_dates(title: &str, due_dates: &[Option<&str>]) -> KanbanBoard {
    let mut board = KanbanBoard::new(title, "#3B82F6");
    let column_id = board.columns[0].id.clone();
    for (i, due) in due_dates.iter().enumerate() {
        let mut card = KanbanCard::new(&board.id, &column_id, &format!("{} {}", title, i));
        card.due_date = due.map(str::to_string);
        board.columns[0].cards.push(card);
    }
    board
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_events_only_for_cards_with_due_dates() {
    let boards = vec![
        board_with_due_dates("Work", &[Some("2025-03-10"), None]),
        board_with_due_dates("Home", &[None]),
    ];
    let events = calendar_events(&boards);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].board_title, "Work");
    assert_eq!(events[0].title, "Work 0");
    assert_eq!(events[0].card_id, boards[0].columns[0].cards[0].id);
    assert_eq!(events[0].priority, Priority::Medium);
}

#[test]
fn test_events_are_sorted_with_unparseable_last() {
    let boards = vec![
        board_with_due_dates("A", &[Some("2025-03-12"), Some("soon")]),
        board_with_due_dates("B", &[Some("2025-03-10T09:00:00"), Some("2025-03-10")]),
    ];
    let dates: Vec<String> = calendar_events(&boards).into_iter().map(|e| e.date).collect();
    assert_eq!(dates, ["2025-03-10", "2025-03-10T09:00:00", "2025-03-12", "soon"]);
}

#[test]
fn test_grouping_uses_calendar_keys() {
    let boards = vec![board_with_due_dates(
        "Work",
        &[Some("2025-03-10"), Some("2025-03-10T17:00:00"), Some("2025-03-11"), Some("??")],
    )];
    let grouped = group_by_date(&calendar_events(&boards));

    let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
    assert_eq!(keys, ["2025-03-10", "2025-03-11"]);
    assert_eq!(grouped["2025-03-10"].len(), 2);
}

#[test]
fn test_upcoming_excludes_past_days() {
    let boards = vec![board_with_due_dates(
        "Work",
        &[Some("2025-03-08"), Some("2025-03-09"), Some("2025-03-20"), Some("never")],
    )];
    let events = calendar_events(&boards);
    let soon: Vec<String> = upcoming(&events, date(2025, 3, 9)).into_iter().map(|e| e.date).collect();
    assert_eq!(soon, ["2025-03-09", "2025-03-20"]);
}
