//! Upcoming due dates across all boards.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::model::{CalendarEvent, KanbanBoard};
use crate::utils::datetime::{parse_date_value, to_date_key};

/// Days shown by a month grid: six full weeks
pub const GRID_DAYS: usize = 42;

/// One event per card that has a due date, earliest first.
///
/// Events whose date cannot be parsed keep their relative order at the end.
pub fn calendar_events(boards: &[KanbanBoard]) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = boards
        .iter()
        .flat_map(|board| {
            board.columns.iter().flat_map(move |column| {
                column.cards.iter().filter_map(move |card| {
                    card.due_date.as_ref().map(|date| CalendarEvent {
                        id: format!("event-{}", card.id),
                        title: card.title.clone(),
                        date: date.clone(),
                        board_title: board.title.clone(),
                        card_id: card.id.clone(),
                        priority: card.priority,
                    })
                })
            })
        })
        .collect();

    events.sort_by_key(|event| {
        let parsed = parse_date_value(Some(&event.date));
        (parsed.is_none(), parsed)
    });
    events
}

/// Bucket events by their `YYYY-MM-DD` key, skipping unparseable dates
pub fn group_by_date(events: &[CalendarEvent]) -> BTreeMap<String, Vec<CalendarEvent>> {
    let mut grouped: BTreeMap<String, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        let Some(parsed) = parse_date_value(Some(&event.date)) else {
            continue;
        };
        grouped.entry(to_date_key(parsed.date())).or_default().push(event.clone());
    }
    grouped
}

/// Events due on or after `today`
pub fn upcoming(events: &[CalendarEvent], today: NaiveDate) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| parse_date_value(Some(&event.date)).is_some_and(|dt| dt.date() >= today))
        .cloned()
        .collect()
}

/// The 42 days of a month view, starting on the Sunday on or before the 1st
pub fn month_grid(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let lead = i64::from(first.weekday().num_days_from_sunday());
    let start = first - Duration::days(lead);
    Some((0..GRID_DAYS as i64).map(|offset| start + Duration::days(offset)).collect())
}

/// First day of the month `delta` months away from `date`
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

/// Header such as "March 2025"
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
