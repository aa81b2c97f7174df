//! Calendar view: month grid with due-date markers and the upcoming list

use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::calendar;
use crate::constants::EMPTY_CALENDAR;
use crate::model::CalendarEvent;
use crate::utils::{color, datetime};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

pub struct CalendarView;

impl CalendarView {
    pub fn render(f: &mut Frame, app: &App) {
        let month = app.calendar_month;
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", calendar::month_title(month)),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  h/l: month  t: today  Esc: back", Style::default().fg(Color::DarkGray)),
        ]));
        f.render_widget(header, app.layout.header);

        let events = calendar::calendar_events(app.boards.boards());
        let grouped = calendar::group_by_date(&events);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(0)])
            .split(app.layout.body);

        Self::render_grid(f, chunks[0], month, |date| grouped.contains_key(&datetime::to_date_key(date)));

        let today = Local::now().date_naive();
        Self::render_upcoming(f, chunks[1], &calendar::upcoming(&events, today));
    }

    fn render_grid(f: &mut Frame, area: Rect, month: NaiveDate, has_events: impl Fn(NaiveDate) -> bool) {
        let Some(days) = calendar::month_grid(month.year(), month.month()) else {
            return;
        };
        let today = Local::now().date_naive();

        let mut lines = vec![Line::from(
            WEEKDAYS
                .iter()
                .map(|d| Span::styled(format!(" {} ", d), Style::default().fg(Color::Gray)))
                .collect::<Vec<_>>(),
        )];
        for week in days.chunks(7) {
            let spans = week
                .iter()
                .map(|&date| {
                    let mut style = if date.month() == month.month() {
                        Style::default()
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    if has_events(date) {
                        style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                    }
                    if date == today {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {:>2} ", date.day()), style)
                })
                .collect::<Vec<_>>();
            lines.push(Line::from(spans));
        }

        let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(grid, area);
    }

    fn render_upcoming(f: &mut Frame, area: Rect, events: &[CalendarEvent]) {
        let block = Block::default().borders(Borders::ALL).title(" Upcoming ");
        if events.is_empty() {
            let empty = Paragraph::new(EMPTY_CALENDAR).style(Style::default().fg(Color::Gray)).block(block);
            f.render_widget(empty, area);
            return;
        }

        let now = datetime::now_local();
        let mut items = Vec::new();
        for (key, day_events) in calendar::group_by_date(events) {
            let heading = day_events
                .first()
                .map_or(key.clone(), |event| datetime::format_due_date(&event.date, now));
            items.push(ListItem::new(Line::styled(
                format!("{}  ({})", key, heading),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
            for event in day_events {
                items.push(ListItem::new(Line::from(vec![
                    Span::styled("  ● ", Style::default().fg(color::priority_color(event.priority))),
                    Span::raw(event.title),
                    Span::styled(format!("  {}", event.board_title), Style::default().fg(Color::DarkGray)),
                ])));
            }
        }

        f.render_widget(List::new(items).block(block), area);
    }
}
