//! Card detail dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::layout::centered_rect;
use crate::model::{KanbanBoard, KanbanCard};
use crate::utils::{color, datetime};

pub struct CardDetailDialog;

impl CardDetailDialog {
    pub fn render(f: &mut Frame, board: &KanbanBoard, card: &KanbanCard) {
        let area = centered_rect(60, 12, f.area());
        f.render_widget(Clear, area);

        let label = Style::default().fg(Color::Gray);
        let column_title = board.column(&card.column_id).map_or("?", |c| c.title.as_str());
        let due = card.due_date.as_deref().map_or_else(
            || "none".to_string(),
            |date| {
                let display = datetime::parse_date_value(Some(date))
                    .map_or_else(|| date.to_string(), |dt| dt.format(datetime::DISPLAY_DATE_FORMAT).to_string());
                format!("{} ({})", display, datetime::format_due_date(date, datetime::now_local()))
            },
        );

        let lines = vec![
            Line::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::from(vec![Span::styled("Column:   ", label), Span::raw(column_title.to_string())]),
            Line::from(vec![
                Span::styled("Priority: ", label),
                Span::styled(card.priority.label(), Style::default().fg(color::priority_color(card.priority))),
            ]),
            Line::from(vec![Span::styled("Due:      ", label), Span::raw(due)]),
            Line::from(vec![
                Span::styled("Created:  ", label),
                Span::raw(
                    datetime::parse_date_value(Some(&card.created_at))
                        .map_or_else(|| card.created_at.clone(), |dt| dt.format("%Y-%m-%d %H:%M").to_string()),
                ),
            ]),
            Line::raw(card.description.clone().unwrap_or_default()),
            Line::raw(""),
            Line::styled(
                "e: title • n: description • d: due date • p: priority • x: delete • Esc: close",
                Style::default().fg(Color::DarkGray),
            ),
        ];

        let detail = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", board.title))
                    .title_alignment(Alignment::Center),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(detail, area);
    }
}
