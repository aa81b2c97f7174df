//! Board view component: columns, cards and the floating drag preview

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::ColumnArea;
use crate::drag::drag_preview;
use crate::model::{KanbanBoard, KanbanCard, KanbanColumn};
use crate::utils::{color, datetime};

pub struct BoardView;

impl BoardView {
    pub fn render(f: &mut Frame, app: &App) {
        let Some(board) = app.current_board() else {
            return;
        };

        Self::render_header(f, app.layout.header, board);

        for column_area in &app.layout.columns {
            if let Some(column) = board.column(&column_area.column_id) {
                Self::render_column(f, app, column, column_area);
            }
        }

        Self::render_preview(f, app);
    }

    fn render_header(f: &mut Frame, area: Rect, board: &KanbanBoard) {
        let mut spans = vec![Span::styled(
            format!(" {} ", board.title),
            Style::default()
                .fg(Color::Black)
                .bg(color::parse_hex_color(&board.color))
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(description) = &board.description {
            spans.push(Span::styled(format!("  {}", description), Style::default().fg(Color::Gray)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_column(f: &mut Frame, app: &App, column: &KanbanColumn, area: &ColumnArea) {
        let is_selected = area.index == app.selected_column;
        let border_style = if app.drag.is_drop_target(&column.id) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ({}) ", column.title, column.cards.len()));
        f.render_widget(block, area.area);

        // While reordering, the slots show the in-progress order
        let reordering = app.reorder.column_id() == Some(column.id.as_str());
        let cards: &[KanbanCard] = if reordering {
            app.reorder.cards().unwrap_or(&column.cards)
        } else {
            &column.cards
        };
        let lifted_id = app.reorder.lifted_card().map(|c| c.id.as_str());

        for slot in &area.cards {
            let Some(card) = cards.get(slot.index) else {
                continue;
            };
            let style = if app.is_card_dragged(&card.id) {
                CardStyle::Ghost
            } else if reordering && lifted_id == Some(card.id.as_str()) {
                CardStyle::Lifted
            } else if is_selected && slot.index == app.selected_card {
                CardStyle::Selected
            } else {
                CardStyle::Normal
            };
            f.render_widget(card_widget(card, style), slot.area);
        }

        if area.hidden_cards > 0 {
            let inner = area.inner();
            if inner.height > 0 {
                let more = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
                let text = Paragraph::new(format!("+{} more", area.hidden_cards)).style(Style::default().fg(Color::DarkGray));
                f.render_widget(text, more);
            }
        }
    }

    fn render_preview(f: &mut Frame, app: &App) {
        let Some(preview) = drag_preview(&app.drag) else {
            return;
        };
        let area = clamp_to_frame(preview.rect, f.area());
        if area.width == 0 || area.height == 0 {
            return;
        }
        f.render_widget(Clear, area);
        f.render_widget(card_widget(preview.card, CardStyle::Floating), area);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CardStyle {
    Normal,
    Selected,
    /// Placeholder left behind by the dragged card
    Ghost,
    Lifted,
    Floating,
}

fn card_widget(card: &KanbanCard, style: CardStyle) -> Paragraph<'_> {
    let border = match style {
        CardStyle::Normal => Style::default().fg(Color::Gray),
        CardStyle::Selected => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        CardStyle::Ghost => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        CardStyle::Lifted | CardStyle::Floating => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    };
    let text_style = if style == CardStyle::Ghost {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut meta = vec![Span::styled(
        card.priority.label(),
        Style::default().fg(color::priority_color(card.priority)),
    )];
    if let Some(due) = &card.due_date {
        let label = datetime::format_due_date(due, datetime::now_local());
        let due_style = if label == "Overdue" {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        meta.push(Span::raw(" • "));
        meta.push(Span::styled(label, due_style));
    }

    Paragraph::new(vec![Line::styled(card.title.clone(), text_style), Line::from(meta)])
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

/// Convert a floating preview rectangle to whole cells inside `frame`
fn clamp_to_frame(rect: crate::drag::Rect, frame: Rect) -> Rect {
    let width = (rect.width.round().max(0.0) as u16).min(frame.width);
    let height = (rect.height.round().max(0.0) as u16).min(frame.height);
    let max_x = f32::from(frame.right().saturating_sub(width));
    let max_y = f32::from(frame.bottom().saturating_sub(height));
    let x = rect.x.round().clamp(f32::from(frame.x), max_x) as u16;
    let y = rect.y.round().clamp(f32::from(frame.y), max_y) as u16;
    Rect::new(x, y, width, height)
}
