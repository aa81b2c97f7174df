//! Boards list component

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::utils::color;

pub struct BoardsList;

impl BoardsList {
    pub fn render(f: &mut Frame, app: &App) {
        let title = Paragraph::new(Line::from(Span::styled(
            " Kanbanist ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        f.render_widget(title, app.layout.header);

        let boards = app.boards.boards();
        if boards.is_empty() {
            let empty = Paragraph::new("No boards yet. Press 'n' to create one.")
                .style(Style::default().fg(Color::Gray))
                .block(Block::default().borders(Borders::ALL).title(" Boards "));
            f.render_widget(empty, app.layout.body);
            return;
        }

        let items: Vec<ListItem> = boards
            .iter()
            .map(|board| {
                ListItem::new(Line::from(vec![
                    Span::styled("■ ", Style::default().fg(color::parse_hex_color(&board.color))),
                    Span::raw(board.title.clone()),
                    Span::styled(
                        format!(
                            "  {} columns • {} cards • {} done",
                            board.columns.len(),
                            board.card_count(),
                            board.completed_count()
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Boards "))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut state = ListState::default();
        state.select(Some(app.selected_board.min(boards.len() - 1)));
        f.render_stateful_widget(list, app.layout.body, &mut state);
    }
}
