//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::core::View;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, app: &App) {
        let status_text = if let Some(message) = &app.status_message {
            message.clone()
        } else if app.drag.is_dragging() {
            "Release over a column to move • Esc: cancel".to_string()
        } else {
            match app.view {
                View::Boards => "Enter: open • n: new board • D: delete • C: calendar • ?: help • q: quit".to_string(),
                View::Board(_) => {
                    "a: add card • c: add column • H/L: move card • J/K: reorder • p: priority • Esc: back".to_string()
                }
                View::Calendar => "h/l: change month • t: today • Esc: back".to_string(),
            }
        };

        let status_color = if app.drag.is_dragging() || app.reorder.is_active() {
            Color::Yellow
        } else if app.status_message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, app.layout.status);
    }
}
