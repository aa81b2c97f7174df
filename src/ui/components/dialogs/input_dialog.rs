//! Single-line text input dialog

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::core::InputPurpose;
use super::super::super::layout::centered_rect;

pub struct InputDialog;

impl InputDialog {
    pub fn render(f: &mut Frame, purpose: &InputPurpose, buffer: &str) {
        let area = centered_rect(50, 5, f.area());
        f.render_widget(Clear, area);

        let lines = vec![
            Line::from(vec![
                Span::raw(buffer.to_string()),
                Span::styled("█", Style::default().fg(Color::Cyan)),
            ]),
            Line::styled("Enter: save • Esc: cancel", Style::default().fg(Color::DarkGray)),
        ];
        let input = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", purpose.title()))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(input, area);
    }
}
