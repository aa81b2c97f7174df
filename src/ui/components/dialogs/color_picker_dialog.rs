//! Colour choice for a new board

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::super::layout::centered_rect;
use crate::utils::color::{self, BOARD_COLORS};

pub struct ColorPickerDialog;

impl ColorPickerDialog {
    pub fn render(f: &mut Frame, title: &str, selected: usize) {
        let area = centered_rect(50, 7, f.area());
        f.render_widget(Clear, area);

        let swatches: Vec<Span> = BOARD_COLORS
            .iter()
            .enumerate()
            .map(|(index, hex)| {
                let style = Style::default().fg(color::parse_hex_color(hex));
                if index == selected {
                    Span::styled("[■] ", style.add_modifier(Modifier::BOLD))
                } else {
                    Span::styled(" ■  ", style)
                }
            })
            .collect();

        let lines = vec![
            Line::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Line::from(swatches),
            Line::raw(""),
            Line::styled("←/→: choose • Enter: create • Esc: cancel", Style::default().fg(Color::DarkGray)),
        ];
        let picker = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Board colour ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        f.render_widget(picker, area);
    }
}
