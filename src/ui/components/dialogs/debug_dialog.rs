//! Debug dialog component for displaying debug logs

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::Logger;

/// Debug dialog component for displaying debug logs
pub struct DebugDialog;

impl DebugDialog {
    /// Render the debug dialog
    pub fn render(frame: &mut Frame, logger: &Logger) {
        let area = frame.area();
        // Take 80% of the screen
        let modal_width = area.width.saturating_mul(8) / 10;
        let modal_height = area.height.saturating_mul(8) / 10;
        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(modal_width)) / 2,
            y: area.y + (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);
        let block = Block::default()
            .title(DIALOG_TITLE_DEBUG_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let logs = logger.get_logs();
        if logs.is_empty() {
            let no_logs = Paragraph::new("No debug logs available")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(no_logs, inner_area);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .take(usize::from(inner_area.height))
            .map(|log| match log.find("] ") {
                Some(bracket_end) => {
                    let message = &log[bracket_end + 2..];
                    let message_style = if message.contains("Failed") || message.contains("error") {
                        Style::default().fg(Color::Red)
                    } else if message.contains("moved") || message.contains("dropped") {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{} ", &log[..=bracket_end]), Style::default().fg(Color::DarkGray)),
                        Span::styled(message, message_style),
                    ]))
                }
                None => ListItem::new(Line::raw(log.as_str())),
            })
            .collect();

        frame.render_widget(List::new(items), inner_area);
    }
}
