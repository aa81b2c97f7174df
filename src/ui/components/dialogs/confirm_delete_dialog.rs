//! Board deletion confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::layout::centered_rect;
use crate::constants::{CONFIRM_DELETE_BOARD_HINT, DIALOG_TITLE_CONFIRM_DELETE};
use crate::model::KanbanBoard;

/// Board deletion confirmation dialog component
pub struct ConfirmDeleteDialog;

impl ConfirmDeleteDialog {
    /// Render the confirmation for deleting `board`
    pub fn render(f: &mut Frame, board: &KanbanBoard) {
        let confirm_area = centered_rect(60, 11, f.area());
        f.render_widget(Clear, confirm_area);

        let title: String = if board.title.chars().count() > 40 {
            format!("{}...", board.title.chars().take(37).collect::<String>())
        } else {
            board.title.clone()
        };
        let confirm_text = format!("Delete board?\n\n\"{}\"\n\n{}", title, CONFIRM_DELETE_BOARD_HINT);

        let confirm_paragraph = Paragraph::new(confirm_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_CONFIRM_DELETE)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(confirm_paragraph, confirm_area);
    }
}
