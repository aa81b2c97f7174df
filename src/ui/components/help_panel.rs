//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::layout::centered_rect;

const HELP_TEXT: &str = r"
BOARDS
------
j/k         Select board
Enter       Open board
n           New board (title, description, colour)
e           Edit board description
D           Delete board (asks to confirm)

BOARD
-----
h/l j/k     Select column / card
Enter       Card details (e/n/d/p/x inside)
a           Add card to column
c           Add column
x / X       Delete card / column
p           Cycle priority
H/L         Move card to previous / next column
K/J         Move card up / down in its column
Esc         Cancel drag, or back to boards

MOUSE
-----
Click       Open card details
Dbl-click   Edit card title
Drag        Move card to another column
Hold        Reorder within the column

GENERAL
-------
C           Calendar
G           Debug logs
?           This help
q           Quit";

pub struct HelpPanel;

impl HelpPanel {
    pub fn render(f: &mut Frame) {
        let area = centered_rect(60, 42, f.area());
        f.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Esc to close ")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }
}
