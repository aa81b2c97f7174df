//! Reusable UI components

mod board_view;
mod boards_list;
mod calendar_view;
pub mod dialogs;
mod help_panel;
mod status_bar;

pub use board_view::BoardView;
pub use boards_list::BoardsList;
pub use calendar_view::CalendarView;
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
