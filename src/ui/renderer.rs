//! Main UI rendering and coordination

use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use super::app::App;
use super::components::{
    dialogs::{CardDetailDialog, ColorPickerDialog, ConfirmDeleteDialog, DebugDialog, ErrorDialog, InputDialog},
    BoardView, BoardsList, CalendarView, HelpPanel, StatusBar,
};
use super::core::{DialogType, EventHandler, View};
use crate::boards::BoardService;
use crate::config::Config;
use crate::logger::Logger;

/// Run the main TUI application
pub async fn run_app(config: Config, boards: BoardService, logger: Logger) -> Result<()> {
    let mouse_enabled = config.ui.mouse_enabled;

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, boards, logger);
    app.load().await;

    // Main application loop
    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableFocusChange)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        // Geometry must be current before input is hit-tested against it
        let size = terminal.size()?;
        app.relayout(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| render_ui(f, app))?;

        let event = events.next_event()?;
        app.handle_event(event, Instant::now());

        app.tick(Instant::now());
        app.process_pending_actions().await;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut Frame, app: &App) {
    match app.view {
        View::Boards => BoardsList::render(f, app),
        View::Board(_) => BoardView::render(f, app),
        View::Calendar => CalendarView::render(f, app),
    }
    StatusBar::render(f, app);

    // Render overlays
    match &app.dialog {
        Some(DialogType::Input { purpose, buffer }) => InputDialog::render(f, purpose, buffer),
        Some(DialogType::ColorPicker { title, selected, .. }) => ColorPickerDialog::render(f, title, *selected),
        Some(DialogType::ConfirmDeleteBoard { board_id }) => {
            if let Some(board) = app.boards.board(board_id) {
                ConfirmDeleteDialog::render(f, board);
            }
        }
        Some(DialogType::CardDetail { board_id, card_id }) => {
            if let Some(board) = app.boards.board(board_id) {
                if let Some(card) = board.find_card(card_id) {
                    CardDetailDialog::render(f, board, card);
                }
            }
        }
        Some(DialogType::Error(message)) => ErrorDialog::render(f, message),
        Some(DialogType::Logs) => DebugDialog::render(f, &app.logger),
        Some(DialogType::Help) => HelpPanel::render(f),
        None => {}
    }
}
