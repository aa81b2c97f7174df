//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Storage
/// Key under which the serialized board array lives in the key-value store
pub const BOARDS_KEY: &str = "@kanban_boards";
/// File name of the JSON key-value store inside the data directory
pub const STORAGE_FILE_NAME: &str = "storage.json";
/// Application directory name used under the platform config/data dirs
pub const APP_DIR_NAME: &str = "kanbanist";
/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "kanbanist.log";

// Gesture recognition
/// Movement (logical units, either axis) that turns a press into a drag
pub const DRAG_THRESHOLD: f32 = 8.0;
/// Window in which a second tap counts as a double-tap
pub const DOUBLE_TAP_DELAY_MS: u64 = 300;
/// Hold time after which a still press hands over to list reordering
pub const LONG_PRESS_DELAY_MS: u64 = 500;

// Drag preview fallbacks (terminal cells) when the card was not measured at grab time
pub const PREVIEW_DEFAULT_WIDTH: f32 = COLUMN_DEFAULT_WIDTH as f32;
pub const PREVIEW_DEFAULT_HEIGHT: f32 = CARD_HEIGHT as f32;

// Default board layout
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

// Success Messages
pub const SUCCESS_BOARD_CREATED: &str = "✅ Board created";
pub const SUCCESS_BOARD_DELETED: &str = "✅ Board deleted";
pub const SUCCESS_BOARD_UPDATED: &str = "✅ Board updated";
pub const SUCCESS_COLUMN_CREATED: &str = "✅ Column created";
pub const SUCCESS_CARD_CREATED: &str = "✅ Card created";
pub const SUCCESS_CARD_UPDATED: &str = "✅ Card updated";
pub const SUCCESS_CARD_DELETED: &str = "✅ Card deleted";
pub const SUCCESS_CARD_MOVED: &str = "✅ Card moved";
pub const SUCCESS_CARDS_REORDERED: &str = "✅ Cards reordered";

// Error Messages
pub const ERROR_LOAD_BOARDS: &str = "❌ Error loading boards";
pub const ERROR_SAVE_BOARDS: &str = "❌ Error saving boards";
pub const ERROR_EMPTY_TITLE: &str = "❌ Title cannot be empty";

// Confirmations
pub const DIALOG_TITLE_CONFIRM_DELETE: &str = "⚠️  Confirm Board Delete";
pub const CONFIRM_DELETE_BOARD_HINT: &str =
    "This will also delete all columns and cards!\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_DEBUG_LOGS: &str = "🔍 Debug Logs - Press 'Esc', 'G' or 'q' to close";
pub const EMPTY_CALENDAR: &str = "No upcoming tasks";

// UI Layout Constants
/// Minimum column width in terminal cells
pub const COLUMN_MIN_WIDTH: u16 = 20;
/// Maximum column width in terminal cells
pub const COLUMN_MAX_WIDTH: u16 = 80;
/// Default column width in terminal cells
pub const COLUMN_DEFAULT_WIDTH: u16 = 32;
/// Height of a rendered card in terminal rows
pub const CARD_HEIGHT: u16 = 4;
/// Horizontal gap between columns
pub const COLUMN_GAP: u16 = 1;
