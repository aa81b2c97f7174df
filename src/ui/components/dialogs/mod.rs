//! Dialog components module

mod card_detail_dialog;
mod color_picker_dialog;
mod confirm_delete_dialog;
mod debug_dialog;
mod error_dialog;
mod input_dialog;

pub use card_detail_dialog::CardDetailDialog;
pub use color_picker_dialog::ColorPickerDialog;
pub use confirm_delete_dialog::ConfirmDeleteDialog;
pub use debug_dialog::DebugDialog;
pub use error_dialog::ErrorDialog;
pub use input_dialog::InputDialog;
