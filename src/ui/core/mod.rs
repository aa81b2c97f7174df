//! Core UI building blocks: actions flowing from input to state changes,
//! and the terminal event source.

pub mod actions;
pub mod event_handler;

pub use actions::{Action, DialogType, InputPurpose, View};
pub use event_handler::{EventHandler, EventType};
