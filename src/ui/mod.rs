//! UI module for Kanbanist
//!
//! This module handles the terminal front end: the application state that
//! hosts the drag-and-drop engine, screen layout, components and rendering.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use layout::BoardLayout;
pub use renderer::run_app;
