//! Kanbanist - kanban boards with drag-and-drop in the terminal
//!
//! This library provides the board model, local persistence, and the
//! pointer-driven drag-and-drop engine that moves cards between columns,
//! together with a Ratatui front end that hosts it.
//!
//! # Modules
//!
//! * [`drag`] - Column registry, hit-testing, drag session and gestures
//! * [`boards`] - Board/column/card reducers backed by storage
//! * [`storage`] - Key-value stores and board persistence
//! * [`calendar`] - Due-date events across boards
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface
//! * [`utils`] - Date and color helpers

/// Board, column and card operations over the persisted board list
pub mod boards;

/// Calendar events derived from card due dates
pub mod calendar;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Drag-and-drop engine
pub mod drag;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Board, column and card data model
pub mod model;

/// Local storage layer for board data
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

pub use model::{CalendarEvent, KanbanBoard, KanbanCard, KanbanColumn, Priority};
