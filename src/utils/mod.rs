//! Utility modules for the Kanbanist application.
//!
//! - [`datetime`] - Due date parsing, calendar keys and relative labels
//! - [`color`] - Board palette and priority colors

pub mod color;
pub mod datetime;
