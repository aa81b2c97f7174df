//! Drag-and-drop engine for moving cards.
//!
//! Two interactions share this module:
//!
//! 1. **Cross-column moves**: a card is picked up once the pointer travels
//!    past the drag threshold; every move re-resolves which registered
//!    column lies under the pointer, and release commits the move through a
//!    [`MoveCardHandler`] when the hovered column differs from the origin.
//! 2. **In-column reordering**: a long-press hands the card to a
//!    [`ListReorder`] that only tracks index permutations.
//!
//! # Module Components
//!
//! - [`geometry`] - Points, sizes and rectangles
//! - [`registry`] - Column id to rectangle map
//! - [`hit_test`] - Pointer to column resolution
//! - [`session`] - The single active drag and the drop resolver
//! - [`gesture`] - Per-card tap / double-tap / drag / long-press recognition
//! - [`preview`] - Floating preview placement
//! - [`reorder`] - Index-based in-column reordering
//!
//! Everything here is synchronous and driven by the host's event loop.

pub mod geometry;
pub mod gesture;
pub mod hit_test;
pub mod preview;
pub mod registry;
pub mod reorder;
pub mod session;

pub use geometry::{Point, Rect, Size};
pub use gesture::{CardGestureRecognizer, GestureConfig, GestureEvent};
pub use hit_test::resolve;
pub use preview::{drag_preview, DragPreview};
pub use registry::ColumnRegistry;
pub use reorder::{ListReorder, ReorderedColumn};
pub use session::{CardMove, DragSession, DragStartMeta, MoveCardHandler};
