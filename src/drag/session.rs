//! The single active drag session.
//!
//! A [`DragSession`] is owned by the board view and passed by reference to
//! whatever handles pointer input for cards and columns. It owns the
//! [`ColumnRegistry`] so hover resolution always sees the current layout.

use std::fmt;

use super::geometry::{Point, Rect, Size};
use super::hit_test;
use super::registry::ColumnRegistry;
use crate::model::KanbanCard;

/// Receives committed cross-column moves.
///
/// Called at most once per completed drag and never with `from == to`. The
/// engine does not observe the outcome: persisting, retrying or reporting
/// failures is the receiver's business.
pub trait MoveCardHandler {
    fn move_card(&mut self, card_id: &str, from_column_id: &str, to_column_id: &str);
}

impl<F> MoveCardHandler for F
where
    F: FnMut(&str, &str, &str),
{
    fn move_card(&mut self, card_id: &str, from_column_id: &str, to_column_id: &str) {
        self(card_id, from_column_id, to_column_id)
    }
}

/// A committed cross-column move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMove {
    pub card_id: String,
    pub from_column_id: String,
    pub to_column_id: String,
}

/// Optional measurements captured when the drag starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragStartMeta {
    /// Pointer offset from the card's top-left corner
    pub offset: Option<Point>,
    /// Card size at grab time
    pub size: Option<Size>,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    card: KanbanCard,
    origin_column_id: String,
    pointer_position: Option<Point>,
    grab_offset: Option<Point>,
    card_size: Option<Size>,
    hover_column_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

#[derive(Default)]
pub struct DragSession {
    state: DragState,
    registry: ColumnRegistry,
    on_move: Option<Box<dyn MoveCardHandler>>,
}

impl fmt::Debug for DragSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSession")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("has_move_handler", &self.on_move.is_some())
            .finish()
    }
}

impl DragSession {
    /// Session without a move handler; drops still resolve and return the move
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_move_handler(handler: impl MoveCardHandler + 'static) -> Self {
        Self {
            on_move: Some(Box::new(handler)),
            ..Self::default()
        }
    }

    // Column registry

    pub fn register_column(&mut self, column_id: &str, rect: Rect) {
        self.registry.register(column_id, rect);
    }

    pub fn unregister_column(&mut self, column_id: &str) {
        self.registry.unregister(column_id);
    }

    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    // Transitions

    /// Pick up `card` from `origin_column_id`.
    ///
    /// Hover and pointer position start empty until the first move event.
    pub fn start_drag(&mut self, card: KanbanCard, origin_column_id: &str, meta: Option<DragStartMeta>) {
        let meta = meta.unwrap_or_default();
        log::debug!("Drag started: card {} from column {}", card.id, origin_column_id);
        self.state = DragState::Dragging(ActiveDrag {
            card,
            origin_column_id: origin_column_id.to_string(),
            pointer_position: None,
            grab_offset: meta.offset,
            card_size: meta.size,
            hover_column_id: None,
        });
    }

    /// Record the pointer position and re-resolve the hovered column
    pub fn update_drag_position(&mut self, x: f32, y: f32) {
        let DragState::Dragging(active) = &mut self.state else {
            return;
        };
        let point = Point::new(x, y);
        active.pointer_position = Some(point);
        active.hover_column_id = hit_test::resolve(point, &self.registry).map(str::to_string);
    }

    /// Release the card.
    ///
    /// The target is `preferred_column_id` when given, otherwise the hovered
    /// column. A target that exists and differs from the origin commits the
    /// move through the handler; anything else snaps back. The session is
    /// cleared either way.
    pub fn drop_card(&mut self, preferred_column_id: Option<&str>) -> Option<CardMove> {
        let DragState::Dragging(active) = std::mem::take(&mut self.state) else {
            return None;
        };

        let target = preferred_column_id
            .map(str::to_string)
            .or(active.hover_column_id);

        match target {
            Some(to) if to != active.origin_column_id => {
                log::info!("Dropping card {} from {} into {}", active.card.id, active.origin_column_id, to);
                if let Some(handler) = self.on_move.as_mut() {
                    handler.move_card(&active.card.id, &active.origin_column_id, &to);
                }
                Some(CardMove {
                    card_id: active.card.id,
                    from_column_id: active.origin_column_id,
                    to_column_id: to,
                })
            }
            _ => {
                log::debug!("Drop of card {} cancelled", active.card.id);
                None
            }
        }
    }

    /// Abandon the drag without committing anything
    pub fn end_drag(&mut self) {
        if let DragState::Dragging(active) = std::mem::take(&mut self.state) {
            log::debug!("Drag of card {} ended without drop", active.card.id);
        }
    }

    // Observable state

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(active) => Some(active),
            DragState::Idle => None,
        }
    }

    pub fn dragged_card(&self) -> Option<&KanbanCard> {
        self.active().map(|a| &a.card)
    }

    pub fn origin_column_id(&self) -> Option<&str> {
        self.active().map(|a| a.origin_column_id.as_str())
    }

    pub fn hover_column_id(&self) -> Option<&str> {
        self.active().and_then(|a| a.hover_column_id.as_deref())
    }

    pub fn pointer_position(&self) -> Option<Point> {
        self.active().and_then(|a| a.pointer_position)
    }

    pub fn grab_offset(&self) -> Option<Point> {
        self.active().and_then(|a| a.grab_offset)
    }

    pub fn drag_card_size(&self) -> Option<Size> {
        self.active().and_then(|a| a.card_size)
    }

    /// Whether `column_id` should be highlighted as the pending drop target
    pub fn is_drop_target(&self, column_id: &str) -> bool {
        self.active().is_some_and(|a| {
            a.hover_column_id.as_deref() == Some(column_id) && a.origin_column_id != column_id
        })
    }

    /// Whether the active drag belongs to `card_id`
    pub fn is_dragging_card(&self, card_id: &str) -> bool {
        self.dragged_card().is_some_and(|c| c.id == card_id)
    }
}
