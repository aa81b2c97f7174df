//! Per-card pointer gesture recognition.
//!
//! One press on a card ends as exactly one of: a tap (open), the second tap
//! of a double-tap (edit), a drag across columns, a long-press handing over
//! to in-column reordering, or nothing at all. A release beyond the drag
//! threshold is always a drop, even when no move was reported before it. Time is passed in by the
//! caller so recognition is deterministic.

use std::time::{Duration, Instant};

use super::geometry::{Point, Rect};
use super::session::{CardMove, DragSession, DragStartMeta};
use crate::constants::{DOUBLE_TAP_DELAY_MS, DRAG_THRESHOLD, LONG_PRESS_DELAY_MS};
use crate::model::KanbanCard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Movement beyond this distance on either axis starts a drag
    pub drag_threshold: f32,
    pub double_tap_window: Duration,
    pub long_press_delay: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            double_tap_window: Duration::from_millis(DOUBLE_TAP_DELAY_MS),
            long_press_delay: Duration::from_millis(LONG_PRESS_DELAY_MS),
        }
    }
}

/// What a recognised gesture asks the host to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureEvent {
    /// Single tap confirmed after the double-tap window
    Open,
    /// Double-tap
    Edit,
    /// Long-press: start an in-column reorder for this card
    ReorderRequested,
    /// Press released while reordering
    ReorderReleased,
    DragStarted,
    /// Drag released; carries the committed move, if any
    Dropped(Option<CardMove>),
    /// Drag or reorder aborted by gesture termination
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Pressed { origin: Point, pressed_at: Instant },
    Dragging,
    Reordering,
}

#[derive(Debug, Clone)]
pub struct CardGestureRecognizer {
    card: KanbanCard,
    column_id: String,
    bounds: Rect,
    config: GestureConfig,
    phase: Phase,
    last_tap: Option<Instant>,
    pending_open: Option<Instant>,
    ready_opens: u32,
}

impl CardGestureRecognizer {
    pub fn new(card: KanbanCard, column_id: &str, bounds: Rect, config: GestureConfig) -> Self {
        Self {
            card,
            column_id: column_id.to_string(),
            bounds,
            config,
            phase: Phase::Idle,
            last_tap: None,
            pending_open: None,
            ready_opens: 0,
        }
    }

    pub fn card(&self) -> &KanbanCard {
        &self.card
    }

    pub fn column_id(&self) -> &str {
        &self.column_id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Refresh the card and its measured bounds after a relayout
    pub fn update(&mut self, card: KanbanCard, column_id: &str, bounds: Rect) {
        self.card = card;
        self.column_id = column_id.to_string();
        self.bounds = bounds;
    }

    /// Whether a press on this card is still being interpreted
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// A tap is waiting for its double-tap window to close, or to be polled
    pub fn has_pending_tap(&self) -> bool {
        self.pending_open.is_some() || self.ready_opens > 0
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_reordering(&self) -> bool {
        self.phase == Phase::Reordering
    }

    /// Begin interpreting a press.
    ///
    /// Declines (returns `false`) while another drag is in progress so only
    /// one card can ever own the session.
    pub fn on_pointer_down(&mut self, session: &DragSession, position: Point, now: Instant) -> bool {
        if session.is_dragging() {
            return false;
        }
        self.flush_expired_open(now);
        self.phase = Phase::Pressed {
            origin: position,
            pressed_at: now,
        };
        true
    }

    pub fn on_pointer_move(&mut self, session: &mut DragSession, position: Point, now: Instant) -> Option<GestureEvent> {
        match self.phase {
            Phase::Pressed { origin, pressed_at } => {
                if now.duration_since(pressed_at) >= self.config.long_press_delay {
                    return self.begin_reorder();
                }
                if origin.max_axis_distance(position) <= self.config.drag_threshold {
                    return None;
                }
                if session.is_dragging() && !session.is_dragging_card(&self.card.id) {
                    self.phase = Phase::Idle;
                    return None;
                }

                self.start_drag(session, origin, position);
                Some(GestureEvent::DragStarted)
            }
            Phase::Dragging => {
                session.update_drag_position(position.x, position.y);
                None
            }
            Phase::Idle | Phase::Reordering => None,
        }
    }

    pub fn on_pointer_up(&mut self, session: &mut DragSession, position: Point, now: Instant) -> Option<GestureEvent> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Pressed { origin, .. } => {
                if origin.max_axis_distance(position) <= self.config.drag_threshold {
                    return self.register_tap(now);
                }
                // Released far from the press with no move reported in between
                if session.is_dragging() {
                    return None;
                }
                self.start_drag(session, origin, position);
                self.phase = Phase::Idle;
                Some(GestureEvent::Dropped(session.drop_card(None)))
            }
            Phase::Dragging => {
                if !session.is_dragging_card(&self.card.id) {
                    return None;
                }
                session.update_drag_position(position.x, position.y);
                Some(GestureEvent::Dropped(session.drop_card(None)))
            }
            Phase::Reordering => Some(GestureEvent::ReorderReleased),
            Phase::Idle => None,
        }
    }

    /// The platform reclaimed the pointer; never leaves a drag dangling
    pub fn on_terminate(&mut self, session: &mut DragSession) -> Option<GestureEvent> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        self.clear_taps();
        match phase {
            Phase::Dragging => {
                if session.is_dragging_card(&self.card.id) {
                    session.end_drag();
                }
                Some(GestureEvent::Cancelled)
            }
            Phase::Reordering => Some(GestureEvent::Cancelled),
            Phase::Idle | Phase::Pressed { .. } => None,
        }
    }

    /// Surface time-based outcomes: confirmed single taps and long-presses.
    ///
    /// Call on every tick; returns at most one event per call.
    pub fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        self.flush_expired_open(now);
        if self.ready_opens > 0 {
            self.ready_opens -= 1;
            return Some(GestureEvent::Open);
        }

        if let Phase::Pressed { pressed_at, .. } = self.phase {
            if now.duration_since(pressed_at) >= self.config.long_press_delay {
                return self.begin_reorder();
            }
        }
        None
    }

    fn start_drag(&mut self, session: &mut DragSession, origin: Point, position: Point) {
        self.clear_taps();
        let meta = DragStartMeta {
            offset: Some(origin.offset_from(self.bounds.origin())),
            size: Some(self.bounds.size()),
        };
        session.start_drag(self.card.clone(), &self.column_id, Some(meta));
        session.update_drag_position(position.x, position.y);
        self.phase = Phase::Dragging;
    }

    fn register_tap(&mut self, now: Instant) -> Option<GestureEvent> {
        let is_double = self
            .last_tap
            .is_some_and(|last| now.duration_since(last) < self.config.double_tap_window);

        if is_double {
            self.last_tap = None;
            self.pending_open = None;
            return Some(GestureEvent::Edit);
        }

        self.flush_expired_open(now);
        self.last_tap = Some(now);
        self.pending_open = Some(now + self.config.double_tap_window);
        None
    }

    fn begin_reorder(&mut self) -> Option<GestureEvent> {
        self.clear_taps();
        self.phase = Phase::Reordering;
        Some(GestureEvent::ReorderRequested)
    }

    /// Move a single tap whose window has elapsed into the ready queue
    fn flush_expired_open(&mut self, now: Instant) {
        if self.pending_open.is_some_and(|deadline| deadline <= now) {
            self.pending_open = None;
            self.last_tap = None;
            self.ready_opens += 1;
        }
    }

    fn clear_taps(&mut self) {
        self.last_tap = None;
        self.pending_open = None;
    }
}
