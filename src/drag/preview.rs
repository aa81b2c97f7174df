//! Geometry of the floating card that follows the pointer.

use super::geometry::Rect;
use super::session::DragSession;
use crate::constants::{PREVIEW_DEFAULT_HEIGHT, PREVIEW_DEFAULT_WIDTH};
use crate::model::KanbanCard;

#[derive(Debug, Clone, PartialEq)]
pub struct DragPreview<'a> {
    pub card: &'a KanbanCard,
    pub rect: Rect,
}

/// Where to draw the dragged card, if anything should be drawn.
///
/// The preview sits at `pointer - grab offset` so the grabbed point stays
/// under the pointer. Without a measured size it falls back to a default
/// card, and without an offset it is centred on the pointer. Nothing is
/// drawn until the first move event reports a position.
pub fn drag_preview(session: &DragSession) -> Option<DragPreview<'_>> {
    let card = session.dragged_card()?;
    let pointer = session.pointer_position()?;

    let size = session.drag_card_size();
    let width = size.map_or(PREVIEW_DEFAULT_WIDTH, |s| s.width);
    let height = size.map_or(PREVIEW_DEFAULT_HEIGHT, |s| s.height);
    let (offset_x, offset_y) = session
        .grab_offset()
        .map_or((width / 2.0, height / 2.0), |o| (o.x, o.y));

    Some(DragPreview {
        card,
        rect: Rect::new(pointer.x - offset_x, pointer.y - offset_y, width, height),
    })
}
