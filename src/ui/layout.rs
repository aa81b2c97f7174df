//! Layout management and calculations

use ratatui::layout::Rect;

use crate::constants::{CARD_HEIGHT, COLUMN_GAP};
use crate::drag::Point;
use crate::model::KanbanBoard;

/// Screen position of one rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct CardArea {
    pub card_id: String,
    pub index: usize,
    pub area: Rect,
}

/// Screen position of one rendered column and its visible cards
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnArea {
    pub column_id: String,
    pub index: usize,
    pub area: Rect,
    pub cards: Vec<CardArea>,
    /// Cards that did not fit below the visible ones
    pub hidden_cards: usize,
}

impl ColumnArea {
    /// Area inside the column border where cards are stacked
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.area.x.saturating_add(1),
            self.area.y.saturating_add(1),
            self.area.width.saturating_sub(2),
            self.area.height.saturating_sub(2),
        )
    }
}

/// Everything placed on screen during the last frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLayout {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub columns: Vec<ColumnArea>,
}

impl BoardLayout {
    /// Header, body and status areas without any columns
    #[must_use]
    pub fn frame(area: Rect) -> Self {
        let header_height = 2u16.min(area.height);
        let status_height = 1u16.min(area.height.saturating_sub(header_height));
        let body_height = area.height.saturating_sub(header_height + status_height);

        Self {
            header: Rect::new(area.x, area.y, area.width, header_height),
            body: Rect::new(area.x, area.y + header_height, area.width, body_height),
            status: Rect::new(area.x, area.y + header_height + body_height, area.width, status_height),
            columns: Vec::new(),
        }
    }

    /// Lay `board` out left to right starting at column `first_column`
    #[must_use]
    pub fn compute(board: &KanbanBoard, area: Rect, column_width: u16, first_column: usize) -> Self {
        let mut layout = Self::frame(area);
        let body = layout.body;
        let mut x = body.x;

        for (index, column) in board.columns.iter().enumerate().skip(first_column) {
            if x >= body.right() {
                break;
            }
            let width = column_width.min(body.right() - x);
            let mut column_area = ColumnArea {
                column_id: column.id.clone(),
                index,
                area: Rect::new(x, body.y, width, body.height),
                cards: Vec::new(),
                hidden_cards: 0,
            };

            let inner = column_area.inner();
            let mut y = inner.y;
            for (card_index, card) in column.cards.iter().enumerate() {
                if y + CARD_HEIGHT > inner.bottom() {
                    column_area.hidden_cards = column.cards.len() - card_index;
                    break;
                }
                column_area.cards.push(CardArea {
                    card_id: card.id.clone(),
                    index: card_index,
                    area: Rect::new(inner.x, y, inner.width, CARD_HEIGHT),
                });
                y += CARD_HEIGHT;
            }

            layout.columns.push(column_area);
            x = x.saturating_add(width).saturating_add(COLUMN_GAP);
        }

        layout
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnArea> {
        self.columns.iter().find(|c| c.column_id == column_id)
    }

    /// The card drawn under `point`, with its column
    pub fn card_at(&self, point: Point) -> Option<(&ColumnArea, &CardArea)> {
        self.columns.iter().find_map(|column| {
            column
                .cards
                .iter()
                .find(|card| contains_cell(card.area, point))
                .map(|card| (column, card))
        })
    }
}

/// Half-open cell containment used for picking what was clicked
fn contains_cell(area: Rect, point: Point) -> bool {
    point.x >= f32::from(area.x)
        && point.x < f32::from(area.right())
        && point.y >= f32::from(area.y)
        && point.y < f32::from(area.bottom())
}

/// Rectangle of `percent_x` by `height` rows centred in `area`
#[must_use]
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let scaled = (u32::from(area.width) * u32::from(percent_x) / 100) as u16;
    let width = scaled.max(20).min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
