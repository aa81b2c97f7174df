use ratatui::style::Color;

use crate::model::Priority;

/// Palette new boards cycle through
pub const BOARD_COLORS: [&str; 8] = [
    "#3B82F6", // Blue
    "#8B5CF6", // Purple
    "#10B981", // Green
    "#F59E0B", // Orange
    "#EF4444", // Red
    "#06B6D4", // Cyan
    "#EC4899", // Pink
    "#84CC16", // Lime
];

/// Palette entry for the n-th board, wrapping around
pub fn board_color(index: usize) -> &'static str {
    BOARD_COLORS[index % BOARD_COLORS.len()]
}

/// Convert a `#RRGGBB` string to a terminal color, falling back to blue
#[must_use]
pub fn parse_hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Rgb(59, 130, 246);
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Rgb(59, 130, 246),
    }
}

/// Indicator color for a card priority
#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Rgb(239, 68, 68),
        Priority::Medium => Color::Rgb(245, 158, 11),
        Priority::Low => Color::Rgb(16, 185, 129),
    }
}
