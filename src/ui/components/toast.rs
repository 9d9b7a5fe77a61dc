//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The color follows the
//! message prefix: `[+]` for success, `[x]` for failure.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

/// Minimum width for toast notifications.
const MIN_TOAST_WIDTH: u16 = 20;

/// Height of toast notifications.
const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one space on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = calculate_toast_position(area, message);
    if toast_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, toast_area);

    let toast_block = create_toast_block();
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(determine_text_color(message)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Position and size of the toast, always inside `area`.
#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let toast_width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, TOAST_HEIGHT).intersection(area)
}

#[must_use]
fn create_toast_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black))
}

/// Text color for a toast message.
#[must_use]
fn determine_text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================
