//! Layout calculations for the lazyflow TUI.
//!
//! Rendering and mouse handling both derive panel positions from
//! [`calculate_app_layout`], so a click always lands on what was drawn.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::constants::{
    FOOTER_HEIGHT, GRAPH_PANEL_PERCENT, HEADER_HEIGHT, SUMMARY_HEIGHT,
};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Header area (logo, rate, balance)
    pub header: Rect,
    /// Fund-flow graph panel, including its border
    pub graph: Rect,
    /// Selected-edge summary panel
    pub summary: Rect,
    /// Transaction list panel, including its border
    pub list: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

impl AppLayout {
    /// Drawing area inside the graph panel border.
    #[must_use]
    pub fn graph_inner(&self) -> Rect {
        self.graph.inner(Margin::new(1, 1))
    }

    /// Drawing area inside the list panel border.
    #[must_use]
    pub fn list_inner(&self) -> Rect {
        self.list.inner(Margin::new(1, 1))
    }
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(GRAPH_PANEL_PERCENT),
            Constraint::Percentage(100 - GRAPH_PANEL_PERCENT),
        ])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    AppLayout {
        header: rows[0],
        graph: columns[0],
        summary: side[0],
        list: side[1],
        footer: rows[2],
    }
}

/// Calculate a centered popup area within a parent area
///
/// # Arguments
/// * `parent` - The parent area to center within
/// * `width` - Desired popup width in columns
/// * `height` - Desired popup height in rows
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
