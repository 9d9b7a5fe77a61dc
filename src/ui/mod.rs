//! UI rendering module for the lazyflow TUI.
//!
//! This module provides the main rendering entry point and orchestrates
//! rendering of all UI components including panels, popups, and overlays.
//!
//! # Module Structure
//!
//! - `panels` - Graph, amount summary and transaction list panels
//! - `popups` - Modal dialogs (address search, messages)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations shared with mouse handling
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::{App, PopupState};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws the header, the three content panels and the footer, then any
/// popup, then the toast on top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    panels::render_graph(app, frame, layout.graph);
    panels::render_summary(app, frame, layout.summary);
    panels::render_list(app, frame, layout.list);
    footer::render(frame, layout.footer, app);

    match &app.ui.popup_state {
        PopupState::Search(query) => popups::search::render(frame, size, query),
        PopupState::Message(message) => popups::message::render(frame, size, message),
        PopupState::None => {}
    }

    if let Some(message) = app.ui.toast_message() {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
