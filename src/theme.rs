//! Theme and styling constants for the lazyflow TUI.
//!
//! Tokyo Night-inspired colors and consistent styling.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Graph Colors
// ============================================================================

/// Fill color of ordinary graph nodes.
pub const NODE_COLOR: Color = Color::Blue;

/// Fill color of the searched address.
pub const TARGET_NODE_COLOR: Color = Color::Yellow;

/// Color of unselected edges and their arrow heads.
pub const EDGE_COLOR: Color = Color::White;

/// Color of the selected node or edge.
pub const GRAPH_SELECTION_COLOR: Color = Color::Green;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the highlighted transaction record.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
