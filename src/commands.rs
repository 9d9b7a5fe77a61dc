//! Command pattern for key event handling in the TUI application.
//!
//! Key events are first mapped to an [`AppCommand`] for the current
//! [`InputContext`], then executed by the app. Keeping the mapping pure makes
//! keybindings testable in isolation.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::graph::PanDirection;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Graph panel focused, no popup.
    GraphPanel,
    /// Transaction list focused, no popup.
    ListPanel,
    /// Address search popup is open.
    SearchInput,
    /// Message popup is open.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Fetch the current address again.
    Reload,

    // === Popup Control ===
    /// Open the address search popup.
    OpenSearch,
    /// Close the current popup.
    Dismiss,

    // === Panels ===
    /// Switch focus between graph and list.
    CycleFocus,
    /// Copy the selected id to the clipboard.
    CopySelection,
    /// Open the selected address or transaction in a block explorer.
    OpenInExplorer,

    // === Selection ===
    /// Select the next node of the graph.
    NextNode,
    /// Select the previous node of the graph.
    PreviousNode,
    /// Select the next edge (and its list entry).
    NextEdge,
    /// Select the previous edge (and its list entry).
    PreviousEdge,
    /// Clear the graph selection.
    TapBackground,

    // === Viewport ===
    /// Pan the graph view.
    Pan(PanDirection),
    /// Zoom into the graph.
    ZoomIn,
    /// Zoom out of the graph.
    ZoomOut,
    /// Restore the fitted view.
    ResetView,

    // === Search Input ===
    /// Type a character in the search input.
    TypeChar(char),
    /// Delete the last character of the search input.
    Backspace,
    /// Submit the search input.
    SubmitSearch,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command only changes the viewport.
    #[must_use]
    pub const fn is_viewport(&self) -> bool {
        matches!(
            self,
            Self::Pan(_) | Self::ZoomIn | Self::ZoomOut | Self::ResetView
        )
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the context.
    ///
    /// This is a pure function: it only translates input to intent.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return match context {
                InputContext::SearchInput => AppCommand::Dismiss,
                _ => AppCommand::Quit,
            };
        }

        match context {
            InputContext::GraphPanel => Self::map_graph_keys(key),
            InputContext::ListPanel => Self::map_list_keys(key),
            InputContext::SearchInput => Self::map_search_input_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    /// Keys available whenever no popup is open.
    fn map_global_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Reload,
            KeyCode::Char('f' | '/') => AppCommand::OpenSearch,
            KeyCode::Char('c') => AppCommand::CopySelection,
            KeyCode::Char('o') => AppCommand::OpenInExplorer,
            KeyCode::Tab | KeyCode::BackTab => AppCommand::CycleFocus,
            KeyCode::Esc => AppCommand::TapBackground,
            _ => AppCommand::Noop,
        }
    }

    fn map_graph_keys(key: KeyEvent) -> AppCommand {
        if key.modifiers.contains(KeyModifiers::SHIFT) {
            let pan = match key.code {
                KeyCode::Left => Some(PanDirection::Left),
                KeyCode::Right => Some(PanDirection::Right),
                KeyCode::Up => Some(PanDirection::Up),
                KeyCode::Down => Some(PanDirection::Down),
                _ => None,
            };
            if let Some(direction) = pan {
                return AppCommand::Pan(direction);
            }
        }

        match key.code {
            KeyCode::Up => AppCommand::PreviousNode,
            KeyCode::Down => AppCommand::NextNode,
            KeyCode::Left => AppCommand::PreviousEdge,
            KeyCode::Right => AppCommand::NextEdge,
            KeyCode::Char('+' | '=') => AppCommand::ZoomIn,
            KeyCode::Char('-' | '_') => AppCommand::ZoomOut,
            KeyCode::Char('0') => AppCommand::ResetView,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_list_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up => AppCommand::PreviousEdge,
            KeyCode::Down => AppCommand::NextEdge,
            _ => Self::map_global_keys(key),
        }
    }

    fn map_search_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitSearch,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
