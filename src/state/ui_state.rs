//! UI state management for the lazyflow TUI.
//!
//! This module manages UI presentation concerns including:
//! - Panel focus (graph or transaction list)
//! - Popup/modal state
//! - Toast notifications
//! - The last known terminal area, used for mouse hit-testing

use ratatui::layout::Rect;

use crate::constants::TOAST_TICKS;

// ============================================================================
// Focus
// ============================================================================

/// Represents which UI panel currently has focus.
///
/// Focus determines which panel receives arrow-key input and is visually
/// highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The fund-flow graph has focus.
    #[default]
    Graph,
    /// The transaction list has focus.
    List,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Graph => Self::List,
            Self::List => Self::Graph,
        }
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Represents the current popup/modal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is displayed.
    #[default]
    None,
    /// Address search popup with the current input.
    Search(String),
    /// Message popup (errors and notices).
    Message(String),
}

impl PopupState {
    /// Returns `true` if a popup is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the search input if in search mode.
    #[must_use]
    pub fn as_search(&self) -> Option<&str> {
        match self {
            Self::Search(query) => Some(query),
            _ => None,
        }
    }

    /// Returns the message if displaying a message popup.
    #[must_use]
    pub fn as_message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, popups, toasts and terminal geometry.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast("[+] Copied");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Which panel has keyboard focus.
    pub focus: Focus,
    /// Current popup.
    pub popup_state: PopupState,
    /// Toast notification message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u16)>,
    /// Terminal area as of the last draw or resize.
    pub terminal_area: Rect,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus Management
    // ========================================================================

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    // ========================================================================
    // Popup Management
    // ========================================================================

    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state.is_active()
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a message popup.
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    /// Opens the search popup, pre-filled with `initial`.
    pub fn open_search(&mut self, initial: &str) {
        self.popup_state = PopupState::Search(initial.to_string());
    }

    /// Appends a character to the search input.
    pub fn search_type_char(&mut self, c: char) {
        if let PopupState::Search(query) = &mut self.popup_state {
            query.push(c);
        }
    }

    /// Removes the last character of the search input.
    pub fn search_backspace(&mut self) {
        if let PopupState::Search(query) = &mut self.popup_state {
            query.pop();
        }
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Shows a toast notification for the default duration.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some((message.into(), TOAST_TICKS));
    }

    /// Decrements the toast countdown.
    ///
    /// Returns `true` if the toast was removed.
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            *ticks = ticks.saturating_sub(1);
            if *ticks == 0 {
                self.toast = None;
                return true;
            }
        }
        false
    }

    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}
