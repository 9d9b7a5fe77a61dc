//! Popup UI components for the lazyflow TUI.
//!
//! Popups are modal overlays drawn on top of the main UI: the address search
//! and the message popup for errors.

pub mod message;
pub mod search;
