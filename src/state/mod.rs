//! State management module for the lazyflow TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`DataState`] - Exchange rate, wallet balance and the current graph view
//! - [`GraphView`] - One wallet's graph, layout, viewport and selection
//! - [`UiState`] - UI presentation concerns (focus, popups, toasts)
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                        App                        │
//! ├──────────────────────────┬────────────────────────┤
//! │        DataState         │        UiState         │
//! │  - exchange rate         │  - focus               │
//! │  - balance               │  - popups              │
//! │  - GraphView             │  - toasts              │
//! │    (graph, layout,       │                        │
//! │     viewport, selection) │                        │
//! └──────────────────────────┴────────────────────────┘
//! ```
//!
//! Background tasks never touch state directly. They post [`AppMessage`]s
//! that the main loop applies between input events.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::client::WalletClient;
use crate::domain::WalletBalance;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod graph_view;
pub mod selection;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;
pub use graph_view::GraphView;
pub use ui_state::{Focus, PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// One exchange-rate fetch finished.
    ExchangeRateUpdated(Result<f64, String>),
    /// A wallet render finished.
    WalletLoaded {
        generation: u64,
        view: Box<GraphView>,
        balance: WalletBalance,
    },
    /// A wallet render failed while fetching.
    WalletLoadFailed {
        generation: u64,
        address: String,
        error: String,
    },
}

// ============================================================================
// Startup Options
// ============================================================================

/// Options that can be passed when starting the application.
///
/// Values given here override the configuration file for this session only.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Address to search immediately after startup.
    pub address: Option<String>,
    /// Backend base URL.
    pub server_url: Option<String>,
    /// Seconds between exchange-rate fetches.
    pub rate_poll_secs: Option<u64>,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Data state - exchange rate, balance, graph view.
    pub data: DataState,

    /// UI state - focus, popups, toasts.
    pub ui: UiState,

    /// Configuration as stored on disk.
    pub config: AppConfig,

    /// Where `config` is saved. `None` disables saving.
    pub(crate) config_path: Option<PathBuf>,

    /// Effective exchange-rate polling period for this session.
    pub(crate) rate_poll_interval: Duration,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for UI animations.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // Channel sends use `let _ = tx.send(...)`: the receiver is dropped on
    // shutdown and late results are meaningless by then.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    /// Wallet backend client.
    pub(crate) client: WalletClient,

    /// Options passed at startup (consumed by the first run).
    pub(crate) startup_options: Option<StartupOptions>,
}

impl App {
    /// Address of the wallet on screen or being fetched.
    #[must_use]
    pub fn current_address(&self) -> Option<&str> {
        self.data
            .loading
            .as_deref()
            .or_else(|| self.data.view.as_ref().map(|view| view.address.as_str()))
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, keyboard and mouse input
mod app_commands;

// Wallet loading, clipboard, browser actions
mod app_actions;

// ============================================================================
// Tests
// ============================================================================
