//! Application constants for the lazyflow TUI.
//!
//! Centralized constants for amounts, polling, graph layout, and UI
//! dimensions.

use std::time::Duration;

// ============================================================================
// Amounts
// ============================================================================

/// Number of satoshis per BTC.
pub const SATOSHIS_PER_BTC: f64 = 100_000_000.0;

// ============================================================================
// Polling and Timing
// ============================================================================

/// Default interval between exchange-rate fetches, in seconds.
pub const DEFAULT_RATE_POLL_SECS: u64 = 180;

/// UI tick rate for redraws and timed messages.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default backend URL (the Flask development server).
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

// ============================================================================
// Graph Layout
// ============================================================================

/// Horizontal coordinate of the source-only column.
pub const SOURCE_COLUMN_X: f64 = 100.0;

/// Horizontal coordinate of the pass-through (and isolated) column.
pub const MIDDLE_COLUMN_X: f64 = 350.0;

/// Horizontal coordinate of the sink-only column.
pub const SINK_COLUMN_X: f64 = 600.0;

/// Vertical distance between consecutive nodes of a column.
pub const NODE_SPACING_Y: f64 = 75.0;

/// Padding added around the node bounds when fitting the view.
pub const FIT_PADDING: f64 = 60.0;

/// Zoom limits for the graph viewport.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// Multiplicative zoom step per key press or wheel notch.
pub const ZOOM_STEP: f64 = 1.25;

/// Fraction of the visible span moved per pan step.
pub const PAN_STEP: f64 = 0.1;

/// Maximum characters of a node label in the graph.
pub const NODE_LABEL_WIDTH: usize = 12;

// ============================================================================
// UI Dimensions
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 5;

/// Height of the footer (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the amount summary panel (in rows).
pub const SUMMARY_HEIGHT: u16 = 5;

/// Height of each entry in the transaction list (in rows).
///
/// From, To, BTC amount, USD amount.
pub const RECORD_HEIGHT: u16 = 4;

/// Width share of the graph panel, in percent.
pub const GRAPH_PANEL_PERCENT: u16 = 62;

/// Toast duration in ticks.
pub const TOAST_TICKS: u16 = 20;

// ============================================================================
// Block Explorer
// ============================================================================

/// Explorer URL prefix for addresses.
pub const EXPLORER_ADDRESS_URL: &str = "https://www.blockchain.com/explorer/addresses/btc/";

/// Explorer URL prefix for transactions.
pub const EXPLORER_TX_URL: &str = "https://www.blockchain.com/explorer/transactions/btc/";

/// Literal text shown when the exchange rate cannot be fetched.
pub const RATE_ERROR_TEXT: &str = "Error fetching exchange rate";
