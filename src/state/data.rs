//! Data state for the lazyflow TUI.
//!
//! Holds what the background tasks deliver: the exchange rate, the balance
//! of the searched wallet, and the rendered graph view. Every wallet render
//! is tagged with a generation number so that a slow earlier render can
//! never overwrite a newer one.

use chrono::{DateTime, Local};

use crate::constants::RATE_ERROR_TEXT;
use crate::domain::WalletBalance;
use crate::graph::{format_btc, format_usd};

use super::graph_view::GraphView;

// ============================================================================
// Exchange Rate
// ============================================================================

/// Latest outcome of the exchange-rate poller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RateStatus {
    /// No fetch has completed yet.
    #[default]
    Pending,
    /// Last fetch succeeded.
    Rate(f64),
    /// Last fetch failed.
    Error,
}

impl RateStatus {
    /// Text shown in the header.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Pending => "Fetching exchange rate...".to_string(),
            Self::Rate(rate) => format!("1 BTC = ${} USD", format_usd(*rate)),
            Self::Error => RATE_ERROR_TEXT.to_string(),
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

// ============================================================================
// Data State
// ============================================================================

/// Data state: exchange rate, wallet balance and the current graph view.
#[derive(Debug, Default)]
pub struct DataState {
    /// Exchange rate shown in the header.
    pub rate: RateStatus,
    /// Local time of the last successful rate fetch.
    pub rate_updated_at: Option<DateTime<Local>>,
    /// Balance of the searched wallet.
    pub balance: Option<WalletBalance>,
    /// Graph and list for the searched wallet.
    pub view: Option<GraphView>,
    /// Address currently being fetched, if any.
    pub loading: Option<String>,
    /// Generation of the most recent render request.
    generation: u64,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one exchange-rate fetch.
    ///
    /// Results are applied in arrival order; a failure replaces any
    /// previously shown rate.
    pub fn apply_rate(&mut self, result: Result<f64, String>) {
        match result {
            Ok(rate) => {
                self.rate = RateStatus::Rate(rate);
                self.rate_updated_at = Some(Local::now());
            }
            Err(_) => self.rate = RateStatus::Error,
        }
    }

    /// Time of the last successful rate fetch, as `HH:MM:SS`.
    #[must_use]
    pub fn rate_updated_text(&self) -> Option<String> {
        self.rate_updated_at
            .map(|time| time.format("%H:%M:%S").to_string())
    }

    /// Start a new render for `address` and return its generation.
    pub fn begin_load(&mut self, address: &str) -> u64 {
        self.generation += 1;
        self.loading = Some(address.to_string());
        self.generation
    }

    /// Whether `generation` belongs to the most recent render request.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    #[cfg(test)]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Install a completed render.
    pub fn finish_load(&mut self, view: GraphView, balance: WalletBalance) {
        self.loading = None;
        self.balance = Some(balance);
        self.view = Some(view);
    }

    /// Mark the current render as failed. Previous results stay on screen.
    pub fn fail_load(&mut self) {
        self.loading = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Lines of the balance panel, once a wallet has been loaded.
    #[must_use]
    pub fn balance_lines(&self) -> Option<[String; 3]> {
        self.balance.map(|balance| {
            [
                "Target Wallet Balance".to_string(),
                format!("USD Amount: ${}", format_usd(balance.usd)),
                format!("BTC Amount: {}", format_btc(balance.btc)),
            ]
        })
    }
}
