//! HTTP client for the wallet backend.
//!
//! The backend exposes three read-only endpoints: wallet balance, wallet
//! transaction history and the current BTC/USD exchange rate.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::WalletClient;
//!
//! let client = WalletClient::new("http://127.0.0.1:5000")?;
//! let transactions = client.get_transactions(&address).await?;
//! let rate = client.get_btc_rate().await?;
//! ```

pub mod http;
pub mod wallet;

#[cfg(test)]
mod tests;

// ============================================================================
// Re-exports
// ============================================================================

pub use wallet::WalletClient;
