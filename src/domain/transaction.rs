//! Bitcoin transaction records as served by the wallet backend.
//!
//! The backend relays blockchain.info's raw transaction JSON and adds a
//! `btc_to_usd_rate` field. Only the fields needed to build the fund-flow graph
//! are decoded; everything else is ignored.

use serde::{Deserialize, Serialize};

use crate::constants::SATOSHIS_PER_BTC;

// ============================================================================
// Transaction
// ============================================================================

/// A single transaction from a wallet's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction hash, unique across the history.
    pub hash: String,
    /// Inputs, each optionally resolved to the output it spends.
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    /// Outputs.
    #[serde(default)]
    pub out: Vec<TxOutput>,
    /// BTC to USD rate applicable to this transaction.
    #[serde(default)]
    pub btc_to_usd_rate: f64,
}

/// A transaction input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxInput {
    /// The previous output this input spends. Absent for coinbase inputs.
    #[serde(default)]
    pub prev_out: Option<PrevOut>,
}

/// The previous output referenced by an input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrevOut {
    /// Address that owned the output, if the backend could resolve it.
    #[serde(default)]
    pub addr: Option<String>,
    /// Value in satoshis.
    #[serde(default)]
    pub value: u64,
}

/// A transaction output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Destination address. Absent for non-standard scripts such as OP_RETURN.
    #[serde(default)]
    pub addr: Option<String>,
    /// Value in satoshis.
    #[serde(default)]
    pub value: u64,
}

impl TxInput {
    /// The resolved source address and value, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<(&str, u64)> {
        let prev_out = self.prev_out.as_ref()?;
        prev_out.addr.as_deref().map(|addr| (addr, prev_out.value))
    }
}

impl TxOutput {
    /// The resolved destination address and value, if any.
    #[must_use]
    pub fn resolved(&self) -> Option<(&str, u64)> {
        self.addr.as_deref().map(|addr| (addr, self.value))
    }
}

/// Convert satoshis to BTC.
#[must_use]
pub fn satoshis_to_btc(value: u64) -> f64 {
    value as f64 / SATOSHIS_PER_BTC
}

// ============================================================================
// Wallet Balance
// ============================================================================

/// Balance of the searched wallet.
///
/// Decoded positionally from the backend's `[btc, usd]` array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct WalletBalance {
    /// Balance in BTC.
    pub btc: f64,
    /// Balance in USD at the backend's current rate.
    pub usd: f64,
}

impl From<(f64, f64)> for WalletBalance {
    fn from((btc, usd): (f64, f64)) -> Self {
        Self { btc, usd }
    }
}

// ============================================================================
// Tests
// ============================================================================
