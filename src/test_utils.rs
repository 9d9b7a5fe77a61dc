//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::buffer::Buffer;
use serde_json::{Value, json};

use crate::domain::Transaction;
use crate::domain::transaction::{PrevOut, TxInput, TxOutput};
use crate::state::{App, AppConfig, StartupOptions};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    /// A transaction with the given resolved inputs and outputs.
    #[must_use]
    pub fn new(
        hash: &str,
        inputs: &[(&str, u64)],
        outputs: &[(&str, u64)],
        rate: f64,
    ) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            inputs: inputs
                .iter()
                .map(|(addr, value)| TxInput {
                    prev_out: Some(PrevOut {
                        addr: Some((*addr).to_string()),
                        value: *value,
                    }),
                })
                .collect(),
            out: outputs
                .iter()
                .map(|(addr, value)| TxOutput {
                    addr: Some((*addr).to_string()),
                    value: *value,
                })
                .collect(),
            btc_to_usd_rate: rate,
        }
    }

    /// `A -> T1 -> B`, one BTC each way at 50 000 USD.
    #[must_use]
    pub fn simple() -> Transaction {
        Self::new(
            "T1",
            &[("A", 100_000_000)],
            &[("B", 100_000_000)],
            50_000.0,
        )
    }

    /// A coinbase-style transaction: one unresolved input, one output.
    #[must_use]
    pub fn coinbase(hash: &str, miner: &str) -> Transaction {
        let mut txn = Self::new(hash, &[], &[(miner, 625_000_000)], 30_000.0);
        txn.inputs.push(TxInput { prev_out: None });
        txn
    }

    /// A transaction with nothing resolvable at all.
    #[must_use]
    pub fn unresolved(hash: &str) -> Transaction {
        Transaction {
            hash: hash.to_string(),
            inputs: vec![
                TxInput { prev_out: None },
                TxInput {
                    prev_out: Some(PrevOut {
                        addr: None,
                        value: 5,
                    }),
                },
            ],
            out: vec![TxOutput {
                addr: None,
                value: 0,
            }],
            btc_to_usd_rate: 40_000.0,
        }
    }

    /// A short wallet history: `A` pays `W`, then `W` pays `C` with change.
    #[must_use]
    pub fn history() -> Vec<Transaction> {
        vec![
            Self::new(
                "T1",
                &[("A", 200_000_000)],
                &[("W", 150_000_000), ("A", 49_000_000)],
                20_000.0,
            ),
            Self::new(
                "T2",
                &[("W", 150_000_000)],
                &[("C", 100_000_000), ("W", 49_990_000)],
                30_000.0,
            ),
        ]
    }
}

pub struct JsonMother;

impl JsonMother {
    /// Backend JSON for [`TransactionMother::simple`] with extra fields.
    #[must_use]
    pub fn simple_transactions() -> Value {
        json!([
            {
                "hash": "T1",
                "size": 225,
                "inputs": [{"prev_out": {"addr": "A", "value": 100_000_000, "n": 0}}],
                "out": [{"addr": "B", "value": 100_000_000, "spent": false}],
                "btc_to_usd_rate": 50_000.0
            }
        ])
    }

    #[must_use]
    pub fn balance(btc: f64, usd: f64) -> Value {
        json!([btc, usd])
    }
}

// ============================================================================
// App and Buffer Helpers
// ============================================================================

/// An app with default config, no config file and no startup address.
///
/// Nothing is fetched until a test asks for it.
#[must_use]
pub fn test_app() -> App {
    App::with_config(AppConfig::default(), None, StartupOptions::default())
        .expect("default config builds an app")
}

/// Buffer contents as text, one line per row.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
