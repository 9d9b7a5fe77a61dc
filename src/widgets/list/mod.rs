//! List widget for the human-readable transaction records.
//!
//! - [`TxnListWidget`]: Renders records with the highlighted one centered

mod txn_list;

pub use txn_list::{TxnListWidget, centered_offset};
