//! Domain types for the lazyflow wallet explorer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for backend and validation operations
//! - [`transaction`] - Raw transaction records and wallet balance
//! - [`address`] - Bitcoin address validation

// ============================================================================
// Module Declarations
// ============================================================================

pub mod address;
pub mod error;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use address::validate_address;
pub use error::FlowError;
pub use transaction::{Transaction, WalletBalance, satoshis_to_btc};
