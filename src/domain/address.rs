//! Bitcoin address validation.
//!
//! Legacy (`1…`) and script (`3…`) addresses must base58check-decode to a
//! 25-byte payload. Native segwit (`bc1…`) addresses are checked for shape
//! only: `bc1` followed by 25 to 39 lowercase alphanumerics.

use super::FlowError;

// ============================================================================
// Constants
// ============================================================================

/// Decoded length of a legacy or script address (version + hash160 + checksum).
const BASE58_ADDRESS_LEN: usize = 25;

/// Length of the base58check checksum stripped during decoding.
const BASE58_CHECKSUM_LEN: usize = 4;

const BECH32_PREFIX: &str = "bc1";
const BECH32_MIN_DATA_LEN: usize = 25;
const BECH32_MAX_DATA_LEN: usize = 39;

// ============================================================================
// Address Kind
// ============================================================================

/// Recognized address encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    /// Pay-to-pubkey-hash, starts with `1`.
    Legacy,
    /// Pay-to-script-hash, starts with `3`.
    Script,
    /// Native segwit, starts with `bc1`.
    Bech32,
}

impl AddressKind {
    /// Short name shown in the search popup.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Script => "script",
            Self::Bech32 => "bech32",
        }
    }
}

/// Validate a wallet address and report its kind.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `FlowError::InvalidInput` when the address is empty, has an
/// unknown prefix, fails its checksum, or has the wrong shape.
pub fn validate_address(input: &str) -> Result<AddressKind, FlowError> {
    let address = input.trim();
    if address.is_empty() {
        return Err(FlowError::invalid_input("Address cannot be empty"));
    }

    if address.starts_with('1') || address.starts_with('3') {
        let decoded = base58check_decode(address)?;
        if decoded.len() + BASE58_CHECKSUM_LEN != BASE58_ADDRESS_LEN {
            return Err(FlowError::invalid_input(format!(
                "Invalid base58 address: {address}"
            )));
        }
        return Ok(if address.starts_with('1') {
            AddressKind::Legacy
        } else {
            AddressKind::Script
        });
    }

    if let Some(data) = address.strip_prefix(BECH32_PREFIX) {
        let valid_len = (BECH32_MIN_DATA_LEN..=BECH32_MAX_DATA_LEN).contains(&data.len());
        let valid_chars = data
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase());
        if valid_len && valid_chars {
            return Ok(AddressKind::Bech32);
        }
        return Err(FlowError::invalid_input(format!(
            "Invalid bech32 address: {address}"
        )));
    }

    Err(FlowError::invalid_input(format!(
        "Unrecognized address format: {address}"
    )))
}

// ============================================================================
// Base58Check
// ============================================================================

/// Decode a base58check string and return the version byte plus hash.
fn base58check_decode(address: &str) -> Result<Vec<u8>, FlowError> {
    bs58::decode(address)
        .with_check(None)
        .into_vec()
        .map_err(|err| match err {
            bs58::decode::Error::InvalidChecksum { .. } => {
                FlowError::invalid_input(format!("Checksum mismatch for address: {address}"))
            }
            err => FlowError::invalid_input(format!("Invalid base58 address {address}: {err}")),
        })
}

// ============================================================================
// Tests
// ============================================================================
