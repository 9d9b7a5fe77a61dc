//! Error types for wallet data operations.
//!
//! This module defines the error type used by the wallet backend client and
//! by input validation, providing structured error handling with helpful
//! messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for wallet backend and validation operations.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Transport-level errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code returned by the backend.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl FlowError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    ///
    /// # Arguments
    ///
    /// * `status` - The status code the backend returned
    /// * `url` - The URL that was requested
    #[must_use]
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }

    /// Convert to a `color_eyre::Report` for use with eyre-based plumbing.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
