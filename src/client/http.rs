//! HTTP client construction for the wallet backend.

use reqwest::Client;
use std::time::Duration;

use crate::domain::FlowError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept per host
pub const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// How long an idle pooled connection is kept, in seconds
pub const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: POOL_MAX_IDLE_PER_HOST,
        }
    }
}

impl HttpConfig {
    /// Build a pooled reqwest client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::ClientInit` if the TLS backend or resolver cannot
    /// be initialized.
    pub fn build_client(&self) -> Result<Client, FlowError> {
        Client::builder()
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(self.timeout)
            .user_agent(concat!("lazyflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FlowError::client_init(e.to_string()))
    }
}
