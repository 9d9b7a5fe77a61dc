//! Wallet backend client.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::http::HttpConfig;
use crate::domain::{FlowError, Transaction, WalletBalance};

// ============================================================================
// Wallet Client
// ============================================================================

/// Typed client for the wallet backend endpoints.
#[derive(Debug, Clone)]
pub struct WalletClient {
    /// Backend base URL without trailing slash.
    base_url: String,
    /// HTTP client for requests.
    client: Client,
}

impl WalletClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(base_url: &str) -> Result<Self, FlowError> {
        Self::with_config(base_url, &HttpConfig::default())
    }

    /// Creates a client with a custom HTTP configuration.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::ClientInit` if the HTTP client fails to initialize.
    pub fn with_config(base_url: &str, config: &HttpConfig) -> Result<Self, FlowError> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: config.build_client()?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the `[btc, usd]` balance of `address`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a two-number array.
    pub async fn get_balance(&self, address: &str) -> Result<WalletBalance, FlowError> {
        let url = format!("{}/wallet/balance/{address}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch the transaction history of `address`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a list of transactions.
    pub async fn get_transactions(&self, address: &str) -> Result<Vec<Transaction>, FlowError> {
        let url = format!("{}/wallet/transactions/{address}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch the current BTC/USD exchange rate.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a body
    /// that is not a number.
    pub async fn get_btc_rate(&self) -> Result<f64, FlowError> {
        let url = format!("{}/btc_rate", self.base_url);
        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FlowError> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::http(status.as_u16(), url));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FlowError::parse(format!("unexpected response from {url}: {e}")))
    }
}
