//! Message processing for the lazyflow application.
//!
//! Applies the results posted by background tasks. Wallet results carry the
//! generation they were started with and are dropped once a newer search has
//! begun.

use super::{App, AppMessage};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ExchangeRateUpdated(result) => {
                self.data.apply_rate(result);
            }
            AppMessage::WalletLoaded {
                generation,
                view,
                balance,
            } => {
                if !self.data.is_current(generation) {
                    tracing::debug!(generation, "dropping stale wallet render");
                    return;
                }
                let address = view.address.clone();
                let records = view.graph.records().len();
                self.data.finish_load(*view, balance);
                self.ui
                    .show_toast(format!("[+] Loaded {records} transfers"));
                self.remember_address(&address);
            }
            AppMessage::WalletLoadFailed {
                generation,
                address,
                error,
            } => {
                if !self.data.is_current(generation) {
                    tracing::debug!(generation, "dropping stale wallet failure");
                    return;
                }
                self.data.fail_load();
                self.ui
                    .show_message(format!("Failed to load wallet {address}: {error}"));
            }
        }
    }

    /// Store the last successfully searched address in the config file.
    fn remember_address(&mut self, address: &str) {
        if self.config.last_address.as_deref() == Some(address) {
            return;
        }
        self.config.last_address = Some(address.to_string());

        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(err) = self.config.save_to(path) {
            tracing::warn!("Failed to save config: {err}");
        }
    }
}
