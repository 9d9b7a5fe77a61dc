//! Application actions for lazyflow.
//!
//! This module handles high-level actions: starting wallet renders,
//! clipboard operations and browser integration.

use arboard::Clipboard;
#[cfg(target_os = "linux")]
use std::io::Write;
#[cfg(target_os = "linux")]
use std::process::{Command, Stdio};

use super::{App, AppMessage, GraphView};
use crate::domain::{FlowError, validate_address};

impl App {
    // ========================================================================
    // Wallet Loading
    // ========================================================================

    /// Validate `input` and start rendering that wallet in the background.
    ///
    /// Invalid input is reported in a message popup and nothing is fetched.
    /// Returns the generation of the started render.
    pub(crate) fn load_wallet(&mut self, input: &str) -> Option<u64> {
        let address = input.trim().to_string();
        if let Err(err) = validate_address(&address) {
            tracing::info!("Rejected search input: {err}");
            self.ui.show_message(err.to_string());
            return None;
        }

        let generation = self.data.begin_load(&address);
        tracing::info!(address = %address, generation, "loading wallet");

        let client = self.client.clone();
        let message_tx = self.message_tx.clone();

        tokio::spawn(async move {
            let fetched = async {
                let transactions = client.get_transactions(&address).await?;
                let balance = client.get_balance(&address).await?;
                Ok::<_, FlowError>((transactions, balance))
            }
            .await;

            let message = match fetched {
                Ok((transactions, balance)) => AppMessage::WalletLoaded {
                    generation,
                    view: Box::new(GraphView::build(&address, &transactions)),
                    balance,
                },
                Err(err) => {
                    tracing::warn!(address = %address, "Wallet load failed: {err}");
                    AppMessage::WalletLoadFailed {
                        generation,
                        address,
                        error: err.to_string(),
                    }
                }
            };
            let _ = message_tx.send(message);
        });

        Some(generation)
    }

    /// Render the current wallet again.
    pub(crate) fn reload_wallet(&mut self) {
        match self.current_address().map(str::to_string) {
            Some(address) => {
                self.load_wallet(&address);
            }
            None => self.ui.show_toast("[x] No wallet to reload"),
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copy the selected node or edge id, or the searched address.
    pub(crate) fn copy_selection(&mut self) {
        let Some(view) = &self.data.view else {
            self.ui.show_toast("[x] Nothing to copy");
            return;
        };
        let text = view.selected_id().to_string();
        let description = view.selected_description();
        self.copy_text_to_clipboard(&text, description);
    }

    /// Copy text to clipboard with platform-specific handling.
    pub(crate) fn copy_text_to_clipboard(&mut self, text: &str, description: &str) {
        #[cfg(target_os = "linux")]
        {
            if try_copy_with_external_tool(text) {
                self.ui.show_toast(format!("[+] {description} copied!"));
                return;
            }
        }

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text).is_ok() {
                    self.ui.show_toast(format!("[+] {description} copied!"));
                } else {
                    self.ui.show_toast("[x] Failed to copy");
                }
            }
            Err(_) => {
                self.ui.show_toast("[x] Clipboard not available");
            }
        }
    }

    // ========================================================================
    // Browser
    // ========================================================================

    /// Open the selected address or transaction in the block explorer.
    pub(crate) fn open_in_browser(&mut self) {
        let url = self.data.view.as_ref().and_then(GraphView::explorer_url);

        match url {
            Some(url) => match open::that(&url) {
                Ok(()) => {
                    self.ui.show_toast("[+] Opened in browser");
                }
                Err(e) => {
                    self.ui.show_toast(format!("[x] Failed to open browser: {e}"));
                }
            },
            None => {
                self.ui.show_toast("[x] Explorer link unavailable");
            }
        }
    }
}

/// Try to copy text using external clipboard tools (Linux only).
///
/// Content copied this way survives the app exiting.
#[cfg(target_os = "linux")]
fn try_copy_with_external_tool(text: &str) -> bool {
    const TOOLS: [(&str, &[&str]); 3] = [
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ];

    TOOLS.iter().any(|(program, args)| {
        let Ok(mut child) = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        else {
            return false;
        };
        let written = child
            .stdin
            .take()
            .is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());
        written && child.wait().is_ok_and(|status| status.success())
    })
}
