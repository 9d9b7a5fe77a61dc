//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Exchange-rate polling
//! - Startup search

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::client::WalletClient;
use crate::constants::TICK_RATE;
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, DataState, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App instance, loading configuration from disk.
    ///
    /// Startup options override the file values for this session only.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(startup_options: StartupOptions) -> Result<Self> {
        let config_path = match AppConfig::config_path() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!("Config will not be loaded or saved: {err}");
                None
            }
        };
        let config = config_path
            .as_deref()
            .map(AppConfig::load_or_default)
            .unwrap_or_default();
        Self::with_config(config, config_path, startup_options)
    }

    /// Creates an App from an already loaded configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(
        config: AppConfig,
        config_path: Option<std::path::PathBuf>,
        startup_options: StartupOptions,
    ) -> Result<Self> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let server_url = startup_options
            .server_url
            .clone()
            .unwrap_or_else(|| config.server_url.clone());
        let rate_poll_interval = startup_options.rate_poll_secs.map_or_else(
            || config.rate_poll_interval(),
            |secs| Duration::from_secs(secs.max(1)),
        );

        let client = WalletClient::new(&server_url).map_err(|e| e.into_report())?;
        tracing::info!(
            server = client.base_url(),
            poll_secs = rate_poll_interval.as_secs(),
            "starting lazyflow"
        );

        Ok(Self {
            data: DataState::new(),
            ui: UiState::new(),
            config,
            config_path,
            rate_poll_interval,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            client,
            startup_options: Some(startup_options),
        })
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let size = terminal.size()?;
        self.ui.terminal_area = Rect::new(0, 0, size.width, size.height);

        self.start_rate_polling();
        self.process_startup_search();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.ui.terminal_area = Rect::new(0, 0, width, height);
                        let frame = terminal.draw(|frame| ui::render(self, frame))?;
                        self.ui.terminal_area = frame.area;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                let frame = terminal.draw(|frame| ui::render(self, frame))?;
                self.ui.terminal_area = frame.area;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Exchange Rate Polling
    // ========================================================================

    pub(super) fn start_rate_polling(&self) {
        let client = self.client.clone();
        let message_tx = self.message_tx.clone();
        let period = self.rate_poll_interval;

        tokio::spawn(async move {
            Self::rate_polling_task(client, message_tx, period).await;
        });
    }

    /// Fetch the exchange rate now and then once per `period`.
    ///
    /// Every tick spawns its own fetch, so a slow backend can have several
    /// requests in flight; whichever finishes last wins. The loop ends once
    /// the app drops its receiver.
    pub(crate) async fn rate_polling_task(
        client: WalletClient,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        period: Duration,
    ) {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if message_tx.is_closed() {
                break;
            }

            let client = client.clone();
            let message_tx = message_tx.clone();
            tokio::spawn(async move {
                let result = client.get_btc_rate().await.map_err(|err| {
                    tracing::warn!("Exchange rate fetch failed: {err}");
                    err.to_string()
                });
                let _ = message_tx.send(AppMessage::ExchangeRateUpdated(result));
            });
        }
    }

    // ========================================================================
    // Startup Search
    // ========================================================================

    /// Search the startup address, or open the search popup pre-filled with
    /// the last remembered address.
    pub(super) fn process_startup_search(&mut self) {
        let Some(startup_options) = self.startup_options.take() else {
            return;
        };

        match startup_options.address {
            Some(address) => {
                self.load_wallet(&address);
            }
            None => {
                let initial = self.config.last_address.clone().unwrap_or_default();
                self.ui.open_search(&initial);
            }
        }
    }
}
