use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod client;
mod commands;
mod constants;
mod domain;
mod graph;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    client::WalletClient,
    domain::validate_address,
    graph::FlowGraph,
    state::{App, AppConfig, StartupOptions},
};

// lazyflow version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
 _                 __ _
| | __ _ _____   _/ _| | _____      __
| |/ _` |_  / | | | |_| |/ _ \ \ /\ / /
| | (_| |/ /| |_| |  _| | (_) \ V  V /
|_|\__,_/___|\__, |_| |_|\___/ \_/\_/
             |___/
"#;

/// lazyflow - Terminal UI for Bitcoin wallet fund flows
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wallet address to search on startup
    address: Option<String>,

    /// Backend base URL (overrides the config file for this session)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Seconds between exchange-rate fetches
    #[arg(long, value_name = "SECS")]
    rate_interval: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a wallet and print its fund-flow graph as JSON
    Export {
        /// Wallet address
        address: String,

        /// Backend base URL
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Display version with ASCII art
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    };

    match cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("lazyflow v{VERSION}");
            println!("A terminal UI for exploring Bitcoin wallet fund flows");
            Ok(())
        }
        Some(Commands::Export {
            address,
            server,
            pretty,
        }) => {
            let server_url = server.unwrap_or_else(|| AppConfig::load().server_url);
            let client = WalletClient::new(&server_url).map_err(|e| e.into_report())?;
            println!("{}", export_json(&client, &address, pretty).await?);
            Ok(())
        }
        None => {
            run_tui(StartupOptions {
                address: cli.address,
                server_url: cli.server,
                rate_poll_secs: cli.rate_interval,
            })
            .await
        }
    }
}

/// Run the terminal UI until the user quits.
async fn run_tui(options: StartupOptions) -> Result<()> {
    let mut app = App::new(options)?;
    let mut terminal = tui::init()?;

    let result = app.run(&mut terminal).await;

    tui::restore()?;
    if let Err(err) = &result {
        tracing::error!("lazyflow exited with an error: {err}");
    }
    result
}

/// Fetch `address` and render its transformed graph as JSON.
async fn export_json(client: &WalletClient, address: &str, pretty: bool) -> Result<String> {
    let kind = validate_address(address).map_err(|e| e.into_report())?;
    let address = address.trim();
    tracing::info!(address, kind = kind.as_str(), "exporting wallet graph");

    let transactions = client
        .get_transactions(address)
        .await
        .map_err(|e| e.into_report())?;

    let mut graph = FlowGraph::from_transactions(&transactions);
    graph.mark_target(address);

    let export = graph.export();
    let json = if pretty {
        serde_json::to_string_pretty(&export)?
    } else {
        serde_json::to_string(&export)?
    };
    Ok(json)
}
