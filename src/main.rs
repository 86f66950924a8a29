//! House listings XML feed.
//!
//! Serves a JSON array of listings as XML, filtered per request by
//! `furnished=true` and `max_price=<number>`.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ listings::query ──▶ source::loader (fresh read)
//!                                                              │
//!                                                              ▼
//!     Client Response                                   listings::filter
//!     ◀────────────── http::response ◀── source::snapshot ◀── listings::xml
//! ```

use std::process::ExitCode;

use clap::Parser;

use house_feed::config::Cli;
use house_feed::http::HttpServer;
use house_feed::lifecycle::{self, signals, Shutdown, StartupError};
use house_feed::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init();

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(StartupError::InputMissing(e)) => {
            tracing::debug!(error = %e, "Input file check failed");
            eprintln!("Cannot find input file");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), StartupError> {
    tracing::info!("house-feed v{} starting", env!("CARGO_PKG_VERSION"));

    // An unresolvable working directory leaves the input unreachable.
    let config = cli.into_config().map_err(StartupError::InputMissing)?;
    // The input check runs first so a missing file always reports as such.
    lifecycle::ensure_input_exists(&config.input_path).await?;
    lifecycle::check_config(&config)?;

    let listener = lifecycle::bind_listener(&config).await?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| StartupError::Bind {
            address: config.bind_address(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let stopped = shutdown.wait();
    tokio::spawn(signals::forward_signals(shutdown));

    println!("Server listening at http://{}:{}", config.host, local_addr.port());
    println!("Query params: ?furnished=true&max_price=10000000");

    let server = HttpServer::new(config);
    server
        .run(listener, stopped)
        .await
        .map_err(StartupError::Serve)?;

    Ok(())
}
