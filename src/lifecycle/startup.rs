//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Confirm the input file is reachable
//! - Bind the listener
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The input file is only checked for access, not parsed

use std::path::Path;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, ServerConfig, ValidationError};

/// Errors that stop the process.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The input file does not exist or cannot be opened.
    #[error("Cannot find input file")]
    InputMissing(#[source] std::io::Error),

    /// The configuration failed semantic validation.
    #[error("invalid configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// The listener could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error after startup.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validate the config, collecting every problem.
pub fn check_config(config: &ServerConfig) -> Result<(), StartupError> {
    validate_config(config).map_err(StartupError::InvalidConfig)
}

/// Confirm the input file exists and can be opened for reading.
pub async fn ensure_input_exists(path: &Path) -> Result<(), StartupError> {
    tokio::fs::File::open(path)
        .await
        .map_err(StartupError::InputMissing)?;
    Ok(())
}

/// Bind the configured host and port.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener, StartupError> {
    let address = config.bind_address();
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|source| StartupError::Bind { address, source })
}
