//! Configuration schema definitions.

use std::path::PathBuf;

/// File the last successful response body is written to, relative to the
/// working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "last-response.xml";

/// Root configuration for the feed server.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON array of listings, re-read on every request.
    pub input_path: PathBuf,

    /// Host name or address to bind.
    pub host: String,

    /// Port to bind. `0` asks the OS for a free port.
    pub port: u16,

    /// Where the last response body is persisted.
    pub output_path: PathBuf,
}

impl ServerConfig {
    /// Create a config with the default output path.
    pub fn new(input_path: impl Into<PathBuf>, host: impl Into<String>, port: u16) -> Self {
        Self {
            input_path: input_path.into(),
            host: host.into(),
            port,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }

    /// Override the output path.
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// `host:port` form accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
