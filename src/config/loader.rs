//! Configuration loading from the command line.

use std::path::PathBuf;

use clap::Parser;

use crate::config::schema::{ServerConfig, DEFAULT_OUTPUT_PATH};

/// Command line flags.
///
/// `-h` is taken by `--host`, so help is only reachable as `--help`.
#[derive(Debug, Parser)]
#[command(name = "house-feed")]
#[command(about = "Serve a JSON file of house listings as filtered XML", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to input JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Server host
    #[arg(short = 'h', long)]
    pub host: String,

    /// Server port
    #[arg(short, long)]
    pub port: u16,

    /// Where to write the last response body
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Turn parsed flags into a config, resolving the input path against the
    /// working directory.
    pub fn into_config(self) -> std::io::Result<ServerConfig> {
        let input_path = std::path::absolute(&self.input)?;
        Ok(ServerConfig::new(input_path, self.host, self.port).with_output_path(self.output))
    }
}
