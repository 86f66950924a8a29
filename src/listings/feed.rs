//! The feed pipeline: load, filter, render, persist.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ServerConfig;
use crate::listings::{filter_houses, to_xml, Query};
use crate::source::{load_records, persist_response};

/// Errors that can occur while producing a feed response.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The source document could not be read.
    #[error("failed to read source {path}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered body could not be persisted.
    #[error("failed to persist response to {path}: {source}")]
    PersistResponse {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Produce the XML body for one request.
///
/// The persisted copy is written before this returns.
pub async fn render_feed(config: &ServerConfig, query: &Query) -> Result<String, FeedError> {
    let records = load_records(&config.input_path)
        .await
        .map_err(|source| FeedError::ReadSource {
            path: config.input_path.clone(),
            source,
        })?;

    let houses = filter_houses(&records, query);
    tracing::debug!(
        loaded = records.len(),
        matched = houses.len(),
        furnished_only = query.furnished_only(),
        max_price = ?query.max_price(),
        "Filtered listings"
    );

    let xml = to_xml(&houses);

    persist_response(&config.output_path, &xml)
        .await
        .map_err(|source| FeedError::PersistResponse {
            path: config.output_path.clone(),
            source,
        })?;

    Ok(xml)
}
