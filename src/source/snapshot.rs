//! Persisted copy of the last response body.

use std::path::Path;

/// Overwrite `path` with the response body.
pub async fn persist_response(path: &Path, body: &str) -> std::io::Result<()> {
    tokio::fs::write(path, body).await?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "Persisted last response");
    Ok(())
}
