//! Filesystem side of the feed: the source document and the last-response copy.
//!
//! # Design Decisions
//! - The source is re-read on every request; nothing is cached
//! - A source that is not a JSON array degrades to an empty listing set
//! - The last-response file is overwritten without locking (last writer wins)

pub mod loader;
pub mod snapshot;

pub use loader::{load_records, parse_records};
pub use snapshot::persist_response;
