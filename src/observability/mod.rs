//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and startup code emit tracing events
//!     → logging.rs (subscriber, level filter)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (request_id, path, error)
//! - Request ID flows from the middleware into handler logs

pub mod logging;
