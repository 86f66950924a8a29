//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line flags
//!     → loader.rs (clap parse, path resolution)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc with the request handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - Validation separates syntactic (clap) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::Cli;
pub use schema::ServerConfig;
pub use validation::{validate_config, ValidationError};
