//! House listings XML feed library.
//!
//! Serves a JSON file of real-estate listings as an XML document, filtered by
//! the `furnished` and `max_price` query parameters.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod listings;
pub mod observability;
pub mod source;

pub use config::ServerConfig;
pub use http::HttpServer;
