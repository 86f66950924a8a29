//! Listings subsystem: the per-request feed pipeline.
//!
//! # Data Flow
//! ```text
//! raw query string
//!     → query.rs (normalize into Query)
//! source records (source::loader)
//!     → filter.rs (furnished + price predicates, projection)
//!     → xml.rs (houses/house document)
//!     → feed.rs (persist copy, hand body to the HTTP layer)
//! ```

pub mod feed;
pub mod filter;
pub mod query;
pub mod record;
pub mod xml;

pub use feed::{render_feed, FeedError};
pub use filter::filter_houses;
pub use query::{Query, QueryValue};
pub use record::{ProjectedRecord, Record};
pub use xml::to_xml;
