//! Feed module: typed model, URL construction, and the one-shot fetcher.
//!
//! The module is organized into three submodules:
//!
//! - [`model`] - Decode targets mirroring the feed's JSON shape
//! - [`source`] - Region/limit validation and URL construction
//! - [`fetcher`] - The single GET, bounded body read, and decode

pub mod model;
pub mod source;

mod fetcher;

pub use fetcher::{fetch_feed, load_in_background, FetchError};
pub use model::{AppEntry, FeedEnvelope};
pub use source::{FeedSource, SourceError, DEFAULT_LIMIT, DEFAULT_REGION};
