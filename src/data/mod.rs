//! External data sources.

pub mod feed;

pub use feed::{FEED_ENV_VAR, load_region_series, resolve_source};
