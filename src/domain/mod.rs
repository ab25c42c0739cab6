//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input series rows (`DailyRecord`) and transform outputs (`DerivedRecord`)
//! - regions and where their population came from
//! - run configuration (`RunConfig`, `SourceSpec`, `FeedColumns`)

pub mod types;

pub use types::*;
