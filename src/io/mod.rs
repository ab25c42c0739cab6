//! Input/output helpers.
//!
//! - CSV feed ingest + validation (`ingest`)
//! - derived-row exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
