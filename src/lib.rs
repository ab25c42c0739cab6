//! `case-incidence` library crate.
//!
//! The binary (`incidence`) is a thin wrapper around this library so that:
//!
//! - the rolling-window transform is testable without spawning processes
//! - the registry and transform are reusable by other front-ends
//! - code stays easy to navigate

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod registry;
pub mod report;
pub mod transform;
