//! Terminal plots.

pub mod ascii;

pub use ascii::render_rate_plot;
