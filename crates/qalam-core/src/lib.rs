#![forbid(unsafe_code)]

//! Core configuration for qalam.
//!
//! - [`ShapeOptions`] - the four switches that drive Arabic shaping, with
//!   environment-variable overrides
//! - [`logging`] - subscriber bootstrap for binaries (behind the `tracing` feature)

pub mod logging;
pub mod options;

pub use options::{NumeralStyle, ShapeOptions};
