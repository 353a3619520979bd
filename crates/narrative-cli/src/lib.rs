//! # Narrative-CLI
//!
//! Thin shell around the lead pipeline: configuration, logging and file I/O.
//!
//! ## Commands
//!
//! - `generate`: read a JSON array of lead rows, write the result rows
//! - `profiles`: print the Company DNA profiles and the priority guide

pub mod config;
pub mod io;
pub mod telemetry;

pub use config::*;
pub use io::*;
pub use telemetry::*;
