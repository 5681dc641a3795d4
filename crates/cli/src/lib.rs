//! `stockroom-cli`
//!
//! Command-line front end over the reorder & reconciliation engine. Reads store
//! exports from disk, runs the engine, and renders the results; the engine
//! itself stays free of IO.

pub mod commands;
pub mod snapshot;

pub use commands::{run, Cli, Command};
