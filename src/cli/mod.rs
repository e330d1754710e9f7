//! CLI layer: command flow, usage rendering and terminal output

pub mod commands;
pub mod error;
pub mod output;
pub mod usage;

pub use error::{CliError, CliResult};
