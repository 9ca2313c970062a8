//! CLI module
//!
//! - init: write a default configuration file
//! - serve: boot the store and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve};
pub use errors::{CliError, CliResult};
