//! CLI module for partir
//!
//! Contains the clap argument surface, the command handlers, and the
//! leveled stdout reporter.

pub mod args;
mod commands;
mod logging;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use logging::LogLevel;
