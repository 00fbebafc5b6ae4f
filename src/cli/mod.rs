//! CLI module for Bookshelf
//!
//! Provides command-line interface for:
//! - serve: Seed the store from a fixture and serve the HTTP API
//! - check-fixture: Decode a fixture file and report its size

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_fixture, resolve_config, run, run_command, serve, ServeOverrides};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_response;
