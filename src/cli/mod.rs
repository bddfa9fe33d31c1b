//! CLI module for load-validator
//!
//! Provides command-line interface for:
//! - check: validate a JSON document against a schema definition file
//! - demo: validate the built-in sample user

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, demo, run, run_command, user_schema, User};
pub use errors::{CliError, CliResult};
pub use io::{read_input, write_response, write_validation_error};
