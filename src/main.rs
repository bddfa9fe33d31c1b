//! load-validator CLI entry point
//!
//! Parses arguments, runs the command and exits non-zero on failure.
//! All logic is delegated to the CLI module.

use load_validator::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
