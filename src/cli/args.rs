//! CLI argument definitions using clap
//!
//! Commands:
//! - load-validator check --schema <path> [--input <path>]
//! - load-validator demo

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// load-validator - validate JSON values against declarative schemas
#[derive(Parser, Debug)]
#[command(name = "load-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log line format on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON document against a schema definition
    Check {
        /// Path to the schema definition file
        #[arg(long)]
        schema: PathBuf,

        /// Path to the JSON document (stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Validate the built-in sample user
    Demo,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "load-validator",
            "check",
            "--schema",
            "user.json",
            "--input",
            "doc.json",
        ])
        .unwrap();

        assert_eq!(cli.log_format, LogFormat::Text);
        match cli.command {
            Command::Check { schema, input } => {
                assert_eq!(schema, PathBuf::from("user.json"));
                assert_eq!(input, Some(PathBuf::from("doc.json")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["load-validator", "check", "--schema", "s.json"]).unwrap();
        assert!(matches!(cli.command, Command::Check { input: None, .. }));
    }

    #[test]
    fn test_global_log_format() {
        let cli = Cli::try_parse_from(["load-validator", "demo", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Command::Demo));
    }

    #[test]
    fn test_schema_is_required() {
        assert!(Cli::try_parse_from(["load-validator", "check"]).is_err());
    }
}
