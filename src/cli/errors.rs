//! CLI-specific error types

use std::io;

use thiserror::Error;

use crate::schema::{DefinitionError, ValidationError};

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// stdin/stdout or input file failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema definition could not be loaded
    #[error("{0}")]
    Definition(#[from] DefinitionError),

    /// Input does not conform to the schema
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "INVALID_JSON",
            CliError::Definition(_) => "INVALID_SCHEMA",
            CliError::Validation(_) => "VALIDATION_FAILED",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
