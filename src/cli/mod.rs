//! CLI support for sift-lang
//!
//! Provides programmatic access to the `sift` binary's functionality for
//! embedding in other tools: a default operator registry, a demo leaf-term
//! parser, and JSON row filtering.

mod check;
mod convert;
mod terms;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{json_to_rows, json_to_value, rows_to_json, value_to_json};
pub use terms::{TermError, TermParser, default_registry};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Expression compile or evaluation error
    Expression(crate::ExpressionError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Input JSON is not an array of rows of scalar cells
    InvalidRows(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Expression(e) => write!(f, "Expression error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Use --input or pipe JSON rows to stdin.")
            }
            CliError::InvalidRows(msg) => write!(f, "Invalid rows: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Expression(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ExpressionError> for CliError {
    fn from(e: crate::ExpressionError) -> Self {
        CliError::Expression(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
