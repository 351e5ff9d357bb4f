//! CLI support for dbquery
//!
//! Provides programmatic access to the CLI commands so they can be embedded
//! in other tools.

mod check;
mod docs;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Translation error
    #[error("Query error: {0}")]
    Query(#[from] crate::QueryError),

    /// Rejected translation settings
    #[error("Options error: {0}")]
    Options(#[from] crate::OptionsError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No expression provided
    #[error("No expression provided. Pass it as an argument or pipe it to stdin.")]
    NoInput,

    /// Filter references a column the caller did not list
    #[error("Column not found: '{0}'")]
    ColumnNotFound(String),

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'dbquery docs' to see available categories.")]
    UnknownCategory(String),
}
