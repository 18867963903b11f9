//! Error types for Tapestry documentation tooling

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate documentation entry: {0}")]
    DuplicateEntry(String),

    #[error("No documentation entry for component: {0}")]
    NotFound(String),

    #[error("Schema violation in entry '{entry}': missing {field}")]
    SchemaViolation { entry: String, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
