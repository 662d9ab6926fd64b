//! Error types for the players selection manager

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SelectionError>;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Input is not valid UTF-8: {0}")]
    InvalidText(#[from] std::string::FromUtf8Error),

    #[error("Database setting `{key}` not found in config file or environment")]
    MissingSetting { key: String },

    #[error("Unsupported database URL: {url}")]
    InvalidDatabaseUrl { url: String },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("{operation} failed, no rows affected.")]
    NoRowsAffected { operation: String },

    #[error("Adding {entity} failed, no ID obtained.")]
    MissingGeneratedId { entity: String },
}

impl SelectionError {
    pub(crate) fn no_rows(operation: &str) -> Self {
        SelectionError::NoRowsAffected {
            operation: operation.to_string(),
        }
    }
}
