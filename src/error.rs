use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("source file unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema mismatch in {}: missing required column '{column}'", path.display())]
    SchemaMismatch { path: PathBuf, column: String },

    #[error("invalid value in {} line {line}, column '{column}': '{value}' is not numeric", path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<rusqlite::Error> for EtlError {
    fn from(e: rusqlite::Error) -> Self {
        EtlError::StorageUnavailable {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
