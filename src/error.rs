// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarvestError>;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Retrieval failed for version {version}: {message}")]
    Retrieval { version: String, message: String },

    #[error("Archive unreadable at {path}: {message}")]
    ArchiveRead { path: PathBuf, message: String },

    #[error("Document parse failure in {document}: {message}")]
    DocumentParse { document: String, message: String },

    #[error("Output write failed: {0}")]
    OutputWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
