//! Core error types shared across maven-bom crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BomError {
    #[error("Invalid Maven coordinates '{coordinate}': expected 'groupId:artifactId:version'")]
    InvalidCoordinate { coordinate: String },

    #[error("Failed to parse {file_type}: {source}")]
    ParseError {
        file_type: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("BOM resolution failed: {0}")]
    Resolution(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BomError>;
