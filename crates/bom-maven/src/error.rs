//! Errors specific to BOM parsing and resolution.

use bom_core::BomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MavenError {
    #[error("Failed to parse {location}: {message}")]
    Parse { location: String, message: String },

    #[error("Circular property reference: {chain}")]
    CircularProperty { chain: String },

    #[error("Circular BOM import: {chain}")]
    CircularImport { chain: String },

    #[error("BOM '{coordinate}' not found in any repository")]
    BomNotFound { coordinate: String },

    #[error(transparent)]
    Core(#[from] BomError),
}

pub type Result<T> = std::result::Result<T, MavenError>;

impl MavenError {
    pub(crate) fn parse(location: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            location: location.into(),
            message: message.to_string(),
        }
    }
}

impl From<MavenError> for BomError {
    fn from(err: MavenError) -> Self {
        match err {
            MavenError::Parse { location, message } => Self::ParseError {
                file_type: location,
                source: Box::new(std::io::Error::other(message)),
            },
            MavenError::CircularProperty { .. }
            | MavenError::CircularImport { .. }
            | MavenError::BomNotFound { .. } => Self::Resolution(err.to_string()),
            MavenError::Core(e) => e,
        }
    }
}
