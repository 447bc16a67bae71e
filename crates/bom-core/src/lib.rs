//! Core abstractions for maven-bom.
//!
//! This crate holds the pieces shared by the BOM resolver and the command-line
//! front end: Maven coordinates, the repository provider seam used to locate
//! POM files, and the common error type.

pub mod coordinate;
pub mod error;
pub mod repository;

pub use coordinate::Coordinate;
pub use error::{BomError, Result};
pub use repository::{FileSystemRepository, PomFile, RepositoryProvider, pom_relative_path};
