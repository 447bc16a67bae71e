//! Repository providers that locate POM files for a coordinate.
//!
//! A repository is an ordered list of roots laid out like a local Maven
//! repository: `<group path>/<artifactId>/<version>/<artifactId>-<version>.pom`.
//! Roots are searched in priority order and the first one containing the file
//! wins; contents are never merged across roots.

use crate::coordinate::Coordinate;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A POM document read from a repository.
#[derive(Debug, Clone)]
pub struct PomFile {
    /// Where the document was found, used in log and error messages.
    pub location: PathBuf,
    pub content: Vec<u8>,
}

/// Source of POM documents.
///
/// Returns `Ok(None)` when no repository holds the coordinate. Failing to read
/// a document that does exist is an error.
pub trait RepositoryProvider {
    fn fetch_pom(&self, coordinate: &Coordinate) -> Result<Option<PomFile>>;
}

impl<T: RepositoryProvider + ?Sized> RepositoryProvider for &T {
    fn fetch_pom(&self, coordinate: &Coordinate) -> Result<Option<PomFile>> {
        (**self).fetch_pom(coordinate)
    }
}

/// Conventional repository-relative path of a coordinate's POM.
pub fn pom_relative_path(coordinate: &Coordinate) -> PathBuf {
    coordinate
        .group_path()
        .join(&coordinate.artifact_id)
        .join(&coordinate.version)
        .join(coordinate.pom_file_name())
}

/// Repository backed by directories on the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileSystemRepository {
    roots: Vec<PathBuf>,
}

impl FileSystemRepository {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Builds the root list by joining each segment onto `cache_dir`.
    ///
    /// Absolute segments replace the cache directory, as with [`Path::join`].
    pub fn from_cache<I, S>(cache_dir: &Path, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        Self::new(
            segments
                .into_iter()
                .map(|segment| cache_dir.join(segment))
                .collect(),
        )
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First existing POM path for the coordinate, in root priority order.
    pub fn locate(&self, coordinate: &Coordinate) -> Option<PathBuf> {
        let relative = pom_relative_path(coordinate);
        self.roots
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_file())
    }
}

impl RepositoryProvider for FileSystemRepository {
    fn fetch_pom(&self, coordinate: &Coordinate) -> Result<Option<PomFile>> {
        let Some(location) = self.locate(coordinate) else {
            tracing::debug!(
                "POM for {} not found in {} repositories",
                coordinate,
                self.roots.len()
            );
            return Ok(None);
        };

        tracing::debug!("Reading POM for {}: {}", coordinate, location.display());
        let content = std::fs::read(&location)?;
        Ok(Some(PomFile { location, content }))
    }
}
