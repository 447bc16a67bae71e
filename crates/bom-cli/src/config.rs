//! Command-line arguments and the resolver configuration built from them.

use bom_core::{BomError, Coordinate, FileSystemRepository};
use bom_maven::ResolverOptions;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "maven-bom")]
#[command(about = "Flatten a Maven BOM into its managed dependency versions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// BOM coordinate as groupId:artifactId:version
    pub coordinate: String,

    /// File the JSON table is written to
    pub output: PathBuf,

    /// Base cache directory that repository paths are joined onto
    pub cache_dir: PathBuf,

    /// Repository paths under the cache directory, highest priority first
    #[arg(required = true, num_args = 1..)]
    pub repositories: Vec<PathBuf>,

    /// Fail when the requested BOM is not found in any repository
    #[arg(long)]
    pub strict: bool,
}

/// Validated settings for one resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub coordinate: Coordinate,
    pub output: PathBuf,
    /// Repository roots in priority order, already joined onto the cache directory.
    pub repositories: Vec<PathBuf>,
    pub require_root: bool,
}

impl ResolverConfig {
    pub fn repository(&self) -> FileSystemRepository {
        FileSystemRepository::new(self.repositories.clone())
    }

    pub const fn options(&self) -> ResolverOptions {
        ResolverOptions {
            require_root: self.require_root,
        }
    }
}

impl TryFrom<Cli> for ResolverConfig {
    type Error = BomError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let coordinate = cli.coordinate.parse()?;
        let repositories = FileSystemRepository::from_cache(&cli.cache_dir, &cli.repositories)
            .roots()
            .to_vec();

        Ok(Self {
            coordinate,
            output: cli.output,
            repositories,
            require_root: cli.strict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("maven-bom").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["g:bom:1.0", "out.json", "/cache", "central", "local"]).unwrap();
        assert_eq!(cli.coordinate, "g:bom:1.0");
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.cache_dir, PathBuf::from("/cache"));
        assert_eq!(
            cli.repositories,
            vec![PathBuf::from("central"), PathBuf::from("local")]
        );
        assert!(!cli.strict);
    }

    #[test]
    fn test_strict_flag() {
        let cli = parse(&["--strict", "g:bom:1.0", "out.json", "/cache", "central"]).unwrap();
        assert!(cli.strict);
    }

    #[test]
    fn test_missing_repository_is_usage_error() {
        let err = parse(&["g:bom:1.0", "out.json", "/cache"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_config_joins_repositories_onto_cache() {
        let cli = parse(&["g:bom:1.0", "out.json", "/cache", "central", "/abs/repo"]).unwrap();
        let config = ResolverConfig::try_from(cli).unwrap();

        assert_eq!(config.coordinate, Coordinate::new("g", "bom", "1.0"));
        assert_eq!(
            config.repositories,
            vec![PathBuf::from("/cache/central"), PathBuf::from("/abs/repo")]
        );
        assert!(!config.options().require_root);
        assert_eq!(config.repository().roots(), config.repositories.as_slice());
    }

    #[test]
    fn test_config_rejects_bad_coordinate() {
        let cli = parse(&["g:bom", "out.json", "/cache", "central"]).unwrap();
        let err = ResolverConfig::try_from(cli).unwrap_err();
        assert!(matches!(err, BomError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_config_strict_requires_root() {
        let cli = parse(&["g:bom:1.0", "out.json", "/cache", "central", "--strict"]).unwrap();
        let config = ResolverConfig::try_from(cli).unwrap();
        assert!(config.options().require_root);
    }
}
