//! Maven `groupId:artifactId:version` coordinates.

use crate::error::{BomError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Group as nested directories: `org.apache.commons` -> `org/apache/commons`.
    pub fn group_path(&self) -> PathBuf {
        self.group_id.split('.').collect()
    }

    /// File name of the POM for this coordinate: `artifactId-version.pom`.
    pub fn pom_file_name(&self) -> String {
        format!("{}-{}.pom", self.artifact_id, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = BomError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [group_id, artifact_id, version]
                if !group_id.is_empty() && !artifact_id.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group_id, *artifact_id, *version))
            }
            _ => Err(BomError::InvalidCoordinate {
                coordinate: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_coordinate() {
        let coord: Coordinate = "org.springframework.boot:spring-boot-dependencies:3.2.0"
            .parse()
            .unwrap();
        assert_eq!(coord.group_id, "org.springframework.boot");
        assert_eq!(coord.artifact_id, "spring-boot-dependencies");
        assert_eq!(coord.version, "3.2.0");
    }

    #[test]
    fn test_parse_rejects_wrong_part_count() {
        assert!("org.example:bom".parse::<Coordinate>().is_err());
        assert!("org.example:bom:1.0:tests".parse::<Coordinate>().is_err());
        assert!("".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_parse_rejects_empty_parts() {
        let err = "org.example::1.0".parse::<Coordinate>().unwrap_err();
        assert!(matches!(err, BomError::InvalidCoordinate { .. }));
        assert!(err.to_string().contains("org.example::1.0"));
    }

    #[test]
    fn test_display_round_trip() {
        let coord = Coordinate::new("io.netty", "netty-bom", "4.1.100.Final");
        assert_eq!(coord.to_string(), "io.netty:netty-bom:4.1.100.Final");
    }

    #[test]
    fn test_group_path() {
        let coord = Coordinate::new("org.apache.commons", "commons-lang3", "3.14.0");
        assert_eq!(coord.group_path(), Path::new("org/apache/commons"));

        let single = Coordinate::new("junit", "junit", "4.13.2");
        assert_eq!(single.group_path(), Path::new("junit"));
    }

    #[test]
    fn test_pom_file_name() {
        let coord = Coordinate::new("io.netty", "netty-bom", "4.1.100.Final");
        assert_eq!(coord.pom_file_name(), "netty-bom-4.1.100.Final.pom");
    }
}
