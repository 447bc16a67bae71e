//! Domain types for managed dependencies.

use bom_core::Coordinate;
use std::fmt;

/// One `<dependencyManagement>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagedDependency {
    pub group_id: String,
    pub artifact_id: String,
    /// Literal version or a `${name}` placeholder; `None` when the POM omits it.
    pub version: Option<String>,
    pub r#type: Option<String>,
    pub scope: Option<MavenScope>,
    pub classifier: Option<String>,
    pub exclusions: Vec<Exclusion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MavenScope {
    #[default]
    Compile,
    Test,
    Runtime,
    Provided,
    System,
    Import,
    /// Any other declared value, kept verbatim.
    Other(String),
}

impl MavenScope {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Runtime => "runtime",
            Self::Provided => "provided",
            Self::System => "system",
            Self::Import => "import",
            Self::Other(scope) => scope,
        }
    }
}

impl std::str::FromStr for MavenScope {
    type Err = std::convert::Infallible;

    /// Scope names are case-sensitive, as in Maven: `IMPORT` is not `import`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "compile" => Self::Compile,
            "test" => Self::Test,
            "runtime" => Self::Runtime,
            "provided" => Self::Provided,
            "system" => Self::System,
            "import" => Self::Import,
            other => Self::Other(other.to_string()),
        })
    }
}

impl fmt::Display for MavenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ManagedDependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: MavenScope) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    #[must_use]
    pub fn with_exclusion(
        mut self,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Self {
        self.exclusions.push(Exclusion {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        });
        self
    }

    pub fn is_import(&self) -> bool {
        self.scope == Some(MavenScope::Import)
    }

    /// Table key: `groupId:artifactId`, or `groupId:artifactId:classifier`.
    pub fn key(&self) -> String {
        match self.classifier.as_deref() {
            Some(classifier) if !classifier.is_empty() => {
                format!("{}:{}:{}", self.group_id, self.artifact_id, classifier)
            }
            _ => format!("{}:{}", self.group_id, self.artifact_id),
        }
    }

    /// Coordinate of the BOM an `import` entry points to.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            &self.group_id,
            &self.artifact_id,
            self.version.as_deref().unwrap_or_default(),
        )
    }
}

/// `groupId:artifactId:version:type[:scope][:classifier]`, with `jar` as the
/// default type.
impl fmt::Display for ManagedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version.as_deref().unwrap_or_default(),
            self.r#type.as_deref().unwrap_or("jar")
        )?;
        if let Some(scope) = &self.scope {
            write!(f, ":{scope}")?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_variants() {
        assert_eq!("test".parse::<MavenScope>().unwrap(), MavenScope::Test);
        assert_eq!("runtime".parse::<MavenScope>().unwrap(), MavenScope::Runtime);
        assert_eq!("provided".parse::<MavenScope>().unwrap(), MavenScope::Provided);
        assert_eq!("system".parse::<MavenScope>().unwrap(), MavenScope::System);
        assert_eq!("import".parse::<MavenScope>().unwrap(), MavenScope::Import);
        assert_eq!("compile".parse::<MavenScope>().unwrap(), MavenScope::Compile);
    }

    #[test]
    fn test_scope_is_case_sensitive() {
        assert_eq!(
            "IMPORT".parse::<MavenScope>().unwrap(),
            MavenScope::Other("IMPORT".into())
        );
        assert_eq!(
            "Import".parse::<MavenScope>().unwrap(),
            MavenScope::Other("Import".into())
        );
        let dep = ManagedDependency::new("g", "bom").with_scope("IMPORT".parse().unwrap());
        assert!(!dep.is_import());
    }

    #[test]
    fn test_unknown_scope_kept_verbatim() {
        let scope: MavenScope = "optional-ish".parse().unwrap();
        assert_eq!(scope, MavenScope::Other("optional-ish".into()));
        assert_eq!(scope.as_str(), "optional-ish");

        let dep = ManagedDependency::new("g", "a")
            .with_version("1.0")
            .with_scope(scope);
        assert_eq!(dep.to_string(), "g:a:1.0:jar:optional-ish");
    }

    #[test]
    fn test_key_without_classifier() {
        let dep = ManagedDependency::new("org.slf4j", "slf4j-api").with_version("2.0.9");
        assert_eq!(dep.key(), "org.slf4j:slf4j-api");
    }

    #[test]
    fn test_key_with_classifier() {
        let dep = ManagedDependency::new("io.netty", "netty-transport-native-epoll")
            .with_classifier("linux-x86_64");
        assert_eq!(dep.key(), "io.netty:netty-transport-native-epoll:linux-x86_64");
    }

    #[test]
    fn test_empty_classifier_is_ignored_in_key() {
        let dep = ManagedDependency::new("g", "a").with_classifier("");
        assert_eq!(dep.key(), "g:a");
    }

    #[test]
    fn test_is_import() {
        let bom = ManagedDependency::new("g", "bom").with_scope(MavenScope::Import);
        assert!(bom.is_import());
        assert!(!ManagedDependency::new("g", "lib").is_import());
        assert!(
            !ManagedDependency::new("g", "lib")
                .with_scope(MavenScope::Test)
                .is_import()
        );
    }

    #[test]
    fn test_display_defaults_type_to_jar() {
        let dep = ManagedDependency::new("junit", "junit").with_version("4.13.2");
        assert_eq!(dep.to_string(), "junit:junit:4.13.2:jar");
    }

    #[test]
    fn test_display_with_scope_and_classifier() {
        let mut dep = ManagedDependency::new("g", "a")
            .with_version("1.0")
            .with_scope(MavenScope::Test)
            .with_classifier("tests");
        dep.r#type = Some("test-jar".into());
        assert_eq!(dep.to_string(), "g:a:1.0:test-jar:test:tests");
    }

    #[test]
    fn test_import_coordinate() {
        let dep = ManagedDependency::new("org.example", "other-bom")
            .with_version("2.0")
            .with_scope(MavenScope::Import);
        assert_eq!(dep.coordinate().to_string(), "org.example:other-bom:2.0");
    }
}
