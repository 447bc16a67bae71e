//! Streaming pom.xml parser for BOM documents.
//!
//! Uses the quick-xml event reader; no DOM is built. A stack of
//! [`ParseContext`] frames records where the reader is in the document, so
//! only `project/properties/*` and
//! `project/dependencyManagement/dependencies/dependency` contribute to the
//! result. Everything else (plain `<dependencies>`, plugins, profiles) is
//! skipped.
//!
//! Element text may arrive as several events (text, CDATA sections, entity
//! and character references). Fragments are concatenated in order and the
//! value is trimmed once, when its element closes.

use crate::error::{MavenError, Result};
use crate::properties::PropertyTable;
use crate::types::{Exclusion, ManagedDependency, MavenScope};
use bom_core::{Coordinate, PomFile};
use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event};

/// Properties and managed dependencies extracted from one POM.
#[derive(Debug, Clone, Default)]
pub struct PomDocument {
    pub properties: PropertyTable,
    pub dependencies: Vec<ManagedDependency>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DependencyField {
    GroupId,
    ArtifactId,
    Version,
    Type,
    Scope,
    Classifier,
}

impl DependencyField {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "groupId" => Some(Self::GroupId),
            "artifactId" => Some(Self::ArtifactId),
            "version" => Some(Self::Version),
            "type" => Some(Self::Type),
            "scope" => Some(Self::Scope),
            "classifier" => Some(Self::Classifier),
            _ => None,
        }
    }

    fn assign(self, dep: &mut ManagedDependency, value: &str) {
        match self {
            Self::GroupId => dep.group_id = value.to_string(),
            Self::ArtifactId => dep.artifact_id = value.to_string(),
            Self::Version => dep.version = non_empty(value),
            Self::Type => dep.r#type = non_empty(value),
            Self::Scope => {
                dep.scope = non_empty(value).map(|s| s.parse::<MavenScope>().unwrap_or_default());
            }
            Self::Classifier => dep.classifier = non_empty(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExclusionField {
    GroupId,
    ArtifactId,
}

impl ExclusionField {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "groupId" => Some(Self::GroupId),
            "artifactId" => Some(Self::ArtifactId),
            _ => None,
        }
    }

    fn assign(self, exclusion: &mut Exclusion, value: &str) {
        match self {
            Self::GroupId => exclusion.group_id = value.to_string(),
            Self::ArtifactId => exclusion.artifact_id = value.to_string(),
        }
    }
}

/// Context stack element for event parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseContext {
    Project,
    Properties,
    Property(String),
    DependencyManagement,
    Dependencies,
    Dependency,
    Field(DependencyField),
    Exclusions,
    Exclusion,
    ExclusionField(ExclusionField),
    /// Any subtree that contributes nothing.
    Ignored,
}

impl ParseContext {
    const fn collects_text(&self) -> bool {
        matches!(
            self,
            Self::Property(_) | Self::Field(_) | Self::ExclusionField(_)
        )
    }
}

/// Parser state threaded through start, text, and end events.
struct PomParser<'a> {
    location: &'a str,
    properties: &'a mut PropertyTable,
    dependencies: &'a mut Vec<ManagedDependency>,
    stack: Vec<ParseContext>,
    text: String,
    dependency: Option<ManagedDependency>,
    exclusion: Option<Exclusion>,
    seen_root: bool,
}

impl<'a> PomParser<'a> {
    fn new(
        location: &'a str,
        properties: &'a mut PropertyTable,
        dependencies: &'a mut Vec<ManagedDependency>,
    ) -> Self {
        Self {
            location,
            properties,
            dependencies,
            stack: Vec::new(),
            text: String::new(),
            dependency: None,
            exclusion: None,
            seen_root: false,
        }
    }

    fn start(&mut self, tag: &str) -> Result<()> {
        let next = match (self.stack.last(), tag) {
            (None, _) if self.seen_root => {
                return Err(MavenError::parse(
                    self.location,
                    format!("unexpected second root element <{tag}>"),
                ));
            }
            (None, "project") => ParseContext::Project,
            (None, _) => {
                tracing::debug!("{}: root element <{}> is not <project>", self.location, tag);
                ParseContext::Ignored
            }
            (Some(ParseContext::Project), "properties") => ParseContext::Properties,
            (Some(ParseContext::Properties), key) => ParseContext::Property(key.to_string()),
            (Some(ParseContext::Project), "dependencyManagement") => {
                ParseContext::DependencyManagement
            }
            (Some(ParseContext::DependencyManagement), "dependencies") => {
                ParseContext::Dependencies
            }
            (Some(ParseContext::Dependencies), "dependency") => {
                self.dependency = Some(ManagedDependency::default());
                ParseContext::Dependency
            }
            (Some(ParseContext::Dependency), "exclusions") => ParseContext::Exclusions,
            (Some(ParseContext::Dependency), field) => DependencyField::from_tag(field)
                .map_or(ParseContext::Ignored, ParseContext::Field),
            (Some(ParseContext::Exclusions), "exclusion") => {
                self.exclusion = Some(Exclusion::default());
                ParseContext::Exclusion
            }
            (Some(ParseContext::Exclusion), field) => ExclusionField::from_tag(field)
                .map_or(ParseContext::Ignored, ParseContext::ExclusionField),
            _ => ParseContext::Ignored,
        };

        if next.collects_text() {
            self.text.clear();
        }
        self.seen_root = true;
        self.stack.push(next);
        Ok(())
    }

    fn text(&mut self, fragment: &str) {
        if self.stack.last().is_some_and(ParseContext::collects_text) {
            self.text.push_str(fragment);
        }
    }

    fn end(&mut self) -> Result<()> {
        let Some(context) = self.stack.pop() else {
            return Err(MavenError::parse(self.location, "unmatched end tag"));
        };

        match context {
            ParseContext::Property(name) => {
                self.properties.insert(name, self.text.trim());
            }
            ParseContext::Field(field) => {
                if let Some(dep) = self.dependency.as_mut() {
                    field.assign(dep, self.text.trim());
                }
            }
            ParseContext::ExclusionField(field) => {
                if let Some(exclusion) = self.exclusion.as_mut() {
                    field.assign(exclusion, self.text.trim());
                }
            }
            ParseContext::Exclusion => {
                if let (Some(exclusion), Some(dep)) =
                    (self.exclusion.take(), self.dependency.as_mut())
                {
                    dep.exclusions.push(exclusion);
                }
            }
            ParseContext::Dependency => {
                if let Some(dep) = self.dependency.take() {
                    self.finish_dependency(dep);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish_dependency(&mut self, dep: ManagedDependency) {
        if dep.group_id.is_empty() || dep.artifact_id.is_empty() {
            tracing::warn!(
                "{}: skipping managed dependency without groupId/artifactId ({}:{})",
                self.location,
                dep.group_id,
                dep.artifact_id
            );
            return;
        }
        self.dependencies.push(dep);
    }

    fn finish(&self) -> Result<()> {
        if !self.seen_root {
            return Err(MavenError::parse(self.location, "document has no root element"));
        }
        if !self.stack.is_empty() {
            return Err(MavenError::parse(
                self.location,
                format!("unexpected end of document ({} unclosed elements)", self.stack.len()),
            ));
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn resolve_reference(location: &str, reference: &BytesRef<'_>) -> Result<String> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| MavenError::parse(location, e))?
    {
        return Ok(ch.to_string());
    }

    let name = reference
        .decode()
        .map_err(|e| MavenError::parse(location, e))?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| MavenError::parse(location, format!("unknown entity '&{name};'")))
}

fn read_pom(
    location: &str,
    content: &[u8],
    properties: &mut PropertyTable,
    dependencies: &mut Vec<ManagedDependency>,
) -> Result<()> {
    let mut reader = Reader::from_reader(content);
    let mut parser = PomParser::new(location, properties, dependencies);

    loop {
        let event = reader.read_event().map_err(|e| {
            MavenError::parse(
                location,
                format!("{e} (at byte {})", reader.buffer_position()),
            )
        })?;

        match event {
            Event::Start(ref e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                parser.start(&tag)?;
            }
            Event::Empty(ref e) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                parser.start(&tag)?;
                parser.end()?;
            }
            Event::End(_) => parser.end()?,
            Event::Text(ref e) => {
                let text = e.decode().map_err(|err| MavenError::parse(location, err))?;
                parser.text(&text);
            }
            Event::CData(ref e) => {
                parser.text(&String::from_utf8_lossy(e));
            }
            Event::GeneralRef(ref e) => {
                let text = resolve_reference(location, e)?;
                parser.text(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    parser.finish()
}

/// Parses one POM into caller-owned state.
///
/// Properties are inserted into `properties` (later definitions overwrite
/// earlier ones) and managed dependencies are appended to `dependencies` in
/// document order. Versions are stored raw; placeholders are not resolved.
pub fn parse_pom(
    content: &[u8],
    properties: &mut PropertyTable,
    dependencies: &mut Vec<ManagedDependency>,
) -> Result<()> {
    read_pom("pom.xml", content, properties, dependencies)
}

/// Parses a POM fetched for `coordinate` into a fresh [`PomDocument`].
///
/// The property table is seeded with `project.version` bound to the
/// coordinate's version.
pub fn parse_pom_document(pom: &PomFile, coordinate: &Coordinate) -> Result<PomDocument> {
    let location = pom.location.display().to_string();
    let mut document = PomDocument {
        properties: PropertyTable::for_project(&coordinate.version),
        dependencies: Vec::new(),
    };
    read_pom(
        &location,
        &pom.content,
        &mut document.properties,
        &mut document.dependencies,
    )?;
    tracing::debug!(
        "Parsed {}: {} properties, {} managed dependencies",
        location,
        document.properties.len(),
        document.dependencies.len()
    );
    Ok(document)
}
