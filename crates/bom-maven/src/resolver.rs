//! BOM resolution: property substitution and `import` flattening.
//!
//! Each BOM is loaded independently: fetched from the repository provider,
//! parsed into its own property table (seeded with `project.version`), and
//! its managed dependency versions substituted. Imports are then expanded
//! depth-first with an explicit work stack; every import entry is replaced in
//! place by the managed dependencies of the BOM it names.

use crate::error::{MavenError, Result};
use crate::parser::parse_pom_document;
use crate::properties::{PropertyTable, placeholder_name, resolve_properties};
use crate::table::ResolvedDependencyTable;
use crate::types::ManagedDependency;
use bom_core::{Coordinate, RepositoryProvider};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverOptions {
    /// Fail when the requested BOM itself is missing from every repository.
    /// Missing nested imports are always skipped.
    pub require_root: bool,
}

/// Outcome of resolving one BOM coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Flattened managed dependencies, not yet deduplicated.
    Found(Vec<ManagedDependency>),
    /// No repository holds the BOM.
    NotFound,
}

impl Resolution {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Dependencies of a found BOM; empty for [`Resolution::NotFound`].
    pub fn into_dependencies(self) -> Vec<ManagedDependency> {
        match self {
            Self::Found(deps) => deps,
            Self::NotFound => Vec::new(),
        }
    }
}

struct Frame {
    coordinate: Coordinate,
    pending: std::vec::IntoIter<ManagedDependency>,
}

pub struct BomResolver<P> {
    provider: P,
    options: ResolverOptions,
}

impl<P: RepositoryProvider> BomResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_options(provider, ResolverOptions::default())
    }

    pub const fn with_options(provider: P, options: ResolverOptions) -> Self {
        Self { provider, options }
    }

    /// Resolves `coordinate` into a flat list of managed dependencies.
    ///
    /// The list keeps duplicates; reduce it with
    /// [`ResolvedDependencyTable::from_dependencies`] or use
    /// [`BomResolver::resolve_table`].
    pub fn resolve(&self, coordinate: &Coordinate) -> Result<Resolution> {
        let Some(root) = self.load(coordinate)? else {
            return Ok(Resolution::NotFound);
        };

        let mut resolved = Vec::new();
        let mut expanding: HashSet<Coordinate> = HashSet::from([coordinate.clone()]);
        let mut stack = vec![Frame {
            coordinate: coordinate.clone(),
            pending: root.into_iter(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(dep) = frame.pending.next() else {
                if let Some(done) = stack.pop() {
                    expanding.remove(&done.coordinate);
                }
                continue;
            };

            if !dep.is_import() {
                resolved.push(dep);
                continue;
            }

            let nested = dep.coordinate();
            if expanding.contains(&nested) {
                let chain = stack
                    .iter()
                    .map(|f| f.coordinate.to_string())
                    .chain(std::iter::once(nested.to_string()))
                    .collect::<Vec<_>>()
                    .join(" -> ");
                return Err(MavenError::CircularImport { chain });
            }

            match self.load(&nested)? {
                Some(deps) => {
                    tracing::debug!("Expanding import {} ({} entries)", nested, deps.len());
                    expanding.insert(nested.clone());
                    stack.push(Frame {
                        coordinate: nested,
                        pending: deps.into_iter(),
                    });
                }
                None => tracing::debug!("Imported BOM {} not found, skipping", nested),
            }
        }

        Ok(Resolution::Found(resolved))
    }

    /// Resolves `coordinate` and reduces the result into a deduplicated table.
    pub fn resolve_table(&self, coordinate: &Coordinate) -> Result<ResolvedDependencyTable> {
        match self.resolve(coordinate)? {
            Resolution::Found(deps) => {
                let table = ResolvedDependencyTable::from_dependencies(deps);
                tracing::info!("Resolved {}: {} managed dependencies", coordinate, table.len());
                Ok(table)
            }
            Resolution::NotFound if self.options.require_root => Err(MavenError::BomNotFound {
                coordinate: coordinate.to_string(),
            }),
            Resolution::NotFound => {
                tracing::warn!("BOM {} not found in any repository", coordinate);
                Ok(ResolvedDependencyTable::new())
            }
        }
    }

    /// Fetches and parses one BOM, returning its managed dependencies with
    /// versions substituted. Imports are left unexpanded.
    fn load(&self, coordinate: &Coordinate) -> Result<Option<Vec<ManagedDependency>>> {
        let Some(pom) = self.provider.fetch_pom(coordinate)? else {
            return Ok(None);
        };

        let document = parse_pom_document(&pom, coordinate)?;
        let properties = resolve_properties(&document.properties)?;
        Ok(Some(
            document
                .dependencies
                .into_iter()
                .map(|dep| substitute_version(dep, &properties))
                .collect(),
        ))
    }
}

/// Replaces a dependency version with its property value.
///
/// `${name}` looks up `name`; any other version token is itself used as the
/// lookup key. Versions with no matching property are kept unchanged, so an
/// unresolved placeholder stays visible as `${...}` in the output.
fn substitute_version(mut dep: ManagedDependency, properties: &PropertyTable) -> ManagedDependency {
    let replacement = dep.version.as_deref().and_then(|version| {
        let key = placeholder_name(version).unwrap_or(version);
        properties.get(key).map(str::to_string)
    });
    if replacement.is_some() {
        dep.version = replacement;
    }
    dep
}
