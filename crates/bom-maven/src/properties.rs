//! POM `<properties>` and `${...}` placeholder resolution.

use crate::error::{MavenError, Result};
use indexmap::IndexMap;

pub const PROJECT_VERSION: &str = "project.version";

/// Property name to raw value, in definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    values: IndexMap<String, String>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with `project.version` bound to the BOM's own version.
    pub fn for_project(version: &str) -> Self {
        let mut table = Self::new();
        table.insert(PROJECT_VERSION, version);
        table
    }

    /// Later definitions overwrite earlier ones.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.insert(name, value);
        }
        table
    }
}

/// Name inside a value that is exactly one `${name}` placeholder.
///
/// Values with surrounding text or several placeholders (`${a}-${b}`) are not
/// placeholders and are never substituted.
pub fn placeholder_name(value: &str) -> Option<&str> {
    let inner = value.strip_prefix("${")?.strip_suffix('}')?;
    (!inner.contains('}')).then_some(inner)
}

/// Resolves every value that references another property to a fixpoint.
///
/// A chain of references is followed until it reaches a value that is not a
/// placeholder, or a name the table does not define (the last placeholder is
/// kept as-is). A chain that revisits a name fails with
/// [`MavenError::CircularProperty`].
pub fn resolve_properties(table: &PropertyTable) -> Result<PropertyTable> {
    let mut resolved = PropertyTable::new();
    for (name, value) in table.iter() {
        let value = resolve_chain(table, name, value)?;
        resolved.insert(name, value);
    }
    Ok(resolved)
}

fn resolve_chain(table: &PropertyTable, name: &str, value: &str) -> Result<String> {
    let mut chain = vec![name];
    let mut current = value;

    while let Some(reference) = placeholder_name(current) {
        if chain.contains(&reference) {
            chain.push(reference);
            return Err(MavenError::CircularProperty {
                chain: chain.join(" -> "),
            });
        }
        let Some(next) = table.get(reference) else {
            break;
        };
        chain.push(reference);
        current = next;
    }

    Ok(current.to_string())
}
