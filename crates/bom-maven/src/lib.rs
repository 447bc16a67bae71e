//! Maven BOM resolution.
//!
//! Parses POM documents, resolves `${...}` property placeholders, and
//! flattens `import`-scoped managed dependencies into a single ordered,
//! deduplicated dependency-management table.

pub mod error;
pub mod parser;
pub mod properties;
pub mod resolver;
pub mod table;
pub mod types;

pub use error::{MavenError, Result};
pub use parser::{PomDocument, parse_pom, parse_pom_document};
pub use properties::{PropertyTable, resolve_properties};
pub use resolver::{BomResolver, Resolution, ResolverOptions};
pub use table::{BomOutput, ExclusionEntry, ResolvedDependencyTable, ResolvedEntry};
pub use types::{Exclusion, ManagedDependency, MavenScope};
