//! `maven-bom` command-line front end.
//!
//! Resolves one BOM coordinate against a list of local repository roots and
//! writes the flattened dependency-management table as pretty-printed JSON.
//! The output file is only written once resolution has fully succeeded.

pub mod config;

pub use config::{Cli, ResolverConfig};

use bom_core::Result;
use bom_maven::{BomResolver, ResolvedDependencyTable};
use std::path::Path;

/// Resolves the configured BOM and writes its table to `config.output`.
pub fn run(config: &ResolverConfig) -> Result<ResolvedDependencyTable> {
    let repository = config.repository();
    tracing::debug!(
        "Resolving {} against {} repositories",
        config.coordinate,
        repository.roots().len()
    );

    let resolver = BomResolver::with_options(&repository, config.options());
    let table = resolver.resolve_table(&config.coordinate)?;
    write_output(&config.output, &table)?;
    Ok(table)
}

fn write_output(path: &Path, table: &ResolvedDependencyTable) -> Result<()> {
    let mut json = table.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;
    tracing::debug!("Wrote {} entries to {}", table.len(), path.display());
    Ok(())
}
