use bom_cli::{Cli, ResolverConfig};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match ResolverConfig::try_from(cli).and_then(|config| bom_cli::run(&config)) {
        Ok(table) => {
            tracing::info!("Wrote {} managed dependencies", table.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("BOM resolution failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
