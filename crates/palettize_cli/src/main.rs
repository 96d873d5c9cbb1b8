//! CLI entry point for palettize.

mod cli;
mod commands;
mod output;

use clap::Parser;
use palettize_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Logging goes to stderr: debug with `--verbose`, else `PALETTIZE_LOG` /
/// `RUST_LOG`, else warnings only.
fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env()
        .with_ansi(console::colors_enabled_stderr());
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = palettize_observability::init(config) {
        output::warning(&e.to_string());
    }
}

#[tokio::main]
async fn main() {
    // Project .env (PALETTIZE_* overrides), if present
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
