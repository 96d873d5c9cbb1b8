//! Command dispatch.

pub mod analyze;
pub mod build;
pub mod fetch;
pub mod template;

use std::time::Instant;

use anyhow::Result;
use palettize_core::PalettizeConfig;
use palettize_observability::{command_span, record_duration, record_error};
use tracing::Instrument;

use crate::cli::{Cli, Command};

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Analyze { .. } => "analyze",
            Command::Template { .. } => "template",
            Command::Build { .. } => "build",
            Command::Fetch { .. } => "fetch",
        }
    }
}

pub async fn handle(cli: Cli) -> Result<()> {
    let span = command_span!(cli.command.name());
    async move {
        let start = Instant::now();
        let result = dispatch(cli.command).await;
        record_duration("duration_ms", start.elapsed());
        if let Err(e) = &result {
            record_error(e);
        }
        result
    }
    .instrument(span)
    .await
}

async fn dispatch(command: Command) -> Result<()> {
    let config = PalettizeConfig::from_env();
    match command {
        Command::Analyze { theme, palette } => analyze::handle(&config, theme, palette),
        Command::Template {
            theme,
            palette,
            out,
            threshold,
        } => template::handle(&config, theme, palette, out, threshold),
        Command::Build {
            palette,
            template,
            out_dir,
            output_name,
        } => build::handle(&config, palette, template, out_dir, output_name),
        Command::Fetch {
            out_dir,
            limit,
            concurrency,
        } => fetch::handle(&config, out_dir, limit, concurrency).await,
    }
}
