//! `palettize fetch`: download base16 schemes from GitHub.

use std::path::PathBuf;

use anyhow::Result;
use indicatif::ProgressDrawTarget;
use palettize_core::PalettizeConfig;
use palettize_fetch::{fetch_and_download, FetchConfig, FetchEvent, FetchOutcome, FileOutcome};

use crate::output;

pub async fn handle(
    config: &PalettizeConfig,
    out_dir: Option<PathBuf>,
    limit: Option<usize>,
    concurrency: Option<usize>,
) -> Result<()> {
    let mut fetch_config = FetchConfig::from_env()
        .output_dir(out_dir.unwrap_or_else(|| config.out_dir.clone()))
        .limit(limit);
    if let Some(n) = concurrency {
        fetch_config = fetch_config.concurrency(n);
    }
    output::kv("Repository:", &fetch_config.repo_url);

    let multi = output::multi_progress();
    let spinner = multi.add(output::spinner("Fetching latest commit..."));
    // Drawn only once the listing says how many files there are.
    let bar = output::progress(0, "Downloading");
    bar.set_draw_target(ProgressDrawTarget::hidden());
    let (events_spinner, events_bar) = (spinner.clone(), bar.clone());

    let result = fetch_and_download(fetch_config, move |event| match event {
        FetchEvent::CommitResolved { hash } => {
            events_spinner.set_message(format!("Commit {hash}: listing schemes..."));
        }
        FetchEvent::Listed { found, selected } => {
            let message = if selected < found {
                format!("Found {found} schemes, downloading {selected}")
            } else {
                format!("Found {found} schemes")
            };
            output::spinner_success(&events_spinner, &message);
            events_bar.set_length(selected as u64);
            events_bar.reset();
            multi.add(events_bar.clone());
        }
        FetchEvent::File(outcome) => {
            if let FileOutcome::Failed { name, error } = &outcome {
                events_bar.println(format!("✗ {name}: {error}"));
            }
            events_bar.set_message(outcome.name().to_string());
            events_bar.inc(1);
        }
    })
    .await;

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            bar.finish_and_clear();
            output::spinner_error(&spinner, "Fetch failed");
            return Err(e.into());
        }
    };
    bar.finish_and_clear();
    spinner.finish_and_clear();

    match &outcome {
        FetchOutcome::AlreadyDownloaded { hash, dir } => {
            output::warning(&format!(
                "Files for commit {hash} already exist in {}. Skipping download.",
                dir.display()
            ));
        }
        FetchOutcome::Downloaded {
            hash, dir, report, ..
        } => {
            output::success(&format!(
                "Downloaded {} schemes at commit {hash} to {}",
                report.downloaded.len(),
                dir.display()
            ));
            if !report.failed.is_empty() {
                output::warning(&format!("{} downloads failed", report.failed.len()));
            }
        }
    }
    output::data("fetch", &outcome);
    Ok(())
}
