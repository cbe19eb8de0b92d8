//! CLI mode - wires a live browser session and HTTP client into the run.

mod report;

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::fetch::HttpFetcher;
use crate::fs::TokioFileSystem;
use crate::page::{self, WebDriverPage};
use crate::run::{self, RunOptions};
use crate::stats::RunStats;

pub use report::print_summary;

/// Command-line options for one invocation.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Run the browser in visible (non-headless) mode.
    pub show_browser: bool,
    /// Destination folder override; defaults to the platform data dir.
    pub output_folder: Option<PathBuf>,
    /// Report what would be downloaded without writing anything.
    pub dry_run: bool,
    /// Stop at the first episode already present in the destination.
    pub download_new_episodes: bool,
}

/// Runs a full scrape-and-download session against the configured page.
///
/// The browser session is closed before this returns, on success and on
/// failure alike.
///
/// # Errors
///
/// Returns an error if configuration loading, browser launch, navigation,
/// or destination-folder preparation fails. Per-episode download failures
/// are reported in the returned stats instead.
pub async fn run(options: CliOptions) -> crate::Result<RunStats> {
    let config = AppConfig::load()?;
    let download_dir = options
        .output_folder
        .clone()
        .unwrap_or_else(|| config.paths.download_dir.clone());

    report::print_header(&download_dir);

    let fetcher = HttpFetcher::new()?;
    let run_options = RunOptions {
        dry_run: options.dry_run,
        new_episodes_only: options.download_new_episodes,
    };
    let progress = report::ConsoleProgress::new(options.dry_run);

    let driver = page::launch(&config.scrape, options.show_browser).await?;
    let page = WebDriverPage::new(driver.clone());

    // Capture the outcome so the browser is closed on every exit path
    let outcome = run::run_session(
        &page,
        &fetcher,
        &TokioFileSystem,
        &config.scrape,
        &download_dir,
        &run_options,
        &progress,
    )
    .await;

    if let Err(e) = driver.quit().await {
        log::warn!("error closing browser session: {e}");
    }

    outcome
}
