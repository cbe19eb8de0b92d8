//! Run orchestration: expand, extract, then download sequentially.

use std::collections::HashSet;
use std::path::Path;

use crate::config::ScrapeConfig;
use crate::expand;
use crate::extract;
use crate::fetch::Fetcher;
use crate::filename;
use crate::fs::FileSystem;
use crate::page::PageDriver;
use crate::stats::{RunStats, RunStatsBuilder};

/// Per-run switches coming from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report what would be downloaded without fetching or writing anything.
    pub dry_run: bool,
    /// Stop at the first episode already present in the destination folder.
    ///
    /// Episodes arrive in page order, newest first, so the first hit marks
    /// the boundary between new and previously fetched episodes.
    pub new_episodes_only: bool,
}

/// Trait for receiving run progress updates.
///
/// All methods have default no-op implementations.
pub trait RunProgress: Send + Sync {
    /// Called once extraction has produced the episode list.
    fn on_discovered(&self, _count: usize) {}

    /// Called when an episode is skipped because its file already exists.
    fn on_skip(&self, _file_name: &str) {}

    /// Called before an episode download starts (1-based index).
    fn on_download_start(&self, _index: usize, _total: usize, _file_name: &str) {}

    /// Called when an episode finished downloading (or would have, on a dry run).
    fn on_download_complete(&self, _file_name: &str) {}

    /// Called when an episode download fails.
    fn on_download_error(&self, _file_name: &str, _error: &str) {}
}

/// A null progress implementation that ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl RunProgress for NoProgress {}

/// Runs the whole pipeline against an already-navigated page.
///
/// Expands the archive, extracts episodes, snapshots the destination
/// folder once, then walks the episodes in extraction order: sanitize the
/// title, skip if the file already exists, otherwise stream the audio to
/// disk. Downloads are strictly sequential; a failed download is logged
/// and counted, never fatal.
///
/// # Errors
///
/// Returns an error only when the page can no longer be queried or the
/// destination folder cannot be prepared. Per-episode download failures
/// surface in [`RunStats::failed`] instead.
pub async fn run_session(
    page: &dyn PageDriver,
    fetcher: &dyn Fetcher,
    fs: &dyn FileSystem,
    config: &ScrapeConfig,
    dest: &Path,
    options: &RunOptions,
    progress: &dyn RunProgress,
) -> crate::Result<RunStats> {
    let mut builder = RunStatsBuilder::new();

    expand::expand_page(page, config).await?;
    let raw = page
        .collect_items(
            &config.item_selector,
            &config.link_attribute,
            &config.metadata_attribute,
        )
        .await?;
    let episodes = extract::collect_episodes(raw);
    builder.set_discovered(episodes.len());
    progress.on_discovered(episodes.len());

    // A dry run touches nothing on disk, not even the destination folder;
    // a folder that does not exist yet simply means nothing to skip.
    let existing = if options.dry_run {
        match fs.list_file_names(dest).await {
            Ok(names) => names,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        }
    } else {
        fs.create_dir_all(dest).await?;
        fs.list_file_names(dest).await?
    };

    let total = episodes.len();
    for (index, episode) in episodes.iter().enumerate() {
        let file_name = filename::episode_file_name(episode.title.as_deref());

        if existing.contains(&file_name) {
            log::info!("file {file_name} already exists");
            progress.on_skip(&file_name);
            builder.add_skipped();
            if options.new_episodes_only {
                log::info!("reached a previously downloaded episode, stopping");
                break;
            }
            continue;
        }

        progress.on_download_start(index + 1, total, &file_name);

        if options.dry_run {
            builder.add_downloaded();
            progress.on_download_complete(&file_name);
            continue;
        }

        match fetcher.fetch_to_file(&episode.url, &dest.join(&file_name)).await {
            Ok(_) => {
                builder.add_downloaded();
                progress.on_download_complete(&file_name);
            }
            Err(e) => {
                // A partial file may remain on disk; accepted, not cleaned up
                log::error!("error downloading {file_name}: {e}");
                builder.add_failed();
                progress.on_download_error(&file_name, &e.to_string());
            }
        }
    }

    Ok(builder.build())
}
