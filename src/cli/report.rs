//! Terminal status lines, spinners and the final summary.

use std::sync::Mutex;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::format::format_duration;
use crate::run::RunProgress;
use crate::stats::RunStats;

const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Prints the startup header with the destination folder.
pub fn print_header(download_dir: &std::path::Path) {
    println!("{}", style("Car Talk Downloader").cyan().bold());
    println!("Download path: '{}'\n", download_dir.display());
    println!(
        "{}",
        style("Expanding page to expose all download links...").green()
    );
}

/// Creates the spinner shown while one episode streams to disk.
fn make_spinner(file_name: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("spinner template is valid"),
    );
    bar.set_message(file_name.to_string());
    bar
}

/// [`RunProgress`] implementation for the terminal: colored per-item lines
/// plus a spinner for the file currently downloading.
pub struct ConsoleProgress {
    dry_run: bool,
    active: Mutex<Option<ProgressBar>>,
}

impl ConsoleProgress {
    /// Creates terminal progress reporting; `dry_run` switches the wording.
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            active: Mutex::new(None),
        }
    }

    fn finish_active(&self) {
        if let Some(bar) = self.active.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

impl RunProgress for ConsoleProgress {
    fn on_discovered(&self, count: usize) {
        println!("{}", style("Page fully expanded").cyan());
        println!("Found {count} downloadable episode(s)\n");
    }

    fn on_skip(&self, file_name: &str) {
        println!("{}", style(format!("File {file_name} already exists.")).yellow());
    }

    fn on_download_start(&self, index: usize, total: usize, file_name: &str) {
        if self.dry_run {
            println!(
                "{}",
                style(format!("Would download '{file_name}' ({index}/{total})")).blue()
            );
            return;
        }
        println!(
            "{}",
            style(format!("Downloading '{file_name}' ({index}/{total})")).blue()
        );
        let bar = make_spinner(file_name);
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        *self.active.lock().unwrap() = Some(bar);
    }

    fn on_download_complete(&self, _file_name: &str) {
        self.finish_active();
    }

    fn on_download_error(&self, file_name: &str, error: &str) {
        self.finish_active();
        println!(
            "{}",
            style(format!("Error downloading {file_name}: {error}")).red()
        );
    }
}

/// Prints the end-of-run summary.
pub fn print_summary(stats: &RunStats, dry_run: bool) {
    println!("\n{SEPARATOR}");
    println!("  Episodes discovered:  {}", stats.discovered);
    if dry_run {
        println!("  Would download:       {} (dry run)", stats.downloaded);
    } else {
        println!("  Downloaded:           {}", stats.downloaded);
    }
    if stats.skipped > 0 {
        println!("  Skipped (existing):   {}", stats.skipped);
    }
    if stats.failed > 0 {
        println!(
            "  {}",
            style(format!("Failed:               {}", stats.failed)).red()
        );
    }
    println!("  Elapsed:              {}", format_duration(stats.elapsed));
    println!("{SEPARATOR}");
}
