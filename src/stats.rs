//! Per-run outcome counters.

use std::time::{Duration, Instant};

/// Outcome of one scrape-and-download run.
///
/// Counters are threaded through the orchestrator and returned, never held
/// in process-wide state.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Number of episodes discovered on the fully expanded page.
    pub discovered: usize,
    /// Number of episodes skipped because the file already existed.
    pub skipped: usize,
    /// Number of episodes successfully downloaded (or, on a dry run, that
    /// would have been downloaded).
    pub downloaded: usize,
    /// Number of episodes whose download failed.
    pub failed: usize,
    /// Total elapsed time for the run.
    pub elapsed: Duration,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    /// Creates empty stats.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            discovered: 0,
            skipped: 0,
            downloaded: 0,
            failed: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Accumulator used while a run is in flight.
pub struct RunStatsBuilder {
    discovered: usize,
    skipped: usize,
    downloaded: usize,
    failed: usize,
    start_time: Instant,
}

impl Default for RunStatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStatsBuilder {
    /// Starts a new accumulator; the elapsed clock starts now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            discovered: 0,
            skipped: 0,
            downloaded: 0,
            failed: 0,
            start_time: Instant::now(),
        }
    }

    /// Records how many episodes extraction produced.
    pub const fn set_discovered(&mut self, count: usize) {
        self.discovered = count;
    }

    /// Records one skipped episode.
    pub const fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Records one successful (or would-be, on dry runs) download.
    pub const fn add_downloaded(&mut self) {
        self.downloaded += 1;
    }

    /// Records one failed download.
    pub const fn add_failed(&mut self) {
        self.failed += 1;
    }

    /// Finalizes the counters.
    #[must_use]
    pub fn build(self) -> RunStats {
        RunStats {
            discovered: self.discovered,
            skipped: self.skipped,
            downloaded: self.downloaded,
            failed: self.failed,
            elapsed: self.start_time.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_stats_default_is_empty() {
        let stats = RunStats::default();
        assert_eq!(stats.discovered, 0);
        assert_eq!(stats.skipped, 0);
        assert_eq!(stats.downloaded, 0);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn builder_accumulates_counts() {
        let mut builder = RunStatsBuilder::new();
        builder.set_discovered(4);
        builder.add_downloaded();
        builder.add_downloaded();
        builder.add_skipped();
        builder.add_failed();

        let stats = builder.build();
        assert_eq!(stats.discovered, 4);
        assert_eq!(stats.downloaded, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.failed, 1);
    }
}
