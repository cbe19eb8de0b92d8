//! cartalk-dl - A library for downloading Car Talk episodes from the archive page.
//!
//! This library drives a browser session to expand the episode archive,
//! extracts download links from the fully expanded page, and streams each
//! episode to a local folder, abstracted from any specific UI.
//!
//! # Example
//!
//! ```no_run
//! use cartalk_dl::{AppConfig, HttpFetcher, RunOptions, TokioFileSystem, page, run};
//!
//! # async fn example() -> cartalk_dl::Result<()> {
//! let config = AppConfig::load()?;
//!
//! // Start a headless browser session on the configured page
//! let driver = page::launch(&config.scrape, false).await?;
//! let page = page::WebDriverPage::new(driver.clone());
//!
//! let fetcher = HttpFetcher::new()?;
//! let options = RunOptions::default();
//!
//! // Run the whole pipeline: expand, extract, download
//! let stats = run::run_session(
//!     &page,
//!     &fetcher,
//!     &TokioFileSystem,
//!     &config.scrape,
//!     &config.paths.download_dir,
//!     &options,
//!     &run::NoProgress,
//! )
//! .await?;
//! println!("Downloaded {} episodes", stats.downloaded);
//!
//! driver.quit().await?;
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod cli;
pub mod config;
pub mod error;
pub mod expand;
pub mod extract;
pub mod fetch;
pub mod filename;
pub mod format;
pub mod fs;
pub mod page;
pub mod run;
pub mod stats;

// Re-export main types for convenience
pub use config::{AppConfig, PathConfig, ScrapeConfig};
pub use error::{Error, Result};
pub use extract::{Episode, RawItem};
pub use fetch::{Fetcher, HttpFetcher};
pub use filename::{FALLBACK_FILE_NAME, episode_file_name};
pub use fs::{FileSystem, TokioFileSystem};
pub use page::{PageDriver, WebDriverPage};
pub use run::{NoProgress, RunOptions, RunProgress};
pub use stats::RunStats;
