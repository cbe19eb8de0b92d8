//! Error types for the cartalk-dl library.

use thiserror::Error;

/// Errors that can occur while scraping and downloading episodes.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the browser automation session.
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Download of a single episode failed.
    #[error("download failed: {0}")]
    Download(String),
}

/// A specialized `Result` type for cartalk-dl operations.
pub type Result<T> = std::result::Result<T, Error>;
