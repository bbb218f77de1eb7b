//! Site-Harvester: a one-hop image harvester
//!
//! This crate fetches a site's landing page, discovers the same-domain pages it
//! links to, and downloads every image referenced by those pages into a flat
//! output directory.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Site-Harvester operations
///
/// Only startup paths return this. Once a crawl is running, fetch and storage
/// failures are logged and absorbed where they happen.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("No target domain given (pass DOMAIN or set harvest.domain)")]
    MissingDomain,
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] ::url::ParseError),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{FetchFailure, FetchResult, PageScraper, SiteCrawler};
pub use output::{CrawlReport, PageReport};
pub use state::PageState;
pub use crate::url::{file_name_from_url, matches_domain_filter, normalize_image_src, root_url};
