//! Crawler module for page fetching and image harvesting
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching with typed failure classification
//! - HTML parsing for subpage links and image references
//! - Per-page scraping into an image store
//! - Root-page discovery and concurrent fan-out across pages

mod coordinator;
mod fetcher;
mod page;
mod parser;
mod scheduler;

pub use coordinator::{discover_pages, run_crawl, SiteCrawler};
pub use fetcher::{
    build_http_client, classify_status, FetchFailure, FetchResult, ImageAsset, ImageFetcher,
    PageFetcher,
};
pub use page::PageScraper;
pub use parser::{extract_images, extract_links, ImageReference};
pub use scheduler::Scheduler;

use crate::config::Config;
use crate::output::CrawlReport;
use crate::HarvestError;

/// Runs a complete harvest
///
/// This is the main entry point for starting a harvest. It will:
/// 1. Build the HTTP client and create the output directory
/// 2. Fetch the root page and discover same-site subpages
/// 3. Scrape the root and every subpage concurrently
/// 4. Return the aggregated report
///
/// # Arguments
///
/// * `config` - The harvester configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Harvest completed
/// * `Err(HarvestError)` - Harvest could not start
pub async fn crawl(config: Config) -> Result<CrawlReport, HarvestError> {
    run_crawl(config).await
}
