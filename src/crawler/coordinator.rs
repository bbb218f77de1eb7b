//! Crawler coordinator - one-hop harvest orchestration
//!
//! This module ties the pipeline together:
//! - Fetching the root page and discovering same-site subpages
//! - Building the work list (root first, then subpages as found)
//! - Fanning out one scrape task per work item
//! - Waiting for every task and aggregating the report

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, FetchResult, PageFetcher};
use crate::crawler::page::PageScraper;
use crate::crawler::parser::extract_links;
use crate::crawler::scheduler::Scheduler;
use crate::output::CrawlReport;
use crate::storage::{DirectoryStore, ImageStore};
use crate::url::root_url;
use crate::{ConfigError, HarvestError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinSet;

/// Builds the work list for a harvest: the root page followed by every
/// same-site link found on it
///
/// The bare `domain` is both the host of the root URL and the substring
/// filter for links. If the root page cannot be fetched the list holds just
/// the root URL. Nothing is deduplicated, so a link back to the root URL is
/// scraped twice.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Root URL first, then discovered subpages
/// * `Err(HarvestError)` - `scheme`/`domain` do not form a valid URL
pub async fn discover_pages(
    pages: &PageFetcher,
    scheme: &str,
    domain: &str,
) -> Result<Vec<String>, HarvestError> {
    let root = root_url(scheme, domain)?;

    let subpages = match pages.fetch(&root).await {
        FetchResult::Success(body) => extract_links(&body, domain),
        FetchResult::Failure(_) => {
            tracing::warn!("Root page {} unavailable, no subpages discovered", root);
            Vec::new()
        }
    };
    tracing::info!("Discovered {} subpages on {}", subpages.len(), root);

    let mut work = Vec::with_capacity(subpages.len() + 1);
    work.push(root);
    work.extend(subpages);
    Ok(work)
}

/// Main harvest coordinator
pub struct SiteCrawler {
    pages: PageFetcher,
    scraper: Arc<PageScraper>,
    scheduler: Scheduler,
    scheme: String,
}

impl SiteCrawler {
    /// Creates a crawler over a shared client and image store
    ///
    /// Defaults: `https` root URLs, no concurrency limit.
    pub fn new(client: Client, store: Arc<dyn ImageStore>) -> Self {
        Self {
            pages: PageFetcher::new(client.clone()),
            scraper: Arc::new(PageScraper::new(client, store)),
            scheduler: Scheduler::unbounded(),
            scheme: "https".to_string(),
        }
    }

    /// Sets the scheme used to build the root URL
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Caps how many pages are scraped at once (`None` = unbounded)
    pub fn with_max_concurrent_pages(mut self, limit: Option<usize>) -> Self {
        self.scheduler = Scheduler::new(limit);
        self
    }

    /// Builds a crawler from configuration
    ///
    /// Creates the HTTP client and the output directory.
    ///
    /// # Returns
    ///
    /// * `Ok(SiteCrawler)` - Ready to crawl
    /// * `Err(HarvestError)` - Client build failed or the output directory
    ///   could not be created
    pub async fn from_config(config: &Config) -> Result<Self, HarvestError> {
        let client = build_http_client(config)?;
        let store = DirectoryStore::create(&config.harvest.output_dir).await?;

        Ok(Self::new(client, Arc::new(store))
            .with_scheme(config.harvest.scheme.clone())
            .with_max_concurrent_pages(config.harvest.max_concurrent_pages))
    }

    /// Discovers the work list for `domain` (see [`discover_pages`])
    pub async fn discover(&self, domain: &str) -> Result<Vec<String>, HarvestError> {
        discover_pages(&self.pages, &self.scheme, domain).await
    }

    /// Harvests images from `domain`'s root page and its one-hop subpages
    ///
    /// Every page in the work list gets its own task; all of them are
    /// spawned up front and awaited together. A failing or panicking page
    /// never affects its siblings, so this only returns `Err` when `domain`
    /// cannot form a URL.
    pub async fn crawl(&self, domain: &str) -> Result<CrawlReport, HarvestError> {
        let start_time = Instant::now();
        let work = self.discover(domain).await?;

        let mut report = CrawlReport::new(domain);
        report.pages_scheduled = work.len();
        report.subpages_discovered = work.len() - 1;

        match self.scheduler.limit() {
            Some(limit) => tracing::info!(
                "Scraping {} pages, at most {} at a time",
                work.len(),
                limit
            ),
            None => tracing::info!("Scraping {} pages", work.len()),
        }

        let mut tasks = JoinSet::new();
        for url in work {
            let scraper = Arc::clone(&self.scraper);
            let scheduler = self.scheduler.clone();
            tasks.spawn(async move {
                let _permit = scheduler.acquire().await;
                scraper.scrape(&url).await
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(page) => report.record_page(&page),
                Err(e) => {
                    tracing::error!("Scrape task aborted: {}", e);
                    report.record_aborted();
                }
            }
        }

        report.elapsed = start_time.elapsed();
        tracing::info!(
            "Images from main page {} and its sub pages were downloaded ({} saved in {:?})",
            domain,
            report.images_saved,
            report.elapsed
        );

        Ok(report)
    }
}

/// Runs a complete harvest from configuration
///
/// # Arguments
///
/// * `config` - Validated configuration; `harvest.domain` must be set
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Harvest finished (individual pages may have failed)
/// * `Err(HarvestError)` - Startup failed
///
/// # Example
///
/// ```no_run
/// use site_harvester::config::Config;
/// use site_harvester::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(Config::for_domain("example.com")).await?;
/// println!("saved {} images", report.images_saved);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport, HarvestError> {
    let domain = config
        .harvest
        .domain
        .clone()
        .ok_or(ConfigError::MissingDomain)?;

    let crawler = SiteCrawler::from_config(&config).await?;
    crawler.crawl(&domain).await
}
