//! Single-page scraping
//!
//! One page task: fetch the HTML, pull out image references, then fetch and
//! store each image in turn. Images on one page are never fetched in
//! parallel.

use crate::crawler::fetcher::{ImageAsset, ImageFetcher, PageFetcher};
use crate::crawler::parser::extract_images;
use crate::output::PageReport;
use crate::state::{PageState, PageTask};
use crate::storage::ImageStore;
use crate::url::file_name_from_url;
use reqwest::Client;
use std::sync::Arc;

/// Downloads every image on one page into an [`ImageStore`]
#[derive(Clone)]
pub struct PageScraper {
    pages: PageFetcher,
    images: ImageFetcher,
    store: Arc<dyn ImageStore>,
}

impl PageScraper {
    /// Creates a scraper over a shared client and store
    pub fn new(client: Client, store: Arc<dyn ImageStore>) -> Self {
        Self {
            pages: PageFetcher::new(client.clone()),
            images: ImageFetcher::new(client),
            store,
        }
    }

    /// Scrapes `url` end to end
    ///
    /// A failed page fetch ends the task quietly (the fetcher already logged
    /// it). Failed image fetches and failed writes are skipped; the remaining
    /// images on the page are still processed.
    pub async fn scrape(&self, url: &str) -> PageReport {
        tracing::info!("Scraping {}", url);

        let mut task = PageTask::new(url);
        let mut report = PageReport::new(url);

        task.advance(PageState::Fetching);
        let body = match self.pages.fetch(url).await.success() {
            Some(body) => body,
            None => {
                task.advance(PageState::Done);
                return report;
            }
        };
        report.page_fetched = true;

        task.advance(PageState::Extracting);
        let images = extract_images(&body);
        report.images_found = images.len();
        tracing::debug!("Found {} images on {}", images.len(), url);

        if !images.is_empty() {
            task.advance(PageState::Downloading);
        }

        for image in images {
            match self.images.fetch(&image.url).await {
                Some(asset) => {
                    if self.save(&asset).await {
                        report.images_saved += 1;
                    } else {
                        report.images_not_stored += 1;
                    }
                }
                None => report.images_failed += 1,
            }
        }

        task.advance(PageState::Done);
        report
    }

    /// Writes one image under the last path segment of its URL
    async fn save(&self, asset: &ImageAsset) -> bool {
        let Some(file_name) = file_name_from_url(&asset.source) else {
            tracing::warn!("No usable file name in {}, skipping", asset.source);
            return false;
        };

        match self.store.store(file_name, &asset.bytes).await {
            Ok(path) => {
                tracing::debug!(
                    "Saved {} ({} bytes) to {}",
                    asset.source,
                    asset.bytes.len(),
                    path.display()
                );
                true
            }
            Err(e) => {
                tracing::error!("Failed to store image {}: {}", asset.source, e);
                false
            }
        }
    }
}
