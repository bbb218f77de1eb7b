//! Per-page and per-crawl counters
//!
//! Reports are built as tasks finish and printed once the harvest is over.
//! They are informational only; a failed page never turns into an error.

use std::time::Duration;

/// What a single page-scrape task did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    /// The page URL
    pub url: String,

    /// Whether the page HTML was fetched
    pub page_fetched: bool,

    /// Image references found on the page (duplicates included)
    pub images_found: usize,

    /// Images fetched and written
    pub images_saved: usize,

    /// Images whose fetch failed
    pub images_failed: usize,

    /// Images fetched but not written (bad name or write error)
    pub images_not_stored: usize,
}

impl PageReport {
    /// Creates an empty report for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Aggregate counters for a whole harvest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// The harvested domain
    pub domain: String,

    /// Subpages discovered on the root page
    pub subpages_discovered: usize,

    /// Pages scheduled (root plus subpages)
    pub pages_scheduled: usize,

    /// Pages whose HTML was fetched
    pub pages_fetched: usize,

    /// Pages whose HTML could not be fetched
    pub pages_failed: usize,

    /// Tasks that panicked before producing a report
    pub tasks_aborted: usize,

    /// Image references found across all pages
    pub images_found: usize,

    /// Images written to the output directory
    pub images_saved: usize,

    /// Images whose fetch failed
    pub images_failed: usize,

    /// Images fetched but not written
    pub images_not_stored: usize,

    /// Wall-clock time of the harvest
    pub elapsed: Duration,
}

impl CrawlReport {
    /// Creates an empty report for `domain`
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Folds one page's counters into the totals
    pub fn record_page(&mut self, page: &PageReport) {
        if page.page_fetched {
            self.pages_fetched += 1;
        } else {
            self.pages_failed += 1;
        }
        self.images_found += page.images_found;
        self.images_saved += page.images_saved;
        self.images_failed += page.images_failed;
        self.images_not_stored += page.images_not_stored;
    }

    /// Records a task that never reported back
    pub fn record_aborted(&mut self) {
        self.tasks_aborted += 1;
    }
}

/// Prints a report to stdout in a formatted manner
///
/// # Arguments
///
/// * `report` - The report to display
pub fn print_report(report: &CrawlReport) {
    println!("=== Harvest Report: {} ===\n", report.domain);

    println!("Pages:");
    println!("  Subpages discovered: {}", report.subpages_discovered);
    println!("  Scheduled: {}", report.pages_scheduled);
    println!("  Fetched: {}", report.pages_fetched);
    println!("  Failed: {}", report.pages_failed);
    if report.tasks_aborted > 0 {
        println!("  Aborted: {}", report.tasks_aborted);
    }
    println!();

    println!("Images:");
    println!("  Found: {}", report.images_found);
    println!("  Saved: {}", report.images_saved);
    println!("  Fetch failed: {}", report.images_failed);
    if report.images_not_stored > 0 {
        println!("  Not stored: {}", report.images_not_stored);
    }
    println!();

    let success_rate = if report.images_found > 0 {
        (report.images_saved as f64 / report.images_found as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Saved {:.1}% of images ({} / {}) in {:.1}s",
        success_rate,
        report.images_saved,
        report.images_found,
        report.elapsed.as_secs_f64()
    );
}
