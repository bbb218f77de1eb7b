//! Output module for harvest reporting
//!
//! This module handles:
//! - Counting what each page task did
//! - Aggregating those counts for the whole harvest
//! - Printing the final report

pub mod stats;

pub use stats::{print_report, CrawlReport, PageReport};
