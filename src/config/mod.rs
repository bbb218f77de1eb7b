//! Configuration module for Site-Harvester
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so a harvest can also run from a bare domain given
//! on the command line.
//!
//! # Example
//!
//! ```no_run
//! use site_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Harvesting into: {}", config.harvest.output_dir.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HarvestConfig, HttpConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config_file};
pub use validation::validate;
