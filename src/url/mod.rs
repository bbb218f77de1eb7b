//! URL handling module for Site-Harvester
//!
//! This module provides root URL construction, the same-site domain filter,
//! image source normalization and output filename derivation.

mod domain;
mod filename;
mod normalize;

// Re-export main functions
pub use domain::{matches_domain_filter, root_url};
pub use filename::file_name_from_url;
pub use normalize::{has_scheme, is_absolute_http, normalize_image_src};
