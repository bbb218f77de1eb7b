//! Storage module for persisting harvested images
//!
//! Images land in one flat directory. A later write of the same name
//! replaces the earlier one, whichever page it came from.

mod directory;
mod traits;

pub use directory::DirectoryStore;
pub use traits::{ImageStore, StorageError, StorageResult};
