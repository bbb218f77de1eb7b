//! Task state tracking
//!
//! Each page scraped during a harvest runs through a small, fixed lifecycle.
//! Nothing here is shared between tasks.

mod page_state;

pub use page_state::{PageState, PageTask};
