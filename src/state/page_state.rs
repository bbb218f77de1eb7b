//! Lifecycle of a single page-scrape task
//!
//! A task moves `Pending → Fetching → (Extracting → Downloading)* → Done`.
//! Any failed fetch sends it straight to `Done`; there are no retries.

use std::fmt;

/// Represents the current state of a page-scrape task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Task created, nothing requested yet
    Pending,

    /// Page HTML is being fetched
    Fetching,

    /// Image references are being pulled out of the page
    Extracting,

    /// Images are being fetched and written one at a time
    Downloading,

    /// Task finished, successfully or not
    Done,
}

impl PageState {
    /// Returns true if this is the terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: PageState) -> bool {
        use PageState::*;
        matches!(
            (self, next),
            (Pending, Fetching)
                | (Fetching, Extracting)
                | (Fetching, Done)
                | (Extracting, Downloading)
                | (Extracting, Done)
                | (Downloading, Extracting)
                | (Downloading, Done)
        )
    }

    /// Short lowercase name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Downloading => "downloading",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracks the state of one scrape task and logs each transition
#[derive(Debug)]
pub struct PageTask {
    url: String,
    state: PageState,
}

impl PageTask {
    /// Creates a task for `url` in the `Pending` state
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: PageState::Pending,
        }
    }

    /// Current state
    pub fn state(&self) -> PageState {
        self.state
    }

    /// URL this task scrapes
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Moves to `next`
    ///
    /// Illegal transitions are a programming error: they trip a debug
    /// assertion and are logged (but applied) in release builds.
    pub fn advance(&mut self, next: PageState) {
        let legal = self.state.can_transition_to(next);
        debug_assert!(legal, "illegal page transition {} -> {}", self.state, next);
        if !legal {
            tracing::warn!(
                "Illegal page transition {} -> {} for {}",
                self.state,
                next,
                self.url
            );
        }
        tracing::trace!("{}: {} -> {}", self.url, self.state, next);
        self.state = next;
    }
}
