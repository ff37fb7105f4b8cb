//! Controller types
//!
//! State, phases and cycle outcomes for the pagination controller.

use crate::storage::Snapshot;
use crate::window::num_pages;
use serde::Serialize;

/// Where the controller is in its fetch cycle
///
/// Every phase except `Fetching` accepts new requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No cycle has completed yet
    #[default]
    Idle,
    /// A fetch is in flight
    Fetching,
    /// The last cycle rendered a page
    Rendered,
    /// The last cycle failed
    Errored,
}

/// Mutable pagination state, owned by one controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// Page currently shown (1-based)
    pub current_page: u32,
    /// Total records reported by the source (informational)
    pub records_total: u64,
    /// Records after filtering; drives the page count
    pub records_filtered: u64,
    /// At most one fetch is in flight while this is set
    pub is_fetching: bool,
    /// Lazy mode: whether another page may be appended
    pub has_more_data: bool,
    /// Cycle phase
    pub phase: Phase,
    /// Whether `init` has run
    pub initialized: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            records_total: 0,
            records_filtered: 0,
            is_fetching: false,
            has_more_data: true,
            phase: Phase::Idle,
            initialized: false,
        }
    }
}

impl PaginationState {
    /// Create the initial state: page 1, zero counts, not fetching
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages at the given page size
    pub fn num_pages(&self, page_size: u32) -> u32 {
        num_pages(self.records_filtered, page_size)
    }

    /// Highest page the current page may sit on
    pub fn max_page(&self, page_size: u32) -> u32 {
        self.num_pages(page_size).max(1)
    }

    /// Persistable view of the state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            current_page: self.current_page,
            records_total: self.records_total,
            records_filtered: self.records_filtered,
        }
    }

    /// Restore counts and page from a snapshot, keeping the page in range
    pub fn restore(&mut self, snapshot: &Snapshot, page_size: u32) {
        self.records_total = snapshot.records_total;
        self.records_filtered = snapshot.records_filtered;
        self.current_page = snapshot.current_page.clamp(1, self.max_page(page_size));
    }
}

/// What a lifecycle operation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// A page of records was rendered
    Rendered {
        /// The page now shown
        page: u32,
        /// Records on the page
        records: usize,
    },
    /// The page was fetched but holds no records
    Empty {
        /// The page now shown
        page: u32,
    },
    /// The fetch failed; the current page is unchanged
    Failed {
        /// The page that was requested
        page: u32,
        /// Human-readable failure message
        message: String,
    },
    /// Lazy mode: the page lies past the page ceiling and was not fetched
    Capped {
        /// The page that was requested
        page: u32,
    },
    /// Another fetch was in flight; the request was dropped
    Dropped,
    /// Nothing to do (same page, lazy mode exhausted, bad click target)
    Ignored,
}

impl FetchOutcome {
    /// Whether a cycle ran to a rendered page
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. } | Self::Empty { .. })
    }

    /// Whether the request was rejected by the in-flight guard
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped)
    }
}
