//! Cycle outcome listener

use crate::types::JsonValue;

/// Observer of cycle outcomes
///
/// Exactly one method fires per completed cycle. Dropped, capped and ignored
/// requests fire nothing.
pub trait PaginationListener: Send + Sync {
    /// A page was rendered (possibly empty)
    fn on_page_rendered(&self, _page: u32, _records: &[JsonValue]) {}

    /// A fetch failed
    fn on_error(&self, _message: &str) {}
}
