//! Window calculation
//!
//! `compute_window` is a pure function: no state, no allocation, no I/O.

use serde::Serialize;
use std::ops::RangeInclusive;

/// An inclusive range of page numbers shown as numbered buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// First visible page (1-based)
    pub start: u32,
    /// Last visible page (inclusive)
    pub end: u32,
}

impl PageWindow {
    /// The window shown when there are no pages at all
    pub const EMPTY: Self = Self { start: 1, end: 0 };

    /// Create a window from its bounds
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check if the window holds no pages
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of pages in the window
    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Check if a page falls inside the window
    pub fn contains(&self, page: u32) -> bool {
        !self.is_empty() && self.start <= page && page <= self.end
    }

    /// Iterate over the page numbers in the window
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Number of pages needed to show `records` records at `page_size` per page
///
/// A zero page size yields zero pages rather than dividing by zero.
pub fn num_pages(records: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = records.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Zero-based record offset of the first record on `page`
pub fn offset_for(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Compute the visible page window
///
/// The window is centred on `current_page` (the current page sits at index
/// `buttons_to_show / 2`). When centring pushes past an edge the window is
/// shifted back inside `[1, num_pages]`, extending toward the far edge first
/// and then the near edge, so it is exactly `buttons_to_show` wide whenever
/// `num_pages >= buttons_to_show` and exactly `[1, num_pages]` otherwise.
///
/// `current_page` outside `[1, num_pages]` is treated as the nearest edge.
/// A zero `buttons_to_show` is treated as one.
pub fn compute_window(current_page: u32, num_pages: u32, buttons_to_show: u32) -> PageWindow {
    if num_pages == 0 {
        return PageWindow::EMPTY;
    }

    let n = i64::from(num_pages);
    let buttons = i64::from(buttons_to_show.max(1));
    let current = i64::from(current_page).clamp(1, n);
    let half = buttons / 2;

    let mut start = current - half;
    let mut end = start + buttons - 1;

    // Clamped at the leading edge: push the surplus toward the far edge
    if start < 1 {
        end += 1 - start;
        start = 1;
    }
    // Clamped at the trailing edge: give the surplus back to the near edge
    if end > n {
        start -= end - n;
        end = n;
    }
    start = start.max(1);

    PageWindow {
        start: start as u32,
        end: end as u32,
    }
}
