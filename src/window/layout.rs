//! Navigation layout derived from a page window

use super::calculator::PageWindow;
use serde::Serialize;

/// Presentation markers implied by a window's position
///
/// Reproducible from `(window, num_pages)` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EdgeMarkers {
    /// Show a "jump to first page" button
    pub first: bool,
    /// Show an ellipsis between the first-page button and the window
    pub leading_ellipsis: bool,
    /// Show an ellipsis between the window and the last-page button
    pub trailing_ellipsis: bool,
    /// Show a "jump to last page" button
    pub last: bool,
}

impl EdgeMarkers {
    /// Derive the edge markers for a window over `num_pages` pages
    pub fn from_window(window: PageWindow, num_pages: u32) -> Self {
        if window.is_empty() || num_pages == 0 {
            return Self::default();
        }
        Self {
            first: window.start > 1,
            leading_ellipsis: window.start > 2,
            trailing_ellipsis: window.end.saturating_add(1) < num_pages,
            last: window.end < num_pages,
        }
    }
}

/// One element of the navigation region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    /// Step back one page
    Previous { page: u32 },
    /// Jump to page 1
    First,
    /// Non-clickable gap marker
    Ellipsis,
    /// A numbered page button
    Page { number: u32, active: bool },
    /// Jump to the last page
    Last { page: u32 },
    /// Step forward one page
    Next { page: u32 },
    /// Append the next page (lazy mode)
    LoadMore { page: u32 },
}

impl NavItem {
    /// Page number carried by the item's `data-page` attribute
    pub fn data_page(&self) -> Option<u32> {
        match *self {
            NavItem::Previous { page }
            | NavItem::Last { page }
            | NavItem::Next { page }
            | NavItem::LoadMore { page } => Some(page),
            NavItem::First => Some(1),
            NavItem::Page { number, .. } => Some(number),
            NavItem::Ellipsis => None,
        }
    }

    /// Whether clicking this item dispatches anything
    pub fn is_clickable(&self) -> bool {
        self.data_page().is_some()
    }
}

/// Lay out the paged navigation region
///
/// With no pages the result is empty: no numbered buttons and no prev/next.
pub fn layout(
    current_page: u32,
    num_pages: u32,
    window: PageWindow,
    show_prev_next: bool,
) -> Vec<NavItem> {
    if num_pages == 0 || window.is_empty() {
        return Vec::new();
    }

    let markers = EdgeMarkers::from_window(window, num_pages);
    let mut items = Vec::with_capacity(window.len() as usize + 6);

    if show_prev_next && current_page > 1 {
        items.push(NavItem::Previous {
            page: current_page - 1,
        });
    }

    if markers.first {
        items.push(NavItem::First);
    }
    if markers.leading_ellipsis {
        items.push(NavItem::Ellipsis);
    }

    items.extend(window.pages().map(|number| NavItem::Page {
        number,
        active: number == current_page,
    }));

    if markers.trailing_ellipsis {
        items.push(NavItem::Ellipsis);
    }
    if markers.last {
        items.push(NavItem::Last { page: num_pages });
    }

    if show_prev_next && current_page < num_pages {
        items.push(NavItem::Next {
            page: current_page + 1,
        });
    }

    items
}

/// Lay out the lazy-mode navigation region: a single "load more" button
/// while more data may exist
pub fn lazy_layout(current_page: u32, has_more_data: bool) -> Vec<NavItem> {
    if has_more_data {
        vec![NavItem::LoadMore {
            page: current_page.saturating_add(1),
        }]
    } else {
        Vec::new()
    }
}
