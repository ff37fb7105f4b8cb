//! Render frames and renderer traits

use crate::types::JsonValue;
use crate::window::{NavItem, PageWindow};

/// One update of the content region
#[derive(Debug, Clone, PartialEq)]
pub enum ContentFrame {
    /// Placeholder shown while a page is being fetched
    Loading {
        /// Placeholder markup
        markup: String,
        /// Add below existing content instead of replacing it
        append: bool,
    },
    /// A page of records
    Records {
        /// The records on the page
        records: Vec<JsonValue>,
        /// Records rendered through the record template
        markup: String,
        /// Add below existing content instead of replacing it
        append: bool,
    },
    /// The page holds no records
    NoData {
        /// Configured "no data" markup
        markup: String,
    },
    /// The fetch failed
    Error {
        /// Human-readable failure message
        message: String,
        /// Rendered error markup
        markup: String,
    },
    /// The loading placeholder should be removed without new content
    LoadingCleared,
}

impl ContentFrame {
    /// Markup carried by the frame, if any
    pub fn markup(&self) -> Option<&str> {
        match self {
            ContentFrame::Loading { markup, .. }
            | ContentFrame::Records { markup, .. }
            | ContentFrame::NoData { markup }
            | ContentFrame::Error { markup, .. } => Some(markup),
            ContentFrame::LoadingCleared => None,
        }
    }

    /// Whether the frame adds to the region rather than replacing it
    pub fn is_append(&self) -> bool {
        matches!(
            self,
            ContentFrame::Loading { append: true, .. } | ContentFrame::Records { append: true, .. }
        )
    }

    /// Whether this is a loading placeholder
    pub fn is_loading(&self) -> bool {
        matches!(self, ContentFrame::Loading { .. })
    }
}

/// Navigation region description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    /// Visible page window
    pub window: PageWindow,
    /// Items in display order
    pub items: Vec<NavItem>,
    /// Rendered markup for the items
    pub markup: String,
}

impl Navigation {
    /// Page numbers shown as numbered buttons
    pub fn page_numbers(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter_map(|item| match item {
                NavItem::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }

    /// Check if the region renders nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Receives content-region updates
pub trait ContentRenderer: Send + Sync {
    /// Apply one frame to the content region
    fn render(&self, frame: ContentFrame);
}

/// Receives navigation-region updates
pub trait NavigationRenderer: Send + Sync {
    /// Replace the navigation region
    fn render(&self, navigation: &Navigation);
}
