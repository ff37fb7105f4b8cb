//! In-memory renderer

use super::frame::{ContentFrame, ContentRenderer, Navigation, NavigationRenderer};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct Regions {
    content: String,
    navigation: String,
    frames: usize,
}

/// Renderer that keeps the current markup of both regions in memory
///
/// Append frames extend the content; everything else replaces it. A loading
/// placeholder is dropped again once the final frame of its cycle arrives.
#[derive(Debug, Default)]
pub struct MarkupBuffer {
    regions: Mutex<Regions>,
    /// Content before the loading placeholder was added
    before_loading: Mutex<Option<String>>,
}

impl MarkupBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content-region markup
    pub fn content(&self) -> String {
        self.regions().content.clone()
    }

    /// Current navigation-region markup
    pub fn navigation(&self) -> String {
        self.regions().navigation.clone()
    }

    /// Number of content frames received
    pub fn frames(&self) -> usize {
        self.regions().frames
    }

    fn regions(&self) -> MutexGuard<'_, Regions> {
        self.regions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn stash(&self) -> MutexGuard<'_, Option<String>> {
        self.before_loading
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentRenderer for MarkupBuffer {
    fn render(&self, frame: ContentFrame) {
        let mut regions = self.regions();
        let mut stash = self.stash();
        regions.frames += 1;

        match frame {
            ContentFrame::Loading { markup, append } => {
                *stash = Some(regions.content.clone());
                if append {
                    regions.content.push_str(&markup);
                } else {
                    regions.content = markup;
                }
            }
            ContentFrame::Records {
                markup,
                append: true,
                ..
            } => {
                let base = stash.take().unwrap_or_else(|| regions.content.clone());
                regions.content = base + &markup;
            }
            ContentFrame::LoadingCleared => {
                if let Some(base) = stash.take() {
                    regions.content = base;
                }
            }
            other => {
                stash.take();
                regions.content = other.markup().unwrap_or_default().to_string();
            }
        }
    }
}

impl NavigationRenderer for MarkupBuffer {
    fn render(&self, navigation: &Navigation) {
        self.regions().navigation = navigation.markup.clone();
    }
}
