//! Rendering module
//!
//! The controller never touches a UI directly. It emits content frames and
//! navigation descriptions to two renderer collaborators.
//!
//! # Overview
//!
//! - `ContentRenderer` - receives `ContentFrame`s for the content region
//! - `NavigationRenderer` - receives a `Navigation` for the control region
//! - `markup` - builds the HTML fragments carried by frames and navigation
//! - `MarkupBuffer` - a renderer that keeps the latest markup in memory

mod buffer;
mod frame;
pub mod markup;

pub use buffer::MarkupBuffer;
pub use frame::{ContentFrame, ContentRenderer, Navigation, NavigationRenderer};
