// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Pagewise
//!
//! A client-side pagination controller: page windows, lazy "load more"
//! accumulation and page requests against a local collection or a remote
//! endpoint.
//!
//! ## Features
//!
//! - **Page Windows**: A fixed-width window of page buttons with first/last
//!   affordances and ellipses
//! - **Local and Remote Sources**: Slice an in-memory collection or request
//!   `offset`/`limit` pages over HTTP
//! - **Lazy Loading**: Append pages up to a configurable ceiling
//! - **Single-flight Fetching**: Requests made during a fetch are dropped
//! - **Snapshots**: Optional persistence of the current page and counts
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagewise::{MarkupBuffer, PaginationConfig, PaginationController};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> pagewise::Result<()> {
//!     let records: Vec<_> = (0..95).map(|i| serde_json::json!({ "id": i })).collect();
//!     let config = PaginationConfig::local(records).with_page_size(10);
//!
//!     let buffer = Arc::new(MarkupBuffer::new());
//!     let controller = PaginationController::with_renderer(config, buffer.clone())?;
//!
//!     controller.request_page(4).await;
//!     println!("{}", buffer.navigation());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   PaginationController                       │
//! │  init()  request_page(n)  load_more()  reload()  update()    │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┼──────────────┬─────────────────┐
//! │   Window   │     Source     │    Render    │     Storage     │
//! ├────────────┼────────────────┼──────────────┼─────────────────┤
//! │ compute    │ Local slice    │ ContentFrame │ Memory          │
//! │ layout     │ HTTP transport │ Navigation   │ File (JSON)     │
//! │ lazy       │ Envelope       │ Markup       │                 │
//! └────────────┴────────────────┴──────────────┴─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page window calculation and navigation layout
pub mod window;

/// Pagination configuration
pub mod config;

/// Template interpolation
pub mod template;

/// Record sources and transports
pub mod source;

/// Content and navigation rendering
pub mod render;

/// Snapshot storage
pub mod storage;

/// Pagination controller
pub mod controller;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, ConfigPatch, PaginationConfig};
pub use controller::{
    FetchOutcome, PaginationController, PaginationListener, PaginationState, Phase,
};
pub use render::{ContentFrame, ContentRenderer, MarkupBuffer, Navigation, NavigationRenderer};
pub use source::{HttpTransport, RequestRate, Transport};
pub use storage::{FileStorage, MemoryStorage, Snapshot, Storage};
pub use window::{compute_window, NavItem, PageWindow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
