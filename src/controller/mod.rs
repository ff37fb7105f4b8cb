//! Pagination controller
//!
//! Owns the pagination state and runs fetch cycles.
//!
//! # Overview
//!
//! The controller module provides:
//! - `PaginationController` - request, lazy append, reload, config update
//! - `PaginationState` / `Phase` - observable state of the controller
//! - `FetchOutcome` - what a lifecycle operation did
//! - `PaginationListener` - success and error callbacks
//!
//! # Fetch cycle
//!
//! 1. Drop the request if another fetch is in flight
//! 2. Emit a loading frame (appended in lazy mode)
//! 3. Lazy mode past the page ceiling: stop, clear the placeholder
//! 4. Fetch the page slice from the local collection or the transport
//! 5. On success: update counts and page, render content then navigation
//! 6. On failure: render the error, keep the current page

mod listener;
mod types;

pub use listener::PaginationListener;
pub use types::{FetchOutcome, PaginationState, Phase};

use crate::config::{ConfigPatch, PaginationConfig};
use crate::error::{Error, Result};
use crate::render::markup::{error_markup, loading_markup, navigation_markup, records_markup};
use crate::render::{ContentFrame, ContentRenderer, Navigation, NavigationRenderer};
use crate::source::{Envelope, Transport, TransportRequest};
use crate::storage::Storage;
use crate::types::{JsonValue, SourceMode};
use crate::window::{compute_window, lazy_layout, layout, offset_for, PageWindow};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use tracing::{debug, info, warn};

/// Client-side pagination controller
///
/// All operations take `&self`; the controller can be shared behind an `Arc`.
/// At most one fetch is in flight at any time. Requests made while a fetch is
/// running are dropped, not queued.
pub struct PaginationController {
    /// Active configuration, replaced wholesale on update
    config: RwLock<Arc<PaginationConfig>>,
    /// Pagination state
    state: Mutex<PaginationState>,
    /// Content region renderer
    content: Arc<dyn ContentRenderer>,
    /// Navigation region renderer
    navigation: Arc<dyn NavigationRenderer>,
    /// Remote transport
    transport: Option<Arc<dyn Transport>>,
    /// Snapshot storage
    storage: Option<Arc<dyn Storage>>,
    /// Outcome listener
    listener: Option<Arc<dyn PaginationListener>>,
}

impl PaginationController {
    /// Create a controller
    ///
    /// The configuration is validated here. Remote mode also needs a
    /// transport, attached with [`PaginationController::with_transport`].
    /// Construction never fetches; call [`PaginationController::init`] when
    /// `auto_init` is set.
    pub fn new(
        config: PaginationConfig,
        content: Arc<dyn ContentRenderer>,
        navigation: Arc<dyn NavigationRenderer>,
    ) -> Result<Self> {
        config.validate()?;
        debug!(
            "Creating pagination controller: mode={}, page_size={}, lazy={}",
            config.source_mode, config.page_size, config.lazy_load
        );

        Ok(Self {
            config: RwLock::new(Arc::new(config)),
            state: Mutex::new(PaginationState::new()),
            content,
            navigation,
            transport: None,
            storage: None,
            listener: None,
        })
    }

    /// Create a controller that renders both regions to one renderer
    pub fn with_renderer<R>(config: PaginationConfig, renderer: Arc<R>) -> Result<Self>
    where
        R: ContentRenderer + NavigationRenderer + 'static,
    {
        Self::new(config, renderer.clone(), renderer)
    }

    /// Set the transport used in remote mode
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set snapshot storage (used when `storage_key` is configured)
    #[must_use]
    pub fn with_storage(mut self, storage: Arc<dyn Storage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set the outcome listener
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn PaginationListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current configuration
    pub fn config(&self) -> Arc<PaginationConfig> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Copy of the current state
    pub fn state(&self) -> PaginationState {
        *self.lock_state()
    }

    /// Current page (1-based)
    pub fn current_page(&self) -> u32 {
        self.lock_state().current_page
    }

    /// Number of pages for the current counts and page size
    pub fn num_pages(&self) -> u32 {
        let page_size = self.config().page_size;
        self.lock_state().num_pages(page_size)
    }

    /// Whether a fetch is in flight
    pub fn is_fetching(&self) -> bool {
        self.lock_state().is_fetching
    }

    /// Visible page window for the current state
    pub fn window(&self) -> PageWindow {
        let config = self.config();
        let state = self.state();
        compute_window(
            state.current_page,
            state.num_pages(config.page_size),
            config.buttons_to_show,
        )
    }

    /// Navigation for the current state, without rendering it
    pub fn navigation(&self) -> Navigation {
        let config = self.config();
        build_navigation(&config, &self.state())
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Restore persisted state (first call only) and request the current page
    pub async fn init(&self) -> FetchOutcome {
        let config = self.config();
        let first = {
            let mut state = self.lock_state();
            let first = !state.initialized && !state.is_fetching;
            state.initialized = true;
            first
        };

        if first {
            self.restore(&config);
        }

        let page = self.current_page();
        info!("Initializing pagination at page {page}");
        self.request_page(page).await
    }

    /// Request a page, replacing the content region
    ///
    /// Page 0 is treated as page 1. Pages past the end are fetched as-is and
    /// render the "no data" frame.
    pub async fn request_page(&self, page: u32) -> FetchOutcome {
        self.run_cycle(page.max(1), false).await
    }

    /// Lazy mode: append the page after the current one
    pub async fn load_more(&self) -> FetchOutcome {
        if !self.config().lazy_load {
            debug!("load_more ignored: lazy loading is disabled");
            return FetchOutcome::Ignored;
        }

        let next = {
            let state = self.lock_state();
            if state.is_fetching {
                debug!("load_more dropped: fetch in flight");
                return FetchOutcome::Dropped;
            }
            if !state.has_more_data {
                debug!("load_more ignored: no more data");
                return FetchOutcome::Ignored;
            }
            state.current_page.saturating_add(1)
        };

        self.run_cycle(next, true).await
    }

    /// Reset to page 1, clear persisted state and request page 1
    pub async fn reload(&self) -> FetchOutcome {
        {
            let mut state = self.lock_state();
            if state.is_fetching {
                debug!("reload dropped: fetch in flight");
                return FetchOutcome::Dropped;
            }
            state.current_page = 1;
            state.has_more_data = true;
        }

        let config = self.config();
        if let (Some(storage), Some(key)) = (&self.storage, &config.storage_key) {
            if let Err(e) = storage.remove(key) {
                warn!("Failed to clear pagination snapshot '{key}': {e}");
            }
        }

        info!("Reloading pagination");
        self.request_page(1).await
    }

    /// Merge a partial configuration
    ///
    /// The merged configuration is validated before it replaces the current
    /// one; on error nothing changes. The current page is re-requested when
    /// `auto_init` is set or a fetch is in flight (the re-request is then
    /// dropped by the in-flight guard).
    pub async fn update_config(&self, patch: ConfigPatch) -> Result<Option<FetchOutcome>> {
        let merged = self.config().merged(patch)?;
        let refetch = merged.auto_init || self.is_fetching();

        {
            let mut state = self.lock_state();
            if !state.is_fetching {
                let max_page = state.max_page(merged.page_size);
                state.current_page = state.current_page.min(max_page);
            }
        }
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(merged);
        debug!("Pagination config updated");

        if refetch {
            let page = self.current_page();
            Ok(Some(self.request_page(page).await))
        } else {
            Ok(None)
        }
    }

    /// Handle a click on a navigation item carrying `data-page`
    ///
    /// In lazy mode every click loads more. Otherwise the target page is
    /// requested unless it is already current. Unparseable targets are ignored.
    pub async fn handle_click(&self, data_page: &str) -> FetchOutcome {
        let Ok(page) = data_page.trim().parse::<u32>() else {
            debug!("Ignoring click with invalid page target '{data_page}'");
            return FetchOutcome::Ignored;
        };

        if self.config().lazy_load {
            return self.load_more().await;
        }
        if page == 0 || page == self.current_page() {
            return FetchOutcome::Ignored;
        }
        self.request_page(page).await
    }

    /// Write the current state to storage
    ///
    /// Returns `false` when no storage or key is configured, or a fetch is in
    /// flight.
    pub fn persist(&self) -> Result<bool> {
        let config = self.config();
        let (Some(storage), Some(key)) = (&self.storage, &config.storage_key) else {
            return Ok(false);
        };

        let snapshot = {
            let state = self.lock_state();
            if state.is_fetching {
                debug!("Skipping persist: fetch in flight");
                return Ok(false);
            }
            state.snapshot()
        };

        storage.set(key, &snapshot)?;
        debug!("Persisted pagination snapshot '{key}' at page {}", snapshot.current_page);
        Ok(true)
    }

    // ========================================================================
    // Fetch cycle
    // ========================================================================

    async fn run_cycle(&self, page: u32, append: bool) -> FetchOutcome {
        {
            let mut state = self.lock_state();
            if state.is_fetching {
                debug!("Dropping request for page {page}: fetch in flight");
                return FetchOutcome::Dropped;
            }
            state.is_fetching = true;
            state.phase = Phase::Fetching;
        }

        // Configuration is fixed for the rest of the cycle
        let config = self.config();
        let mut guard = FetchGuard::new(self);

        self.content.render(ContentFrame::Loading {
            markup: loading_markup(&config.markup, config.page_size),
            append,
        });

        if config.lazy_load && page > config.initial_pages_to_load {
            debug!(
                "Page {page} is past the lazy ceiling of {}",
                config.initial_pages_to_load
            );
            self.lock_state().has_more_data = false;
            drop(guard);
            self.render_navigation(&config);
            return FetchOutcome::Capped { page };
        }

        let offset = offset_for(page, config.page_size);
        debug!("Fetching page {page} (offset {offset}, limit {})", config.page_size);

        let result = self.fetch(&config, offset).await.and_then(|envelope| {
            let markup = records_markup(&config, page, &envelope.records)?;
            Ok((envelope, markup))
        });

        match result {
            Ok((envelope, markup)) => {
                let records = envelope.records;
                {
                    let mut state = self.lock_state();
                    state.records_total = envelope.records_total;
                    state.records_filtered = envelope.records_filtered;
                    state.current_page = page;
                    if config.lazy_load
                        && (records.is_empty() || page >= state.num_pages(config.page_size))
                    {
                        state.has_more_data = false;
                    }
                }

                let count = records.len();
                let frame = if records.is_empty() && !append {
                    ContentFrame::NoData {
                        markup: config.markup.no_data_html.clone(),
                    }
                } else {
                    ContentFrame::Records {
                        records: records.clone(),
                        markup,
                        append,
                    }
                };
                self.content.render(frame);
                guard.settle(Phase::Rendered);
                self.render_navigation(&config);

                info!("Rendered page {page} with {count} records");
                if let Some(ref listener) = self.listener {
                    listener.on_page_rendered(page, &records);
                }

                if count == 0 {
                    FetchOutcome::Empty { page }
                } else {
                    FetchOutcome::Rendered {
                        page,
                        records: count,
                    }
                }
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Failed to fetch page {page}: {message}");

                self.content.render(ContentFrame::Error {
                    markup: error_markup(&config, &message),
                    message: message.clone(),
                });
                guard.settle(Phase::Errored);

                if let Some(ref listener) = self.listener {
                    listener.on_error(&message);
                }
                FetchOutcome::Failed { page, message }
            }
        }
    }

    async fn fetch(&self, config: &PaginationConfig, offset: u64) -> Result<Envelope> {
        match config.source_mode {
            SourceMode::Local => {
                let (records, len) = match config.local_source {
                    Some(ref source) => {
                        let start = usize::try_from(offset).unwrap_or(usize::MAX);
                        (source.slice(start, config.page_size as usize), source.len())
                    }
                    None => (Vec::<JsonValue>::new(), 0),
                };
                Ok(Envelope::local(records, len))
            }
            SourceMode::Remote => {
                let transport = self
                    .transport
                    .as_ref()
                    .ok_or_else(|| Error::transport("no transport configured for remote mode"))?;
                let request = TransportRequest::for_page(&config.remote, offset, config.page_size)?;
                let body = transport.send(request).await?;
                Envelope::from_value(&body, &config.record_key)?.into_result()
            }
        }
    }

    fn restore(&self, config: &PaginationConfig) {
        let (Some(storage), Some(key)) = (&self.storage, &config.storage_key) else {
            return;
        };

        match storage.get(key) {
            Ok(Some(snapshot)) => {
                self.lock_state().restore(&snapshot, config.page_size);
                info!(
                    "Restored pagination snapshot '{key}' at page {}",
                    snapshot.current_page
                );
            }
            Ok(None) => debug!("No pagination snapshot under '{key}'"),
            Err(e) => warn!("Failed to read pagination snapshot '{key}': {e}"),
        }
    }

    fn render_navigation(&self, config: &PaginationConfig) {
        let navigation = build_navigation(config, &self.state());
        self.navigation.render(&navigation);
    }

    fn lock_state(&self) -> MutexGuard<'_, PaginationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("config", &self.config())
            .field("state", &self.state())
            .field("has_transport", &self.transport.is_some())
            .field("has_storage", &self.storage.is_some())
            .finish_non_exhaustive()
    }
}

fn build_navigation(config: &PaginationConfig, state: &PaginationState) -> Navigation {
    let num_pages = state.num_pages(config.page_size);
    let window = compute_window(state.current_page, num_pages, config.buttons_to_show);
    let items = if config.lazy_load {
        lazy_layout(state.current_page, state.has_more_data)
    } else {
        layout(state.current_page, num_pages, window, config.show_prev_next)
    };
    let markup = navigation_markup(&items, &config.markup);

    Navigation {
        window,
        items,
        markup,
    }
}

/// Clears the in-flight flag when a cycle ends
///
/// A cycle that ends without a final frame (lazy ceiling, cancelled future,
/// panic) also emits `LoadingCleared` so the placeholder does not linger.
struct FetchGuard<'a> {
    controller: &'a PaginationController,
    settled: bool,
}

impl<'a> FetchGuard<'a> {
    fn new(controller: &'a PaginationController) -> Self {
        Self {
            controller,
            settled: false,
        }
    }

    fn settle(&mut self, phase: Phase) {
        let mut state = self.controller.lock_state();
        state.is_fetching = false;
        state.phase = phase;
        self.settled = true;
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        {
            let mut state = self.controller.lock_state();
            state.is_fetching = false;
            state.phase = Phase::Idle;
        }
        // A renderer that panicked must not be called again mid-unwind
        if !std::thread::panicking() {
            self.controller.content.render(ContentFrame::LoadingCleared);
        }
    }
}
