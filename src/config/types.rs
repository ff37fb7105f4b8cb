//! Configuration types
//!
//! `PaginationConfig` is an immutable value: the controller replaces it
//! wholesale on every update. `ConfigPatch` carries the fields an update
//! wants to change.

use crate::error::{Error, Result};
use crate::source::{RecordSource, RequestRate};
use crate::types::{JsonValue, Method, OptionStringExt, SourceMode, StringMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Render Callbacks
// ============================================================================

/// Caller-supplied record→markup function
#[derive(Clone)]
pub struct RecordTemplate(Arc<dyn Fn(&JsonValue) -> String + Send + Sync>);

impl RecordTemplate {
    /// Wrap a record→markup function
    pub fn new(f: impl Fn(&JsonValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Render one record
    pub fn render(&self, record: &JsonValue) -> String {
        (self.0)(record)
    }
}

impl fmt::Debug for RecordTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecordTemplate(<fn>)")
    }
}

/// Caller-supplied error message→markup function
#[derive(Clone)]
pub struct ErrorTemplate(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl ErrorTemplate {
    /// Wrap a message→markup function
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Render an error message
    pub fn render(&self, message: &str) -> String {
        (self.0)(message)
    }
}

impl fmt::Debug for ErrorTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorTemplate(<fn>)")
    }
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Complete controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct PaginationConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Where records come from
    #[serde(default)]
    pub source_mode: SourceMode,

    /// Maximum numbered buttons displayed at once
    #[serde(default = "default_buttons_to_show")]
    pub buttons_to_show: u32,

    /// Show « / » step buttons
    #[serde(default)]
    pub show_prev_next: bool,

    /// Accumulate pages ("load more") instead of replacing them
    #[serde(default)]
    pub lazy_load: bool,

    /// Page ceiling for lazy accumulation
    #[serde(default = "default_initial_pages_to_load")]
    pub initial_pages_to_load: u32,

    /// Field holding a page's records in a remote response envelope
    #[serde(default = "default_record_key")]
    pub record_key: String,

    /// Re-render immediately whenever the config is updated
    #[serde(default)]
    pub auto_init: bool,

    /// Storage key for persisting pagination state; `None` disables persistence
    #[serde(default)]
    pub storage_key: Option<String>,

    /// Remote endpoint settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Markup fragments and CSS classes
    #[serde(default)]
    pub markup: MarkupConfig,

    /// Record→markup function; falls back to `markup.record_html`
    #[serde(skip)]
    pub record_template: Option<RecordTemplate>,

    /// Error message→markup function; falls back to `markup.error_html`
    #[serde(skip)]
    pub error_template: Option<ErrorTemplate>,

    /// In-memory records for local mode
    #[serde(skip)]
    pub local_source: Option<Arc<dyn RecordSource>>,
}

fn default_page_size() -> u32 {
    10
}

fn default_buttons_to_show() -> u32 {
    3
}

fn default_initial_pages_to_load() -> u32 {
    3
}

fn default_record_key() -> String {
    "data".to_string()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            source_mode: SourceMode::default(),
            buttons_to_show: default_buttons_to_show(),
            show_prev_next: false,
            lazy_load: false,
            initial_pages_to_load: default_initial_pages_to_load(),
            record_key: default_record_key(),
            auto_init: false,
            storage_key: None,
            remote: RemoteConfig::default(),
            markup: MarkupConfig::default(),
            record_template: None,
            error_template: None,
            local_source: None,
        }
    }
}

impl PaginationConfig {
    /// Create a local-mode config over an in-memory collection
    pub fn local(records: impl RecordSource + 'static) -> Self {
        Self {
            source_mode: SourceMode::Local,
            local_source: Some(Arc::new(records)),
            ..Default::default()
        }
    }

    /// Create a remote-mode config for an endpoint
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            source_mode: SourceMode::Remote,
            remote: RemoteConfig {
                url: Some(url.into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the button budget
    #[must_use]
    pub fn with_buttons_to_show(mut self, buttons: u32) -> Self {
        self.buttons_to_show = buttons;
        self
    }

    /// Toggle prev/next buttons
    #[must_use]
    pub fn with_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }

    /// Enable lazy accumulation with a page ceiling
    #[must_use]
    pub fn with_lazy_load(mut self, initial_pages_to_load: u32) -> Self {
        self.lazy_load = true;
        self.initial_pages_to_load = initial_pages_to_load;
        self
    }

    /// Set the envelope record key
    #[must_use]
    pub fn with_record_key(mut self, key: impl Into<String>) -> Self {
        self.record_key = key.into();
        self
    }

    /// Enable state persistence under a storage key
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Set the record→markup function
    #[must_use]
    pub fn with_record_template(
        mut self,
        f: impl Fn(&JsonValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.record_template = Some(RecordTemplate::new(f));
        self
    }

    /// Set the error→markup function
    #[must_use]
    pub fn with_error_template(
        mut self,
        f: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.error_template = Some(ErrorTemplate::new(f));
        self
    }

    /// Set the markup config
    #[must_use]
    pub fn with_markup(mut self, markup: MarkupConfig) -> Self {
        self.markup = markup;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.buttons_to_show == 0 {
            return Err(Error::invalid_value("buttons_to_show", "must be at least 1"));
        }
        if self.lazy_load && self.initial_pages_to_load == 0 {
            return Err(Error::invalid_value(
                "initial_pages_to_load",
                "must be at least 1 when lazy_load is enabled",
            ));
        }
        if self.record_key.trim().is_empty() {
            return Err(Error::invalid_value("record_key", "cannot be empty"));
        }
        if self.source_mode == SourceMode::Remote {
            self.remote.validate()?;
        }
        Ok(())
    }

    /// Apply a patch (shallow merge) and validate the result
    ///
    /// The receiver is left untouched; on error nothing of the patch applies.
    pub fn merged(&self, patch: ConfigPatch) -> Result<Self> {
        let mut next = self.clone();
        next.apply(patch);
        next.validate()?;
        Ok(next)
    }

    fn apply(&mut self, patch: ConfigPatch) {
        let ConfigPatch {
            page_size,
            source_mode,
            buttons_to_show,
            show_prev_next,
            lazy_load,
            initial_pages_to_load,
            record_key,
            auto_init,
            storage_key,
            remote,
            markup,
            record_template,
            error_template,
            local_source,
        } = patch;

        if let Some(v) = page_size {
            self.page_size = v;
        }
        if let Some(v) = source_mode {
            self.source_mode = v;
        }
        if let Some(v) = buttons_to_show {
            self.buttons_to_show = v;
        }
        if let Some(v) = show_prev_next {
            self.show_prev_next = v;
        }
        if let Some(v) = lazy_load {
            self.lazy_load = v;
        }
        if let Some(v) = initial_pages_to_load {
            self.initial_pages_to_load = v;
        }
        if let Some(v) = record_key.none_if_empty() {
            self.record_key = v;
        }
        if let Some(v) = auto_init {
            self.auto_init = v;
        }
        if let Some(v) = storage_key.none_if_empty() {
            self.storage_key = Some(v);
        }
        if let Some(r) = remote {
            self.remote.apply(r);
        }
        if let Some(m) = markup {
            self.markup.apply(m);
        }
        if record_template.is_some() {
            self.record_template = record_template;
        }
        if error_template.is_some() {
            self.error_template = error_template;
        }
        if local_source.is_some() {
            self.local_source = local_source;
        }
    }
}

// ============================================================================
// Remote Config
// ============================================================================

/// Settings for reaching a remote data source
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RemoteConfig {
    /// Endpoint URL (absolute)
    #[serde(default)]
    pub url: Option<String>,

    /// HTTP method
    #[serde(default)]
    pub method: Method,

    /// Request headers
    #[serde(default)]
    pub headers: StringMap,

    /// Extra fields sent with every page request
    #[serde(default)]
    pub params: serde_json::Map<String, JsonValue>,

    /// Request field carrying the record offset
    #[serde(default = "default_offset_param")]
    pub offset_param: String,

    /// Request field carrying the page size
    #[serde(default = "default_limit_param")]
    pub limit_param: String,

    /// Ceiling on outgoing page requests
    #[serde(default)]
    pub rate_limit: Option<RequestRate>,
}

fn default_offset_param() -> String {
    "offset".to_string()
}

fn default_limit_param() -> String {
    "limit".to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: None,
            method: Method::default(),
            headers: StringMap::new(),
            params: serde_json::Map::new(),
            offset_param: default_offset_param(),
            limit_param: default_limit_param(),
            rate_limit: None,
        }
    }
}

impl RemoteConfig {
    /// Validate the remote settings
    pub fn validate(&self) -> Result<()> {
        let url = self
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| Error::invalid_value("remote.url", "required in remote mode"))?;
        url::Url::parse(url)?;

        if self.offset_param.is_empty() || self.limit_param.is_empty() {
            return Err(Error::invalid_value(
                "remote",
                "offset_param and limit_param cannot be empty",
            ));
        }
        if let Some(rate) = &self.rate_limit {
            rate.validate()?;
        }
        Ok(())
    }

    fn apply(&mut self, patch: RemotePatch) {
        if let Some(v) = patch.url.none_if_empty() {
            self.url = Some(v);
        }
        if let Some(v) = patch.method {
            self.method = v;
        }
        if let Some(headers) = patch.headers {
            self.headers.extend(headers);
        }
        if let Some(params) = patch.params {
            self.params.extend(params);
        }
        if let Some(v) = patch.offset_param.none_if_empty() {
            self.offset_param = v;
        }
        if let Some(v) = patch.limit_param.none_if_empty() {
            self.limit_param = v;
        }
        if let Some(rate) = patch.rate_limit {
            self.rate_limit = Some(rate);
        }
    }
}

// ============================================================================
// Markup Config
// ============================================================================

/// Markup fragments and CSS classes used when rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct MarkupConfig {
    /// Placeholder for one record while a page loads (repeated page_size times)
    #[serde(default = "default_loading_html")]
    pub loading_html: String,

    /// Shown when a page has no records
    #[serde(default = "default_no_data_html")]
    pub no_data_html: String,

    /// Shown when a fetch fails; `{{ message }}` is replaced with the error text
    #[serde(default = "default_error_html")]
    pub error_html: String,

    /// Record markup template used when no record function is supplied
    #[serde(default)]
    pub record_html: Option<String>,

    /// Class of the navigation `<ul>`
    #[serde(default = "default_pagination_class")]
    pub pagination_class: String,

    /// Class of every navigation `<li>`
    #[serde(default = "default_page_item_class")]
    pub page_item_class: String,

    /// Class of every navigation link
    #[serde(default = "default_page_link_class")]
    pub page_link_class: String,

    /// Extra class on the current page's `<li>`
    #[serde(default = "default_active_page_class")]
    pub active_page_class: String,

    /// Label of the lazy-mode "load more" button
    #[serde(default = "default_load_more_label")]
    pub load_more_label: String,
}

fn default_loading_html() -> String {
    r#"<div class="placeholder-glow"><span class="placeholder col-12"></span></div>"#.to_string()
}

fn default_no_data_html() -> String {
    "No Data is on Server".to_string()
}

fn default_error_html() -> String {
    r#"<div class="alert alert-danger" role="alert">{{ message }}</div>"#.to_string()
}

fn default_pagination_class() -> String {
    "pagination pagination-sm mb-0".to_string()
}

fn default_page_item_class() -> String {
    "page-item".to_string()
}

fn default_page_link_class() -> String {
    "page-link".to_string()
}

fn default_active_page_class() -> String {
    "active".to_string()
}

fn default_load_more_label() -> String {
    "Load more".to_string()
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            loading_html: default_loading_html(),
            no_data_html: default_no_data_html(),
            error_html: default_error_html(),
            record_html: None,
            pagination_class: default_pagination_class(),
            page_item_class: default_page_item_class(),
            page_link_class: default_page_link_class(),
            active_page_class: default_active_page_class(),
            load_more_label: default_load_more_label(),
        }
    }
}

impl MarkupConfig {
    fn apply(&mut self, patch: MarkupPatch) {
        let MarkupPatch {
            loading_html,
            no_data_html,
            error_html,
            record_html,
            pagination_class,
            page_item_class,
            page_link_class,
            active_page_class,
            load_more_label,
        } = patch;

        for (slot, value) in [
            (&mut self.loading_html, loading_html),
            (&mut self.no_data_html, no_data_html),
            (&mut self.error_html, error_html),
            (&mut self.pagination_class, pagination_class),
            (&mut self.page_item_class, page_item_class),
            (&mut self.page_link_class, page_link_class),
            (&mut self.active_page_class, active_page_class),
            (&mut self.load_more_label, load_more_label),
        ] {
            if let Some(v) = value.none_if_empty() {
                *slot = v;
            }
        }
        if let Some(v) = record_html.none_if_empty() {
            self.record_html = Some(v);
        }
    }
}

// ============================================================================
// Patches
// ============================================================================

/// A partial configuration update; `None` fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ConfigPatch {
    pub page_size: Option<u32>,
    pub source_mode: Option<SourceMode>,
    pub buttons_to_show: Option<u32>,
    pub show_prev_next: Option<bool>,
    pub lazy_load: Option<bool>,
    pub initial_pages_to_load: Option<u32>,
    pub record_key: Option<String>,
    pub auto_init: Option<bool>,
    pub storage_key: Option<String>,
    pub remote: Option<RemotePatch>,
    pub markup: Option<MarkupPatch>,
    #[serde(skip)]
    pub record_template: Option<RecordTemplate>,
    #[serde(skip)]
    pub error_template: Option<ErrorTemplate>,
    #[serde(skip)]
    pub local_source: Option<Arc<dyn RecordSource>>,
}

impl ConfigPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the page size
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Change the source mode
    #[must_use]
    pub fn source_mode(mut self, mode: SourceMode) -> Self {
        self.source_mode = Some(mode);
        self
    }

    /// Change the button budget
    #[must_use]
    pub fn buttons_to_show(mut self, buttons: u32) -> Self {
        self.buttons_to_show = Some(buttons);
        self
    }

    /// Toggle prev/next buttons
    #[must_use]
    pub fn show_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = Some(show);
        self
    }

    /// Toggle auto-init
    #[must_use]
    pub fn auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = Some(auto_init);
        self
    }

    /// Replace the local record collection
    #[must_use]
    pub fn local_source(mut self, records: impl RecordSource + 'static) -> Self {
        self.local_source = Some(Arc::new(records));
        self
    }

    /// Replace the record→markup function
    #[must_use]
    pub fn record_template(
        mut self,
        f: impl Fn(&JsonValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.record_template = Some(RecordTemplate::new(f));
        self
    }

    /// Change markup fragments
    #[must_use]
    pub fn markup(mut self, markup: MarkupPatch) -> Self {
        self.markup = Some(markup);
        self
    }

    /// Change remote settings
    #[must_use]
    pub fn remote(mut self, remote: RemotePatch) -> Self {
        self.remote = Some(remote);
        self
    }
}

/// Partial update of [`RemoteConfig`]; headers and params merge key-wise
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RemotePatch {
    pub url: Option<String>,
    pub method: Option<Method>,
    pub headers: Option<StringMap>,
    pub params: Option<serde_json::Map<String, JsonValue>>,
    pub offset_param: Option<String>,
    pub limit_param: Option<String>,
    pub rate_limit: Option<RequestRate>,
}

/// Partial update of [`MarkupConfig`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct MarkupPatch {
    pub loading_html: Option<String>,
    pub no_data_html: Option<String>,
    pub error_html: Option<String>,
    pub record_html: Option<String>,
    pub pagination_class: Option<String>,
    pub page_item_class: Option<String>,
    pub page_link_class: Option<String>,
    pub active_page_class: Option<String>,
    pub load_more_label: Option<String>,
}
