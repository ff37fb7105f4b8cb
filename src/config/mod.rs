//! Configuration module
//!
//! # Overview
//!
//! The config module provides:
//! - `PaginationConfig` - Immutable controller configuration
//! - `ConfigPatch` - Partial updates applied as a shallow merge
//! - YAML/JSON loading with validation

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str, load_patch_from_str};
pub use types::{
    ConfigPatch, ErrorTemplate, MarkupConfig, MarkupPatch, PaginationConfig, RecordTemplate,
    RemoteConfig, RemotePatch,
};
