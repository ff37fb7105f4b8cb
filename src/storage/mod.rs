//! Storage module
//!
//! Persists pagination state between sessions.
//!
//! # Overview
//!
//! The storage module provides:
//! - `Storage` - Synchronous key-value surface (last write wins)
//! - `Snapshot` - The persisted slice of pagination state
//! - `MemoryStorage` - In-process map, handy for tests and embedding
//! - `FileStorage` - JSON file persistence with atomic writes
//!
//! The controller touches storage only at `init`, `reload` and `persist`,
//! never while a fetch is in flight.

mod file;
mod memory;
mod types;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use types::{Snapshot, Storage};

#[cfg(test)]
mod tests;
