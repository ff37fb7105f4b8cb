//! CLI module
//!
//! Command-line interface for inspecting windows and running page cycles.
//!
//! # Commands
//!
//! - `window` - Compute the visible page window and navigation layout
//! - `page` - Run one fetch cycle and print the rendered markup
//! - `validate` - Validate a pagination config file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
