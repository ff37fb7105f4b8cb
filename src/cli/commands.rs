//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagewise pagination CLI
#[derive(Parser, Debug)]
#[command(name = "pagewise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the page window for a position
    Window {
        /// Current page (1-based)
        #[arg(long, default_value = "1")]
        current: u32,

        /// Total number of pages
        #[arg(long)]
        pages: u32,

        /// Number of page buttons to show
        #[arg(long, default_value = "3")]
        buttons: u32,

        /// Include previous/next controls in the layout
        #[arg(long)]
        prev_next: bool,
    },

    /// Run one page cycle and print the rendered markup
    Page {
        /// Pagination config file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: PathBuf,

        /// Local records file (JSON array, or object holding `record_key`)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Page to request
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Validate a pagination config file
    Validate {
        /// Pagination config file (YAML or JSON)
        #[arg(short = 'C', long)]
        config: PathBuf,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
