//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_config, PaginationConfig};
use crate::controller::{FetchOutcome, PaginationController};
use crate::error::{Error, Result};
use crate::render::MarkupBuffer;
use crate::source::{load_records, HttpTransport};
use crate::types::SourceMode;
use crate::window::{compute_window, layout, EdgeMarkers};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Window {
                current,
                pages,
                buttons,
                prev_next,
            } => {
                self.output_message(&window_report(*current, *pages, *buttons, *prev_next));
                Ok(())
            }
            Commands::Page { config, data, page } => {
                self.page(config, data.as_deref(), *page).await
            }
            Commands::Validate { config } => self.validate(config),
        }
    }

    /// Run one page cycle against the configured source
    async fn page(&self, config_path: &Path, data: Option<&Path>, page: u32) -> Result<()> {
        let mut config = load_config(config_path)?;

        if let Some(path) = data {
            let records = load_records(path, &config.record_key)?;
            debug!("Loaded {} local records from {}", records.len(), path.display());
            config.source_mode = SourceMode::Local;
            config.local_source = Some(Arc::new(records));
        }

        let buffer = Arc::new(MarkupBuffer::new());
        let transport = match config.source_mode {
            SourceMode::Remote => Some(HttpTransport::for_remote(&config.remote)?),
            SourceMode::Local => None,
        };
        let mut controller = PaginationController::with_renderer(config, buffer.clone())?;
        if let Some(transport) = transport {
            controller = controller.with_transport(Arc::new(transport));
        }

        let outcome = controller.request_page(page).await;
        self.output_message(&json!({
            "type": "PAGE",
            "result": outcome,
            "state": controller.state(),
            "window": controller.window(),
            "content": buffer.content(),
            "navigation": buffer.navigation(),
        }));

        match outcome {
            FetchOutcome::Failed { message, .. } => Err(Error::transport(message)),
            _ => Ok(()),
        }
    }

    /// Validate a config file
    fn validate(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path)?;
        self.output_message(&validation_report(&config));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Window, edge markers and layout for a position
fn window_report(current: u32, pages: u32, buttons: u32, prev_next: bool) -> Value {
    let window = compute_window(current, pages, buttons);
    let markers = EdgeMarkers::from_window(window, pages);
    let items = layout(current.clamp(1, pages.max(1)), pages, window, prev_next);

    json!({
        "type": "WINDOW",
        "window": window,
        "markers": markers,
        "items": items,
    })
}

fn validation_report(config: &PaginationConfig) -> Value {
    json!({
        "type": "LOG",
        "log": {
            "level": "INFO",
            "message": format!(
                "Config is valid: {} mode, page size {}, {} buttons{}",
                config.source_mode,
                config.page_size,
                config.buttons_to_show,
                if config.lazy_load { ", lazy" } else { "" }
            )
        }
    })
}
