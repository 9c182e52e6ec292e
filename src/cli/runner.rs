//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::loader::{load_config, load_state, load_state_from_json};
use crate::render::PaginationRenderer;
use crate::state::PaginationState;
use crate::types::{AnchorSlot, PaginationMode};
use serde_json::json;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Render {
                path,
                mode,
                fragment,
                params,
            } => self.render(path, *mode, fragment.as_deref(), params),
            Commands::Defaults => Ok(self.defaults()),
            Commands::Validate => self.validate(),
        }
    }

    /// Load the pagination state from `--state` or `--state-json`
    fn load_state(&self) -> Result<PaginationState> {
        if let Some(json) = &self.cli.state_json {
            return load_state_from_json(json);
        }
        let path = self
            .cli
            .state
            .as_ref()
            .ok_or_else(|| Error::config("State not specified (use -s or --state-json)"))?;
        load_state(path)
    }

    /// Load the render config, falling back to defaults
    fn load_config(&self) -> Result<RenderConfig> {
        match &self.cli.config {
            Some(path) => load_config(path),
            None => Ok(RenderConfig::default()),
        }
    }

    /// Render the strip with command-line overrides applied
    fn render(
        &self,
        path: &str,
        mode: Option<PaginationMode>,
        fragment: Option<&str>,
        params: &[(String, String)],
    ) -> Result<String> {
        let state = self.load_state()?;
        let mut builder = self.load_config()?.to_builder();

        if let Some(mode) = mode {
            builder = builder.mode(mode);
        }
        if let Some(fragment) = fragment {
            builder = builder.fragment_identifier(fragment);
        }
        for (key, value) in params {
            builder = builder.query_param(key, value);
        }

        let renderer = PaginationRenderer::new(builder.build());
        debug!("Rendering with mode {}", renderer.config().mode);
        let html = renderer.render(&state, path)?;

        Ok(match self.cli.format {
            OutputFormat::Html => html,
            OutputFormat::Json => json!({
                "path": path,
                "current_page": state.current_page,
                "html": html,
            })
            .to_string(),
        })
    }

    /// Built-in anchors
    fn defaults(&self) -> String {
        match self.cli.format {
            OutputFormat::Html => AnchorSlot::ALL
                .iter()
                .map(|slot| {
                    format!(
                        "{:<16}{:<6}{}",
                        slot.key(),
                        slot.default_text(),
                        slot.default_title()
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => {
                let anchors: Vec<_> = AnchorSlot::ALL
                    .iter()
                    .map(|slot| {
                        json!({
                            "slot": slot.key(),
                            "text": slot.default_text(),
                            "title": slot.default_title(),
                        })
                    })
                    .collect();
                serde_json::Value::Array(anchors).to_string()
            }
        }
    }

    /// Validate the state and summarize it
    fn validate(&self) -> Result<String> {
        let state = self.load_state()?;
        info!("Pagination state is valid");

        let active = if state.active_row().is_some() {
            "in window"
        } else {
            "outside window"
        };
        Ok(match self.cli.format {
            OutputFormat::Html => format!(
                "OK: page {} of {} ({}), {} visible rows",
                state.current_page,
                state.last_page,
                active,
                state.rows.len()
            ),
            OutputFormat::Json => json!({
                "valid": true,
                "current_page": state.current_page,
                "last_page": state.last_page,
                "rows": state.rows.len(),
                "current_in_window": state.active_row().is_some(),
            })
            .to_string(),
        })
    }
}
