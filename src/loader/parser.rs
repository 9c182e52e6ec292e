//! Parser for state and config documents
//!
//! YAML is the document format; JSON documents are accepted through the
//! same path since JSON parses as YAML.

use crate::config::{RenderConfig, RenderConfigFile};
use crate::error::{Error, Result, ResultExt};
use crate::state::PaginationState;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and validate a pagination state from a file
pub fn load_state(path: impl AsRef<Path>) -> Result<PaginationState> {
    let path = path.as_ref();
    let content = read_file(path)?;
    load_state_from_str(&content)
        .with_context(|| format!("Invalid state file '{}'", path.display()))
}

/// Load and validate a pagination state from a YAML or JSON string
pub fn load_state_from_str(yaml: &str) -> Result<PaginationState> {
    let state: PaginationState = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse pagination state: {e}")))?;

    state.validate()?;
    debug!(
        "Loaded pagination state: page {} of {}, {} visible rows",
        state.current_page,
        state.last_page,
        state.rows.len()
    );
    Ok(state)
}

/// Load and validate a pagination state from a JSON string
pub fn load_state_from_json(json: &str) -> Result<PaginationState> {
    let state: PaginationState = serde_json::from_str(json)?;
    state.validate()?;
    Ok(state)
}

/// Load a render config from a file
pub fn load_config(path: impl AsRef<Path>) -> Result<RenderConfig> {
    let path = path.as_ref();
    let content = read_file(path)?;
    load_config_from_str(&content)
        .with_context(|| format!("Invalid config file '{}'", path.display()))
}

/// Load a render config from a YAML or JSON string
///
/// Values of the wrong type are coerced, never rejected; only a document
/// that is not a mapping fails.
pub fn load_config_from_str(yaml: &str) -> Result<RenderConfig> {
    if yaml.trim().is_empty() {
        return Ok(RenderConfig::default());
    }

    let file: RenderConfigFile = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse render config: {e}")))?;

    Ok(file.into_config())
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::Io(e)
        }
    })
}
