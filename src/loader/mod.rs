//! Loader module
//!
//! Read pagination states and render configs from YAML or JSON.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_state` / `load_state_from_str` - Provider output, validated
//! - `load_config` / `load_config_from_str` - Render config with coercion

mod parser;

pub use parser::{
    load_config, load_config_from_str, load_state, load_state_from_json, load_state_from_str,
};
