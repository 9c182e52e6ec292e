//! Render configuration module
//!
//! Presentation settings for the navigation strip: label mode, visibility
//! toggles, CSS class overrides, anchor texts, extra query parameters and
//! the fragment identifier.
//!
//! # Overview
//!
//! The config module provides:
//! - `RenderConfig` - Finalized, read-only settings
//! - `RenderConfigBuilder` - Fluent construction with defaults
//! - `RenderConfigFile` - Config file document with liberal value coercion

mod builder;
mod file;
mod types;

pub use builder::RenderConfigBuilder;
pub use file::{coerce_bool, coerce_mode, coerce_string, RenderConfigFile};
pub use types::{Anchor, Anchors, CssClasses, QueryParams, RenderConfig};
