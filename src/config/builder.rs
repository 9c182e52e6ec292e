//! Fluent builder for render configuration
//!
//! Setters are liberal: any displayable value is accepted and stored as its
//! string form, nothing is rejected.

use super::types::{normalize_fragment, RenderConfig};
use crate::types::{AnchorSlot, CssSlot, PaginationMode};

/// Builder producing a finalized [`RenderConfig`]
///
/// ```
/// use pagination_strip::config::RenderConfig;
/// use pagination_strip::types::{CssSlot, PaginationMode};
///
/// let config = RenderConfig::builder()
///     .mode(PaginationMode::Increment)
///     .css_class(CssSlot::Normal, "page-link")
///     .query_param("sort", "name")
///     .fragment_identifier("#results")
///     .build();
///
/// assert_eq!(config.fragment_identifier.as_deref(), Some("results"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Create a builder holding the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that continues from an existing config
    pub fn from_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Set the row label scheme
    pub fn mode(mut self, mode: PaginationMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the row label scheme from its numeric code
    pub fn mode_code(self, code: i64) -> Self {
        self.mode(PaginationMode::from_code(code))
    }

    /// Show or hide the first page link
    pub fn show_first_page_link(mut self, show: bool) -> Self {
        self.config.show_first_page_link = show;
        self
    }

    /// Show or hide the last page link
    pub fn show_last_page_link(mut self, show: bool) -> Self {
        self.config.show_last_page_link = show;
        self
    }

    /// Show or hide the previous block link
    pub fn show_previous_block_link(mut self, show: bool) -> Self {
        self.config.show_previous_block_link = show;
        self
    }

    /// Show or hide the next block link
    pub fn show_next_block_link(mut self, show: bool) -> Self {
        self.config.show_next_block_link = show;
        self
    }

    /// Set the CSS class of a slot
    pub fn css_class(mut self, slot: CssSlot, class: impl ToString) -> Self {
        self.config.css.set(slot, class.to_string());
        self
    }

    /// Set the link text of a structural link
    pub fn anchor_text(mut self, slot: AnchorSlot, text: impl ToString) -> Self {
        self.config.anchors.set_text(slot, text.to_string());
        self
    }

    /// Set the tooltip of a structural link
    pub fn anchor_title(mut self, slot: AnchorSlot, title: impl ToString) -> Self {
        self.config.anchors.set_title(slot, title.to_string());
        self
    }

    /// Add an extra query parameter; empty values are kept but never emitted
    pub fn query_param(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.config.query_params.set(key.to_string(), value.to_string());
        self
    }

    /// Set the fragment identifier; leading and trailing `#` and spaces are dropped
    pub fn fragment_identifier(mut self, fragment: impl ToString) -> Self {
        self.config.fragment_identifier = normalize_fragment(&fragment.to_string());
        self
    }

    /// Finalize the configuration
    pub fn build(self) -> RenderConfig {
        self.config
    }
}
