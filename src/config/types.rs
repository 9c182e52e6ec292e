//! Render configuration types
//!
//! A `RenderConfig` is finalized by `RenderConfigBuilder::build` and is
//! read-only afterwards, so one instance can serve concurrent renders.

use crate::types::{AnchorSlot, CssSlot, PaginationMode};
use std::collections::HashMap;

// ============================================================================
// CSS Classes
// ============================================================================

/// CSS class overrides keyed by slot
///
/// Unset slots are absent rather than empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssClasses {
    classes: HashMap<CssSlot, String>,
}

impl CssClasses {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Class configured for exactly this slot
    pub fn get(&self, slot: CssSlot) -> Option<&str> {
        self.classes.get(&slot).map(String::as_str)
    }

    /// Set the class of a slot
    pub fn set(&mut self, slot: CssSlot, class: impl Into<String>) {
        self.classes.insert(slot, class.into());
    }

    /// Class to emit for a slot.
    ///
    /// An empty or unset slot falls back to `normal` when the slot allows it;
    /// there is no second level of fallback.
    pub fn resolve(&self, slot: CssSlot) -> Option<&str> {
        self.non_empty(slot)
            .or_else(|| slot.fallback().and_then(|fallback| self.non_empty(fallback)))
    }

    fn non_empty(&self, slot: CssSlot) -> Option<&str> {
        self.get(slot).filter(|class| !class.is_empty())
    }

    /// Check if no slot is configured
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

// ============================================================================
// Anchors
// ============================================================================

/// Link text and tooltip of a structural link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Visible link text
    pub text: String,
    /// Tooltip (`title` attribute)
    pub title: String,
}

impl Anchor {
    /// Create an anchor
    pub fn new(text: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: title.into(),
        }
    }

    /// Built-in anchor of a slot
    pub fn default_for(slot: AnchorSlot) -> Self {
        Self::new(slot.default_text(), slot.default_title())
    }
}

/// Anchors for every structural link, pre-populated with defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    anchors: HashMap<AnchorSlot, Anchor>,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            anchors: AnchorSlot::ALL
                .into_iter()
                .map(|slot| (slot, Anchor::default_for(slot)))
                .collect(),
        }
    }
}

impl Anchors {
    /// Anchor of a slot
    pub fn get(&self, slot: AnchorSlot) -> &Anchor {
        // Every slot is populated by Default and never removed
        &self.anchors[&slot]
    }

    /// Override the link text of a slot
    pub fn set_text(&mut self, slot: AnchorSlot, text: impl Into<String>) {
        self.slot_mut(slot).text = text.into();
    }

    /// Override the tooltip of a slot
    pub fn set_title(&mut self, slot: AnchorSlot, title: impl Into<String>) {
        self.slot_mut(slot).title = title.into();
    }

    fn slot_mut(&mut self, slot: AnchorSlot) -> &mut Anchor {
        self.anchors
            .entry(slot)
            .or_insert_with(|| Anchor::default_for(slot))
    }
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Extra query parameters, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
    }

    /// Value of a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters, including empty-valued ones
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

// ============================================================================
// Render Config
// ============================================================================

/// Presentation settings of the navigation strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Label scheme of the visible rows
    pub mode: PaginationMode,
    pub show_first_page_link: bool,
    pub show_last_page_link: bool,
    pub show_previous_block_link: bool,
    pub show_next_block_link: bool,
    /// CSS class overrides
    pub css: CssClasses,
    /// Link texts and tooltips
    pub anchors: Anchors,
    /// Extra query parameters, emitted before the page pair
    pub query_params: QueryParams,
    /// Fragment identifier without the leading `#`
    pub fragment_identifier: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: PaginationMode::Normal,
            show_first_page_link: true,
            show_last_page_link: true,
            show_previous_block_link: true,
            show_next_block_link: true,
            css: CssClasses::new(),
            anchors: Anchors::default(),
            query_params: QueryParams::new(),
            fragment_identifier: None,
        }
    }
}

impl RenderConfig {
    /// Start a builder from the defaults
    pub fn builder() -> super::RenderConfigBuilder {
        super::RenderConfigBuilder::new()
    }

    /// Continue building from this config
    pub fn to_builder(&self) -> super::RenderConfigBuilder {
        super::RenderConfigBuilder::from_config(self.clone())
    }
}

/// Normalize a fragment identifier: trim spaces and `#` from both ends
pub(crate) fn normalize_fragment(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim_matches(|c: char| c == ' ' || c == '#');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
