//! Navigation strip renderer
//!
//! Turns a pagination state and a render config into the HTML fragment.
//! Elements whose data is absent or which are switched off are left out;
//! nothing is emitted as an empty placeholder.

use super::link::{LinkBuilder, LinkTarget};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::state::{PageRow, PaginationState};
use crate::types::{AnchorSlot, CssSlot, PaginationMode};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Non-breaking space between structural links
pub const NBSP: &str = "&nbsp;";

/// Renderer holding a finalized config
///
/// Holds no per-call state; one instance can render concurrently from
/// several threads.
#[derive(Debug, Clone, Default)]
pub struct PaginationRenderer {
    config: RenderConfig,
}

impl PaginationRenderer {
    /// Create a renderer for a config
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Config used by this renderer
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the strip for a state and the current request path
    pub fn render(&self, state: &PaginationState, current_path: &str) -> Result<String> {
        render(state, &self.config, current_path)
    }
}

/// Render the navigation strip
///
/// `current_path` is the request path; a query string on it is dropped.
/// Identical inputs always give identical output.
pub fn render(
    state: &PaginationState,
    config: &RenderConfig,
    current_path: &str,
) -> Result<String> {
    state.validate()?;

    let links = LinkBuilder::new(current_path, state, config);
    let mut strip = Strip::new(config);

    if config.show_first_page_link && state.current_separator().is_some_and(|sep| sep != 1) {
        strip.out.push_str(NBSP);
        let href = links.href(LinkTarget::page(1, 1));
        strip.push_anchor(AnchorSlot::FirstPage, &href);
        strip.out.push_str(NBSP);
    }

    if config.show_previous_block_link {
        if let Some((page, separator)) = state.previous_block_target() {
            let href = links.href(block_target(page, separator));
            strip.push_anchor(AnchorSlot::PreviousBlock, &href);
            strip.out.push_str(NBSP);
        }
    }

    if let Some((page, separator)) = state.previous_target() {
        let href = links.href(LinkTarget::page(page, separator));
        strip.push_anchor(AnchorSlot::PreviousPage, &href);
        strip.out.push_str(NBSP);
    }

    if !state.rows.is_empty() && state.active_row().is_none() {
        trace!(
            "Current page {} is not in the visible window, no row is marked active",
            state.current_page
        );
    }

    for (index, row) in state.rows.iter().enumerate() {
        if index > 0 {
            strip.out.push(' ');
        }
        let label = row_label(row, config.mode);
        if row.page == state.current_page {
            strip.push_active(&label);
        } else {
            let href = links.href(LinkTarget::page(row.page, row.separator));
            strip.push_link(CssSlot::Normal, None, &href, &label);
        }
    }

    if let Some((page, separator)) = state.next_target() {
        strip.out.push_str(NBSP);
        let href = links.href(LinkTarget::page(page, separator));
        strip.push_anchor(AnchorSlot::NextPage, &href);
    }

    if config.show_next_block_link {
        if let Some((page, separator)) = state.next_block_target() {
            strip.out.push_str(NBSP);
            let href = links.href(block_target(page, separator));
            strip.push_anchor(AnchorSlot::NextBlock, &href);
        }
    }

    if config.show_last_page_link {
        if let Some((page, separator)) = state.last_target() {
            if state.current_separator() != Some(separator) {
                strip.out.push_str(NBSP);
                let href = links.href(LinkTarget::page(page, separator));
                strip.push_anchor(AnchorSlot::LastPage, &href);
            }
        }
    }

    debug!(
        "Rendered {} pagination elements for page {} of {}",
        strip.elements, state.current_page, state.last_page
    );
    Ok(strip.out)
}

/// Visible label of a row for a mode
pub fn row_label(row: &PageRow, mode: PaginationMode) -> Cow<'_, str> {
    match mode {
        PaginationMode::Normal => Cow::Owned(row.page.to_string()),
        PaginationMode::Increment => Cow::Borrowed(row.increment_label.as_str()),
        PaginationMode::Decrement => Cow::Borrowed(row.decrement_label.as_str()),
    }
}

fn block_target(page: Option<u32>, separator: u32) -> LinkTarget {
    match page {
        Some(page) => LinkTarget::page(page, separator),
        None => LinkTarget::separator(separator),
    }
}

/// Output buffer with element emission helpers
struct Strip<'a> {
    config: &'a RenderConfig,
    out: String,
    elements: usize,
}

impl<'a> Strip<'a> {
    fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
            elements: 0,
        }
    }

    /// Structural link with its configured text and tooltip
    fn push_anchor(&mut self, slot: AnchorSlot, href: &str) {
        let config = self.config;
        let anchor = config.anchors.get(slot);
        self.push_link(slot.css_slot(), Some(&anchor.title), href, &anchor.text);
    }

    /// Inert element of the current page
    fn push_active(&mut self, label: &str) {
        self.out.push_str("<span");
        self.push_class(CssSlot::Active);
        self.out.push('>');
        self.out.push_str(label);
        self.out.push_str("</span>");
        self.elements += 1;
    }

    fn push_link(&mut self, slot: CssSlot, title: Option<&str>, href: &str, text: &str) {
        self.out.push_str("<a");
        self.push_class(slot);
        if let Some(title) = title {
            self.push_attr("title", title);
        }
        self.push_attr("href", href);
        self.out.push('>');
        self.out.push_str(text);
        self.out.push_str("</a>");
        self.elements += 1;
    }

    fn push_class(&mut self, slot: CssSlot) {
        let config = self.config;
        if let Some(class) = config.css.resolve(slot) {
            self.push_attr("class", class);
        }
    }

    fn push_attr(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(value);
        self.out.push('"');
    }
}
