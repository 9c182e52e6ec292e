//! Pagination state types
//!
//! These types are deserialized from the provider's output and are never
//! mutated by the renderer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One page of the visible window
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageRow {
    /// Page number
    pub page: u32,
    /// Separator of the block this page belongs to
    #[serde(default)]
    pub separator: u32,
    /// Ascending range label (e.g. "11-20")
    #[serde(default)]
    pub increment_label: String,
    /// Descending range label (e.g. "40-31")
    #[serde(default)]
    pub decrement_label: String,
}

impl PageRow {
    /// Create a row without range labels
    pub fn new(page: u32, separator: u32) -> Self {
        Self {
            page,
            separator,
            ..Default::default()
        }
    }

    /// Set both range labels
    pub fn with_labels(
        mut self,
        increment_label: impl Into<String>,
        decrement_label: impl Into<String>,
    ) -> Self {
        self.increment_label = increment_label.into();
        self.decrement_label = decrement_label.into();
        self
    }
}

/// Snapshot of the pagination position for one render
///
/// Optional values equal to zero count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    /// Page currently displayed
    #[serde(default = "default_current_page")]
    pub current_page: u32,

    /// Separator of the current block (absent: no separator windowing)
    #[serde(default)]
    pub current_separator: Option<u32>,

    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub previous_separator: Option<u32>,

    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub next_separator: Option<u32>,

    /// First page of the previous block, when the provider knows it
    #[serde(default)]
    pub previous_block_page: Option<u32>,
    #[serde(default)]
    pub previous_block_separator: Option<u32>,

    /// First page of the next block, when the provider knows it
    #[serde(default)]
    pub next_block_page: Option<u32>,
    #[serde(default)]
    pub next_block_separator: Option<u32>,

    #[serde(default = "default_current_page")]
    pub last_page: u32,
    #[serde(default)]
    pub last_separator: Option<u32>,

    /// Query parameter key carrying the page number
    #[serde(default = "default_page_param", alias = "page_param_name")]
    pub page_param: String,

    /// Query parameter key carrying the separator
    #[serde(default = "default_separator_param", alias = "separator_param_name")]
    pub separator_param: String,

    /// Visible window, ascending by page
    #[serde(default)]
    pub rows: Vec<PageRow>,
}

fn default_current_page() -> u32 {
    1
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_separator_param() -> String {
    "sep".to_string()
}

/// Treat zero as absent
fn present(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(default_page_param(), default_separator_param())
    }
}

impl PaginationState {
    /// Create a state on page 1 with no neighbours and no rows
    pub fn new(page_param: impl Into<String>, separator_param: impl Into<String>) -> Self {
        Self {
            current_page: 1,
            current_separator: None,
            previous_page: None,
            previous_separator: None,
            next_page: None,
            next_separator: None,
            previous_block_page: None,
            previous_block_separator: None,
            next_block_page: None,
            next_block_separator: None,
            last_page: 1,
            last_separator: None,
            page_param: page_param.into(),
            separator_param: separator_param.into(),
            rows: Vec::new(),
        }
    }

    /// Set the current page and separator
    pub fn with_current(mut self, page: u32, separator: u32) -> Self {
        self.current_page = page;
        self.current_separator = Some(separator);
        self
    }

    /// Set the previous page link target
    pub fn with_previous(mut self, page: u32, separator: u32) -> Self {
        self.previous_page = Some(page);
        self.previous_separator = Some(separator);
        self
    }

    /// Set the next page link target
    pub fn with_next(mut self, page: u32, separator: u32) -> Self {
        self.next_page = Some(page);
        self.next_separator = Some(separator);
        self
    }

    /// Set the previous block link target
    pub fn with_previous_block(mut self, page: Option<u32>, separator: u32) -> Self {
        self.previous_block_page = page;
        self.previous_block_separator = Some(separator);
        self
    }

    /// Set the next block link target
    pub fn with_next_block(mut self, page: Option<u32>, separator: u32) -> Self {
        self.next_block_page = page;
        self.next_block_separator = Some(separator);
        self
    }

    /// Set the last page link target
    pub fn with_last(mut self, page: u32, separator: u32) -> Self {
        self.last_page = page;
        self.last_separator = Some(separator);
        self
    }

    /// Replace the visible rows
    pub fn with_rows(mut self, rows: Vec<PageRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Check the fields the renderer cannot do without
    pub fn validate(&self) -> Result<()> {
        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_state(
                "page_param",
                "query parameter name cannot be empty",
            ));
        }
        if self.separator_param.trim().is_empty() {
            return Err(Error::invalid_state(
                "separator_param",
                "query parameter name cannot be empty",
            ));
        }
        Ok(())
    }

    /// Row of the current page, if it is in the visible window
    pub fn active_row(&self) -> Option<&PageRow> {
        self.rows.iter().find(|row| row.page == self.current_page)
    }

    /// Current separator, if windowing is active
    pub fn current_separator(&self) -> Option<u32> {
        present(self.current_separator)
    }

    /// Previous page link target as (page, separator)
    pub fn previous_target(&self) -> Option<(u32, u32)> {
        Some((present(self.previous_page)?, present(self.previous_separator)?))
    }

    /// Next page link target as (page, separator)
    pub fn next_target(&self) -> Option<(u32, u32)> {
        Some((present(self.next_page)?, present(self.next_separator)?))
    }

    /// Previous block link target as (optional page, separator)
    pub fn previous_block_target(&self) -> Option<(Option<u32>, u32)> {
        let separator = present(self.previous_block_separator)?;
        Some((present(self.previous_block_page), separator))
    }

    /// Next block link target as (optional page, separator)
    pub fn next_block_target(&self) -> Option<(Option<u32>, u32)> {
        let separator = present(self.next_block_separator)?;
        Some((present(self.next_block_page), separator))
    }

    /// Last page link target as (page, separator)
    pub fn last_target(&self) -> Option<(u32, u32)> {
        let separator = present(self.last_separator)?;
        Some((self.last_page, separator))
    }
}
