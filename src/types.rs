//! Common types used throughout the pagination strip
//!
//! This module contains the closed enumerations shared by the state,
//! config and render modules: display modes and the named customization
//! slots of the strip.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Pagination Mode
// ============================================================================

/// Display scheme for the labels of the visible rows
///
/// ```text
/// Normal:     «««  ««  «  1 2 3 4 5 6 7 8 9 10  »  »»  »»»
/// Decrement:  «««  ««  «  50-41 40-31 30-21 20-11 10-1  »  »»  »»»
/// Increment:  «««  ««  «  1-10 11-20 21-30 31-40 41-50  »  »»  »»»
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationMode {
    /// Rows show their page number
    #[default]
    Normal,
    /// Rows show their decrement range label
    Decrement,
    /// Rows show their increment range label
    Increment,
}

impl PaginationMode {
    /// Map a numeric mode code (1 = normal, 2 = decrement, 3 = increment).
    ///
    /// Unknown codes select `Normal`.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Decrement,
            3 => Self::Increment,
            _ => Self::Normal,
        }
    }

    /// Numeric code of this mode
    pub fn code(self) -> i64 {
        match self {
            Self::Normal => 1,
            Self::Decrement => 2,
            Self::Increment => 3,
        }
    }

    /// Lowercase name of this mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Decrement => "decrement",
            Self::Increment => "increment",
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Ok(Self::from_code(code));
        }
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "decrement" => Ok(Self::Decrement),
            "increment" => Ok(Self::Increment),
            other => Err(format!("unknown pagination mode: {other}")),
        }
    }
}

// ============================================================================
// CSS Slots
// ============================================================================

/// Named CSS class customization points of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CssSlot {
    /// Plain page links, and the fallback for structural links
    Normal,
    /// The inert element of the current page
    Active,
    FirstPage,
    LastPage,
    PreviousBlock,
    NextBlock,
    PreviousPage,
    NextPage,
}

impl CssSlot {
    /// Every slot, in declaration order
    pub const ALL: [CssSlot; 8] = [
        CssSlot::Normal,
        CssSlot::Active,
        CssSlot::FirstPage,
        CssSlot::LastPage,
        CssSlot::PreviousBlock,
        CssSlot::NextBlock,
        CssSlot::PreviousPage,
        CssSlot::NextPage,
    ];

    /// Slot consulted when this one is unset or empty.
    ///
    /// Only structural links fall back, and only to `Normal`.
    pub fn fallback(self) -> Option<CssSlot> {
        match self {
            CssSlot::Normal | CssSlot::Active => None,
            _ => Some(CssSlot::Normal),
        }
    }

    /// snake_case key used in config files
    pub fn key(self) -> &'static str {
        match self {
            CssSlot::Normal => "normal",
            CssSlot::Active => "active",
            CssSlot::FirstPage => "first_page",
            CssSlot::LastPage => "last_page",
            CssSlot::PreviousBlock => "previous_block",
            CssSlot::NextBlock => "next_block",
            CssSlot::PreviousPage => "previous_page",
            CssSlot::NextPage => "next_page",
        }
    }

    /// Look up a slot by its config key (`first_page` or `firstPage`)
    pub fn from_key(key: &str) -> Option<CssSlot> {
        let normalized = normalize_key(key);
        Self::ALL
            .into_iter()
            .find(|slot| normalize_key(slot.key()) == normalized)
    }
}

// ============================================================================
// Anchor Slots
// ============================================================================

/// Structural links that carry a glyph and a tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSlot {
    FirstPage,
    PreviousBlock,
    PreviousPage,
    NextPage,
    NextBlock,
    LastPage,
}

impl AnchorSlot {
    /// Every anchor slot, in strip order
    pub const ALL: [AnchorSlot; 6] = [
        AnchorSlot::FirstPage,
        AnchorSlot::PreviousBlock,
        AnchorSlot::PreviousPage,
        AnchorSlot::NextPage,
        AnchorSlot::NextBlock,
        AnchorSlot::LastPage,
    ];

    /// CSS slot styling this link
    pub fn css_slot(self) -> CssSlot {
        match self {
            AnchorSlot::FirstPage => CssSlot::FirstPage,
            AnchorSlot::PreviousBlock => CssSlot::PreviousBlock,
            AnchorSlot::PreviousPage => CssSlot::PreviousPage,
            AnchorSlot::NextPage => CssSlot::NextPage,
            AnchorSlot::NextBlock => CssSlot::NextBlock,
            AnchorSlot::LastPage => CssSlot::LastPage,
        }
    }

    /// Default link text
    pub fn default_text(self) -> &'static str {
        match self {
            AnchorSlot::FirstPage => "«««",
            AnchorSlot::PreviousBlock => "««",
            AnchorSlot::PreviousPage => "«",
            AnchorSlot::NextPage => "»",
            AnchorSlot::NextBlock => "»»",
            AnchorSlot::LastPage => "»»»",
        }
    }

    /// Default tooltip
    pub fn default_title(self) -> &'static str {
        match self {
            AnchorSlot::FirstPage => "На первую страницу",
            AnchorSlot::PreviousBlock => "Предыдущие страницы",
            AnchorSlot::PreviousPage => "Предыдущая страница",
            AnchorSlot::NextPage => "Следующая страница",
            AnchorSlot::NextBlock => "Следующие страницы",
            AnchorSlot::LastPage => "На последнюю страницу",
        }
    }

    /// snake_case key used in config files
    pub fn key(self) -> &'static str {
        self.css_slot().key()
    }

    /// Look up a slot by its config key (`next_block` or `nextBlock`)
    pub fn from_key(key: &str) -> Option<AnchorSlot> {
        let normalized = normalize_key(key);
        Self::ALL
            .into_iter()
            .find(|slot| normalize_key(slot.key()) == normalized)
    }
}

/// Lowercase a key and drop separators so `first_page`, `firstPage` and
/// `first-page` compare equal
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the command-line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
