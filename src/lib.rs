//! # Pagination Strip
//!
//! Renders the navigation strip of a paginated listing as an HTML fragment:
//! links to the first and last page, to the neighbouring blocks and pages,
//! and to every page of the visible window.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagination_strip::{render, PageRow, PaginationState, RenderConfig};
//! use pagination_strip::types::CssSlot;
//!
//! let state = PaginationState::new("page", "sep")
//!     .with_current(2, 1)
//!     .with_previous(1, 1)
//!     .with_rows(vec![PageRow::new(1, 1), PageRow::new(2, 1)]);
//!
//! let config = RenderConfig::builder()
//!     .css_class(CssSlot::Active, "current")
//!     .build();
//!
//! let html = render(&state, &config, "/articles?page=2").unwrap();
//! assert!(html.contains(r#"<span class="current">2</span>"#));
//! assert!(html.contains(r#"href="/articles?page=1&amp;sep=1""#));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────────────┐
//! │ PaginationState  │   │   RenderConfig   │
//! │ (provider data)  │   │ (builder / file) │
//! └────────┬─────────┘   └────────┬─────────┘
//!          └──────────┬───────────┘
//!                     ▼
//!          ┌──────────────────────┐
//!          │  render(state, cfg,  │
//!          │         path)        │──▶ HTML fragment
//!          └──────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums: modes and slots
pub mod types;

/// Pagination state supplied by the provider
pub mod state;

/// Render configuration and builder
pub mod config;

/// Strip rendering and link construction
pub mod render;

/// YAML/JSON loading of states and configs
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::{Error, Result};
pub use render::{render, PaginationRenderer};
pub use state::{PageRow, PaginationState};
pub use types::{AnchorSlot, CssSlot, PaginationMode};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
