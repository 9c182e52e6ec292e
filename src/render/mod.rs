//! Render module
//!
//! Builds the navigation strip HTML fragment:
//!
//! ```text
//! «««  ««  «  1 2 [3] 4 5  »  »»  »»»
//! ```
//!
//! # Overview
//!
//! The render module provides:
//! - `render` / `PaginationRenderer` - Strip assembly and visibility rules
//! - `LinkBuilder` / `LinkTarget` - Self-referencing hrefs with extra query
//!   parameters and the fragment identifier
//! - `row_label` - Label selection per pagination mode

mod link;
mod renderer;

pub use link::{encode_value, query_prefix, request_path, LinkBuilder, LinkTarget, AMP};
pub use renderer::{render, row_label, PaginationRenderer, NBSP};
