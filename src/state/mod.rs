//! Pagination state module
//!
//! The read-only snapshot a pagination provider hands to the renderer:
//! current position, neighbours, block boundaries and the visible rows.
//!
//! # Overview
//!
//! The state module provides:
//! - `PaginationState` - Current page, separators and boundaries
//! - `PageRow` - One visible page of the current window
//!
//! Page counts and window arithmetic are computed by the provider; this
//! module only carries the result.

mod types;

pub use types::{PageRow, PaginationState};

#[cfg(test)]
mod tests;
