//! Shared utilities for the bat-acoustic crates.
//!
//! This crate provides Polars DataFrame helpers used by the standardization
//! engine and the CLI: case-insensitive column resolution, string column
//! extraction and replacement, and schema-aligned stacking of frames.

pub mod frame;

// Re-export commonly used functions at crate root for convenience
pub use frame::{
    column_lookup, drop_columns, ensure_string_columns, ensure_string_columns_after, is_blank,
    null_string_column, replace_string_column, resolve_column, stack_aligned, string_values,
    string_values_or_nulls,
};
