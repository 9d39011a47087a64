//! Generation-specific shape normalizers.
//!
//! Each transform takes a frame holding rows of a single generation and
//! leaves it with `alternate_1` to `alternate_3` present and holding
//! canonical codes. Transforms never add or remove rows and never touch
//! passthrough columns.
//!
//! - **legacy**: splits the semicolon list (V1)
//! - **short_code**: remaps 4-letter codes (V2)
//! - **long_code**: shape completion only (V3)

pub mod legacy;
pub mod long_code;
pub mod short_code;

use bat_common::ensure_string_columns;
use bat_model::SchemaLabel;
use bat_model::fields::ALTERNATE_FIELDS;
use polars::prelude::DataFrame;

use crate::error::Result;

pub use legacy::{split_alternates, transform_legacy_single_column};
pub use long_code::transform_long_code;
pub use short_code::transform_short_code;

/// Routes a homogeneous group to the transform for its label.
///
/// Unknown rows are returned untouched. Returns the number of species-code
/// cells the remapper replaced.
pub fn transform_group(label: SchemaLabel, df: &mut DataFrame) -> Result<usize> {
    match label {
        SchemaLabel::V1LegacySingleColumn => transform_legacy_single_column(df),
        SchemaLabel::V2TransitionalShortCode => transform_short_code(df),
        SchemaLabel::V3ModernLongCode => transform_long_code(df),
        SchemaLabel::Unknown => Ok(0),
    }
}

/// Adds a null column for each missing split alternate.
pub(crate) fn complete_alternates(df: &mut DataFrame) -> Result<()> {
    ensure_string_columns(df, &ALTERNATE_FIELDS)?;
    Ok(())
}
