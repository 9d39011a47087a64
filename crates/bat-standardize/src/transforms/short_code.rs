use polars::prelude::DataFrame;

use super::complete_alternates;
use crate::codes::remap_species_columns;
use crate::error::Result;

/// Normalizes V2 rows: split columns with short codes.
///
/// This generation only ever exported two alternates, so `alternate_3` is
/// added as null. All species codes are remapped to canonical form.
pub fn transform_short_code(df: &mut DataFrame) -> Result<usize> {
    complete_alternates(df)?;
    remap_species_columns(df)
}
