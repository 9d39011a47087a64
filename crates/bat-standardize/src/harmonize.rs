//! Output-path field reconciliation.
//!
//! Early exports wrote a single `out_file` path. Later generations split it
//! into a full-spectrum path (`out_file_fs`) and a zero-crossing path
//! (`out_file_zc`). A mixed dataset can hold both spellings.

use bat_common::{column_lookup, is_blank, replace_string_column, string_values};
use bat_model::HarmonizeOutcome;
use bat_model::fields::{OUT_FILE, OUT_FILE_FS};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;

/// Folds the legacy `out_file` field into `out_file_fs`.
///
/// - Both present: blank modern values are filled from the legacy value,
///   then the legacy column is dropped.
/// - Only legacy: it is renamed to `out_file_fs` in place.
/// - Otherwise: nothing changes.
pub fn harmonize_output_paths(df: &mut DataFrame) -> Result<HarmonizeOutcome> {
    let lookup = column_lookup(df);
    let legacy = lookup.get(OUT_FILE).map(str::to_string);
    let modern = lookup.get(OUT_FILE_FS).map(str::to_string);

    let outcome = match (legacy, modern) {
        (Some(legacy), Some(modern)) => {
            let legacy_values = string_values(df, &legacy)?;
            let mut modern_values = string_values(df, &modern)?;
            let mut filled = 0;
            for (current, fallback) in modern_values.iter_mut().zip(legacy_values) {
                if is_blank(current.as_deref()) && !is_blank(fallback.as_deref()) {
                    *current = fallback;
                    filled += 1;
                }
            }
            if filled > 0 {
                replace_string_column(df, &modern, modern_values)?;
            }
            df.drop_in_place(&legacy)?;
            HarmonizeOutcome::Merged { filled }
        }
        (Some(legacy), None) => {
            df.rename(&legacy, OUT_FILE_FS.into())?;
            HarmonizeOutcome::Renamed
        }
        (None, _) => HarmonizeOutcome::Unchanged,
    };

    debug!(?outcome, "harmonized output path fields");
    Ok(outcome)
}
