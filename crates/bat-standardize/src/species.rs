//! Canonical species derivation.
//!
//! Expert review always wins over the automated classifier: `species` is
//! `manual_id` when it names something, else `auto_id`, else the `NoID`
//! placeholder. The order is fixed.

use bat_common::{replace_string_column, resolve_column, string_values, string_values_or_nulls};
use bat_model::fields::{AUTO_ID, MANUAL_ID, NO_ID_PLACEHOLDER, SPECIES, UNKNOWN_MARKERS};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StandardizeError};

/// Where each row's species value came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesSources {
    pub manual: usize,
    pub automatic: usize,
    pub unidentified: usize,
}

/// Returns true if `value` names an identification.
///
/// Null, blank, the `NoID` placeholder and generic unknown markers do not.
///
/// # Examples
///
/// ```
/// use bat_standardize::species::is_identifiable;
///
/// assert!(is_identifiable(Some("MYOLUC")));
/// assert!(!is_identifiable(Some("noid")));
/// assert!(!is_identifiable(Some(" Unknown ")));
/// assert!(!is_identifiable(None));
/// ```
pub fn is_identifiable(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return false;
    };
    !value.is_empty()
        && !value.eq_ignore_ascii_case(NO_ID_PLACEHOLDER)
        && !UNKNOWN_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
}

/// Picks the species for one row by fixed priority.
pub fn species_for(manual_id: Option<&str>, auto_id: Option<&str>) -> String {
    [manual_id, auto_id]
        .into_iter()
        .find(|value| is_identifiable(*value))
        .flatten()
        .map_or_else(|| NO_ID_PLACEHOLDER.to_string(), |value| value.trim().to_string())
}

/// Adds (or overwrites) the `species` column.
///
/// A missing `manual_id` column counts as entirely empty. A missing
/// `auto_id` column is a structural error.
pub fn derive_species(df: &mut DataFrame) -> Result<SpeciesSources> {
    let Some(auto_column) = resolve_column(df, AUTO_ID) else {
        return Err(StandardizeError::MissingField { field: AUTO_ID });
    };
    let auto_ids = string_values(df, &auto_column)?;
    let manual_ids = string_values_or_nulls(df, MANUAL_ID)?;

    let mut sources = SpeciesSources::default();
    let species: Vec<Option<String>> = manual_ids
        .iter()
        .zip(&auto_ids)
        .map(|(manual, auto)| {
            if is_identifiable(manual.as_deref()) {
                sources.manual += 1;
            } else if is_identifiable(auto.as_deref()) {
                sources.automatic += 1;
            } else {
                sources.unidentified += 1;
            }
            Some(species_for(manual.as_deref(), auto.as_deref()))
        })
        .collect();

    let column = resolve_column(df, SPECIES).unwrap_or_else(|| SPECIES.to_string());
    replace_string_column(df, &column, species)?;

    debug!(
        manual = sources.manual,
        automatic = sources.automatic,
        unidentified = sources.unidentified,
        "derived species"
    );
    Ok(sources)
}
