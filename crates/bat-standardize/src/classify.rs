//! Row-level schema generation detection.
//!
//! Each row is labeled independently because a single dataset can mix
//! exports from detectors running different tool versions.

use bat_common::{column_lookup, replace_string_column, string_values_or_nulls};
use bat_model::fields::{ALTERNATE_1, ALTERNATE_2, ALTERNATES, AUTO_ID, SCHEMA_VERSION};
use bat_model::{LabelCounts, SchemaLabel};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::codes::{LONG_CODE_LEN, SHORT_CODE_LEN};
use crate::error::Result;

/// Separator of the legacy alternates list.
pub const LIST_DELIMITER: char = ';';

/// Classifies one row from its identification fields.
///
/// A semicolon in either of the first two alternate columns marks a legacy
/// list that leaked into the split layout. Otherwise the trimmed length of
/// `auto_id` decides between short and long codes.
///
/// # Examples
///
/// ```
/// use bat_model::SchemaLabel;
/// use bat_standardize::classify::classify_row;
///
/// assert_eq!(
///     classify_row(Some("MYLU"), None, None),
///     SchemaLabel::V2TransitionalShortCode
/// );
/// assert_eq!(
///     classify_row(Some("MYOLUC"), Some("EPFU;LANO"), None),
///     SchemaLabel::V1LegacySingleColumn
/// );
/// assert_eq!(classify_row(None, None, None), SchemaLabel::Unknown);
/// ```
pub fn classify_row(
    auto_id: Option<&str>,
    alternate_1: Option<&str>,
    alternate_2: Option<&str>,
) -> SchemaLabel {
    if [alternate_1, alternate_2]
        .into_iter()
        .flatten()
        .any(|value| value.contains(LIST_DELIMITER))
    {
        return SchemaLabel::V1LegacySingleColumn;
    }
    match auto_id.map(|value| value.trim().chars().count()) {
        Some(SHORT_CODE_LEN) => SchemaLabel::V2TransitionalShortCode,
        Some(LONG_CODE_LEN) => SchemaLabel::V3ModernLongCode,
        _ => SchemaLabel::Unknown,
    }
}

/// Computes one label per row without modifying the frame.
///
/// If an `alternates` column exists anywhere in the schema, the whole
/// dataset is legacy and every row is labeled V1.
pub fn classify_labels(df: &DataFrame) -> Result<Vec<SchemaLabel>> {
    let height = df.height();
    if column_lookup(df).contains(ALTERNATES) {
        return Ok(vec![SchemaLabel::V1LegacySingleColumn; height]);
    }

    let auto_ids = string_values_or_nulls(df, AUTO_ID)?;
    let alternate_1 = string_values_or_nulls(df, ALTERNATE_1)?;
    let alternate_2 = string_values_or_nulls(df, ALTERNATE_2)?;

    let labels = auto_ids
        .iter()
        .zip(&alternate_1)
        .zip(&alternate_2)
        .map(|((auto_id, alt_1), alt_2)| {
            classify_row(auto_id.as_deref(), alt_1.as_deref(), alt_2.as_deref())
        })
        .collect();
    Ok(labels)
}

/// Labels every row, writing the result to the `schema_version` column.
///
/// An existing label column (any casing) is overwritten in place.
pub fn classify(df: &mut DataFrame) -> Result<LabelCounts> {
    let labels = classify_labels(df)?;
    let counts = LabelCounts::tally(labels.iter().copied());

    let column = column_lookup(df)
        .get(SCHEMA_VERSION)
        .unwrap_or(SCHEMA_VERSION)
        .to_string();
    let values = labels
        .iter()
        .map(|label| Some(label.as_str().to_string()))
        .collect();
    replace_string_column(df, &column, values)?;

    debug!(
        rows = df.height(),
        v1 = counts.get(SchemaLabel::V1LegacySingleColumn),
        v2 = counts.get(SchemaLabel::V2TransitionalShortCode),
        v3 = counts.get(SchemaLabel::V3ModernLongCode),
        unknown = counts.get(SchemaLabel::Unknown),
        "classified rows"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semicolon_in_second_alternate_is_legacy() {
        assert_eq!(
            classify_row(Some("MYLU"), Some("EPFU"), Some("LANO;LABO")),
            SchemaLabel::V1LegacySingleColumn
        );
    }

    #[test]
    fn test_length_is_measured_after_trimming() {
        assert_eq!(
            classify_row(Some("  MYLU "), None, None),
            SchemaLabel::V2TransitionalShortCode
        );
        assert_eq!(
            classify_row(Some(" MYOLUC\t"), None, None),
            SchemaLabel::V3ModernLongCode
        );
    }

    #[test]
    fn test_other_lengths_are_unknown() {
        for value in ["", "   ", "HiF", "EPFULANO", "Noise"] {
            assert_eq!(
                classify_row(Some(value), None, None),
                SchemaLabel::Unknown,
                "{value:?}"
            );
        }
    }

    #[test]
    fn test_placeholder_has_short_code_length() {
        // "NoID" is four characters, so the length rule labels it V2.
        assert_eq!(
            classify_row(Some("NoID"), None, None),
            SchemaLabel::V2TransitionalShortCode
        );
    }
}
