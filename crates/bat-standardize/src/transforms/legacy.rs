use bat_common::{
    drop_columns, ensure_string_columns_after, replace_string_column, resolve_column,
    string_values_or_nulls,
};
use bat_model::fields::{ALTERNATE_FIELDS, ALTERNATES};
use polars::prelude::DataFrame;

use crate::classify::LIST_DELIMITER;
use crate::codes::remap_species_columns;
use crate::error::Result;

/// Splits a semicolon-delimited alternates list into three positional slots.
///
/// Tokens are trimmed and empty tokens become `None`. A list shorter than
/// three leaves the trailing slots empty; anything past the third token is
/// dropped.
///
/// # Examples
///
/// ```
/// use bat_standardize::transforms::split_alternates;
///
/// assert_eq!(
///     split_alternates("LACI; LABO;"),
///     [Some("LACI".to_string()), Some("LABO".to_string()), None]
/// );
/// ```
pub fn split_alternates(list: &str) -> [Option<String>; 3] {
    let mut slots: [Option<String>; 3] = Default::default();
    for (slot, token) in slots.iter_mut().zip(list.split(LIST_DELIMITER)) {
        let token = token.trim();
        if !token.is_empty() {
            *slot = Some(token.to_string());
        }
    }
    slots
}

/// Normalizes V1 rows: alternates exported as one semicolon list.
///
/// Per row, the list comes from the `alternates` column when it holds a
/// value, otherwise from whichever of `alternate_1`/`alternate_2` carries a
/// semicolon. Its tokens fill the split columns starting at the column the
/// list came from, so a list leaked into `alternate_2` keeps the existing
/// `alternate_1` and only fills `alternate_2` and `alternate_3`. Rows without
/// any list keep their split values. The `alternates` column is removed and
/// all species codes are remapped.
pub fn transform_legacy_single_column(df: &mut DataFrame) -> Result<usize> {
    let lists = string_values_or_nulls(df, ALTERNATES)?;
    let mut slots = [
        string_values_or_nulls(df, ALTERNATE_FIELDS[0])?,
        string_values_or_nulls(df, ALTERNATE_FIELDS[1])?,
        string_values_or_nulls(df, ALTERNATE_FIELDS[2])?,
    ];

    for (row, list) in lists.iter().enumerate() {
        let source = list
            .as_deref()
            .filter(|value| !value.trim().is_empty())
            .map(|value| (0, value))
            .or_else(|| leaked_list(slots[0][row].as_deref()).map(|value| (0, value)))
            .or_else(|| leaked_list(slots[1][row].as_deref()).map(|value| (1, value)))
            .map(|(first, value)| (first, split_alternates(value)));
        let Some((first, tokens)) = source else {
            continue;
        };
        for (slot, token) in slots[first..].iter_mut().zip(tokens) {
            slot[row] = token;
        }
    }

    ensure_string_columns_after(df, Some(ALTERNATES), &ALTERNATE_FIELDS)?;
    for (field, values) in ALTERNATE_FIELDS.iter().zip(slots) {
        let column = resolve_column(df, field).unwrap_or_else(|| (*field).to_string());
        replace_string_column(df, &column, values)?;
    }
    drop_columns(df, &[ALTERNATES])?;

    remap_species_columns(df)
}

fn leaked_list(value: Option<&str>) -> Option<&str> {
    value.filter(|value| value.contains(LIST_DELIMITER))
}
