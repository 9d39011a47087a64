//! Polars DataFrame helper functions.
//!
//! Every helper that takes a column name resolves it case-insensitively
//! against the frame's actual column names.

use std::collections::HashMap;

use bat_model::CaseInsensitiveSet;
use polars::prelude::*;

/// Builds a case-insensitive lookup over the frame's column names.
pub fn column_lookup(df: &DataFrame) -> CaseInsensitiveSet {
    CaseInsensitiveSet::new(df.get_column_names_owned())
}

/// Returns the actual spelling of `name` in the frame, if present.
pub fn resolve_column(df: &DataFrame, name: &str) -> Option<String> {
    column_lookup(df).get(name).map(str::to_string)
}

/// Returns true for a missing value or one that is only whitespace.
///
/// # Examples
///
/// ```
/// use bat_common::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some("  ")));
/// assert!(!is_blank(Some("MYOLUC")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Extracts a column as owned optional strings.
///
/// Non-string columns are cast to String first; nulls stay `None`.
pub fn string_values(df: &DataFrame, column: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(column)?;
    let as_string = column.cast(&DataType::String)?;
    let values = as_string
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect();
    Ok(values)
}

/// Like [`string_values`], but a missing column yields all nulls.
///
/// The lookup is case-insensitive.
pub fn string_values_or_nulls(df: &DataFrame, column: &str) -> PolarsResult<Vec<Option<String>>> {
    match resolve_column(df, column) {
        Some(actual) => string_values(df, &actual),
        None => Ok(vec![None; df.height()]),
    }
}

/// A String column of `height` nulls.
pub fn null_string_column(name: &str, height: usize) -> Column {
    Column::full_null(name.into(), height, &DataType::String)
}

/// Replaces (or appends) a String column built from `values`.
///
/// An existing column keeps its position in the frame.
pub fn replace_string_column(
    df: &mut DataFrame,
    column: &str,
    values: Vec<Option<String>>,
) -> PolarsResult<()> {
    let series = Series::new(column.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Adds a null String column for every name the frame lacks.
///
/// Same as [`ensure_string_columns_after`] without an anchor column.
pub fn ensure_string_columns(df: &mut DataFrame, names: &[&str]) -> PolarsResult<Vec<String>> {
    ensure_string_columns_after(df, None, names)
}

/// Adds a null String column for every name the frame lacks, keeping the
/// listed names adjacent.
///
/// A missing name is inserted right after the previous listed name. The
/// first name, when missing, goes right after `anchor` if that column
/// exists, otherwise at the end. Returns the names that were added.
pub fn ensure_string_columns_after(
    df: &mut DataFrame,
    anchor: Option<&str>,
    names: &[&str],
) -> PolarsResult<Vec<String>> {
    let mut previous = anchor.and_then(|name| column_index(df, name));
    let mut added = Vec::new();
    for name in names {
        if let Some(index) = column_index(df, name) {
            previous = Some(index);
            continue;
        }
        let index = previous.map_or(df.width(), |index| index + 1);
        df.insert_column(index, null_string_column(name, df.height()))?;
        previous = Some(index);
        added.push((*name).to_string());
    }
    Ok(added)
}

fn column_index(df: &DataFrame, name: &str) -> Option<usize> {
    resolve_column(df, name).and_then(|actual| df.get_column_index(&actual))
}

/// Drops every listed column that exists (case-insensitive).
///
/// Returns the actual names that were removed.
pub fn drop_columns(df: &mut DataFrame, names: &[&str]) -> PolarsResult<Vec<String>> {
    let mut dropped = Vec::new();
    for name in names {
        // Re-resolve each time: a frame can hold two spellings of one name.
        while let Some(actual) = resolve_column(df, name) {
            df.drop_in_place(&actual)?;
            dropped.push(actual);
        }
    }
    Ok(dropped)
}

/// Vertically stacks frames whose schemas may differ.
///
/// The output columns are the union of all input columns in order of first
/// appearance. A column missing from a frame is null-filled; a column whose
/// dtype differs between frames is cast to String everywhere.
pub fn stack_aligned(frames: &[DataFrame]) -> PolarsResult<DataFrame> {
    let mut order: Vec<PlSmallStr> = Vec::new();
    let mut dtypes: HashMap<PlSmallStr, DataType> = HashMap::new();
    for frame in frames {
        for column in frame.get_columns() {
            let name = column.name().clone();
            match dtypes.get(&name) {
                None => {
                    order.push(name.clone());
                    dtypes.insert(name, column.dtype().clone());
                }
                Some(existing) if existing != column.dtype() => {
                    dtypes.insert(name, DataType::String);
                }
                Some(_) => {}
            }
        }
    }

    let mut stacked: Option<DataFrame> = None;
    for frame in frames {
        let height = frame.height();
        let mut columns = Vec::with_capacity(order.len());
        for name in &order {
            let dtype = &dtypes[name];
            let column = match frame.column(name) {
                Ok(column) if column.dtype() == dtype => column.clone(),
                Ok(column) => column.cast(dtype)?,
                Err(_) => Column::full_null(name.clone(), height, dtype),
            };
            columns.push(column);
        }
        let aligned = DataFrame::new(columns)?;
        match stacked.as_mut() {
            Some(out) => {
                out.vstack_mut(&aligned)?;
            }
            None => stacked = Some(aligned),
        }
    }
    Ok(stacked.unwrap_or_else(DataFrame::empty))
}
