//! Standardization orchestrator.
//!
//! Turns a labeled record set into the unified schema:
//!
//! 1. partition row indices into one bucket per [`SchemaLabel`]
//! 2. take each non-empty bucket and run its generation transform
//! 3. stack the groups in the fixed order V1, V2, V3, UNKNOWN
//! 4. harmonize the output-path fields
//! 5. drop the legacy `alternates` and `schema_version` fields
//!
//! Step 3 keeps input order only within a group. Set
//! [`StandardizeOptions::preserve_input_order`] to restore the original
//! order afterwards.

use bat_common::{
    drop_columns, ensure_string_columns_after, resolve_column, stack_aligned, string_values,
};
use bat_model::fields::{ALTERNATE_FIELDS, ALTERNATES, LEGACY_FIELDS, SCHEMA_VERSION};
use bat_model::{LabelCounts, SchemaLabel, StandardizeOptions, StandardizeReport};
use polars::prelude::{DataFrame, IdxCa, IdxSize};
use tracing::{debug, info, info_span, warn};

use crate::classify::{classify, classify_labels};
use crate::error::{Result, StandardizeError};
use crate::harmonize::harmonize_output_paths;
use crate::transforms::transform_group;

/// A unified record set with its advisory report.
#[derive(Debug, Clone)]
pub struct StandardizedFrame {
    /// Records in the unified schema.
    pub data: DataFrame,
    /// Counts and outcomes for the logging/reporting collaborator.
    pub report: StandardizeReport,
}

impl StandardizedFrame {
    /// Returns the number of records in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Row indices grouped by label, in recombination order.
#[derive(Debug, Default)]
struct LabelBuckets {
    buckets: [Vec<IdxSize>; 4],
}

impl LabelBuckets {
    fn partition(labels: &[SchemaLabel]) -> Self {
        let mut buckets = Self::default();
        for (row, label) in labels.iter().enumerate() {
            buckets.buckets[label.group_order()].push(row as IdxSize);
        }
        buckets
    }

    fn rows(&self, label: SchemaLabel) -> &[IdxSize] {
        &self.buckets[label.group_order()]
    }

    fn counts(&self) -> LabelCounts {
        let mut counts = LabelCounts::new();
        for label in SchemaLabel::ALL {
            counts.add(label, self.rows(label).len());
        }
        counts
    }

    /// Indices that put the stacked groups back into input order.
    ///
    /// Stacked row `i` came from input row `combined[i]`; the inverse
    /// permutation maps each input row to its stacked position.
    fn restore_order(&self) -> Vec<IdxSize> {
        let combined: Vec<IdxSize> = self.buckets.concat();
        let mut inverse = vec![0; combined.len()];
        for (stacked, &original) in combined.iter().enumerate() {
            inverse[original as usize] = stacked as IdxSize;
        }
        inverse
    }
}

/// Reads the `schema_version` column; unparseable or null labels are Unknown.
fn read_labels(df: &DataFrame, column: &str) -> Result<Vec<SchemaLabel>> {
    let mut unparsed = 0usize;
    let labels = string_values(df, column)?
        .into_iter()
        .map(|value| {
            value
                .as_deref()
                .and_then(|value| value.parse::<SchemaLabel>().ok())
                .unwrap_or_else(|| {
                    unparsed += 1;
                    SchemaLabel::Unknown
                })
        })
        .collect();
    if unparsed > 0 {
        debug!(unparsed, "treating unrecognized schema labels as UNKNOWN");
    }
    Ok(labels)
}

/// Standardizes a labeled record set into the unified schema.
///
/// The frame must carry a `schema_version` column unless
/// `options.classify_missing_labels` is set, in which case rows are
/// classified first. No row ever causes a failure.
///
/// # Errors
///
/// Returns [`StandardizeError::MissingField`] if the label column is absent
/// and classification was not requested.
pub fn standardize(df: &DataFrame, options: &StandardizeOptions) -> Result<StandardizedFrame> {
    let span = info_span!("standardize", rows = df.height());
    let _guard = span.enter();

    let labels = match resolve_column(df, SCHEMA_VERSION) {
        Some(column) => read_labels(df, &column)?,
        None if options.classify_missing_labels => classify_labels(df)?,
        None => {
            return Err(StandardizeError::MissingField {
                field: SCHEMA_VERSION,
            });
        }
    };

    let buckets = LabelBuckets::partition(&labels);
    let mut groups = Vec::with_capacity(SchemaLabel::ALL.len());
    let mut remapped_values = 0;
    for label in SchemaLabel::ALL {
        let rows = buckets.rows(label);
        if rows.is_empty() {
            continue;
        }
        let indices = IdxCa::from_vec("row".into(), rows.to_vec());
        let mut group = df.take(&indices)?;
        let replaced = transform_group(label, &mut group)?;
        debug!(%label, rows = group.height(), replaced, "transformed generation group");
        remapped_values += replaced;
        groups.push(group);
    }

    let mut data = if groups.is_empty() {
        // No rows: still hand back the unified shape.
        let mut empty = df.clone();
        ensure_string_columns_after(&mut empty, Some(ALTERNATES), &ALTERNATE_FIELDS)?;
        empty
    } else {
        stack_aligned(&groups)?
    };
    let order_preserved = options.preserve_input_order && !groups.is_empty();
    if order_preserved {
        let indices = IdxCa::from_vec("row".into(), buckets.restore_order());
        data = data.take(&indices)?;
    }

    let harmonize = harmonize_output_paths(&mut data)?;
    drop_columns(&mut data, &LEGACY_FIELDS)?;

    let report = StandardizeReport {
        total_rows: data.height(),
        label_counts: buckets.counts(),
        remapped_values,
        harmonize,
        order_preserved,
    };
    if report.has_unknown_rows() {
        warn!(
            unknown_rows = report.unknown_rows(),
            "rows passed through without a recognized schema generation"
        );
    }
    info!(
        rows = report.total_rows,
        remapped_values,
        unknown_rows = report.unknown_rows(),
        "standardization complete"
    );

    Ok(StandardizedFrame { data, report })
}

/// Classifies every row, then standardizes.
///
/// Any existing `schema_version` column is recomputed.
pub fn classify_and_standardize(
    df: &DataFrame,
    options: &StandardizeOptions,
) -> Result<StandardizedFrame> {
    let mut labeled = df.clone();
    classify(&mut labeled)?;
    standardize(&labeled, options)
}
