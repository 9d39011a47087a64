//! Advisory results returned alongside standardized data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::label::SchemaLabel;

/// What the output-path harmonizer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HarmonizeOutcome {
    /// Legacy and modern fields coexisted; blanks were filled from legacy.
    Merged {
        /// Rows whose modern value came from the legacy field.
        filled: usize,
    },
    /// Only the legacy field existed and was renamed.
    Renamed,
    /// Nothing to reconcile.
    #[default]
    Unchanged,
}

/// Row counts per generation label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCounts {
    counts: BTreeMap<SchemaLabel, usize>,
}

impl LabelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count labels from an iterator of row labels.
    pub fn tally<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = SchemaLabel>,
    {
        let mut counts = Self::new();
        for label in labels {
            counts.add(label, 1);
        }
        counts
    }

    pub fn add(&mut self, label: SchemaLabel, rows: usize) {
        if rows > 0 {
            *self.counts.entry(label).or_default() += rows;
        }
    }

    pub fn get(&self, label: SchemaLabel) -> usize {
        self.counts.get(&label).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate all labels in recombination order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaLabel, usize)> + '_ {
        SchemaLabel::ALL
            .into_iter()
            .map(|label| (label, self.get(label)))
    }
}

/// Advisory summary of one standardization run.
///
/// Intended for a logging or reporting collaborator; nothing in here is an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeReport {
    /// Rows in the input (and, by construction, in the output).
    pub total_rows: usize,
    /// Rows per generation label.
    pub label_counts: LabelCounts,
    /// Species-code cells replaced by the code remapper.
    pub remapped_values: usize,
    /// Output-path harmonization result.
    pub harmonize: HarmonizeOutcome,
    /// Whether the original row order was restored after recombination.
    pub order_preserved: bool,
}

impl StandardizeReport {
    /// Rows that could not be classified and were passed through.
    pub fn unknown_rows(&self) -> usize {
        self.label_counts.get(SchemaLabel::Unknown)
    }

    pub fn has_unknown_rows(&self) -> bool {
        self.unknown_rows() > 0
    }
}
