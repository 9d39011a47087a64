//! Configuration options for standardization.

use serde::{Deserialize, Serialize};

/// Options controlling how a record set is standardized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardizeOptions {
    /// Classify rows first when the `schema_version` column is absent.
    ///
    /// Default: false. A missing label column is then a structural error,
    /// because labels are expected to come from an earlier classify step.
    pub classify_missing_labels: bool,

    /// Restore the original row order after recombination.
    ///
    /// Default: false. Output rows are grouped V1, V2, V3, UNKNOWN, with
    /// input order kept only inside each group.
    pub preserve_input_order: bool,
}

impl StandardizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classify_missing_labels(mut self, enable: bool) -> Self {
        self.classify_missing_labels = enable;
        self
    }

    pub fn with_preserve_input_order(mut self, enable: bool) -> Self {
        self.preserve_input_order = enable;
        self
    }
}
