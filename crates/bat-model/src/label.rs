//! Schema generation labels.
//!
//! Every exported record was produced by one generation of the classifier
//! export tool. The label records which one, so the standardizer can route
//! the record to the matching transform.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Export-tool generation a record was classified as.
///
/// The set is closed: ambiguous rows are `Unknown`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SchemaLabel {
    /// Species alternates exported as one semicolon-delimited list.
    #[serde(rename = "V1_LEGACY_SINGLE_COLUMN")]
    V1LegacySingleColumn,

    /// Split alternate columns holding 4-character short codes.
    #[serde(rename = "V2_TRANSITIONAL_SHORT_CODE")]
    V2TransitionalShortCode,

    /// Split alternate columns holding 6-character canonical codes.
    #[serde(rename = "V3_MODERN_LONG_CODE")]
    V3ModernLongCode,

    /// Could not be classified with confidence.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SchemaLabel {
    /// All labels in recombination order.
    ///
    /// Standardized output concatenates generation groups in exactly this
    /// order: V1, V2, V3, then unknown rows.
    pub const ALL: [SchemaLabel; 4] = [
        SchemaLabel::V1LegacySingleColumn,
        SchemaLabel::V2TransitionalShortCode,
        SchemaLabel::V3ModernLongCode,
        SchemaLabel::Unknown,
    ];

    /// Returns the label as stored in the `schema_version` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaLabel::V1LegacySingleColumn => "V1_LEGACY_SINGLE_COLUMN",
            SchemaLabel::V2TransitionalShortCode => "V2_TRANSITIONAL_SHORT_CODE",
            SchemaLabel::V3ModernLongCode => "V3_MODERN_LONG_CODE",
            SchemaLabel::Unknown => "UNKNOWN",
        }
    }

    /// Position of this label's group in the recombined output.
    pub fn group_order(&self) -> usize {
        match self {
            SchemaLabel::V1LegacySingleColumn => 0,
            SchemaLabel::V2TransitionalShortCode => 1,
            SchemaLabel::V3ModernLongCode => 2,
            SchemaLabel::Unknown => 3,
        }
    }

    /// Returns true for the advisory `Unknown` label.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SchemaLabel::Unknown)
    }
}

impl fmt::Display for SchemaLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SchemaLabel {
    type Err = String;

    /// Parse a stored label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "V1_LEGACY_SINGLE_COLUMN" => Ok(SchemaLabel::V1LegacySingleColumn),
            "V2_TRANSITIONAL_SHORT_CODE" => Ok(SchemaLabel::V2TransitionalShortCode),
            "V3_MODERN_LONG_CODE" => Ok(SchemaLabel::V3ModernLongCode),
            "UNKNOWN" => Ok(SchemaLabel::Unknown),
            _ => Err(format!("Unknown schema label: {s}")),
        }
    }
}
