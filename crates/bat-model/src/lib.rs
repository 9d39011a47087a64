//! Record model for bat-acoustic classifier exports.
//!
//! Types shared by the standardization engine and its callers: generation
//! labels, field names, options, advisory reports and the case-insensitive
//! column lookup.

pub mod fields;
pub mod label;
pub mod lookup;
pub mod options;
pub mod report;

pub use label::SchemaLabel;
pub use lookup::CaseInsensitiveSet;
pub use options::StandardizeOptions;
pub use report::{HarmonizeOutcome, LabelCounts, StandardizeReport};
