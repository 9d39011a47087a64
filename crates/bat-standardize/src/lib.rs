//! Row-level schema detection and standardization for bat-acoustic
//! classifier exports.
//!
//! A dataset assembled across detector firmware upgrades mixes rows from
//! several export generations. This crate labels each row, normalizes each
//! generation into one shape and derives a canonical species field:
//!
//! - **codes**: static short-to-canonical species code table and remapper
//! - **classify**: per-row generation labeling
//! - **transforms**: V1/V2/V3 shape normalizers
//! - **harmonize**: `out_file` / `out_file_fs` reconciliation
//! - **standardize**: group, transform, recombine orchestration
//! - **species**: manual-over-automatic species priority
//!
//! Everything here is an in-memory transform; no I/O happens in this crate.

pub mod classify;
pub mod codes;
pub mod error;
pub mod harmonize;
pub mod species;
pub mod standardize;
pub mod transforms;

// Re-export the main entry points
pub use classify::{classify, classify_labels, classify_row};
pub use codes::{canonical_code, remap_code, remap_species_columns};
pub use error::{Result, StandardizeError};
pub use harmonize::harmonize_output_paths;
pub use species::{SpeciesSources, derive_species, is_identifiable};
pub use standardize::{StandardizedFrame, classify_and_standardize, standardize};
