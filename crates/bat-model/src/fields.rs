//! Field names of the classifier export schemas.
//!
//! Names are the snake_case forms produced by the ingestion step. All lookups
//! against a record set are case-insensitive.

/// Automated species identification.
pub const AUTO_ID: &str = "auto_id";

/// Expert (manual) species identification.
pub const MANUAL_ID: &str = "manual_id";

/// First alternate species code.
pub const ALTERNATE_1: &str = "alternate_1";

/// Second alternate species code.
pub const ALTERNATE_2: &str = "alternate_2";

/// Third alternate species code.
pub const ALTERNATE_3: &str = "alternate_3";

/// Split alternate columns in positional order.
pub const ALTERNATE_FIELDS: [&str; 3] = [ALTERNATE_1, ALTERNATE_2, ALTERNATE_3];

/// Every field that holds a species code and is subject to code remapping.
pub const SPECIES_CODE_FIELDS: [&str; 4] = [AUTO_ID, ALTERNATE_1, ALTERNATE_2, ALTERNATE_3];

/// Legacy semicolon-delimited alternates list.
pub const ALTERNATES: &str = "alternates";

/// Per-row generation label column.
pub const SCHEMA_VERSION: &str = "schema_version";

/// Legacy single output-path field.
pub const OUT_FILE: &str = "out_file";

/// Full-spectrum output path (modern replacement for `out_file`).
pub const OUT_FILE_FS: &str = "out_file_fs";

/// Derived canonical identification.
pub const SPECIES: &str = "species";

/// Fields that never survive standardization.
pub const LEGACY_FIELDS: [&str; 2] = [ALTERNATES, SCHEMA_VERSION];

/// Placeholder the export tool writes when no identification was made.
pub const NO_ID_PLACEHOLDER: &str = "NoID";

/// Generic markers that carry no identification, compared case-insensitively.
pub const UNKNOWN_MARKERS: [&str; 2] = ["unknown", "unk"];
