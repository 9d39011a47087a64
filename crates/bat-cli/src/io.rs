//! CSV input and output for record sets.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::debug;

/// Suffix appended to the input file stem for the default output path.
pub const OUTPUT_SUFFIX: &str = "_unified";

/// Reads a CSV export with every column as a string.
///
/// Schema inference is disabled so species codes and paths are never coerced
/// into numbers or dates. Empty fields become nulls.
pub fn read_records(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open {}", path.display()))?
        .finish()
        .with_context(|| format!("parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read records"
    );
    Ok(df)
}

/// Writes a record set as CSV with a header row. Nulls are written empty.
pub fn write_records(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = df.height(), "wrote records");
    Ok(())
}

/// `<dir>/<stem>_unified.csv` next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "records".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_sits_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("/data/site_a/detections.csv")),
            PathBuf::from("/data/site_a/detections_unified.csv")
        );
        assert_eq!(
            default_output_path(Path::new("export")),
            PathBuf::from("export_unified.csv")
        );
    }
}
