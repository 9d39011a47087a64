//! Engine invocation shared by the CLI commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bat_model::{LabelCounts, StandardizeOptions, StandardizeReport};
use bat_standardize::{SpeciesSources, classify_and_standardize, classify_labels, derive_species};
use polars::prelude::DataFrame;
use serde::Serialize;

/// How a record set is processed end to end.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub standardize: StandardizeOptions,
    /// Derive the canonical `species` column after standardization.
    pub derive_species: bool,
}

/// Unified records and everything learned while producing them.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub data: DataFrame,
    pub report: StandardizeReport,
    pub species: Option<SpeciesSources>,
}

/// Serializable record of one `standardize` run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub report: StandardizeReport,
    pub species: Option<SpeciesSources>,
}

/// Classifies, standardizes and optionally derives species.
pub fn process_records(df: &DataFrame, options: &PipelineOptions) -> Result<PipelineOutput> {
    let standardized =
        classify_and_standardize(df, &options.standardize).context("standardize records")?;
    let mut data = standardized.data;
    let species = if options.derive_species {
        Some(derive_species(&mut data).context("derive species")?)
    } else {
        None
    };
    Ok(PipelineOutput {
        data,
        report: standardized.report,
        species,
    })
}

/// Counts rows per generation without transforming anything.
pub fn count_labels(df: &DataFrame) -> Result<LabelCounts> {
    let labels = classify_labels(df).context("classify records")?;
    Ok(LabelCounts::tally(labels))
}
