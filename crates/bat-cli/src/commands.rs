use std::fs;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use bat_cli::io::{default_output_path, read_records, write_records};
use bat_cli::pipeline::{PipelineOptions, RunSummary, count_labels, process_records};
use bat_model::{LabelCounts, StandardizeOptions};
use bat_standardize::codes::code_map_entries;

use crate::cli::{ClassifyArgs, StandardizeArgs};
use crate::summary::apply_table_style;

pub fn run_codes() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Short code", "Canonical code"]);
    apply_table_style(&mut table);
    for (short, long) in code_map_entries() {
        table.add_row(vec![short, long]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_classify(args: &ClassifyArgs) -> Result<LabelCounts> {
    let span = info_span!("classify", input = %args.input.display());
    let _guard = span.enter();
    let df = read_records(&args.input)?;
    let counts = count_labels(&df)?;
    info!(rows = counts.total(), "classification complete");
    Ok(counts)
}

pub fn run_standardize(args: &StandardizeArgs) -> Result<RunSummary> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();

    let df = read_records(&args.input)?;
    let options = PipelineOptions {
        standardize: StandardizeOptions::new().with_preserve_input_order(args.preserve_order),
        derive_species: !args.no_species,
    };
    let mut output = process_records(&df, &options)?;

    let output_path = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_records(&mut output.data, &path)?;
        info!(path = %path.display(), rows = output.data.height(), "wrote unified records");
        Some(path)
    };

    let summary = RunSummary {
        input: args.input.clone(),
        output: output_path,
        report: output.report,
        species: output.species,
    };
    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(summary)
}
