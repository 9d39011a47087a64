use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bat_cli::pipeline::RunSummary;
use bat_model::{HarmonizeOutcome, LabelCounts, SchemaLabel};

pub fn print_summary(summary: &RunSummary) {
    println!("Input: {}", summary.input.display());
    match &summary.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("{}", label_table(&summary.report.label_counts));

    let report = &summary.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Step"), header_cell("Result")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Codes remapped"),
        Cell::new(report.remapped_values),
    ]);
    table.add_row(vec![
        Cell::new("Output paths"),
        Cell::new(harmonize_label(report.harmonize)),
    ]);
    table.add_row(vec![
        Cell::new("Row order"),
        Cell::new(if report.order_preserved {
            "input"
        } else {
            "grouped"
        }),
    ]);
    match &summary.species {
        Some(species) => {
            table.add_row(vec![Cell::new("Species from manual_id"), Cell::new(species.manual)]);
            table.add_row(vec![
                Cell::new("Species from auto_id"),
                Cell::new(species.automatic),
            ]);
            table.add_row(vec![
                Cell::new("Unidentified"),
                count_cell(Some(species.unidentified), Color::Yellow),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Species"), dim_cell("skipped")]);
        }
    }
    println!("{table}");

    if report.has_unknown_rows() {
        eprintln!(
            "warning: {} row(s) matched no export generation and were passed through unchanged",
            report.unknown_rows()
        );
    }
}

pub fn print_label_counts(counts: &LabelCounts) {
    println!("{}", label_table(counts));
}

fn label_table(counts: &LabelCounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Generation"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, rows) in counts.iter() {
        let rows_cell = if label.is_unknown() {
            count_cell(Some(rows), Color::Yellow)
        } else {
            count_cell(Some(rows), Color::Green)
        };
        table.add_row(vec![label_cell(label), rows_cell]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn harmonize_label(outcome: HarmonizeOutcome) -> String {
    match outcome {
        HarmonizeOutcome::Merged { filled } => format!("merged ({filled} filled)"),
        HarmonizeOutcome::Renamed => "renamed out_file".to_string(),
        HarmonizeOutcome::Unchanged => "unchanged".to_string(),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: SchemaLabel) -> Cell {
    if label.is_unknown() {
        Cell::new(label.as_str()).fg(Color::DarkGrey)
    } else {
        Cell::new(label.as_str())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
