use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use visa_cli::pipeline::{AnalysisResult, IngestResult};
use visa_model::FrequencySummary;

/// Printed right after loading, so it survives a failure in a later stage.
pub fn print_ingest_summary(ingest: &IngestResult) {
    println!("Dataset Overview:");
    println!("{}", ingest.preview);
    println!(
        "Dataset Shape: ({}, {})",
        ingest.profile.rows,
        ingest.profile.columns.len()
    );
    println!("Columns in the dataset:");
    println!("{}", ingest.profile.column_names().join(", "));
    println!("Unique case numbers: {}", ingest.unique_case_numbers);

    println!("Missing values in each column:");
    print_missing_values(&ingest.missing_values());
}

pub fn print_summary(result: &AnalysisResult) {
    let clean = &result.clean;
    println!(
        "Cleaned: {} -> {} rows ({} withdrawn removed, {} certified-expired merged, {} unparsed dates)",
        clean.rows_before,
        clean.rows_after,
        clean.withdrawn_removed,
        clean.expired_merged,
        clean.unparsed_dates
    );

    for summary in &result.summaries {
        print_frequency_table(summary);
    }
    for path in &result.charts {
        println!("Chart: {}", path.display());
    }

    println!("Final Dataset Info:");
    print_final_schema(result);
    if let Some(path) = &result.summary_json {
        println!("Summary JSON: {}", path.display());
    }
    println!("Cleaned dataset saved as '{}'.", result.output.display());
}

fn print_missing_values(columns: &[(&str, usize)]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, nulls) in columns {
        table.add_row(vec![Cell::new(name), count_cell(*nulls, Color::Yellow)]);
    }
    println!("{table}");
}

fn print_frequency_table(summary: &FrequencySummary) {
    println!("{}", summary.chart.title);
    if summary.is_empty() {
        println!("(no values)");
        return;
    }
    let mut header = vec![header_cell(summary.chart.x_label)];
    header.extend(summary.hues.iter().map(|hue| header_cell(hue)));
    header.push(header_cell("Count"));

    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=summary.hues.len() + 1 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for category in &summary.categories {
        let mut row = vec![Cell::new(&category.value)];
        row.extend(category.by_hue.iter().map(Cell::new));
        row.push(Cell::new(category.total).add_attribute(Attribute::Bold));
        table.add_row(row);
    }
    println!("{table}");
}

fn print_final_schema(result: &AnalysisResult) {
    let profile = &result.final_profile;
    println!("{} entries, {} columns", profile.rows, profile.columns.len());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Dtype"),
        header_cell("Non-Null"),
        header_cell("Codes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in &profile.columns {
        let codes = result
            .encoded
            .iter()
            .find(|encoded| encoded.name == column.name)
            .map(|encoded| encoded.categories);
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(&column.dtype),
            Cell::new(column.non_null),
            match codes {
                Some(count) => Cell::new(count),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
