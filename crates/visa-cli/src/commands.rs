use anyhow::Result;
use comfy_table::Table;

use visa_cli::pipeline::{AnalysisResult, PipelineConfig, run_pipeline_with};
use visa_model::required_columns;

use crate::cli::AnalyzeArgs;
use crate::summary::{apply_table_style, print_ingest_summary};

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Stage", "Used for"]);
    apply_table_style(&mut table);
    for column in required_columns() {
        table.add_row(vec![
            column.name.to_string(),
            column.stage.to_string(),
            column.usage.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let config = PipelineConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        charts_dir: (!args.no_charts).then(|| args.charts_dir.clone()),
        top_n: args.top_n,
        summary_json: args.summary_json.clone(),
    };
    run_pipeline_with(&config, print_ingest_summary)
}
