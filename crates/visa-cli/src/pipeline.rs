//! Visa analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the CSV, profile it, count case numbers
//! 2. **Clean**: drop identifiers and withdrawn cases, normalize text
//! 3. **Summarize**: frequency counts per chart, rendered to SVG
//! 4. **Encode**: label-encode every text column
//! 5. **Output**: write the cleaned CSV and the optional summary JSON
//!
//! Each stage runs in its own span and logs its duration on completion.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use visa_ingest::{DatasetProfile, count_unique_non_null, load_visa_table, profile_dataframe};
use visa_model::FrequencySummary;
use visa_model::columns::{CASE_NO, IDENTIFIER_COLUMNS};
use visa_report::{render_charts, summarize_all, write_csv, write_summary_json};
use visa_transform::{CleanReport, EncodedColumn, clean_visa_table, encode_text_columns};

/// Rows shown in the dataset preview.
pub const PREVIEW_ROWS: usize = 5;

/// Inputs and outputs of one analysis run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Chart directory; `None` skips rendering.
    pub charts_dir: Option<PathBuf>,
    pub top_n: usize,
    pub summary_json: Option<PathBuf>,
}

/// Everything a run produced, for printing.
#[derive(Debug)]
pub struct AnalysisResult {
    pub ingest: IngestResult,
    pub clean: CleanReport,
    pub summaries: Vec<FrequencySummary>,
    pub charts: Vec<PathBuf>,
    pub encoded: Vec<EncodedColumn>,
    /// Profile of the table as written.
    pub final_profile: DatasetProfile,
    pub output: PathBuf,
    pub summary_json: Option<PathBuf>,
}

/// Runs every stage against `config`.
pub fn run_pipeline(config: &PipelineConfig) -> Result<AnalysisResult> {
    run_pipeline_with(config, |_| {})
}

/// Runs every stage, handing the ingest result to `on_ingest` as soon as the
/// input is loaded, before any later stage can fail.
pub fn run_pipeline_with<F>(config: &PipelineConfig, on_ingest: F) -> Result<AnalysisResult>
where
    F: FnOnce(&IngestResult),
{
    let run_span = info_span!("analyze", input = %config.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    let (table, ingest) = ingest(&config.input)?;
    on_ingest(&ingest);
    let (table, clean_report) = clean(table)?;
    let summaries = summarize(&table, config.top_n)?;
    let charts = match &config.charts_dir {
        Some(dir) => render(&summaries, dir)?,
        None => Vec::new(),
    };
    let (mut table, encoded) = encode(table)?;
    output(
        &mut table,
        &config.output,
        &summaries,
        config.summary_json.as_deref(),
    )?;

    info!(
        rows = table.height(),
        columns = table.width(),
        charts = charts.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(AnalysisResult {
        ingest,
        clean: clean_report,
        summaries,
        charts,
        encoded,
        final_profile: profile_dataframe(&table),
        output: config.output.clone(),
        summary_json: config.summary_json.clone(),
    })
}

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// What was learned about the input before cleaning.
#[derive(Debug)]
pub struct IngestResult {
    /// First rows of the raw table.
    pub preview: DataFrame,
    /// Shape and null counts of the raw table.
    pub profile: DatasetProfile,
    /// Distinct non-null `case_no` values.
    pub unique_case_numbers: usize,
}

impl IngestResult {
    /// Null counts for the columns that survive the identifier drop.
    pub fn missing_values(&self) -> Vec<(&str, usize)> {
        self.profile
            .columns
            .iter()
            .filter(|column| !IDENTIFIER_COLUMNS.contains(&column.name.as_str()))
            .map(|column| (column.name.as_str(), column.nulls))
            .collect()
    }
}

/// Loads the input CSV and profiles it.
pub fn ingest(input: &Path) -> Result<(DataFrame, IngestResult)> {
    info_span!("ingest").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let table =
            load_visa_table(input).with_context(|| format!("load {}", input.display()))?;
        let unique_case_numbers =
            count_unique_non_null(&table, CASE_NO).context("count unique case numbers")?;
        let result = IngestResult {
            preview: table.head(Some(PREVIEW_ROWS)),
            profile: profile_dataframe(&table),
            unique_case_numbers,
        };
        info!(
            rows = result.profile.rows,
            columns = result.profile.columns.len(),
            unique_case_numbers,
            duration_ms = start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok((table, result))
    })
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

pub fn clean(table: DataFrame) -> Result<(DataFrame, CleanReport)> {
    info_span!("clean").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let (table, report) = clean_visa_table(table).context("clean visa table")?;
        info!(
            rows = report.rows_after,
            withdrawn_removed = report.withdrawn_removed,
            duration_ms = start.elapsed().as_millis(),
            "clean complete"
        );
        Ok((table, report))
    })
}

// ============================================================================
// Stage 3: Summarize and render
// ============================================================================

pub fn summarize(table: &DataFrame, top_n: usize) -> Result<Vec<FrequencySummary>> {
    info_span!("summarize").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let summaries = summarize_all(table, top_n).context("summarize chart columns")?;
        info!(
            summaries = summaries.len(),
            top_n,
            duration_ms = start.elapsed().as_millis(),
            "summaries complete"
        );
        Ok(summaries)
    })
}

pub fn render(summaries: &[FrequencySummary], dir: &Path) -> Result<Vec<PathBuf>> {
    info_span!("render", dir = %dir.display()).in_scope(|| -> Result<_> {
        let start = Instant::now();
        let charts = render_charts(summaries, dir)
            .with_context(|| format!("render charts into {}", dir.display()))?;
        info!(
            charts = charts.len(),
            duration_ms = start.elapsed().as_millis(),
            "render complete"
        );
        Ok(charts)
    })
}

// ============================================================================
// Stage 4: Encode
// ============================================================================

pub fn encode(table: DataFrame) -> Result<(DataFrame, Vec<EncodedColumn>)> {
    info_span!("encode").in_scope(|| -> Result<_> {
        let start = Instant::now();
        let (table, encoded) = encode_text_columns(table).context("encode text columns")?;
        info!(
            encoded_columns = encoded.len(),
            duration_ms = start.elapsed().as_millis(),
            "encode complete"
        );
        Ok((table, encoded))
    })
}

// ============================================================================
// Stage 5: Output
// ============================================================================

pub fn output(
    table: &mut DataFrame,
    path: &Path,
    summaries: &[FrequencySummary],
    summary_json: Option<&Path>,
) -> Result<()> {
    info_span!("output").in_scope(|| -> Result<_> {
        let start = Instant::now();
        write_csv(table, path).with_context(|| format!("write {}", path.display()))?;
        if let Some(json_path) = summary_json {
            write_summary_json(summaries, json_path)
                .with_context(|| format!("write {}", json_path.display()))?;
        }
        info!(
            path = %path.display(),
            rows = table.height(),
            duration_ms = start.elapsed().as_millis(),
            "output complete"
        );
        Ok(())
    })
}
