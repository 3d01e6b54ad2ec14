//! Output files: the cleaned table and the optional summary export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use polars::prelude::*;
use tracing::info;
use visa_model::FrequencySummary;

use crate::error::{ReportError, Result};

/// Writes `df` as CSV with a header row and no index, replacing any
/// existing file at `path`.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| ReportError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote CSV"
    );
    Ok(())
}

/// Writes every summary as one pretty-printed JSON array.
pub fn write_summary_json(summaries: &[FrequencySummary], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), summaries).map_err(|source| {
        ReportError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), summaries = summaries.len(), "wrote summary JSON");
    Ok(())
}
