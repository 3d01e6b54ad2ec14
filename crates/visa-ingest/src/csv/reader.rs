//! Loading the visa applications CSV into a DataFrame.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use polars::prelude::*;
use tracing::{debug, info};
use visa_model::columns::text_columns;

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, check_required_columns, read_csv_headers};

/// Schema override forcing every pipeline column to text, keyed by the
/// names as they appear in the file.
fn text_schema(headers: &CsvHeaders) -> Schema {
    let mut schema = Schema::default();
    for name in text_columns() {
        let raw = headers.raw_name(name).unwrap_or(name);
        schema.with_column(raw.into(), DataType::String);
    }
    schema
}

/// Reads the visa applications CSV.
///
/// The header row is checked first so that a missing column is reported by
/// name instead of surfacing later as a lookup failure. Pipeline columns are
/// read as `String`; every other column keeps Polars' inferred dtype, with
/// inference scanning the whole file so that a late value of another type
/// widens the column instead of failing the load. Padded header names are
/// renamed to their trimmed form.
pub fn load_visa_table(path: &Path) -> Result<DataFrame> {
    let start = Instant::now();
    let headers = read_csv_headers(path)?;
    check_required_columns(path, &headers)?;
    debug!(path = %path.display(), columns = headers.len(), "header check passed");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_schema_overwrite(Some(Arc::new(text_schema(&headers))))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let df = normalize_column_names(df, &headers).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        duration_ms = start.elapsed().as_millis(),
        "loaded visa table"
    );
    Ok(df)
}

fn normalize_column_names(mut df: DataFrame, headers: &CsvHeaders) -> PolarsResult<DataFrame> {
    if headers.needs_rename() && df.width() == headers.len() {
        df.set_column_names(headers.columns.iter().map(String::as_str))?;
        debug!("renamed padded header names");
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "case_no,case_number,case_status,decision_date,employer_city,\
job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education,wage";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_pins_pipeline_columns_to_text() {
        let file = create_temp_csv(&format!(
            "{HEADER}\n1,A-100,Certified,2015-01-02,Austin,Engineer,INDIA,PERM,Master's,95000\n"
        ));
        let df = load_visa_table(file.path()).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 10);
        assert_eq!(df.column("case_no").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("decision_date").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("wage").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_load_trims_padded_header_names() {
        let file = create_temp_csv(
            "case_no, case_number,case_status ,decision_date,employer_city,\
job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education\n\
             007,A-100,Certified,2015-01-02,Austin,Engineer,INDIA,PERM,Master's\n",
        );
        let df = load_visa_table(file.path()).unwrap();

        assert!(df.column("case_status").is_ok());
        assert!(df.column("case_number").is_ok());
        assert_eq!(df.column("case_status").unwrap().dtype(), &DataType::String);
        let case_no = df.column("case_no").unwrap();
        assert_eq!(case_no.str().unwrap().get(0), Some("007"));
    }

    #[test]
    fn test_load_rejects_missing_columns() {
        let file = create_temp_csv("case_no,case_status\n1,Certified\n");
        let result = load_visa_table(file.path());
        assert!(matches!(result, Err(IngestError::MissingColumns { .. })));
    }
}
