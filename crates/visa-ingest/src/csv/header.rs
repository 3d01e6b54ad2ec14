//! Header row reading and required-column checks.

use std::path::Path;

use ::csv::ReaderBuilder;
use visa_model::required_columns;

use crate::error::{IngestError, Result};

/// Column names from the header row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Normalized column names (trimmed, BOM removed).
    pub columns: Vec<String>,
    /// Names as the CSV parser sees them, BOM removed but not trimmed.
    pub raw: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            raw: columns.clone(),
            columns,
        }
    }

    /// Builds headers from raw header cells, normalizing each name.
    pub fn from_raw<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = cells
            .into_iter()
            .map(|cell| cell.as_ref().trim_start_matches('\u{feff}').to_string())
            .collect();
        let columns = raw.iter().map(|name| normalize_header(name)).collect();
        Self { columns, raw }
    }

    /// True when some raw name differs from its normalized form.
    pub fn needs_rename(&self) -> bool {
        self.columns != self.raw
    }

    /// Raw name of the column whose normalized name is `column`.
    pub fn raw_name(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| self.raw[index].as_str())
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }
}

fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').to_string()
}

/// Reads only the header row of a CSV file.
pub fn read_csv_headers(path: &Path) -> Result<CsvHeaders> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))?;
    let record = reader.headers().map_err(|error| csv_error(path, error))?;
    let headers = CsvHeaders::from_raw(record.iter());
    if headers.columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(headers)
}

/// Fails with every required column the header lacks.
pub fn check_required_columns(path: &Path, headers: &CsvHeaders) -> Result<()> {
    let missing: Vec<String> = required_columns()
        .iter()
        .filter(|column| !headers.contains(column.name))
        .map(|column| column.name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        })
    }
}

fn csv_error(path: &Path, error: ::csv::Error) -> IngestError {
    if let ::csv::ErrorKind::Io(io) = error.kind()
        && io.kind() == std::io::ErrorKind::NotFound
    {
        return IngestError::FileNotFound {
            path: path.to_path_buf(),
        };
    }
    match error.into_kind() {
        ::csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}
