//! Dataset shape and per-column null statistics.

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Dtype and null statistics for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: String,
    pub non_null: usize,
    pub nulls: usize,
}

/// Shape and column statistics of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl DatasetProfile {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|c| c.nulls).sum()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Profiles every column of a DataFrame.
pub fn profile_dataframe(df: &DataFrame) -> DatasetProfile {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| {
            let nulls = col.null_count();
            ColumnProfile {
                name: col.name().to_string(),
                dtype: col.dtype().to_string(),
                non_null: col.len() - nulls,
                nulls,
            }
        })
        .collect();
    DatasetProfile {
        rows: df.height(),
        columns,
    }
}

/// Number of distinct non-null values in a column.
pub fn count_unique_non_null(df: &DataFrame, column: &str) -> Result<usize> {
    let col = df
        .column(column)
        .map_err(|_| IngestError::ColumnNotFound {
            column: column.to_string(),
        })?;
    Ok(col.drop_nulls().n_unique()?)
}
