//! Cleaning stage for the visa applications table.
//!
//! Steps run in a fixed order, each on the table produced by the previous
//! one:
//!
//! 1. drop the `case_no` and `case_number` identifier columns
//! 2. remove rows whose status is exactly `Withdrawn`
//! 3. rewrite `Certified-Expired` to `Certified`
//! 4. parse `decision_date` into a date and derive `year`
//! 5. uppercase `employer_city`
//! 6. normalize `job_info_job_title`
//!
//! Null cells are carried through untouched. A decision date that cannot be
//! parsed becomes a null date with a null year; the row is kept.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use tracing::{debug, info};
use visa_model::columns::{
    CASE_STATUS, DECISION_DATE, EMPLOYER_CITY, IDENTIFIER_COLUMNS, JOB_TITLE, YEAR,
};
use visa_model::status::{CERTIFIED, CERTIFIED_EXPIRED, WITHDRAWN};

use crate::datetime::parse_decision_date;
use crate::error::{Result, TransformError};
use crate::text::{normalize_city, normalize_job_title};

/// Maximum number of unparseable dates echoed to the debug log.
const UNPARSED_DATE_EXAMPLES: usize = 5;

/// Row and value counts produced by [`clean_visa_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub rows_before: usize,
    pub withdrawn_removed: usize,
    pub expired_merged: usize,
    /// Non-empty decision dates that matched no accepted layout.
    pub unparsed_dates: usize,
    pub rows_after: usize,
}

/// Runs every cleaning step and returns the cleaned table.
pub fn clean_visa_table(mut df: DataFrame) -> Result<(DataFrame, CleanReport)> {
    let mut report = CleanReport {
        rows_before: df.height(),
        ..CleanReport::default()
    };

    drop_identifier_columns(&mut df)?;

    report.withdrawn_removed = count_status(&df, WITHDRAWN)?;
    let df = drop_withdrawn(df)?;

    report.expired_merged = count_status(&df, CERTIFIED_EXPIRED)?;
    let mut df = merge_expired_status(df)?;

    report.unparsed_dates = derive_decision_year(&mut df)?;
    rewrite_text_column(&mut df, EMPLOYER_CITY, normalize_city)?;
    rewrite_text_column(&mut df, JOB_TITLE, normalize_job_title)?;

    report.rows_after = df.height();
    info!(
        rows_before = report.rows_before,
        rows_after = report.rows_after,
        withdrawn_removed = report.withdrawn_removed,
        expired_merged = report.expired_merged,
        unparsed_dates = report.unparsed_dates,
        "cleaned visa table"
    );
    Ok((df, report))
}

/// Removes the identifier columns. Both must be present.
pub fn drop_identifier_columns(df: &mut DataFrame) -> Result<()> {
    for name in IDENTIFIER_COLUMNS {
        df.drop_in_place(name)
            .map_err(|_| TransformError::ColumnNotFound {
                column: name.to_string(),
            })?;
    }
    Ok(())
}

/// Removes rows whose status is exactly `Withdrawn`; null statuses are kept.
pub fn drop_withdrawn(df: DataFrame) -> Result<DataFrame> {
    require_column(&df, CASE_STATUS)?;
    let filtered = df
        .lazy()
        .filter(col(CASE_STATUS).neq_missing(lit(WITHDRAWN)))
        .collect()?;
    Ok(filtered)
}

/// Rewrites `Certified-Expired` statuses to `Certified`.
pub fn merge_expired_status(df: DataFrame) -> Result<DataFrame> {
    require_column(&df, CASE_STATUS)?;
    let merged = df
        .lazy()
        .with_columns([when(col(CASE_STATUS).eq(lit(CERTIFIED_EXPIRED)))
            .then(lit(CERTIFIED))
            .otherwise(col(CASE_STATUS))
            .alias(CASE_STATUS)])
        .collect()?;
    Ok(merged)
}

/// Replaces `decision_date` with a date column and appends `year`.
///
/// Returns the number of non-empty values that could not be parsed.
pub fn derive_decision_year(df: &mut DataFrame) -> Result<usize> {
    let mut unparsed = 0usize;
    let mut examples: Vec<String> = Vec::new();
    let dates: Vec<Option<NaiveDate>> = text_column(df, DECISION_DATE)?
        .into_iter()
        .map(|value| {
            let raw = value?;
            let parsed = parse_decision_date(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                unparsed += 1;
                if examples.len() < UNPARSED_DATE_EXAMPLES {
                    examples.push(raw.to_string());
                }
            }
            parsed
        })
        .collect();
    if unparsed > 0 {
        debug!(unparsed, examples = ?examples, "decision dates left null");
    }

    let years: Vec<Option<i32>> = dates.iter().map(|date| date.map(|d| d.year())).collect();
    let date_column = DateChunked::from_naive_date_options(DECISION_DATE.into(), dates);
    df.with_column(date_column.into_series())?;
    df.with_column(Series::new(YEAR.into(), years))?;
    Ok(unparsed)
}

/// Applies a value rewrite to every non-null cell of a text column.
pub fn rewrite_text_column<F>(df: &mut DataFrame, column: &str, rewrite: F) -> Result<()>
where
    F: Fn(&str) -> String,
{
    let rewritten: StringChunked =
        text_column(df, column)?.apply_values(|value| Cow::Owned(rewrite(value)));
    df.with_column(rewritten.into_series())?;
    Ok(())
}

fn count_status(df: &DataFrame, status: &str) -> Result<usize> {
    Ok(text_column(df, CASE_STATUS)?
        .into_iter()
        .filter(|value| *value == Some(status))
        .count())
}

fn require_column(df: &DataFrame, column: &str) -> Result<()> {
    df.column(column)
        .map(|_| ())
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })
}

fn text_column<'a>(df: &'a DataFrame, column: &str) -> Result<&'a StringChunked> {
    let col = df
        .column(column)
        .map_err(|_| TransformError::ColumnNotFound {
            column: column.to_string(),
        })?;
    col.str().map_err(|_| TransformError::NotText {
        column: column.to_string(),
        dtype: col.dtype().to_string(),
    })
}
