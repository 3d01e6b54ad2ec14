//! Frequency counts behind each chart.
//!
//! Counting is pure: it reads the cleaned table and returns a
//! [`FrequencySummary`] without touching the filesystem. Null values are
//! not counted, neither as categories nor as hues.

use std::collections::HashMap;

use polars::prelude::*;
use tracing::debug;
use visa_model::{CHART_SEQUENCE, CategoryCount, CategoryOrder, ChartSpec, FrequencySummary};

use crate::error::{ReportError, Result};

/// Computes the summary for every chart in [`CHART_SEQUENCE`].
pub fn summarize_all(df: &DataFrame, top_n: usize) -> Result<Vec<FrequencySummary>> {
    CHART_SEQUENCE
        .iter()
        .map(|chart| summarize(df, chart, top_n))
        .collect()
}

/// Counts one chart's column, split by its hue column when it has one.
///
/// Categories start in first-occurrence order; [`CategoryOrder`] then
/// decides whether they are kept that way, sorted ascending, or cut to the
/// `top_n` most frequent.
pub fn summarize(df: &DataFrame, chart: &ChartSpec, top_n: usize) -> Result<FrequencySummary> {
    let values = text_values(df, chart.column)?;
    let hue_values = chart.hue.map(|hue| text_values(df, hue)).transpose()?;

    let mut categories: Vec<CategoryCount> = Vec::new();
    let mut category_slots: HashMap<&str, usize> = HashMap::new();
    let mut hues: Vec<String> = Vec::new();
    let mut hue_slots: HashMap<&str, usize> = HashMap::new();

    for (row, value) in values.iter().enumerate() {
        let Some(value) = value else {
            continue;
        };
        let slot = *category_slots.entry(value).or_insert_with(|| {
            categories.push(CategoryCount {
                value: value.to_string(),
                total: 0,
                by_hue: Vec::new(),
            });
            categories.len() - 1
        });
        let category = &mut categories[slot];
        category.total += 1;

        let Some(hue) = hue_values.as_ref().and_then(|ca| ca.get(row)) else {
            continue;
        };
        let hue_slot = *hue_slots.entry(hue).or_insert_with(|| {
            hues.push(hue.to_string());
            hues.len() - 1
        });
        if category.by_hue.len() <= hue_slot {
            category.by_hue.resize(hue_slot + 1, 0);
        }
        category.by_hue[hue_slot] += 1;
    }
    for category in &mut categories {
        category.by_hue.resize(hues.len(), 0);
    }

    let categories = match chart.order {
        CategoryOrder::FirstSeen => categories,
        CategoryOrder::Ascending => sort_ascending(categories),
        CategoryOrder::TopCount => take_top(categories, top_n),
    };
    debug!(
        chart = chart.id,
        categories = categories.len(),
        hues = hues.len(),
        "summarized chart column"
    );
    Ok(FrequencySummary {
        chart: *chart,
        hues,
        categories,
    })
}

/// Keeps the `n` largest categories, descending by total.
///
/// The sort is stable, so categories with equal totals keep their incoming
/// (first-occurrence) order.
pub fn take_top(mut categories: Vec<CategoryCount>, n: usize) -> Vec<CategoryCount> {
    categories.sort_by(|a, b| b.total.cmp(&a.total));
    categories.truncate(n);
    categories
}

/// Sorts numerically when every value is an integer, otherwise lexically.
fn sort_ascending(mut categories: Vec<CategoryCount>) -> Vec<CategoryCount> {
    let numeric: Option<Vec<i64>> = categories
        .iter()
        .map(|category| category.value.trim().parse::<i64>().ok())
        .collect();
    match numeric {
        Some(keys) => {
            let mut keyed: Vec<(i64, CategoryCount)> = keys.into_iter().zip(categories).collect();
            keyed.sort_by_key(|(key, _)| *key);
            keyed.into_iter().map(|(_, category)| category).collect()
        }
        None => {
            categories.sort_by(|a, b| a.value.cmp(&b.value));
            categories
        }
    }
}

/// A column's values as text, whatever its dtype.
fn text_values(df: &DataFrame, column: &str) -> Result<StringChunked> {
    let col = df
        .column(column)
        .map_err(|_| ReportError::ColumnNotFound {
            column: column.to_string(),
        })?;
    let text = col.cast(&DataType::String)?;
    Ok(text.str()?.clone())
}
