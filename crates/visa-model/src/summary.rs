//! Frequency summaries computed for each chart.

use serde::Serialize;

use crate::chart::ChartSpec;

/// Count for one category, optionally split by hue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    /// Rows with this value, regardless of hue.
    pub total: usize,
    /// Counts aligned with [`FrequencySummary::hues`]; empty without a hue.
    pub by_hue: Vec<usize>,
}

/// Ordered category counts backing one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencySummary {
    pub chart: ChartSpec,
    /// Hue values in order of first occurrence.
    pub hues: Vec<String>,
    pub categories: Vec<CategoryCount>,
}

impl FrequencySummary {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Largest single bar, used to scale the chart axis.
    pub fn max_bar(&self) -> usize {
        self.categories
            .iter()
            .map(|category| {
                if self.hues.is_empty() {
                    category.total
                } else {
                    category.by_hue.iter().copied().max().unwrap_or(0)
                }
            })
            .max()
            .unwrap_or(0)
    }

    /// Sum of all category totals.
    pub fn counted_rows(&self) -> usize {
        self.categories.iter().map(|category| category.total).sum()
    }
}
