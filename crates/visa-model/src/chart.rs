//! The fixed sequence of descriptive charts.

use serde::Serialize;

use crate::columns::{
    APPLICATION_TYPE, CASE_STATUS, COUNTRY_OF_CITIZENSHIP, EDUCATION, EMPLOYER_CITY, JOB_TITLE,
    YEAR,
};

/// Number of categories kept by a top-N chart unless overridden.
pub const DEFAULT_TOP_N: usize = 10;

/// How the categories of a chart are selected and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryOrder {
    /// Every category, in order of first occurrence.
    FirstSeen,
    /// Every category, ascending (numeric when all values parse as integers).
    Ascending,
    /// The N most frequent categories, descending by count; ties keep
    /// first-occurrence order.
    TopCount,
}

/// One chart: the column counted, the optional split, and its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    /// Stable identifier, also the chart file stem.
    pub id: &'static str,
    pub title: &'static str,
    pub x_label: &'static str,
    pub column: &'static str,
    /// Column whose values split each bar.
    pub hue: Option<&'static str>,
    pub order: CategoryOrder,
}

pub const CHART_SEQUENCE: [ChartSpec; 7] = [
    ChartSpec {
        id: "case_status",
        title: "Distribution of Case Status",
        x_label: "Case Status",
        column: CASE_STATUS,
        hue: None,
        order: CategoryOrder::FirstSeen,
    },
    ChartSpec {
        id: "status_by_year",
        title: "Year-wise Visa Status",
        x_label: "Year",
        column: YEAR,
        hue: Some(CASE_STATUS),
        order: CategoryOrder::Ascending,
    },
    ChartSpec {
        id: "employer_city",
        title: "Top Employer Cities",
        x_label: "City",
        column: EMPLOYER_CITY,
        hue: None,
        order: CategoryOrder::TopCount,
    },
    ChartSpec {
        id: "job_title",
        title: "Top Job Titles by Visa Applications",
        x_label: "Job Title",
        column: JOB_TITLE,
        hue: None,
        order: CategoryOrder::TopCount,
    },
    ChartSpec {
        id: "status_by_country",
        title: "Top Countries of Citizenship",
        x_label: "Country of Citizenship",
        column: COUNTRY_OF_CITIZENSHIP,
        hue: Some(CASE_STATUS),
        order: CategoryOrder::TopCount,
    },
    ChartSpec {
        id: "application_type",
        title: "Top Application Types",
        x_label: "Application Type",
        column: APPLICATION_TYPE,
        hue: None,
        order: CategoryOrder::TopCount,
    },
    ChartSpec {
        id: "education",
        title: "Top Education Levels",
        x_label: "Education Level",
        column: EDUCATION,
        hue: None,
        order: CategoryOrder::TopCount,
    },
];
