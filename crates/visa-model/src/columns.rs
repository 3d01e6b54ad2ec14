//! Column catalog for the US PERM visa dataset.
//!
//! Every pipeline step refers to columns by exact name, so the names live
//! here once and are shared by all crates.

use std::fmt;

use serde::Serialize;

pub const CASE_NO: &str = "case_no";
pub const CASE_NUMBER: &str = "case_number";
pub const CASE_STATUS: &str = "case_status";
pub const DECISION_DATE: &str = "decision_date";
pub const EMPLOYER_CITY: &str = "employer_city";
pub const JOB_TITLE: &str = "job_info_job_title";
pub const COUNTRY_OF_CITIZENSHIP: &str = "country_of_citizenship";
pub const APPLICATION_TYPE: &str = "application_type";
pub const EDUCATION: &str = "foreign_worker_info_education";

/// Derived during cleaning from [`DECISION_DATE`].
pub const YEAR: &str = "year";

/// Identifier columns removed before any analysis.
pub const IDENTIFIER_COLUMNS: [&str; 2] = [CASE_NO, CASE_NUMBER];

/// Pipeline stage that first touches a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    Clean,
    Summarize,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::Summarize => write!(f, "summarize"),
        }
    }
}

/// A column the input file must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredColumn {
    pub name: &'static str,
    pub stage: Stage,
    pub usage: &'static str,
}

const REQUIRED: [RequiredColumn; 9] = [
    RequiredColumn {
        name: CASE_NO,
        stage: Stage::Clean,
        usage: "unique case count, then dropped",
    },
    RequiredColumn {
        name: CASE_NUMBER,
        stage: Stage::Clean,
        usage: "dropped",
    },
    RequiredColumn {
        name: CASE_STATUS,
        stage: Stage::Clean,
        usage: "withdrawn filter, expired merge, chart hue",
    },
    RequiredColumn {
        name: DECISION_DATE,
        stage: Stage::Clean,
        usage: "parsed to a date, source of the year column",
    },
    RequiredColumn {
        name: EMPLOYER_CITY,
        stage: Stage::Clean,
        usage: "uppercased, top cities chart",
    },
    RequiredColumn {
        name: JOB_TITLE,
        stage: Stage::Clean,
        usage: "lowercased and cut at the first hyphen, top titles chart",
    },
    RequiredColumn {
        name: COUNTRY_OF_CITIZENSHIP,
        stage: Stage::Summarize,
        usage: "top countries chart split by status",
    },
    RequiredColumn {
        name: APPLICATION_TYPE,
        stage: Stage::Summarize,
        usage: "top application types chart",
    },
    RequiredColumn {
        name: EDUCATION,
        stage: Stage::Summarize,
        usage: "top education levels chart",
    },
];

/// Columns the input file must contain, in pipeline order.
pub fn required_columns() -> &'static [RequiredColumn] {
    &REQUIRED
}

/// Columns that are read as text regardless of what the CSV reader would infer.
pub fn text_columns() -> impl Iterator<Item = &'static str> {
    REQUIRED.iter().map(|column| column.name)
}
