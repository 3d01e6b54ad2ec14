//! PERM visa data transformation.
//!
//! This crate turns the raw visa table into its analysed form:
//!
//! - **clean**: identifier drop, status filtering and merging, text
//!   normalization, decision-date parsing and year derivation
//! - **datetime**: lenient calendar-date parsing for decision dates
//! - **text**: city and job-title normalization rules
//! - **encode**: first-occurrence label encoding of text columns
//!
//! Every stage takes the table by value and hands it back, so ownership
//! of the data is explicit at each step.

pub mod clean;
pub mod datetime;
pub mod encode;
mod error;
pub mod text;

pub use clean::{CleanReport, clean_visa_table};
pub use datetime::parse_decision_date;
pub use encode::{EncodedColumn, encode_text_columns, first_occurrence_codes};
pub use error::{Result, TransformError};
pub use text::{normalize_city, normalize_job_title};
