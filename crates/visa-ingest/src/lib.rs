//! PERM visa data ingestion.
//!
//! This crate loads the visa applications CSV into a Polars `DataFrame`
//! and describes its shape for progress reporting.
//!
//! # Features
//!
//! - **Header check**: the header row is read before the body and compared
//!   against the columns every later stage needs
//! - **Typed loading**: pipeline columns are always read as text
//! - **Profiling**: per-column dtype and null counts
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use visa_ingest::{load_visa_table, profile_dataframe};
//!
//! let df = load_visa_table(Path::new("us_perm_visas.csv"))?;
//! let profile = profile_dataframe(&df);
//! println!("{} rows x {} columns", profile.rows, profile.columns.len());
//! ```

mod csv;
mod error;
mod profile;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{CsvHeaders, check_required_columns, load_visa_table, read_csv_headers};

// === Profiling ===
pub use profile::{ColumnProfile, DatasetProfile, count_unique_non_null, profile_dataframe};
