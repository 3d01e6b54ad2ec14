//! Shared vocabulary for the PERM visa analysis.
//!
//! Column names, case-status values, the fixed chart sequence, and the
//! frequency summary types exchanged between the report and CLI crates.

pub mod chart;
pub mod columns;
pub mod status;
pub mod summary;

pub use chart::{CHART_SEQUENCE, CategoryOrder, ChartSpec, DEFAULT_TOP_N};
pub use columns::{RequiredColumn, Stage, required_columns};
pub use summary::{CategoryCount, FrequencySummary};
