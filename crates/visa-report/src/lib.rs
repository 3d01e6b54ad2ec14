//! Reporting for the PERM visa analysis.
//!
//! - **frequency**: category counts behind each chart, with top-N selection
//! - **chart**: SVG bar charts rendered with `plotters`
//! - **writer**: cleaned CSV output and JSON export of the summaries

pub mod chart;
mod error;
pub mod frequency;
pub mod writer;

pub use chart::{render_chart, render_charts};
pub use error::{ReportError, Result};
pub use frequency::{summarize, summarize_all, take_top};
pub use writer::{write_csv, write_summary_json};
