//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, check_required_columns, read_csv_headers};
pub use reader::load_visa_table;
