//! Label encoding of text columns.
//!
//! Each text column is encoded on its own: distinct values receive codes
//! `0, 1, 2, ...` in the order they first appear, and the column is replaced
//! by a `UInt32` column of codes. The value-to-code table is discarded once
//! the column is rewritten, so the encoding cannot be reversed from the
//! output alone.

use std::collections::HashMap;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::Result;

/// Text used for null cells before encoding.
pub const NULL_LABEL: &str = "nan";

/// A column rewritten by [`encode_text_columns`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedColumn {
    pub name: String,
    /// Number of distinct codes assigned, null label included.
    pub categories: usize,
}

/// Assigns first-occurrence codes to a sequence of optional labels.
///
/// Nulls are treated as the label [`NULL_LABEL`], so a literal `"nan"` and a
/// missing value share one code.
pub fn first_occurrence_codes<'a, I>(values: I) -> (Vec<u32>, usize)
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut codes_by_label: HashMap<&'a str, u32> = HashMap::new();
    let codes: Vec<u32> = values
        .into_iter()
        .map(|value| {
            let label = value.unwrap_or(NULL_LABEL);
            let next = codes_by_label.len() as u32;
            *codes_by_label.entry(label).or_insert(next)
        })
        .collect();
    (codes, codes_by_label.len())
}

/// Replaces every `String` column with its label codes.
///
/// Non-text columns (numbers, booleans, dates) are left as they are.
pub fn encode_text_columns(mut df: DataFrame) -> Result<(DataFrame, Vec<EncodedColumn>)> {
    let text_names: Vec<PlSmallStr> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype() == &DataType::String)
        .map(|col| col.name().clone())
        .collect();

    let mut encoded = Vec::with_capacity(text_names.len());
    for name in text_names {
        let (codes, categories) = {
            let ca = df.column(name.as_str())?.str()?;
            first_occurrence_codes(ca)
        };
        debug!(column = %name, categories, "encoded column");
        df.with_column(Series::new(name.clone(), codes))?;
        encoded.push(EncodedColumn {
            name: name.to_string(),
            categories,
        });
    }

    info!(columns = encoded.len(), "label encoded text columns");
    Ok((df, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_first_occurrence() {
        let (codes, categories) =
            first_occurrence_codes([Some("b"), Some("a"), Some("b"), Some("c"), Some("a")]);
        assert_eq!(codes, vec![0, 1, 0, 2, 1]);
        assert_eq!(categories, 3);
    }

    #[test]
    fn test_null_shares_code_with_nan_label() {
        let (codes, categories) = first_occurrence_codes([None, Some("x"), Some("nan"), None]);
        assert_eq!(codes, vec![0, 1, 0, 0]);
        assert_eq!(categories, 2);
    }

    #[test]
    fn test_empty_input() {
        let (codes, categories) = first_occurrence_codes(std::iter::empty::<Option<&str>>());
        assert!(codes.is_empty());
        assert_eq!(categories, 0);
    }
}
