//! Tests for label encoding.

use polars::prelude::*;
use proptest::prelude::*;

use visa_transform::{clean_visa_table, encode_text_columns, first_occurrence_codes};

#[test]
fn encodes_only_text_columns() {
    let df = df! {
        "case_status" => [Some("Certified"), Some("Denied"), Some("Certified"), None],
        "wage" => [1i64, 2, 3, 4],
        "employer_city" => [Some("AUSTIN"), Some("AUSTIN"), Some("BOSTON"), Some("nan")],
    }
    .unwrap();

    let (df, encoded) = encode_text_columns(df).expect("encode");

    assert!(!df.dtypes().contains(&DataType::String));
    assert_eq!(df.column("wage").unwrap().dtype(), &DataType::Int64);
    let status: Vec<Option<u32>> = df
        .column("case_status")
        .unwrap()
        .u32()
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(status, vec![Some(0), Some(1), Some(0), Some(2)]);

    let names: Vec<&str> = encoded.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["case_status", "employer_city"]);
    assert_eq!(encoded[1].categories, 3);
}

#[test]
fn same_value_in_two_columns_gets_independent_codes() {
    let df = df! {
        "a" => ["x", "y"],
        "b" => ["y", "x"],
    }
    .unwrap();
    let (df, _) = encode_text_columns(df).expect("encode");
    assert_eq!(df.column("a").unwrap().u32().unwrap().get(1), Some(1));
    assert_eq!(df.column("b").unwrap().u32().unwrap().get(0), Some(0));
}

#[test]
fn cleaned_table_encodes_to_numeric_and_date_columns() {
    let df = df! {
        "case_no" => ["A-1", "A-2"],
        "case_number" => [None::<&str>, None],
        "case_status" => ["Certified-Expired", "Denied"],
        "decision_date" => ["2015-03-01", "2016-01-02"],
        "employer_city" => ["new york", "austin"],
        "job_info_job_title" => ["Engineer - II", "Analyst"],
        "country_of_citizenship" => ["INDIA", "CHINA"],
        "application_type" => ["PERM", "PERM"],
        "foreign_worker_info_education" => ["Master's", "Doctorate"],
    }
    .unwrap();
    let (df, _) = clean_visa_table(df).expect("clean");
    let (df, _) = encode_text_columns(df).expect("encode");

    for col in df.get_columns() {
        let dtype = col.dtype();
        assert!(
            dtype.is_primitive_numeric() || dtype == &DataType::Date,
            "{} has dtype {dtype}",
            col.name()
        );
    }
}

proptest! {
    #[test]
    fn codes_are_deterministic(values in prop::collection::vec(
        prop::option::of("[a-c]{1,2}"), 0..40)
    ) {
        let first = first_occurrence_codes(values.iter().map(|v| v.as_deref()));
        let second = first_occurrence_codes(values.iter().map(|v| v.as_deref()));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn codes_appear_in_increasing_order(values in prop::collection::vec("[a-d]", 0..40)) {
        let (codes, categories) = first_occurrence_codes(values.iter().map(|v| Some(v.as_str())));
        let mut next = 0u32;
        for code in &codes {
            prop_assert!(*code <= next);
            if *code == next {
                next += 1;
            }
        }
        prop_assert_eq!(next as usize, categories);
    }
}
