use std::fs;
use std::path::PathBuf;

use polars::prelude::DataType;
use tempfile::TempDir;
use visa_ingest::{
    IngestError, count_unique_non_null, load_visa_table, profile_dataframe, read_csv_headers,
};

const HEADER: &str = "case_no,case_number,case_status,decision_date,employer_city,\
job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education";

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_rows_with_missing_cells_as_nulls() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "us_perm_visas.csv",
        &format!(
            "{HEADER}\n\
             A-1,,Certified,2015-03-01,new york,Engineer - II,INDIA,PERM,Master's\n\
             A-2,,Denied,,austin,,CHINA,,Bachelor's\n\
             A-1,,Withdrawn,2016-07-12,boston,Analyst,INDIA,PERM,\n"
        ),
    );

    let df = load_visa_table(&path).expect("load table");
    assert_eq!(df.shape(), (3, 9));

    let profile = profile_dataframe(&df);
    assert_eq!(profile.get("decision_date").unwrap().nulls, 1);
    assert_eq!(profile.get("case_number").unwrap().nulls, 3);
    assert_eq!(profile.get("case_number").unwrap().dtype, DataType::String.to_string());
    assert_eq!(count_unique_non_null(&df, "case_no").unwrap(), 2);
}

#[test]
fn reports_every_missing_column_by_name() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "partial.csv", "case_no,case_status\nA-1,Certified\n");

    let err = load_visa_table(&path).expect_err("missing columns");
    let message = err.to_string();
    assert!(message.contains("decision_date"));
    assert!(message.contains("foreign_worker_info_education"));
    assert!(!message.contains("case_status,"));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("us_perm_visas.csv");
    let err = load_visa_table(&path).expect_err("missing file");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn header_only_file_loads_empty_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "empty.csv", &format!("{HEADER}\n"));
    let headers = read_csv_headers(&path).expect("headers");
    assert_eq!(headers.len(), 9);
    let df = load_visa_table(&path).expect("load table");
    assert_eq!(df.height(), 0);
}

#[test]
fn late_text_value_in_untyped_column_widens_instead_of_failing() {
    let dir = TempDir::new().expect("temp dir");
    let mut contents = format!("{HEADER},employer_postal_code\n");
    for row in 0..10_050 {
        let postal = if row == 10_020 { "94043-1234" } else { "94043" };
        contents.push_str(&format!(
            "A-{row},,Certified,2015-03-01,austin,Engineer,INDIA,PERM,Master's,{postal}\n"
        ));
    }
    let path = write_csv(&dir, "us_perm_visas.csv", &contents);

    let df = load_visa_table(&path).expect("load table");

    assert_eq!(df.height(), 10_050);
    let postal = df.column("employer_postal_code").unwrap();
    assert_eq!(postal.dtype(), &DataType::String);
    assert_eq!(postal.str().unwrap().get(10_020), Some("94043-1234"));
    assert_eq!(postal.str().unwrap().get(0), Some("94043"));
}

#[test]
fn padded_header_names_are_usable_by_name() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "us_perm_visas.csv",
        "case_no,case_number, case_status,decision_date,employer_city,\
job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education \n\
A-1,,Denied,2015-03-01,austin,Engineer,INDIA,PERM,Master's\n",
    );

    let df = load_visa_table(&path).expect("load table");

    let status = df.column("case_status").unwrap();
    assert_eq!(status.str().unwrap().get(0), Some(visa_model::status::DENIED));
    assert!(df.column("foreign_worker_info_education").is_ok());
}
