//! End-to-end tests for the analysis pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use visa_cli::pipeline::{PipelineConfig, run_pipeline, run_pipeline_with};

const VISA_CSV: &str = "\
case_no,case_number,case_status,decision_date,employer_city,job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education,wage_offer
A-1,,Withdrawn,2016-01-05,new york,Software Engineer - II,INDIA,PERM,Master's,100000
A-2,,Certified-Expired,2015-03-10,new york,Software Engineer - II,INDIA,PERM,Master's,95000
A-3,,Denied,2014-07-01,austin,Data Analyst,CHINA,,Bachelor's,60000
";

fn config(dir: &Path, with_charts: bool) -> PipelineConfig {
    let input = dir.join("us_perm_visas.csv");
    fs::write(&input, VISA_CSV).unwrap();
    PipelineConfig {
        input,
        output: dir.join("cleaned_us_perm_visas.csv"),
        charts_dir: with_charts.then(|| dir.join("charts")),
        top_n: 10,
        summary_json: None,
    }
}

#[test]
fn test_pipeline_writes_encoded_csv() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), false);

    let result = run_pipeline(&config).unwrap();

    assert_eq!(result.clean.rows_before, 3);
    assert_eq!(result.clean.withdrawn_removed, 1);
    assert_eq!(result.clean.expired_merged, 1);
    assert_eq!(result.clean.rows_after, 2);
    assert!(result.charts.is_empty());

    let written = fs::read_to_string(&config.output).unwrap();
    insta::assert_snapshot!(written, @r"
    case_status,decision_date,employer_city,job_info_job_title,country_of_citizenship,application_type,foreign_worker_info_education,wage_offer,year
    0,2015-03-10,0,0,0,0,0,95000,2015
    1,2014-07-01,1,1,1,1,1,60000,2014
    ");
}

#[test]
fn test_pipeline_reports_input_profile() {
    let dir = TempDir::new().unwrap();
    let result = run_pipeline(&config(dir.path(), false)).unwrap();

    let ingest = &result.ingest;
    assert_eq!(ingest.profile.rows, 3);
    assert_eq!(ingest.profile.columns.len(), 10);
    assert_eq!(ingest.preview.height(), 3);
    assert_eq!(ingest.unique_case_numbers, 3);

    let missing = ingest.missing_values();
    assert!(missing.iter().all(|(name, _)| *name != "case_number"));
    assert!(missing.contains(&("application_type", 1)));
    assert!(missing.contains(&("case_status", 0)));
}

#[test]
fn test_pipeline_summaries_use_cleaned_values() {
    let dir = TempDir::new().unwrap();
    let result = run_pipeline(&config(dir.path(), false)).unwrap();

    let status = &result.summaries[0];
    let values: Vec<&str> = status.categories.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, vec!["Certified", "Denied"]);

    let cities = result
        .summaries
        .iter()
        .find(|summary| summary.chart.id == "employer_city")
        .unwrap();
    assert_eq!(cities.categories[0].value, "NEW YORK");

    let titles = result
        .summaries
        .iter()
        .find(|summary| summary.chart.id == "job_title")
        .unwrap();
    assert_eq!(titles.categories[0].value, "software engineer");
}

#[test]
fn test_pipeline_final_profile_has_no_text_columns() {
    let dir = TempDir::new().unwrap();
    let result = run_pipeline(&config(dir.path(), false)).unwrap();

    assert_eq!(result.final_profile.rows, 2);
    assert!(
        result
            .final_profile
            .columns
            .iter()
            .all(|column| column.dtype != "str")
    );
    let encoded: Vec<&str> = result.encoded.iter().map(|c| c.name.as_str()).collect();
    assert!(encoded.contains(&"case_status"));
    assert!(!encoded.contains(&"year"));
}

#[test]
fn test_pipeline_renders_charts_and_json() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), true);
    config.summary_json = Some(dir.path().join("summaries.json"));

    let result = run_pipeline(&config).unwrap();

    assert_eq!(result.charts.len(), 7);
    assert!(dir.path().join("charts").join("status_by_year.svg").exists());
    let json = fs::read_to_string(dir.path().join("summaries.json")).unwrap();
    assert!(json.contains("Top Education Levels"));
}

#[test]
fn test_pipeline_missing_column_fails_before_output() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path(), false);
    fs::write(&config.input, "case_no,case_status\nA-1,Certified\n").unwrap();

    let error = run_pipeline(&config).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.contains("decision_date"), "{message}");
    assert!(!config.output.exists());
}

#[test]
fn test_pipeline_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), false);
    config.input = dir.path().join("absent.csv");

    assert!(run_pipeline(&config).is_err());
}

#[test]
fn test_ingest_report_is_delivered_before_a_later_failure() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), false);
    config.output = dir.path().join("missing").join("cleaned_us_perm_visas.csv");

    let mut seen = None;
    let result = run_pipeline_with(&config, |ingest| {
        seen = Some((ingest.profile.rows, ingest.unique_case_numbers));
    });

    assert!(result.is_err());
    assert_eq!(seen, Some((3, 3)));
}

#[test]
fn test_ingest_report_is_not_delivered_when_loading_fails() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path(), false);
    config.input = dir.path().join("absent.csv");

    let mut called = false;
    let result = run_pipeline_with(&config, |_| called = true);

    assert!(result.is_err());
    assert!(!called);
}
