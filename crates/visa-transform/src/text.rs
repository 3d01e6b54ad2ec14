//! Text normalization rules for free-text columns.

/// Uppercases an employer city.
pub fn normalize_city(value: &str) -> String {
    value.to_uppercase()
}

/// Collapses job-title variants that share a prefix.
///
/// The title is lowercased, cut at the first hyphen, and trimmed, so
/// `"Software Engineer - II"` becomes `"software engineer"`. Applying the
/// rule to its own output returns the output unchanged.
pub fn normalize_job_title(value: &str) -> String {
    let lowered = value.to_lowercase();
    let head = lowered.split('-').next().unwrap_or_default();
    head.trim().to_string()
}
