//! Write the HTML benchmark report to disk.
//!
//! Without an explicit path the report lands in the configured report
//! directory as `Salary_Benchmark_Report_<date>.html`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{BenchmarkResult, Profile};
use crate::error::AppError;
use crate::report::{render_html_report, report_file_name};

/// Pick the output path: an explicit file, or the dated default inside `dir`.
pub fn resolve_report_path(explicit: Option<&Path>, dir: &Path, date: NaiveDate) -> PathBuf {
    match explicit {
        Some(path) if path.is_dir() => path.join(report_file_name(date)),
        Some(path) => path.to_path_buf(),
        None => dir.join(report_file_name(date)),
    }
}

/// Render and write the report, returning the path written.
pub fn write_html_report(
    path: &Path,
    profile: &Profile,
    result: &BenchmarkResult,
    date: NaiveDate,
) -> Result<PathBuf, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::input(format!("Failed to create report directory '{}': {e}", parent.display()))
        })?;
    }

    let html = render_html_report(profile, result, date);
    fs::write(path, html)
        .map_err(|e| AppError::input(format!("Failed to write report '{}': {e}", path.display())))?;

    info!(path = %path.display(), "wrote benchmark report");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Profile, BenchmarkResult) {
        let profile = Profile {
            current_salary: 2_000_000.0,
            experience_years: 8,
            industry: "Consulting".to_string(),
            role: "Product Manager".to_string(),
            location: "Gurgaon".to_string(),
            education_level: "Master's Degree".to_string(),
        };
        let result = crate::calc::compute(&profile);
        (profile, result)
    }

    #[test]
    fn default_path_uses_dated_name() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let p = resolve_report_path(None, Path::new("reports"), date);
        assert_eq!(p, PathBuf::from("reports/Salary_Benchmark_Report_2025-06-01.html"));

        let p = resolve_report_path(Some(Path::new("mine.html")), Path::new("reports"), date);
        assert_eq!(p, PathBuf::from("mine.html"));
    }

    #[test]
    fn explicit_directory_gets_dated_name() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let p = resolve_report_path(Some(dir.path()), Path::new("ignored"), date);
        assert_eq!(p, dir.path().join("Salary_Benchmark_Report_2025-06-01.html"));
    }

    #[test]
    fn writes_report_creating_parent_dirs() {
        let (profile, result) = sample();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("report.html");
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        let written = write_html_report(&target, &profile, &result, date).unwrap();
        assert_eq!(written, target);

        let html = fs::read_to_string(&target).unwrap();
        assert!(html.contains("Salary Benchmark Results"));
        assert!(html.contains("Gurgaon"));
    }
}
