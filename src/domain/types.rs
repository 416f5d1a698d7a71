//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - read from a profile JSON file
//! - used in-memory by the calculator and renderers
//! - exported to JSON and reloaded later for display

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A submitted compensation profile.
///
/// Category fields carry the label text as entered. Labels the reference
/// tables do not know are still valid; the calculator falls back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Current annual salary (INR).
    pub current_salary: f64,
    /// Whole years of experience.
    #[serde(alias = "experience")]
    pub experience_years: u32,
    pub industry: String,
    #[serde(alias = "jobRole")]
    pub role: String,
    pub location: String,
    #[serde(alias = "education")]
    pub education_level: String,
}

impl Profile {
    /// Form-level validation. The calculator itself accepts anything.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.current_salary.is_finite() || self.current_salary <= 0.0 {
            return Err(AppError::input(format!(
                "Current salary must be a positive amount (got {}).",
                self.current_salary
            )));
        }
        Ok(())
    }
}

/// One row of the industry comparison list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustrySalary {
    pub industry: String,
    pub salary: i64,
}

/// One row of the role comparison list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSalary {
    pub role: String,
    pub salary: i64,
}

/// Calculator output for a single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub benchmark_salary: i64,
    pub market_low: i64,
    pub market_median: i64,
    pub market_high: i64,
    pub potential_growth_salary: i64,
    /// Standing of the current salary inside the synthetic ±30% band (10..=90).
    pub percentile: u8,
    pub location_factor: f64,
    pub education_impact: f64,
    pub experience_multiplier: f64,
    pub industry_comparison: Vec<IndustrySalary>,
    pub role_comparison: Vec<RoleSalary>,
}

impl BenchmarkResult {
    /// Mean of the industry comparison salaries, if any.
    pub fn industry_average(&self) -> Option<f64> {
        if self.industry_comparison.is_empty() {
            return None;
        }
        let sum: i64 = self.industry_comparison.iter().map(|r| r.salary).sum();
        Some(sum as f64 / self.industry_comparison.len() as f64)
    }
}

/// Current salary relative to the benchmark, as used in the report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryComparison {
    Above,
    Below,
    At,
}

impl SalaryComparison {
    pub fn of(current: f64, benchmark: i64) -> Self {
        let benchmark = benchmark as f64;
        if current > benchmark {
            SalaryComparison::Above
        } else if current < benchmark {
            SalaryComparison::Below
        } else {
            SalaryComparison::At
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SalaryComparison::Above => "above",
            SalaryComparison::Below => "below",
            SalaryComparison::At => "at",
        }
    }
}

/// Five-way classification of the current salary against the benchmark.
///
/// The gap is measured relative to the current salary:
/// `(benchmark - current) / current`, with thresholds at 5% and 15%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    SignificantlyBelow,
    SlightlyBelow,
    AtMarket,
    SlightlyAbove,
    SignificantlyAbove,
}

impl MarketPosition {
    pub fn classify(current: f64, benchmark: i64) -> Self {
        if !(current > 0.0) {
            return MarketPosition::SignificantlyBelow;
        }
        let diff_pct = (benchmark as f64 - current) / current * 100.0;
        if diff_pct > 15.0 {
            MarketPosition::SignificantlyBelow
        } else if diff_pct > 5.0 {
            MarketPosition::SlightlyBelow
        } else if diff_pct < -15.0 {
            MarketPosition::SignificantlyAbove
        } else if diff_pct < -5.0 {
            MarketPosition::SlightlyAbove
        } else {
            MarketPosition::AtMarket
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            MarketPosition::SignificantlyBelow => "significantly below market rate",
            MarketPosition::SlightlyBelow => "slightly below market rate",
            MarketPosition::AtMarket => "at market rate",
            MarketPosition::SlightlyAbove => "slightly above market rate",
            MarketPosition::SignificantlyAbove => "significantly above market rate",
        }
    }
}

/// A saved run file (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRun {
    pub tool: String,
    pub generated: NaiveDate,
    pub profile: Profile,
    pub result: BenchmarkResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(salary: f64) -> Profile {
        Profile {
            current_salary: salary,
            experience_years: 3,
            industry: "Healthcare".to_string(),
            role: "HR Manager".to_string(),
            location: "Pune".to_string(),
            education_level: "PhD".to_string(),
        }
    }

    #[test]
    fn validate_rejects_non_positive_salary() {
        assert!(profile(1.0).validate().is_ok());
        assert!(profile(0.0).validate().is_err());
        assert!(profile(-5.0).validate().is_err());
        assert!(profile(f64::NAN).validate().is_err());
    }

    #[test]
    fn profile_accepts_form_field_names() {
        let json = r#"{
            "currentSalary": 900000,
            "experience": 4,
            "industry": "Retail",
            "jobRole": "Sales Executive",
            "location": "Delhi",
            "education": "Diploma"
        }"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.experience_years, 4);
        assert_eq!(p.role, "Sales Executive");
        assert_eq!(p.education_level, "Diploma");
    }

    #[test]
    fn salary_comparison_words() {
        assert_eq!(SalaryComparison::of(10.0, 5).as_str(), "above");
        assert_eq!(SalaryComparison::of(1.0, 5).as_str(), "below");
        assert_eq!(SalaryComparison::of(5.0, 5).as_str(), "at");
    }

    #[test]
    fn market_position_thresholds() {
        assert_eq!(MarketPosition::classify(100.0, 100), MarketPosition::AtMarket);
        assert_eq!(MarketPosition::classify(100.0, 105), MarketPosition::AtMarket);
        assert_eq!(MarketPosition::classify(100.0, 110), MarketPosition::SlightlyBelow);
        assert_eq!(MarketPosition::classify(100.0, 120), MarketPosition::SignificantlyBelow);
        assert_eq!(MarketPosition::classify(100.0, 90), MarketPosition::SlightlyAbove);
        assert_eq!(MarketPosition::classify(100.0, 80), MarketPosition::SignificantlyAbove);
        assert_eq!(MarketPosition::classify(0.0, 80), MarketPosition::SignificantlyBelow);
    }
}
