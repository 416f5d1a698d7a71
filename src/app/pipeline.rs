//! Shared "benchmark pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! validate profile -> compute benchmark -> classify position -> sample curve
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::calc::{ReferenceTables, benchmark_curve, compute_with};
use crate::domain::{BenchmarkResult, MarketPosition, Profile};
use crate::error::AppError;

/// Upper bound on the sampled curve, whatever the profile's experience.
pub const MAX_CURVE_YEARS: u32 = 60;

/// All computed outputs of a single benchmark run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub profile: Profile,
    pub result: BenchmarkResult,
    pub position: MarketPosition,
    /// Benchmark salary by years of experience, `0..=max_years` (at most
    /// [`MAX_CURVE_YEARS`]).
    pub curve: Vec<(u32, i64)>,
}

/// Validate the profile and run the calculator against `tables`.
pub fn run_benchmark(tables: &ReferenceTables, profile: Profile, max_years: u32) -> Result<RunOutput, AppError> {
    profile.validate()?;

    let result = compute_with(tables, &profile);
    let position = MarketPosition::classify(profile.current_salary, result.benchmark_salary);
    let max_years = max_years.max(profile.experience_years).min(MAX_CURVE_YEARS);
    let curve = benchmark_curve(tables, &profile, max_years);

    Ok(RunOutput {
        profile,
        result,
        position,
        curve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(salary: f64, years: u32) -> Profile {
        Profile {
            current_salary: salary,
            experience_years: years,
            industry: "Manufacturing".to_string(),
            role: "Operations Manager".to_string(),
            location: "Ahmedabad".to_string(),
            education_level: "Professional Certification".to_string(),
        }
    }

    #[test]
    fn run_produces_result_and_curve() {
        let run = run_benchmark(ReferenceTables::builtin(), profile(900_000.0, 4), 10).unwrap();
        assert_eq!(run.curve.len(), 11);
        assert_eq!(run.curve[4].1, run.result.benchmark_salary);
        assert_eq!(
            run.position,
            MarketPosition::classify(900_000.0, run.result.benchmark_salary)
        );
    }

    #[test]
    fn curve_extends_to_cover_profile_years() {
        let run = run_benchmark(ReferenceTables::builtin(), profile(900_000.0, 40), 10).unwrap();
        assert_eq!(run.curve.last().map(|p| p.0), Some(40));
    }

    #[test]
    fn curve_length_is_bounded_for_extreme_experience() {
        let run = run_benchmark(ReferenceTables::builtin(), profile(900_000.0, u32::MAX), u32::MAX).unwrap();
        assert_eq!(run.curve.len(), MAX_CURVE_YEARS as usize + 1);
        assert_eq!(run.curve.last().map(|p| p.0), Some(MAX_CURVE_YEARS));
        assert_eq!(run.result, compute_with(ReferenceTables::builtin(), &run.profile));
        assert!(run.result.benchmark_salary > 0);
    }

    #[test]
    fn invalid_salary_is_rejected() {
        assert!(run_benchmark(ReferenceTables::builtin(), profile(0.0, 4), 10).is_err());
    }
}
