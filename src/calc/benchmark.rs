//! Profile -> benchmark computation.
//!
//! The model is a single pass:
//!
//! `benchmark = round(baseline(industry) * role * location * education * experience(years))`
//!
//! followed by a fixed ±30% market band, a growth projection, a percentile
//! interpolated inside the band, and two comparison lists read off the tables.

use tracing::{debug, warn};

use crate::calc::experience::experience_multiplier;
use crate::calc::tables::{DEFAULT_INDUSTRY_BASELINE, DEFAULT_MULTIPLIER, ReferenceTables, Table};
use crate::domain::{BenchmarkResult, IndustrySalary, Profile, RoleSalary};

pub const MARKET_LOW_FACTOR: f64 = 0.7;
pub const MARKET_HIGH_FACTOR: f64 = 1.3;

/// Years added for the growth projection.
pub const GROWTH_YEARS: u32 = 3;
/// Skill-improvement premium applied on top of the projected benchmark.
pub const GROWTH_PREMIUM: f64 = 1.1;

/// Maximum rows in each comparison list.
pub const COMPARISON_LEN: usize = 5;

const PERCENTILE_MID: u8 = 50;
const PERCENTILE_SPAN: f64 = 40.0;

/// Compute a benchmark against the built-in tables.
pub fn compute(profile: &Profile) -> BenchmarkResult {
    compute_with(ReferenceTables::builtin(), profile)
}

/// Compute a benchmark against an explicit table set.
///
/// Total: unknown labels degrade to the documented defaults.
pub fn compute_with(tables: &ReferenceTables, profile: &Profile) -> BenchmarkResult {
    let factors = Factors::resolve(tables, profile);
    let experience = experience_multiplier(profile.experience_years);

    let benchmark_salary = to_amount(factors.salary(experience));
    let market_low = to_amount(benchmark_salary as f64 * MARKET_LOW_FACTOR);
    let market_high = to_amount(benchmark_salary as f64 * MARKET_HIGH_FACTOR);

    let future = experience_multiplier(profile.experience_years.saturating_add(GROWTH_YEARS));
    let potential_growth_salary = to_amount(factors.salary(future) * GROWTH_PREMIUM);

    let percentile = percentile(profile.current_salary, benchmark_salary, market_low, market_high);

    let industry_comparison = tables
        .industry_baseline
        .iter()
        .filter(|(industry, _)| *industry != profile.industry)
        .take(COMPARISON_LEN)
        .map(|(industry, baseline)| IndustrySalary {
            industry: industry.to_string(),
            salary: to_amount(baseline * factors.role),
        })
        .collect();

    let role_comparison = tables
        .role_multiplier
        .iter()
        .filter(|(role, _)| *role != profile.role)
        .take(COMPARISON_LEN)
        .map(|(role, multiplier)| RoleSalary {
            role: role.to_string(),
            salary: to_amount(factors.baseline * multiplier),
        })
        .collect();

    let result = BenchmarkResult {
        benchmark_salary,
        market_low,
        market_median: benchmark_salary,
        market_high,
        potential_growth_salary,
        percentile,
        location_factor: factors.location,
        education_impact: factors.education,
        experience_multiplier: experience,
        industry_comparison,
        role_comparison,
    };

    debug!(
        benchmark = result.benchmark_salary,
        percentile = result.percentile,
        experience_multiplier = result.experience_multiplier,
        "computed benchmark"
    );

    result
}

/// Benchmark salary for every year count in `0..=max_years`, all else fixed.
pub fn benchmark_curve(tables: &ReferenceTables, profile: &Profile, max_years: u32) -> Vec<(u32, i64)> {
    let factors = Factors::resolve_quiet(tables, profile);
    (0..=max_years)
        .map(|years| (years, to_amount(factors.salary(experience_multiplier(years)))))
        .collect()
}

/// Position of `current` inside the `[low, high]` band around `benchmark`.
///
/// Equal to the benchmark is exactly 50. Above maps linearly to 50..=90 and
/// below to 10..=50, saturating at the band edges. A collapsed band side
/// (zero denominator) saturates instead of dividing.
pub fn percentile(current: f64, benchmark: i64, low: i64, high: i64) -> u8 {
    let b = benchmark as f64;
    if current == b {
        return PERCENTILE_MID;
    }

    if current > b {
        let ratio = band_ratio(current - b, high as f64 - b);
        PERCENTILE_MID + (ratio * PERCENTILE_SPAN).round() as u8
    } else {
        let ratio = band_ratio(b - current, b - low as f64);
        PERCENTILE_MID - (ratio * PERCENTILE_SPAN).round() as u8
    }
}

fn band_ratio(distance: f64, width: f64) -> f64 {
    if !(width > 0.0) {
        return 1.0;
    }
    (distance / width).clamp(0.0, 1.0)
}

fn to_amount(value: f64) -> i64 {
    value.round() as i64
}

/// The four table-derived inputs for one profile.
#[derive(Debug, Clone, Copy)]
struct Factors {
    baseline: f64,
    role: f64,
    location: f64,
    education: f64,
}

impl Factors {
    fn resolve(tables: &ReferenceTables, profile: &Profile) -> Self {
        Self {
            baseline: resolve(&tables.industry_baseline, "industry", &profile.industry, DEFAULT_INDUSTRY_BASELINE),
            role: resolve(&tables.role_multiplier, "role", &profile.role, DEFAULT_MULTIPLIER),
            location: resolve(&tables.location_factor, "location", &profile.location, DEFAULT_MULTIPLIER),
            education: resolve(
                &tables.education_impact,
                "education",
                &profile.education_level,
                DEFAULT_MULTIPLIER,
            ),
        }
    }

    fn resolve_quiet(tables: &ReferenceTables, profile: &Profile) -> Self {
        Self {
            baseline: tables.industry_baseline.lookup_or(&profile.industry, DEFAULT_INDUSTRY_BASELINE),
            role: tables.role_multiplier.lookup_or(&profile.role, DEFAULT_MULTIPLIER),
            location: tables.location_factor.lookup_or(&profile.location, DEFAULT_MULTIPLIER),
            education: tables.education_impact.lookup_or(&profile.education_level, DEFAULT_MULTIPLIER),
        }
    }

    fn salary(&self, experience: f64) -> f64 {
        self.baseline * self.role * self.location * self.education * experience
    }
}

fn resolve(table: &Table, field: &str, key: &str, default: f64) -> f64 {
    match table.get(key) {
        Some(v) => v,
        None => {
            warn!(field, label = key, default, "unknown label; using default");
            default
        }
    }
}
