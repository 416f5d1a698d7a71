//! Formatted terminal output.
//!
//! Currency is shown as whole rupees with Indian digit grouping
//! (`₹19,84,320`): the last three digits, then groups of two.

use crate::calc::ReferenceTables;
use crate::domain::{BenchmarkResult, MarketPosition, Profile, SalaryComparison};

/// Format a whole-rupee amount, e.g. `₹12,34,567`.
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(amount.unsigned_abs()))
}

/// Format a fractional amount, rounded to the nearest rupee.
pub fn format_inr_f64(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    format_inr(amount.round() as i64)
}

fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`, ...
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn fmt_factor(v: f64) -> String {
    format!("{v:.2}x")
}

/// Format the full run summary (profile + benchmark + factors + growth).
pub fn format_run_summary(profile: &Profile, result: &BenchmarkResult) -> String {
    let mut out = String::new();

    out.push_str("=== salbench - Salary Benchmark ===\n");
    out.push_str(&format!(
        "Profile: {} | {} | {}\n",
        profile.role, profile.industry, profile.location
    ));
    out.push_str(&format!(
        "Experience: {} years | Education: {}\n",
        profile.experience_years, profile.education_level
    ));
    out.push_str(&format!("Current salary: {}\n", format_inr_f64(profile.current_salary)));

    out.push('\n');
    out.push_str(&format!("Benchmark salary: {}\n", format_inr(result.benchmark_salary)));
    out.push_str(&format!(
        "Market range: low {} | median {} | high {}\n",
        format_inr(result.market_low),
        format_inr(result.market_median),
        format_inr(result.market_high),
    ));
    out.push_str(&format!(
        "Percentile: {} (you earn more than {}% of professionals in your field)\n",
        ordinal(result.percentile),
        result.percentile
    ));

    let comparison = SalaryComparison::of(profile.current_salary, result.benchmark_salary);
    let position = MarketPosition::classify(profile.current_salary, result.benchmark_salary);
    out.push_str(&format!(
        "Position: {} the benchmark ({})\n",
        comparison.as_str(),
        position.display_name()
    ));

    out.push_str("\nFactors:\n");
    out.push_str(&format!("- location  : {}\n", fmt_factor(result.location_factor)));
    out.push_str(&format!("- education : {}\n", fmt_factor(result.education_impact)));
    out.push_str(&format!("- experience: {}\n", fmt_factor(result.experience_multiplier)));

    out.push_str(&format!(
        "\nGrowth potential (+3 years): {}\n",
        format_inr(result.potential_growth_salary)
    ));

    out
}

/// Format the industry and role comparison tables.
pub fn format_comparisons(result: &BenchmarkResult) -> String {
    let mut out = String::new();

    out.push_str("Other industries (same role):\n");
    let rows: Vec<(&str, i64)> = result
        .industry_comparison
        .iter()
        .map(|r| (r.industry.as_str(), r.salary))
        .collect();
    out.push_str(&format_table("industry", &rows));
    out.push('\n');

    out.push_str("Other roles (same industry):\n");
    let rows: Vec<(&str, i64)> = result
        .role_comparison
        .iter()
        .map(|r| (r.role.as_str(), r.salary))
        .collect();
    out.push_str(&format_table("role", &rows));

    out
}

fn format_table(label: &str, rows: &[(&str, i64)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{label:<26} {:>14}\n", "salary"));
    out.push_str(&format!("{:-<26} {:-<14}\n", "", ""));
    for (name, salary) in rows {
        out.push_str(&format!("{:<26} {:>14}\n", truncate(name, 26), format_inr(*salary)));
    }
    out
}

/// Format the reference tables (`salbench tables`).
pub fn format_reference_tables(tables: &ReferenceTables) -> String {
    let mut out = String::new();

    out.push_str("Industries (baseline salary):\n");
    for (name, value) in tables.industry_baseline.iter() {
        out.push_str(&format!("  {:<28} {:>14}\n", name, format_inr_f64(value)));
    }

    let multipliers = [
        ("Roles (multiplier):", &tables.role_multiplier),
        ("Locations (factor):", &tables.location_factor),
        ("Education (impact):", &tables.education_impact),
    ];
    for (title, table) in multipliers {
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        for (name, value) in table.iter() {
            out.push_str(&format!("  {:<28} {:>14}\n", name, fmt_factor(value)));
        }
    }

    out
}

/// Plain-text body for the emailed summary.
pub fn format_email_body(profile: &Profile, result: &BenchmarkResult) -> String {
    let comparison = SalaryComparison::of(profile.current_salary, result.benchmark_salary);
    let mut out = String::new();
    out.push_str("Salary Benchmark Report\n\n");
    out.push_str(&format!(
        "{} in {} ({}), {} years, {}\n",
        profile.role, profile.industry, profile.location, profile.experience_years, profile.education_level
    ));
    out.push_str(&format!("Current salary:   {}\n", format_inr_f64(profile.current_salary)));
    out.push_str(&format!("Benchmark salary: {}\n", format_inr(result.benchmark_salary)));
    out.push_str(&format!(
        "Market range:     {} - {}\n",
        format_inr(result.market_low),
        format_inr(result.market_high)
    ));
    out.push_str(&format!("Percentile:       {}\n", ordinal(result.percentile)));
    out.push_str(&format!("Growth potential: {}\n", format_inr(result.potential_growth_salary)));
    out.push_str(&format!(
        "\nYour salary is {} the market benchmark for your role and experience.\n",
        comparison.as_str()
    ));
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
