//! Static HTML benchmark report.
//!
//! The document embeds every field verbatim: profile, benchmark, market range,
//! percentile, multipliers (two decimals), the above/below/at comparison and
//! the growth projection. Profile text is escaped before embedding.

use chrono::{Datelike, NaiveDate};

use crate::domain::{BenchmarkResult, MarketPosition, Profile, SalaryComparison};
use crate::report::format::{format_inr, format_inr_f64, ordinal};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; color: #333; margin: 0; padding: 0; }
.container { max-width: 800px; margin: 0 auto; padding: 20px; }
.header { background-color: #245e4f; color: white; padding: 20px; text-align: center; }
.section { margin-bottom: 20px; padding: 15px; border: 1px solid #ddd; border-radius: 5px; }
.footer { text-align: center; margin-top: 30px; font-size: 12px; color: #666; }
table { width: 100%; border-collapse: collapse; margin: 15px 0; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #ddd; }
th { background-color: #f8f8f8; }
.highlight { background-color: #7ac9a7; padding: 10px; border-radius: 5px; display: inline-block; }";

/// Default report file name for a given date.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Salary_Benchmark_Report_{}.html", date.format("%Y-%m-%d"))
}

/// Render the full HTML document.
pub fn render_html_report(profile: &Profile, result: &BenchmarkResult, generated: NaiveDate) -> String {
    let comparison = SalaryComparison::of(profile.current_salary, result.benchmark_salary);
    let position = MarketPosition::classify(profile.current_salary, result.benchmark_salary);

    let industry = escape(&profile.industry);
    let role = escape(&profile.role);
    let location = escape(&profile.location);
    let education = escape(&profile.education_level);

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<title>Salary Benchmark Report</title>\n");
    out.push_str(&format!("<style>\n{STYLE}\n</style>\n"));
    out.push_str("</head>\n<body>\n<div class=\"container\">\n");

    out.push_str("<div class=\"header\">\n");
    out.push_str("<h1>Salary Benchmarking Report</h1>\n");
    out.push_str(&format!("<p>Generated on {}</p>\n", generated.format("%d %B %Y")));
    out.push_str("</div>\n");

    out.push_str("<div class=\"section\">\n<h2>Your Profile</h2>\n<table>\n");
    push_row(&mut out, "Industry:", &industry);
    push_row(&mut out, "Job Role:", &role);
    push_row(&mut out, "Location:", &location);
    push_row(&mut out, "Experience:", &format!("{} years", profile.experience_years));
    push_row(&mut out, "Education:", &education);
    push_row(&mut out, "Current Salary:", &format_inr_f64(profile.current_salary));
    out.push_str("</table>\n</div>\n");

    out.push_str("<div class=\"section\">\n<h2>Salary Benchmark Results</h2>\n");
    out.push_str(&format!(
        "<p>Based on your profile and current market trends, your benchmark salary is: \
         <span class=\"highlight\">{}</span></p>\n",
        format_inr(result.benchmark_salary)
    ));
    out.push_str("<h3>Market Salary Range</h3>\n<table>\n");
    push_row(&mut out, "10th Percentile (Low):", &format_inr(result.market_low));
    push_row(&mut out, "Market Median:", &format_inr(result.market_median));
    push_row(&mut out, "90th Percentile (High):", &format_inr(result.market_high));
    out.push_str("</table>\n");
    out.push_str(&format!(
        "<p>Your current salary puts you at the <strong>{} percentile</strong> of the market \
         ({}).</p>\n",
        ordinal(result.percentile),
        position.display_name()
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"section\">\n<h2>Insights and Recommendations</h2>\n<ul>\n");
    out.push_str(&format!(
        "<li>Your salary is {} the market benchmark for your role and experience.</li>\n",
        comparison.as_str()
    ));
    out.push_str(&format!(
        "<li>The location factor for {location} is {:.2}x the baseline.</li>\n",
        result.location_factor
    ));
    out.push_str(&format!(
        "<li>Your education level ({education}) has an impact factor of {:.2}x on the salary.</li>\n",
        result.education_impact
    ));
    out.push_str(&format!(
        "<li>Your years of experience ({}) contribute a multiplier of {:.2}x to your salary potential.</li>\n",
        profile.experience_years, result.experience_multiplier
    ));
    out.push_str("</ul>\n");

    out.push_str("<h3>Comparisons</h3>\n<table>\n<tr><th>Industry (same role)</th><th>Salary</th></tr>\n");
    for row in &result.industry_comparison {
        push_row_td(&mut out, &escape(&row.industry), &format_inr(row.salary));
    }
    out.push_str("</table>\n<table>\n<tr><th>Role (same industry)</th><th>Salary</th></tr>\n");
    for row in &result.role_comparison {
        push_row_td(&mut out, &escape(&row.role), &format_inr(row.salary));
    }
    out.push_str("</table>\n");

    out.push_str("<h3>Growth Potential</h3>\n");
    out.push_str(&format!(
        "<p>With continued career development, you could potentially reach a salary of {} \
         in the next few years.</p>\n",
        format_inr(result.potential_growth_salary)
    ));
    out.push_str("</div>\n");

    out.push_str("<div class=\"footer\">\n");
    out.push_str(&format!("<p>&copy; {} salbench.</p>\n", generated.year()));
    out.push_str(
        "<p>This report is based on static market tables and a simple statistical model. \
         Individual results may vary.</p>\n",
    );
    out.push_str("</div>\n</div>\n</body>\n</html>\n");

    out
}

fn push_row(out: &mut String, header: &str, value: &str) {
    out.push_str(&format!("<tr><th>{header}</th><td>{value}</td></tr>\n"));
}

fn push_row_td(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!("<tr><td>{name}</td><td>{value}</td></tr>\n"));
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Profile, BenchmarkResult) {
        let profile = Profile {
            current_salary: 1_000_000.0,
            experience_years: 3,
            industry: "Banking & Finance".to_string(),
            role: "Software Engineer".to_string(),
            location: "Bangalore".to_string(),
            education_level: "Bachelor's Degree".to_string(),
        };
        let result = crate::calc::compute(&profile);
        (profile, result)
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(report_file_name(date), "Salary_Benchmark_Report_2025-03-07.html");
    }

    #[test]
    fn report_embeds_fields() {
        let (profile, result) = sample();
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let html = render_html_report(&profile, &result, date);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Generated on 07 March 2025"));
        assert!(html.contains(&format_inr(result.benchmark_salary)));
        assert!(html.contains(&format_inr(result.market_low)));
        assert!(html.contains(&format_inr(result.market_high)));
        assert!(html.contains("The location factor for Bangalore is 1.30x the baseline."));
        assert!(html.contains("has an impact factor of 1.00x"));
        assert!(html.contains("contribute a multiplier of 1.06x"));
        assert!(html.contains("Your salary is below the market benchmark"));
        assert!(html.contains("&copy; 2025"));
    }

    #[test]
    fn profile_text_is_escaped() {
        let (profile, result) = sample();
        let html = render_html_report(&profile, &result, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(html.contains("Banking &amp; Finance"));
        assert!(html.contains("Bachelor&#39;s Degree"));
        assert!(!html.contains("Banking & Finance"));
    }
}
