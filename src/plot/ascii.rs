//! ASCII/Unicode charts for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Two chart kinds:
//! - the benchmark-vs-experience curve (`-` line, `o` current salary)
//! - horizontal bar charts (`#` bars with formatted values)

use crate::domain::{BenchmarkResult, Profile};
use crate::report::format::format_inr_f64;

/// One bar: label + value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// "Your salary / benchmark / industry average" bars.
pub fn salary_comparison_bars(profile: &Profile, result: &BenchmarkResult) -> Vec<Bar> {
    let mut bars = vec![
        Bar::new("Your Salary", profile.current_salary),
        Bar::new("Benchmark", result.benchmark_salary as f64),
    ];
    if let Some(avg) = result.industry_average() {
        bars.push(Bar::new("Industry Avg", avg));
    }
    bars
}

/// Market distribution bars (10th / median / 90th + current).
pub fn distribution_bars(profile: &Profile, result: &BenchmarkResult) -> Vec<Bar> {
    vec![
        Bar::new("10th Percentile", result.market_low as f64),
        Bar::new("Median", result.market_median as f64),
        Bar::new("90th Percentile", result.market_high as f64),
        Bar::new("Your Salary", profile.current_salary),
    ]
}

/// Multiplier bars (location / education / experience).
pub fn factor_bars(result: &BenchmarkResult) -> Vec<Bar> {
    vec![
        Bar::new("Location", result.location_factor),
        Bar::new("Education", result.education_impact),
        Bar::new("Experience", result.experience_multiplier),
    ]
}

/// Current salary vs market median vs growth projection.
pub fn growth_bars(profile: &Profile, result: &BenchmarkResult) -> Vec<Bar> {
    vec![
        Bar::new("Your Salary", profile.current_salary),
        Bar::new("Market Median", result.market_median as f64),
        Bar::new("Growth Potential", result.potential_growth_salary as f64),
    ]
}

/// Render a horizontal bar chart. Bars scale to the largest value.
pub fn render_bar_chart(title: &str, bars: &[Bar], width: usize, fmt: fn(f64) -> String) -> String {
    let width = width.max(1);
    let label_w = bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let max = bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    for bar in bars {
        let len = if max > 0.0 && bar.value.is_finite() && bar.value > 0.0 {
            ((bar.value / max) * width as f64).round() as usize
        } else {
            0
        };
        let line = format!(
            "{:<label_w$} |{:<width$} {}",
            bar.label,
            "#".repeat(len.min(width)),
            fmt(bar.value),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn fmt_currency(v: f64) -> String {
    format_inr_f64(v)
}

pub fn fmt_multiplier(v: f64) -> String {
    format!("{v:.2}x")
}

/// Render all result charts (curve excluded).
pub fn render_result_charts(profile: &Profile, result: &BenchmarkResult, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&render_bar_chart(
        "Salary comparison:",
        &salary_comparison_bars(profile, result),
        width,
        fmt_currency,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Market distribution:",
        &distribution_bars(profile, result),
        width,
        fmt_currency,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Salary factors:",
        &factor_bars(result),
        width,
        fmt_multiplier,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Growth outlook:",
        &growth_bars(profile, result),
        width,
        fmt_currency,
    ));
    out
}

/// Render the benchmark-vs-experience curve with the current salary marked.
pub fn render_experience_plot(
    curve: &[(u32, i64)],
    current: (u32, f64),
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points: Vec<(f64, f64)> = curve.iter().map(|&(x, y)| (f64::from(x), y as f64)).collect();
    let (x_min, x_max) = x_range(&points, current.0).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(&points, current.1).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, &points, x_min, x_max, y_min, y_max);

    if current.1.is_finite() {
        let x = map_x(f64::from(current.0), x_min, x_max, width);
        let y = map_y(current.1, y_min, y_max, height);
        grid[y][x] = 'o';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: experience=[{x_min:.0}, {x_max:.0}] years | salary=[{}, {}]\n",
        format_inr_f64(y_min),
        format_inr_f64(y_max),
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    out
}

fn x_range(points: &[(f64, f64)], current_x: u32) -> Option<(f64, f64)> {
    let mut min_x = f64::from(current_x);
    let mut max_x = f64::from(current_x);
    for &(x, _) in points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    if max_x > min_x { Some((min_x, max_x)) } else { None }
}

fn y_range(points: &[(f64, f64)], current_y: f64) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in points {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if current_y.is_finite() {
        min_y = min_y.min(current_y);
        max_y = max_y.max(current_y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], x_min: f64, x_max: f64, y_min: f64, y_max: f64) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let xx = map_x(x, x_min, x_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, xx, yy, '-');
        } else {
            grid[yy][xx] = '-';
        }
        prev = Some((xx, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_chart_golden_snapshot() {
        let bars = vec![Bar::new("A", 10.0), Bar::new("Longer", 5.0), Bar::new("Zero", 0.0)];
        let txt = render_bar_chart("Chart:", &bars, 10, fmt_multiplier);
        let expected = concat!(
            "Chart:\n",
            "A      |########## 10.00x\n",
            "Longer |#####      5.00x\n",
            "Zero   |           0.00x\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn bar_chart_all_zero_draws_no_bars() {
        let bars = vec![Bar::new("A", 0.0), Bar::new("B", f64::NAN)];
        let txt = render_bar_chart("T", &bars, 4, fmt_multiplier);
        assert!(!txt.contains('#'));
    }

    #[test]
    fn experience_plot_golden_snapshot() {
        let curve = vec![(0, 100), (9, 100)];
        let txt = render_experience_plot(&curve, (9, 110.0), 10, 5);
        let expected = concat!(
            "Plot: experience=[0, 9] years | salary=[₹100, ₹111]\n",
            "         o\n",
            "\n",
            "\n",
            "\n",
            "----------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn result_charts_include_every_section() {
        let profile = Profile {
            current_salary: 1_500_000.0,
            experience_years: 6,
            industry: "Consulting".to_string(),
            role: "Data Scientist".to_string(),
            location: "Mumbai".to_string(),
            education_level: "Master's Degree".to_string(),
        };
        let result = crate::calc::compute(&profile);
        let txt = render_result_charts(&profile, &result, 30);
        for title in ["Salary comparison:", "Market distribution:", "Salary factors:", "Growth outlook:"] {
            assert!(txt.contains(title), "missing {title}");
        }
        assert!(txt.contains("90th Percentile"));
        assert!(txt.contains("1.40x"));
    }
}
