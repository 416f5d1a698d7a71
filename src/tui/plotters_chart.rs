//! Salary-by-experience chart, drawn with Plotters into the Ratatui buffer
//! (via `plotters-ratatui-backend`).

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::app::pipeline::RunOutput;
use crate::calc::{MARKET_HIGH_FACTOR, MARKET_LOW_FACTOR};

const LAKH: f64 = 100_000.0;

/// Chart data in lakh of rupees, prepared once per recompute.
#[derive(Debug, Clone)]
pub struct SalaryCurve {
    pub benchmark: Vec<(f64, f64)>,
    pub band_low: Vec<(f64, f64)>,
    pub band_high: Vec<(f64, f64)>,
    /// `(experience years, current salary)`.
    pub current: (f64, f64),
    pub max_years: f64,
    pub y_range: (f64, f64),
}

impl SalaryCurve {
    pub fn from_run(run: &RunOutput) -> Self {
        let benchmark: Vec<(f64, f64)> = run
            .curve
            .iter()
            .map(|&(years, salary)| (f64::from(years), salary as f64 / LAKH))
            .collect();
        let scaled = |factor: f64| benchmark.iter().map(|&(x, y)| (x, y * factor)).collect::<Vec<_>>();
        let band_low = scaled(MARKET_LOW_FACTOR);
        let band_high = scaled(MARKET_HIGH_FACTOR);
        let current = (
            f64::from(run.profile.experience_years),
            run.profile.current_salary / LAKH,
        );

        let max_years = benchmark.last().map_or(1.0, |p| p.0).max(current.0).max(1.0);

        let ys = band_low.iter().chain(&band_high).map(|p| p.1).chain([current.1]);
        let (lo, hi) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
        let y_range = if lo.is_finite() && hi.is_finite() && hi > lo {
            let pad = (hi - lo) * 0.05;
            ((lo - pad).max(0.0), hi + pad)
        } else {
            (0.0, 1.0)
        };

        Self {
            benchmark,
            band_low,
            band_high,
            current,
            max_years,
            y_range,
        }
    }
}

/// Render-only widget over a prepared [`SalaryCurve`].
pub struct SalaryCurveChart<'a> {
    pub data: &'a SalaryCurve,
}

impl Widget for SalaryCurveChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Resize the terminal to see the chart.",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let data = self.data;
        let (y0, y1) = data.y_range;
        if !(y0.is_finite() && y1.is_finite()) || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 7)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(0.0..data.max_years, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc("experience (yrs)")
                .y_desc("salary (lakh)")
                .x_labels(6)
                .y_labels(4)
                .x_label_formatter(&|v| format!("{v:.0}"))
                .y_label_formatter(&|v| format!("{v:.1}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            let band = RGBColor(110, 110, 110);
            chart.draw_series(LineSeries::new(data.band_low.iter().copied(), &band))?;
            chart.draw_series(LineSeries::new(data.band_high.iter().copied(), &band))?;
            chart.draw_series(LineSeries::new(data.benchmark.iter().copied(), &CYAN))?;

            // Pixel marker: the ratatui backend scales `Circle` radii wrongly.
            chart.draw_series(std::iter::once(Pixel::new(data.current, YELLOW)))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
