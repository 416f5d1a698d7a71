//! Ratatui-based terminal UI.
//!
//! The TUI is the interactive form: pick industry, role, location and
//! education from the reference tables, enter salary and experience, and the
//! benchmark, comparisons and salary curve update as you go. The report can be
//! exported and emailed (simulated) from the same screen.
//!
//! All form state lives in [`App`]; nothing is shared or persisted.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::pipeline::{RunOutput, run_benchmark};
use crate::calc::{ReferenceTables, Table};
use crate::config::Settings;
use crate::domain::Profile;
use crate::error::AppError;
use crate::notify::{SimulatedTransport, is_valid_address, send_report};
use crate::report::format::{format_inr, format_inr_f64, ordinal};

mod plotters_chart;

use plotters_chart::{SalaryCurve, SalaryCurveChart};

const DEFAULT_SALARY: f64 = 1_000_000.0;
const DEFAULT_EXPERIENCE: u32 = 3;
const CURVE_YEARS: u32 = 25;
const SALARY_STEP: f64 = 50_000.0;

/// Start the TUI.
pub fn run(tables: ReferenceTables, settings: Settings) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(tables, settings);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Salary,
    Experience,
    Industry,
    Role,
    Location,
    Education,
}

const FIELDS: [Field; 6] = [
    Field::Salary,
    Field::Experience,
    Field::Industry,
    Field::Role,
    Field::Location,
    Field::Education,
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Normal,
    Salary(String),
    Email(String),
}

struct App {
    tables: ReferenceTables,
    settings: Settings,
    salary: f64,
    experience: u32,
    industry: usize,
    role: usize,
    location: usize,
    education: usize,
    selected_field: usize,
    input: InputMode,
    status: String,
    run: Option<RunOutput>,
    chart: Option<SalaryCurve>,
    /// Address queued for delivery after the next draw.
    pending_email: Option<String>,
}

impl App {
    fn new(tables: ReferenceTables, settings: Settings) -> Self {
        let mut app = Self {
            tables,
            settings,
            salary: DEFAULT_SALARY,
            experience: DEFAULT_EXPERIENCE,
            industry: 0,
            role: 0,
            location: 0,
            education: 0,
            selected_field: 0,
            input: InputMode::Normal,
            status: "Ready.".to_string(),
            run: None,
            chart: None,
            pending_email: None,
        };
        app.recompute();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    if self.pending_email.is_some() {
                        // Show the "Sending" status before the delivery delay blocks.
                        terminal
                            .draw(|f| self.draw(f))
                            .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                        self.deliver_pending_email();
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.input.clone() {
            InputMode::Salary(buf) => {
                self.handle_salary_edit(code, buf);
                return false;
            }
            InputMode::Email(buf) => {
                self.handle_email_edit(code, buf);
                return false;
            }
            InputMode::Normal => {}
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected_field = self.selected_field.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FIELDS.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Enter => {
                if FIELDS[self.selected_field] == Field::Salary {
                    self.input = InputMode::Salary(String::new());
                    self.status = "Enter salary (digits). Enter to apply, Esc to cancel.".to_string();
                }
            }
            KeyCode::Char('x') => self.export_report(),
            KeyCode::Char('m') => {
                self.input = InputMode::Email(String::new());
                self.status = "Enter email address. Enter to send, Esc to cancel.".to_string();
            }
            _ => {}
        }

        false
    }

    fn handle_salary_edit(&mut self, code: KeyCode, mut buf: String) {
        match code {
            KeyCode::Esc => {
                self.input = InputMode::Normal;
                self.status = "Salary edit canceled.".to_string();
            }
            KeyCode::Enter => {
                self.input = InputMode::Normal;
                match buf.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() && v > 0.0 => {
                        self.salary = v;
                        self.recompute();
                    }
                    _ => {
                        self.status = format!("Invalid salary '{}'.", buf.trim());
                    }
                }
            }
            KeyCode::Backspace => {
                buf.pop();
                self.input = InputMode::Salary(buf);
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                buf.push(c);
                self.input = InputMode::Salary(buf);
            }
            _ => {}
        }
    }

    fn handle_email_edit(&mut self, code: KeyCode, mut buf: String) {
        match code {
            KeyCode::Esc => {
                self.input = InputMode::Normal;
                self.status = "Email canceled.".to_string();
            }
            KeyCode::Enter => {
                self.input = InputMode::Normal;
                self.queue_email(buf.trim());
            }
            KeyCode::Backspace => {
                buf.pop();
                self.input = InputMode::Email(buf);
            }
            KeyCode::Char(c) => {
                buf.push(c);
                self.input = InputMode::Email(buf);
            }
            _ => {}
        }
    }

    fn adjust_field(&mut self, delta: i32) {
        match FIELDS[self.selected_field] {
            Field::Salary => {
                let next = self.salary + SALARY_STEP * f64::from(delta);
                self.salary = next.max(SALARY_STEP);
            }
            Field::Experience => {
                self.experience = self.experience.saturating_add_signed(delta);
            }
            Field::Industry => self.industry = cycle(self.industry, self.tables.industry_baseline.len(), delta),
            Field::Role => self.role = cycle(self.role, self.tables.role_multiplier.len(), delta),
            Field::Location => self.location = cycle(self.location, self.tables.location_factor.len(), delta),
            Field::Education => {
                self.education = cycle(self.education, self.tables.education_impact.len(), delta)
            }
        }
        self.recompute();
    }

    fn profile(&self) -> Profile {
        Profile {
            current_salary: self.salary,
            experience_years: self.experience,
            industry: label_at(&self.tables.industry_baseline, self.industry),
            role: label_at(&self.tables.role_multiplier, self.role),
            location: label_at(&self.tables.location_factor, self.location),
            education_level: label_at(&self.tables.education_impact, self.education),
        }
    }

    fn recompute(&mut self) {
        match run_benchmark(&self.tables, self.profile(), CURVE_YEARS) {
            Ok(run) => {
                self.status = format!(
                    "Benchmark {} | {} percentile",
                    format_inr(run.result.benchmark_salary),
                    ordinal(run.result.percentile)
                );
                self.chart = Some(SalaryCurve::from_run(&run));
                self.run = Some(run);
            }
            Err(err) => {
                self.status = err.to_string();
                self.run = None;
                self.chart = None;
            }
        }
    }

    fn export_report(&mut self) {
        let Some(run) = &self.run else {
            self.status = "Nothing to export yet.".to_string();
            return;
        };
        let today = chrono::Local::now().date_naive();
        let path = crate::io::resolve_report_path(None, &self.settings.report_dir, today);
        self.status = match crate::io::write_html_report(&path, &run.profile, &run.result, today) {
            Ok(path) => format!("Report written to {}", path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    /// Invalid addresses fail right away; valid ones wait for the next draw.
    fn queue_email(&mut self, address: &str) {
        if self.run.is_none() {
            self.status = "Nothing to send yet.".to_string();
            return;
        }
        if is_valid_address(address) {
            self.status = format!("Sending report to {address}...");
            self.pending_email = Some(address.to_string());
        } else {
            self.send_email(address);
        }
    }

    fn deliver_pending_email(&mut self) {
        if let Some(address) = self.pending_email.take() {
            self.send_email(&address);
        }
    }

    fn send_email(&mut self, address: &str) {
        let Some(run) = &self.run else {
            self.status = "Nothing to send yet.".to_string();
            return;
        };
        let transport = SimulatedTransport::new(self.settings.notify_delay);
        self.status = match send_report(&transport, address, &run.profile, &run.result) {
            Ok(message) => format!("Salary benchmark report sent to {}", message.to),
            Err(err) => format!("{err} Press m to retry."),
        };
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("salbench", Style::default().fg(Color::Cyan)),
            Span::raw(" | salary benchmarking calculator"),
        ]));

        if let Some(run) = &self.run {
            lines.push(Line::from(Span::styled(
                format!(
                    "benchmark: {} | range: {} - {} | {} percentile | {}",
                    format_inr(run.result.benchmark_salary),
                    format_inr(run.result.market_low),
                    format_inr(run.result.market_high),
                    ordinal(run.result.percentile),
                    run.position.display_name(),
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(48), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);

        self.draw_form(frame, left[0]);
        self.draw_details(frame, left[1]);
        self.draw_chart(frame, columns[1]);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let profile = self.profile();
        let salary = match &self.input {
            InputMode::Salary(buf) => format!("{buf}_"),
            _ => format_inr_f64(profile.current_salary),
        };

        let items = vec![
            ListItem::new(format!("Salary:     {salary}")),
            ListItem::new(format!("Experience: {} years", profile.experience_years)),
            ListItem::new(format!("Industry:   {}", profile.industry)),
            ListItem::new(format!("Role:       {}", profile.role)),
            ListItem::new(format!("Location:   {}", profile.location)),
            ListItem::new(format!("Education:  {}", profile.education_level)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Profile").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_details(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Comparisons").borders(Borders::ALL);
        let Some(run) = &self.run else {
            frame.render_widget(Paragraph::new("No result.").block(block), area);
            return;
        };

        let r = &run.result;
        let mut lines = vec![
            Line::from(format!(
                "factors: loc {:.2}x | edu {:.2}x | exp {:.2}x",
                r.location_factor, r.education_impact, r.experience_multiplier
            )),
            Line::from(format!("growth (+3y): {}", format_inr(r.potential_growth_salary))),
            Line::from(""),
            Line::from(Span::styled("Other industries", Style::default().add_modifier(Modifier::BOLD))),
        ];
        for row in &r.industry_comparison {
            lines.push(Line::from(format!("  {:<26} {:>12}", row.industry, format_inr(row.salary))));
        }
        lines.push(Line::from(Span::styled(
            "Other roles",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for row in &r.role_comparison {
            lines.push(Line::from(format!("  {:<26} {:>12}", row.role, format_inr(row.salary))));
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Salary by experience").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(data) = &self.chart else {
            let msg = Paragraph::new("Waiting for input...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        frame.render_widget(SalaryCurveChart { data }, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = match self.input {
            InputMode::Normal => "↑/↓ select  ←/→ adjust  Enter edit salary  x export  m email  q quit",
            InputMode::Salary(_) => "type salary  Enter apply  Esc cancel",
            InputMode::Email(_) => "type address  Enter send  Esc cancel",
        };
        let mut spans = vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
        ];
        if let InputMode::Email(buf) = &self.input {
            spans.push(Span::styled(format!("to: {buf}_"), Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::styled(&self.status, Style::default().fg(Color::Yellow)));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn cycle(index: usize, len: usize, delta: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (index as i64 + i64::from(delta)).rem_euclid(len) as usize
}

fn label_at(table: &Table, index: usize) -> String {
    table.keys().nth(index).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let settings = Settings {
            notify_delay: Duration::ZERO,
            ..Settings::default()
        };
        App::new(ReferenceTables::builtin().clone(), settings)
    }

    #[test]
    fn starts_with_computed_defaults() {
        let app = app();
        let run = app.run.as_ref().unwrap();
        assert_eq!(run.profile.industry, "Information Technology");
        assert_eq!(run.profile.role, "Software Engineer");
        assert_eq!(run.profile.location, "Mumbai");
        assert_eq!(run.profile.education_level, "High School");
        assert_eq!(run.profile.experience_years, DEFAULT_EXPERIENCE);
    }

    #[test]
    fn arrows_cycle_table_labels() {
        let mut app = app();
        app.selected_field = 2;
        app.handle_key(KeyCode::Left);
        assert_eq!(app.profile().industry, "Telecom");
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.profile().industry, "Banking & Finance");
        assert_eq!(app.run.as_ref().unwrap().profile.industry, "Banking & Finance");
    }

    #[test]
    fn experience_never_goes_negative() {
        let mut app = app();
        app.selected_field = 1;
        for _ in 0..10 {
            app.handle_key(KeyCode::Left);
        }
        assert_eq!(app.experience, 0);
        assert!((app.run.as_ref().unwrap().result.experience_multiplier - 0.8).abs() < 1e-12);
    }

    #[test]
    fn salary_edit_applies_and_recomputes() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        for c in "2500000".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.input, InputMode::Normal);
        assert_eq!(app.salary, 2_500_000.0);
        assert_eq!(app.run.as_ref().unwrap().profile.current_salary, 2_500_000.0);
    }

    #[test]
    fn invalid_salary_keeps_previous_value() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('0'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.salary, DEFAULT_SALARY);
        assert!(app.status.starts_with("Invalid salary"));
    }

    #[test]
    fn bad_email_reports_and_allows_retry() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        for c in "nope".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert!(app.status.contains("Invalid email address"));
        assert!(app.status.contains("retry"));
        assert!(app.pending_email.is_none());

        app.handle_key(KeyCode::Char('m'));
        for c in "me@example.com".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.status, "Sending report to me@example.com...");
        assert_eq!(app.pending_email.as_deref(), Some("me@example.com"));

        app.deliver_pending_email();
        assert_eq!(app.status, "Salary benchmark report sent to me@example.com");
        assert!(app.pending_email.is_none());
    }

    #[test]
    fn q_quits_only_outside_edit_modes() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        assert!(!app.handle_key(KeyCode::Char('q')));
        app.handle_key(KeyCode::Esc);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn chart_band_tracks_benchmark() {
        let app = app();
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.benchmark.len(), CURVE_YEARS as usize + 1);
        let (_, mid) = chart.benchmark[3];
        let (_, hi) = chart.band_high[3];
        assert!((hi - mid * 1.3).abs() < 1e-9);
        assert_eq!(chart.current, (3.0, 10.0));
        assert!(chart.y_range.1 > chart.y_range.0);
    }

    #[test]
    fn extreme_experience_keeps_chart_bounded() {
        let mut app = app();
        app.experience = u32::MAX - 1;
        app.selected_field = 1;
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Right);
        assert_eq!(app.experience, u32::MAX);
        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.benchmark.len(), crate::app::pipeline::MAX_CURVE_YEARS as usize + 1);
        assert_eq!(chart.max_years, f64::from(u32::MAX));
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(cycle(0, 3, -1), 2);
        assert_eq!(cycle(2, 3, 1), 0);
        assert_eq!(cycle(0, 0, 1), 0);
    }
}
