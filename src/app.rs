//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads settings and reference tables
//! - runs the benchmark pipeline
//! - prints reports/charts
//! - writes optional exports and sends the simulated email

use std::borrow::Cow;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::debug;

use crate::calc::ReferenceTables;
use crate::cli::{CalcArgs, Command, ShowArgs, TablesArgs};
use crate::config::Settings;
use crate::error::AppError;
use crate::notify::{SimulatedTransport, send_report};

pub mod pipeline;

/// Entry point for the `salbench` binary.
pub fn run() -> Result<(), AppError> {
    // `salbench` alone (or with only global flags) opens the interactive form.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let is_tui = matches!(cli.command, Command::Tui);
    if !is_tui {
        crate::logging::init(log_filter(cli.verbose));
    }

    let settings = Settings::from_env()?;
    let tables_path = cli.tables.clone().or_else(|| settings.tables_path.clone());
    let tables = load_tables(tables_path.as_deref())?;
    debug!(?settings, custom_tables = tables_path.is_some(), "starting");

    match cli.command {
        Command::Calc(args) => handle_calc(args, &tables, &settings),
        Command::Show(args) => handle_show(args),
        Command::Tables(args) => handle_tables(args, &tables),
        Command::Tui => crate::tui::run(tables.into_owned(), settings),
    }
}

/// Built-in tables unless an override file is configured.
pub fn load_tables(path: Option<&std::path::Path>) -> Result<Cow<'static, ReferenceTables>, AppError> {
    match path {
        Some(path) => Ok(Cow::Owned(crate::io::read_tables_json(path)?)),
        None => Ok(Cow::Borrowed(ReferenceTables::builtin())),
    }
}

fn handle_calc(args: CalcArgs, tables: &ReferenceTables, settings: &Settings) -> Result<(), AppError> {
    let profile = match &args.profile.profile {
        Some(path) => crate::io::read_profile_json(path)?,
        None => args
            .profile
            .to_profile()
            .ok_or_else(|| AppError::input("Missing profile fields; pass them as flags or use --profile."))?,
    };

    let run = pipeline::run_benchmark(tables, profile, args.max_years)?;
    let today = today();

    if args.json {
        let json = serde_json::to_string_pretty(&run.result)
            .map_err(|e| AppError::runtime(format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_run_summary(&run.profile, &run.result));
        println!("{}", crate::report::format_comparisons(&run.result));

        if !args.no_plot {
            let plot = crate::plot::render_experience_plot(
                &run.curve,
                (run.profile.experience_years, run.profile.current_salary),
                args.width,
                args.height,
            );
            println!("{plot}");
            println!(
                "{}",
                crate::plot::render_result_charts(&run.profile, &run.result, args.width / 2)
            );
        }
    }

    // Optional exports.
    if let Some(explicit) = &args.export_report {
        let path = crate::io::resolve_report_path(explicit.as_deref(), &settings.report_dir, today);
        let written = crate::io::write_html_report(&path, &run.profile, &run.result, today)?;
        eprintln!("Report written to {}", written.display());
    }
    if let Some(path) = &args.export_json {
        crate::io::write_saved_run(path, &run.profile, &run.result, today)?;
        eprintln!("Result saved to {}", path.display());
    }

    if let Some(address) = &args.email {
        let transport = SimulatedTransport::new(settings.notify_delay);
        let message = send_report(&transport, address, &run.profile, &run.result)?;
        eprintln!("Salary benchmark report sent to {}", message.to);
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let saved = crate::io::read_saved_run(&args.result)?;

    println!("{}", crate::report::format_run_summary(&saved.profile, &saved.result));
    println!("{}", crate::report::format_comparisons(&saved.result));
    if !args.no_plot {
        println!(
            "{}",
            crate::plot::render_result_charts(&saved.profile, &saved.result, args.width / 2)
        );
    }
    println!("(saved by {} on {})", saved.tool, saved.generated);
    Ok(())
}

fn handle_tables(args: TablesArgs, tables: &ReferenceTables) -> Result<(), AppError> {
    if args.json {
        let json = serde_json::to_string_pretty(tables)
            .map_err(|e| AppError::runtime(format!("Failed to serialize tables: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_reference_tables(tables));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Rewrite argv so `salbench` defaults to `salbench tui`.
///
/// Rules:
/// - `salbench`                       -> `salbench tui`
/// - `salbench --tables t.json`       -> `salbench tui --tables t.json`
/// - `salbench --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "calc" | "show" | "tables" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_opens_tui() {
        assert_eq!(rewrite_args(argv(&["salbench"])), argv(&["salbench", "tui"]));
        assert_eq!(
            rewrite_args(argv(&["salbench", "--tables", "t.json"])),
            argv(&["salbench", "tui", "--tables", "t.json"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for args in [
            &["salbench", "calc", "--json"][..],
            &["salbench", "--help"][..],
            &["salbench", "-V"][..],
            &["salbench", "tables"][..],
        ] {
            assert_eq!(rewrite_args(argv(args)), argv(args));
        }
    }

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(log_filter(0), "warn");
        assert_eq!(log_filter(1), "info");
        assert_eq!(log_filter(5), "debug");
    }

    #[test]
    fn default_tables_are_borrowed() {
        let tables = load_tables(None).unwrap();
        assert!(matches!(tables, Cow::Borrowed(_)));
    }
}
