//! Command-line parsing for the salary benchmark calculator.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! calculator and the renderers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Profile;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "salbench", version, about = "Salary benchmarking calculator")]
pub struct Cli {
    /// JSON file overriding the built-in reference tables.
    #[arg(long, global = true, value_name = "JSON")]
    pub tables: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a benchmark, print the summary and charts, and optionally export/email it.
    Calc(CalcArgs),
    /// Re-render a result previously saved with `calc --export-json`.
    Show(ShowArgs),
    /// List the reference tables (known industries, roles, locations, education levels).
    Tables(TablesArgs),
    /// Launch the interactive form.
    Tui,
}

/// Profile input: either a JSON file or the individual fields.
#[derive(Debug, Args, Clone)]
pub struct ProfileArgs {
    /// Read the profile from a JSON file instead of flags.
    #[arg(long, value_name = "JSON")]
    pub profile: Option<PathBuf>,

    /// Current annual salary (INR).
    #[arg(short = 's', long, required_unless_present = "profile", conflicts_with = "profile")]
    pub salary: Option<f64>,

    /// Whole years of experience.
    #[arg(short = 'e', long, required_unless_present = "profile", conflicts_with = "profile")]
    pub experience: Option<u32>,

    /// Industry (see `salbench tables`).
    #[arg(short = 'i', long, required_unless_present = "profile", conflicts_with = "profile")]
    pub industry: Option<String>,

    /// Job role (see `salbench tables`).
    #[arg(short = 'r', long, required_unless_present = "profile", conflicts_with = "profile")]
    pub role: Option<String>,

    /// Location (see `salbench tables`).
    #[arg(short = 'l', long, required_unless_present = "profile", conflicts_with = "profile")]
    pub location: Option<String>,

    /// Education level (see `salbench tables`).
    #[arg(long, required_unless_present = "profile", conflicts_with = "profile")]
    pub education: Option<String>,
}

impl ProfileArgs {
    /// Build a profile from the individual flags, if all are present.
    pub fn to_profile(&self) -> Option<Profile> {
        Some(Profile {
            current_salary: self.salary?,
            experience_years: self.experience?,
            industry: self.industry.clone()?,
            role: self.role.clone()?,
            location: self.location.clone()?,
            education_level: self.education.clone()?,
        })
    }
}

/// Options for `calc`.
#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Print the result as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Disable the terminal charts.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Curve plot height (rows).
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Last experience year shown on the curve plot (at most 60).
    #[arg(long, default_value_t = 25)]
    pub max_years: u32,

    /// Write the HTML report (to the given file/directory, or the report dir).
    #[arg(long = "export-report", value_name = "PATH", num_args = 0..=1)]
    pub export_report: Option<Option<PathBuf>>,

    /// Save profile + result as JSON (reload with `salbench show`).
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Email the summary to this address (simulated delivery).
    #[arg(long, value_name = "ADDRESS")]
    pub email: Option<String>,
}

/// Options for `show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Result JSON file produced by `salbench calc --export-json`.
    #[arg(long, value_name = "JSON")]
    pub result: PathBuf,

    /// Disable the terminal charts.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}

/// Options for `tables`.
#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Print the tables as JSON (the `--tables` override format).
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_calc_flags() {
        let cli = Cli::try_parse_from([
            "salbench", "calc", "-s", "1000000", "-e", "3", "-i", "Retail", "-r", "HR Manager", "-l", "Pune",
            "--education", "PhD", "--export-report",
        ])
        .unwrap();
        let Command::Calc(args) = cli.command else {
            panic!("expected calc");
        };
        let profile = args.profile.to_profile().unwrap();
        assert_eq!(profile.role, "HR Manager");
        assert_eq!(args.export_report, Some(None));
    }

    #[test]
    fn profile_file_conflicts_with_fields() {
        let err = Cli::try_parse_from(["salbench", "calc", "--profile", "p.json", "-s", "5"]);
        assert!(err.is_err());

        let ok = Cli::try_parse_from(["salbench", "calc", "--profile", "p.json"]).unwrap();
        let Command::Calc(args) = ok.command else {
            panic!("expected calc");
        };
        assert!(args.profile.to_profile().is_none());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(Cli::try_parse_from(["salbench", "calc", "-s", "5"]).is_err());
    }
}
