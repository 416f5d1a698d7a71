//! Environment-driven settings.
//!
//! `.env` is loaded through dotenvy, then the following variables are read:
//!
//! - `SALBENCH_NOTIFY_DELAY_MS`: simulated delivery delay (default 1500)
//! - `SALBENCH_REPORT_DIR`: directory for generated reports (default `.`)
//! - `SALBENCH_TABLES`: JSON file overriding the built-in reference tables
//!
//! CLI flags take precedence over these values.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_NOTIFY_DELAY_MS: u64 = 1500;

const ENV_NOTIFY_DELAY_MS: &str = "SALBENCH_NOTIFY_DELAY_MS";
const ENV_REPORT_DIR: &str = "SALBENCH_REPORT_DIR";
const ENV_TABLES: &str = "SALBENCH_TABLES";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub notify_delay: Duration,
    pub report_dir: PathBuf,
    pub tables_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notify_delay: Duration::from_millis(DEFAULT_NOTIFY_DELAY_MS),
            report_dir: PathBuf::from("."),
            tables_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = non_empty(lookup(ENV_NOTIFY_DELAY_MS)) {
            let ms = raw.parse::<u64>().map_err(|e| {
                AppError::input(format!("Invalid {ENV_NOTIFY_DELAY_MS} '{raw}': {e}"))
            })?;
            settings.notify_delay = Duration::from_millis(ms);
        }
        if let Some(dir) = non_empty(lookup(ENV_REPORT_DIR)) {
            settings.report_dir = PathBuf::from(dir);
        }
        if let Some(path) = non_empty(lookup(ENV_TABLES)) {
            settings.tables_path = Some(PathBuf::from(path));
        }

        Ok(settings)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
