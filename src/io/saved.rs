//! Read/write saved-run JSON files.
//!
//! A saved run is the "portable" representation of one calculation:
//! the submitted profile plus the full result, so `salbench show` can
//! re-render it without recomputing. The schema is `domain::SavedRun`.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::{BenchmarkResult, Profile, SavedRun};
use crate::error::AppError;

pub const TOOL_NAME: &str = "salbench";

/// Write a saved-run JSON file.
pub fn write_saved_run(
    path: &Path,
    profile: &Profile,
    result: &BenchmarkResult,
    generated: NaiveDate,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create result JSON '{}': {e}", path.display())))?;

    let saved = SavedRun {
        tool: TOOL_NAME.to_string(),
        generated,
        profile: profile.clone(),
        result: result.clone(),
    };

    serde_json::to_writer_pretty(file, &saved)
        .map_err(|e| AppError::input(format!("Failed to write result JSON: {e}")))?;

    info!(path = %path.display(), "wrote result JSON");
    Ok(())
}

/// Read a saved-run JSON file.
pub fn read_saved_run(path: &Path) -> Result<SavedRun, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open result JSON '{}': {e}", path.display())))?;
    let saved: SavedRun =
        serde_json::from_reader(file).map_err(|e| AppError::input(format!("Invalid result JSON: {e}")))?;
    Ok(saved)
}
