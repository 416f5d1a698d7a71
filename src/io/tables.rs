//! Load reference-table overrides from JSON.
//!
//! Schema: an object with `industryBaseline`, `roleMultiplier`,
//! `locationFactor` and `educationImpact`, each a list of `[label, value]`
//! pairs in comparison order.

use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::calc::ReferenceTables;
use crate::error::AppError;

pub fn read_tables_json(path: &Path) -> Result<ReferenceTables, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open tables JSON '{}': {e}", path.display())))?;
    let tables: ReferenceTables = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid tables JSON '{}': {e}", path.display())))?;
    tables.validate()?;
    info!(path = %path.display(), industries = tables.industry_baseline.len(), "loaded reference tables");
    Ok(tables)
}
