//! Read a profile from JSON.
//!
//! Accepts both the canonical field names (`currentSalary`, `experienceYears`,
//! `role`, `educationLevel`) and the form's names (`experience`, `jobRole`,
//! `education`).

use std::fs::File;
use std::path::Path;

use crate::domain::Profile;
use crate::error::AppError;

pub fn read_profile_json(path: &Path) -> Result<Profile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open profile JSON '{}': {e}", path.display())))?;
    let profile: Profile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid profile JSON '{}': {e}", path.display())))?;
    profile.validate()?;
    Ok(profile)
}
