//! Experience multiplier curve.
//!
//! Four linear segments, continuous at the boundaries:
//!
//! - `years <= 2`:       `0.8  + 0.10 * years`
//! - `2 < years <= 5`:   `1.0  + 0.06 * (years - 2)`
//! - `5 < years <= 10`:  `1.18 + 0.05 * (years - 5)`
//! - `years > 10`:       `1.43 + 0.02 * (years - 10)`
//!
//! The slope falls at each boundary, so marginal growth decelerates with tenure.

/// Multiplier applied to the baseline for `years` of experience.
pub fn experience_multiplier(years: u32) -> f64 {
    let y = f64::from(years);
    if years <= 2 {
        0.8 + 0.1 * y
    } else if years <= 5 {
        1.0 + 0.06 * (y - 2.0)
    } else if years <= 10 {
        1.18 + 0.05 * (y - 5.0)
    } else {
        1.43 + 0.02 * (y - 10.0)
    }
}
