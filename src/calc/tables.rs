//! Reference tables for the benchmark model.
//!
//! Four ordered `label -> value` tables:
//! - industry baseline salary (INR)
//! - role multiplier
//! - location (cost of living) factor
//! - education impact
//!
//! Order matters: the comparison lists walk the tables in this order.
//! The built-in set is initialised once and never written; an override set can
//! be loaded from JSON at startup (see `io::tables`).

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Baseline used when the industry label is unknown.
pub const DEFAULT_INDUSTRY_BASELINE: f64 = 800_000.0;

/// Role/location/education value used when the label is unknown.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

static BUILTIN: LazyLock<ReferenceTables> = LazyLock::new(|| ReferenceTables {
    industry_baseline: Table::from_static(&[
        ("Information Technology", 1_200_000.0),
        ("Banking & Finance", 1_000_000.0),
        ("Healthcare", 800_000.0),
        ("Manufacturing", 700_000.0),
        ("E-commerce", 900_000.0),
        ("Education", 600_000.0),
        ("Retail", 500_000.0),
        ("Consulting", 1_100_000.0),
        ("Hospitality", 450_000.0),
        ("Telecom", 900_000.0),
    ]),
    role_multiplier: Table::from_static(&[
        ("Software Engineer", 1.2),
        ("Product Manager", 1.5),
        ("Sales Executive", 1.1),
        ("Marketing Specialist", 1.0),
        ("HR Manager", 0.9),
        ("Financial Analyst", 1.3),
        ("Data Scientist", 1.4),
        ("Operations Manager", 1.1),
        ("Customer Support", 0.7),
        ("Administrative Assistant", 0.6),
    ]),
    location_factor: Table::from_static(&[
        ("Mumbai", 1.4),
        ("Delhi", 1.2),
        ("Bangalore", 1.3),
        ("Hyderabad", 1.1),
        ("Chennai", 1.0),
        ("Pune", 1.0),
        ("Kolkata", 0.9),
        ("Ahmedabad", 0.8),
        ("Gurgaon", 1.2),
        ("Noida", 1.1),
    ]),
    education_impact: Table::from_static(&[
        ("High School", 0.7),
        ("Bachelor's Degree", 1.0),
        ("Master's Degree", 1.3),
        ("PhD", 1.5),
        ("Professional Certification", 1.1),
        ("Diploma", 0.8),
    ]),
});

/// An ordered label -> value mapping.
///
/// Serialized as a list of `[label, value]` pairs so JSON files keep their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    entries: Vec<(String, f64)>,
}

impl Table {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    fn from_static(entries: &[(&str, f64)]) -> Self {
        Self {
            entries: entries.iter().map(|&(k, v)| (k.to_string(), v)).collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter().find(|(k, _)| k == key).map(|&(_, v)| v)
    }

    /// Look up `key`, returning `default` when it is absent.
    ///
    /// The default replaces the table value only; it never stands in for a
    /// product the value takes part in.
    pub fn lookup_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn validate(&self, name: &str) -> Result<(), AppError> {
        if self.entries.is_empty() {
            return Err(AppError::input(format!("Table '{name}' has no entries.")));
        }
        let mut seen = HashSet::new();
        for (key, value) in &self.entries {
            if key.trim().is_empty() {
                return Err(AppError::input(format!("Table '{name}' has an empty label.")));
            }
            if !seen.insert(key.as_str()) {
                return Err(AppError::input(format!("Table '{name}' repeats label '{key}'.")));
            }
            if !value.is_finite() || *value < 0.0 {
                return Err(AppError::input(format!(
                    "Table '{name}' has invalid value {value} for '{key}'."
                )));
            }
        }
        Ok(())
    }
}

/// The full set of tables the calculator reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTables {
    pub industry_baseline: Table,
    pub role_multiplier: Table,
    pub location_factor: Table,
    pub education_impact: Table,
}

impl ReferenceTables {
    /// The built-in tables (INR, Indian metro locations).
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    /// Check a loaded table set before use.
    pub fn validate(&self) -> Result<(), AppError> {
        self.industry_baseline.validate("industryBaseline")?;
        self.role_multiplier.validate("roleMultiplier")?;
        self.location_factor.validate("locationFactor")?;
        self.education_impact.validate("educationImpact")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_have_expected_sizes() {
        let t = ReferenceTables::builtin();
        assert_eq!(t.industry_baseline.len(), 10);
        assert_eq!(t.role_multiplier.len(), 10);
        assert_eq!(t.location_factor.len(), 10);
        assert_eq!(t.education_impact.len(), 6);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn builtin_tables_keep_declaration_order() {
        let t = ReferenceTables::builtin();
        let first: Vec<&str> = t.location_factor.keys().take(3).collect();
        assert_eq!(first, ["Mumbai", "Delhi", "Bangalore"]);
    }

    #[test]
    fn lookup_or_falls_back_only_when_missing() {
        let table = Table::new(vec![("zero".to_string(), 0.0), ("one".to_string(), 1.5)]);
        assert_eq!(table.lookup_or("one", 9.0), 1.5);
        // A present zero is a real value, not a missing key.
        assert_eq!(table.lookup_or("zero", 9.0), 0.0);
        assert_eq!(table.lookup_or("missing", 9.0), 9.0);
    }

    #[test]
    fn validate_rejects_bad_tables() {
        let mut t = ReferenceTables::builtin().clone();
        t.role_multiplier = Table::new(vec![]);
        assert!(t.validate().is_err());

        let mut t = ReferenceTables::builtin().clone();
        t.location_factor = Table::new(vec![("A".to_string(), 1.0), ("A".to_string(), 2.0)]);
        assert!(t.validate().is_err());

        let mut t = ReferenceTables::builtin().clone();
        t.education_impact = Table::new(vec![("A".to_string(), f64::NAN)]);
        assert!(t.validate().is_err());
    }

    #[test]
    fn tables_round_trip_as_pairs() {
        let table = Table::new(vec![("b".to_string(), 2.0), ("a".to_string(), 1.0)]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["b",2.0],["a",1.0]]"#);
    }
}
