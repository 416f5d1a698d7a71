//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the submitted profile (`Profile`)
//! - calculator output (`BenchmarkResult` and its comparison rows)
//! - textual classifications of current vs benchmark (`MarketPosition`, `SalaryComparison`)
//! - the saved-run JSON schema (`SavedRun`)

pub mod types;

pub use types::*;
