//! Input/output helpers.
//!
//! - profile JSON ingest + validation (`profile`)
//! - reference-table overrides (`tables`)
//! - HTML report export (`export`)
//! - saved-run JSON read/write (`saved`)

pub mod export;
pub mod profile;
pub mod saved;
pub mod tables;

pub use export::*;
pub use profile::*;
pub use saved::*;
pub use tables::*;
