//! The benchmark calculator.
//!
//! Everything here is a pure function over constant reference tables:
//! - `tables`: the lookup tables and the lookup-with-default helper
//! - `experience`: the piecewise-linear experience curve
//! - `benchmark`: the full profile -> result computation

pub mod benchmark;
pub mod experience;
pub mod tables;

pub use benchmark::*;
pub use experience::*;
pub use tables::*;
