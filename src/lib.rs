//! `salary-bench` library crate.
//!
//! The binary (`salbench`) is a thin wrapper around this library so that:
//!
//! - the calculator is testable without spawning processes
//! - the CLI and the TUI share one pipeline
//! - modules stay easy to navigate

pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod notify;
pub mod plot;
pub mod report;
pub mod tui;
