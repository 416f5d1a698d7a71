//! Reporting: terminal summary text, comparison tables, and the HTML report body.
//!
//! Formatting lives here so the calculator stays free of presentation and
//! output changes stay local. Writing files is `io`'s job.

pub mod format;
pub mod html;

pub use format::*;
pub use html::*;
