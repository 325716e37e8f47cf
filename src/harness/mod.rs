//! Fixture harness
//!
//! Runs the bundled C fixtures through the translator and a JavaScript
//! runtime, checking each program's output against a table of expected
//! strings. Used by the `c2js-fixtures` binary.

pub mod report;
pub mod runner;

pub use report::{visualize_whitespace, write_banner, write_report, write_summary, Painter};
pub use runner::{
    discover_fixtures, run_program, FixtureOutcome, FixtureReport, FixtureRunner, Summary,
};
