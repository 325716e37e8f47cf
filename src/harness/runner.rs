//! Fixture execution
//!
//! Translates every fixture, writes the generated program next to the
//! others in the output directory, runs it and compares what it prints with
//! the expected table. A fixture that fails in any way becomes an outcome
//! value; the run always continues with the next fixture.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{info, warn};

use crate::config::HarnessConfig;
use crate::error::{Error, Result};

/// Extension of fixture source files
pub const FIXTURE_EXTENSION: &str = "c";
/// Extension given to generated programs
pub const GENERATED_EXTENSION: &str = "js";

/// Execute a generated program and capture its standard output.
///
/// A runtime that cannot be launched or that exits unsuccessfully is an
/// error carrying the runtime's stderr.
pub fn run_program(runtime: &str, program: &Path) -> Result<String> {
    let output = Command::new(runtime)
        .arg(program)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| Error::Spawn { runtime: runtime.to_string(), source })?;

    if !output.status.success() {
        return Err(Error::Runtime {
            runtime: runtime.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// All fixture files in `dir`, sorted by name
pub fn discover_fixtures(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingFixtureDir(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::read(dir, e))?;
    let mut fixtures = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::read(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION) {
            fixtures.push(path);
        }
    }
    fixtures.sort();
    Ok(fixtures)
}

/// What happened to one fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureOutcome {
    Passed,
    Mismatch { expected: String, actual: String },
    /// Ran fine but the expected table has no entry for it
    MissingExpected { actual: String },
    RuntimeError(String),
    /// Fixture unreadable or generated program unwritable
    CompileError(String),
}

impl FixtureOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureReport {
    /// Fixture file name, the key of the expected table
    pub name: String,
    /// Generated program, when translation got that far
    pub generated: Option<PathBuf>,
    pub outcome: FixtureOutcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn record(&mut self, outcome: &FixtureOutcome) {
        self.total += 1;
        if outcome.is_pass() {
            self.passed += 1;
        }
    }
}

pub struct FixtureRunner<'a> {
    config: &'a HarnessConfig,
}

impl<'a> FixtureRunner<'a> {
    pub fn new(config: &'a HarnessConfig) -> Self {
        Self { config }
    }

    /// Run every discovered fixture, handing each report to `on_report`
    /// as soon as it is ready.
    pub fn run_all(&self, mut on_report: impl FnMut(&FixtureReport)) -> Result<Summary> {
        let fixtures = discover_fixtures(&self.config.fixtures_dir)?;

        info!(
            count = fixtures.len(),
            dir = %self.config.fixtures_dir.display(),
            "running fixtures"
        );

        let mut summary = Summary::default();
        for fixture in &fixtures {
            let report = self.run_fixture(fixture);
            summary.record(&report.outcome);
            on_report(&report);
        }
        Ok(summary)
    }

    /// Translate, execute and check a single fixture
    pub fn run_fixture(&self, fixture: &Path) -> FixtureReport {
        let name = fixture
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let generated = match self.compile_fixture(fixture) {
            Ok(path) => path,
            Err(e) => {
                warn!(fixture = %name, error = %e, "fixture did not compile");
                return FixtureReport {
                    name,
                    generated: None,
                    outcome: FixtureOutcome::CompileError(e.to_string()),
                };
            }
        };

        let outcome = match run_program(&self.config.runtime, &generated) {
            Ok(actual) => self.check(&name, actual),
            Err(e) => {
                warn!(fixture = %name, error = %e, "generated program failed");
                FixtureOutcome::RuntimeError(e.to_string())
            }
        };

        FixtureReport { name, generated: Some(generated), outcome }
    }

    fn compile_fixture(&self, fixture: &Path) -> Result<PathBuf> {
        let source = fs::read_to_string(fixture).map_err(|e| Error::read(fixture, e))?;
        let program = crate::compile_with_options(&source, &self.config.options());

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| Error::write(output_dir, e))?;

        let stem = fixture.file_stem().unwrap_or(fixture.as_os_str());
        let target = self
            .config
            .output_dir
            .join(format!("{}.{GENERATED_EXTENSION}", stem.to_string_lossy()));
        fs::write(&target, program).map_err(|e| Error::write(&target, e))?;
        Ok(target)
    }

    fn check(&self, name: &str, actual: String) -> FixtureOutcome {
        match self.config.expected.get(name) {
            Some(expected) if *expected == actual => FixtureOutcome::Passed,
            Some(expected) => FixtureOutcome::Mismatch { expected: expected.clone(), actual },
            None => FixtureOutcome::MissingExpected { actual },
        }
    }
}
