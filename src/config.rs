//! Configuration for the translator and the fixture harness.
//!
//! [`Options`] controls rendering of a translation pass. [`HarnessConfig`]
//! drives `c2js-fixtures` and can be loaded from a TOML file:
//!
//! ```toml
//! fixtures_dir = "fixtures"
//! output_dir = "output"
//! runtime = "node"
//! indent_width = 4
//!
//! [expected]
//! "hello.c" = "Sum of 10 and 20 is 30\n"
//! ```
//!
//! Without an explicit path, `c2js.toml` in the working directory is used
//! when present; otherwise the built-in defaults apply.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "c2js.toml";

const DEFAULT_INDENT_WIDTH: usize = 4;

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}
fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("fixtures")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_runtime() -> String {
    "node".to_string()
}

/// Expected standard output of the bundled fixtures, keyed by file name
pub fn default_expected() -> BTreeMap<String, String> {
    [
        ("hello.c", "Sum of 10 and 20 is 30\n"),
        ("if_else.c", "Number is positive\n"),
        ("while_loop.c", "i = 0\ni = 1\ni = 2\ni = 3\ni = 4\n"),
        ("for_loop.c", "i = 0\ni = 1\ni = 2\ni = 3\ni = 4\n"),
        ("functions.c", "Result is 12\n"),
        ("logical.c", "Both conditions are true\n"),
        ("comments.c", "Comments should be preserved in the output\n"),
    ]
    .into_iter()
    .map(|(name, out)| (name.to_string(), out.to_string()))
    .collect()
}

/// Rendering options of a translation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { indent_width: DEFAULT_INDENT_WIDTH }
    }
}

/// Settings of the fixture harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(default = "default_fixtures_dir")]
    pub fixtures_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Command that executes a generated program, given its path
    #[serde(default = "default_runtime")]
    pub runtime: String,

    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Expected stdout per fixture file name; replaces the built-in table
    #[serde(default = "default_expected")]
    pub expected: BTreeMap<String, String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fixtures_dir: default_fixtures_dir(),
            output_dir: default_output_dir(),
            runtime: default_runtime(),
            indent_width: default_indent_width(),
            expected: default_expected(),
        }
    }
}

impl HarnessConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| Error::Config {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_toml(&text, path)
    }

    /// Load from `explicit`, else `c2js.toml` in `cwd`, else defaults
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let discovered = cwd.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            return Self::from_file(&discovered);
        }
        Ok(Self::default())
    }

    pub fn options(&self) -> Options {
        Options { indent_width: self.indent_width }
    }
}
