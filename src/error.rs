//! Error types for the I/O edges of the crate.
//!
//! Translation itself never fails. These errors come from loading
//! configuration, discovering fixtures, writing generated programs and
//! launching the runtime.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reading '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("fixture directory '{0}' does not exist")]
    MissingFixtureDir(PathBuf),

    #[error("failed to run '{runtime}': {source}")]
    Spawn {
        runtime: String,
        #[source]
        source: io::Error,
    },

    #[error("'{runtime}' exited with {status}: {stderr}")]
    Runtime {
        runtime: String,
        status: String,
        stderr: String,
    },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
