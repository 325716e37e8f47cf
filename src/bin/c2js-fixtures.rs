//! c2js-fixtures - run the C fixtures through the translator and a runtime
//!
//! ```text
//! for each fixtures/*.c (sorted):
//!   1. translate to JavaScript
//!   2. write output/<name>.js
//!   3. execute with the runtime (node by default), capture stdout
//!   4. compare with the expected-output table
//! then print passed / failed / total
//! ```
//!
//! A failing fixture never stops the run, and the process exits 0 whatever
//! the per-fixture results. Only an unreadable config or a missing fixture
//! directory is fatal.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};

use c2js::harness::{write_banner, write_report, write_summary, FixtureRunner, Painter};
use c2js::{init_tracing, HarnessConfig};

fn build_cli() -> Command {
    Command::new("c2js-fixtures")
        .version(c2js::VERSION)
        .about("Translate, execute and check the C fixtures")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Harness config (default: ./c2js.toml when present)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("fixtures")
                .long("fixtures")
                .value_name("DIR")
                .help("Directory holding the *.c fixtures")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("DIR")
                .help("Directory receiving the generated programs")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("runtime")
                .long("runtime")
                .value_name("CMD")
                .help("JavaScript runtime executing the generated programs"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    let cwd = env::current_dir().context("resolving working directory")?;
    let mut config = HarnessConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path), &cwd)?;

    // CLI flags override file values
    if let Some(dir) = matches.get_one::<PathBuf>("fixtures") {
        config.fixtures_dir = dir.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output") {
        config.output_dir = dir.clone();
    }
    if let Some(runtime) = matches.get_one::<String>("runtime") {
        config.runtime = runtime.clone();
    }

    let stdout = io::stdout();
    let painter = Painter::new(!matches.get_flag("no-color") && stdout.is_terminal());
    let mut out = stdout.lock();

    write_banner(&mut out, painter)?;

    let runner = FixtureRunner::new(&config);
    let mut write_result = Ok(());
    let summary = runner.run_all(|report| {
        if write_result.is_ok() {
            write_result = write_report(&mut out, report, painter);
        }
    })?;
    write_result?;

    write_summary(&mut out, &summary, painter)?;
    out.flush()?;

    Ok(())
}
