//! c2js compiler - Main Entry Point
//!
//! ```text
//! c2js hello.c                  print JavaScript to stdout
//! c2js hello.c -o hello.js      write JavaScript to a file
//! c2js hello.c --run            translate, execute with node, relay stdout
//! ```

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use tracing::info;

use c2js::harness::report::ansi;
use c2js::harness::run_program;
use c2js::{compile_with_options, init_tracing, Options};

fn build_cli() -> Command {
    Command::new("c2js")
        .version(c2js::VERSION)
        .about("Translate a small C subset to JavaScript")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("C source file")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the generated JavaScript here instead of stdout")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("N")
                .help("Spaces per indentation level")
                .default_value("4")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("run")
                .long("run")
                .help("Execute the generated program and print its output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("runtime")
                .long("runtime")
                .value_name("CMD")
                .help("JavaScript runtime used by --run")
                .default_value("node"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress success messages")
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

fn write_program(path: &Path, program: &str) -> Result<()> {
    fs::write(path, program).with_context(|| format!("writing '{}'", path.display()))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    let input = matches
        .get_one::<PathBuf>("input")
        .context("no input file specified")?;
    let output = matches.get_one::<PathBuf>("output");
    let indent_width = matches.get_one::<usize>("indent").copied().unwrap_or(4);
    let runtime = matches
        .get_one::<String>("runtime")
        .map_or("node", String::as_str);
    let quiet = matches.get_flag("quiet");

    let source = fs::read_to_string(input)
        .with_context(|| format!("reading '{}'", input.display()))?;

    info!(input = %input.display(), "translating");
    let program = compile_with_options(&source, &Options { indent_width });

    if matches.get_flag("run") {
        // Keeps the temporary file alive until the runtime has finished.
        let mut _temp = None;
        let program_path = match output {
            Some(path) => {
                write_program(path, &program)?;
                path.clone()
            }
            None => {
                let temp = tempfile::Builder::new()
                    .prefix("c2js-")
                    .suffix(".js")
                    .tempfile()
                    .context("creating temporary program file")?;
                write_program(temp.path(), &program)?;
                let path = temp.path().to_path_buf();
                _temp = Some(temp);
                path
            }
        };

        let stdout = run_program(runtime, &program_path)?;
        let mut out = io::stdout().lock();
        out.write_all(stdout.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    match output {
        Some(path) => {
            write_program(path, &program)?;
            if !quiet {
                if io::stderr().is_terminal() {
                    eprintln!(
                        "{}{}✓ JavaScript written to{}: {}",
                        ansi::BOLD,
                        ansi::GREEN,
                        ansi::RESET,
                        path.display()
                    );
                } else {
                    eprintln!("✓ JavaScript written to: {}", path.display());
                }
            }
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(program.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let matches = build_cli().try_get_matches_from(["c2js", "hello.c"]).unwrap();
        assert_eq!(matches.get_one::<usize>("indent"), Some(&4));
        assert_eq!(matches.get_one::<String>("runtime").map(String::as_str), Some("node"));
        assert!(!matches.get_flag("run"));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(build_cli().try_get_matches_from(["c2js"]).is_err());
    }
}
