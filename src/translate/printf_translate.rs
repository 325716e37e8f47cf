//! Formatted print translation
//!
//! `printf` calls with a literal format string become `console.log` calls
//! over a template literal:
//!
//! ```text
//! printf("Sum of %d and %d is %d\n", a, b, a + b);
//!   ->  console.log(`Sum of ${a} and ${b} is ${a + b}`);
//! ```
//!
//! Placeholders take arguments strictly by position, with no check between
//! placeholder kind and argument. A placeholder with no argument left
//! renders as `${undefined}`. One trailing `\n` escape is dropped because
//! `console.log` ends the line itself; `\\n` at the end is an escaped
//! backslash followed by `n` and stays. Backticks and `${` in the format
//! text are escaped so they print literally.

use tracing::warn;

use crate::helpers::split_top_level_commas;
use crate::patterns::{PLACEHOLDER_RE, PRINTF_RE};
use crate::translate::Emission;

/// Interpolated in place of a placeholder that has no argument
const MISSING_ARGUMENT: &str = "undefined";

/// Escape sequence stripped from the end of the format string
const TRAILING_NEWLINE: &str = r"\n";

/// Format string and positional arguments of one print call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub format: String,
    pub args: Vec<String>,
}

impl FormatSpec {
    /// Extract the format string and argument list from a print call line
    pub fn parse(trimmed: &str) -> Option<Self> {
        let caps = PRINTF_RE.captures(trimmed)?;
        let format = caps[1].to_string();
        let args = caps
            .get(2)
            .map(|m| split_top_level_commas(m.as_str()))
            .unwrap_or_default();
        Some(Self { format, args })
    }

    pub fn placeholder_count(&self) -> usize {
        PLACEHOLDER_RE.find_iter(&self.format).count()
    }

    /// Substitute placeholders left to right and drop one trailing `\n`
    pub fn interpolate(&self) -> String {
        let placeholders = self.placeholder_count();
        if placeholders > self.args.len() {
            warn!(
                format = %self.format,
                placeholders,
                arguments = self.args.len(),
                "format placeholders outnumber arguments"
            );
        }

        let literal = escape_template_text(strip_trailing_newline(&self.format));
        let mut next = self.args.iter();
        PLACEHOLDER_RE
            .replace_all(&literal, |_: &regex::Captures<'_>| {
                let arg = next.next().map_or(MISSING_ARGUMENT, String::as_str);
                format!("${{{arg}}}")
            })
            .into_owned()
    }

    /// Render the target print statement
    pub fn to_console_log(&self) -> String {
        format!("console.log(`{}`);", self.interpolate())
    }
}

/// Drop a final `\n` escape unless its backslash is itself escaped
fn strip_trailing_newline(format: &str) -> &str {
    let Some(head) = format.strip_suffix(TRAILING_NEWLINE) else {
        return format;
    };
    let backslashes = head.chars().rev().take_while(|&c| c == '\\').count();
    if backslashes % 2 == 0 {
        head
    } else {
        format
    }
}

/// Escape the characters a template literal would otherwise interpret
fn escape_template_text(text: &str) -> String {
    text.replace('`', "\\`").replace("${", "\\${")
}

pub fn is_formatted_print(trimmed: &str) -> bool {
    PRINTF_RE.is_match(trimmed)
}

pub fn process_formatted_print(trimmed: &str) -> Emission {
    match FormatSpec::parse(trimmed) {
        Some(spec) => Emission::keep(spec.to_console_log()),
        None => Emission::keep(trimmed),
    }
}
