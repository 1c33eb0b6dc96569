//! LyX bind-file compiler
//!
//! Turns line-oriented LyX binding configuration text into the
//! [`BindingTable`] the sequence engine matches against. Compilation is
//! total: malformed lines are skipped and reported, never fatal.

mod command;
mod keyspec;
mod line;

use lyxkeys_core::{Binding, BindingTable};
use thiserror::Error;

/// The only directive this compiler understands. Other directives
/// (`\bind_file`, `\unbind`, ...) are ignored for forward
/// compatibility.
const BIND_DIRECTIVE: &str = "\\bind";

/// A configuration line the compiler had to skip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct SkippedLine {
    /// 1-based line number in the configuration text.
    pub line: usize,
    pub message: String,
}

/// Result of compiling one configuration text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOutput {
    pub table: BindingTable,
    pub skipped: Vec<SkippedLine>,
}

/// Compiles configuration text into a binding table, discarding the
/// skip report. Skipped lines are still logged.
pub fn compile(text: &str) -> BindingTable {
    compile_with_report(text).table
}

/// Compiles configuration text into a binding table plus the list of
/// skipped lines. Blank lines, `#` comments and unsupported directives
/// are ignored silently; only a malformed `\bind` line counts as
/// skipped. Duplicate sequences are last-write-wins.
pub fn compile_with_report(text: &str) -> CompileOutput {
    let mut output = CompileOutput::default();

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix(BIND_DIRECTIVE) else {
            continue;
        };
        // `\bind_file` shares the prefix; a binding directive is
        // followed by whitespace.
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }

        match parse_bind_line(rest) {
            Ok(binding) => output.table.insert(binding),
            Err(message) => {
                log::warn!("skipping malformed binding line {number}: {message}");
                output.skipped.push(SkippedLine {
                    line: number,
                    message,
                });
            }
        }
    }

    output
}

fn parse_bind_line(rest: &str) -> Result<Binding, String> {
    let (key_spec, command_spec) =
        line::bind_fields(rest).ok_or_else(|| "expected two double-quoted fields".to_string())?;
    let sequence = keyspec::normalize_key_spec(key_spec)
        .ok_or_else(|| "empty key spec".to_string())?;

    Ok(Binding {
        sequence,
        source_text: key_spec.to_string(),
        command_text: command_spec.to_string(),
        action: command::translate(command_spec),
    })
}
