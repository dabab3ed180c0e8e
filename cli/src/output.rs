//! CLI output formatting for text, JSON and JSONL modes.
//!
//! JSON mode prints a single object once analysis completes. JSONL mode
//! streams one object per line (one per token or per diagnostic, followed
//! by a summary) so editors and CI jobs can consume results incrementally.

use codelab_lang::lexer::Token;
use codelab_lang::validator::{Diagnostic, Severity};
use codelab_lang::Language;
use serde::Serialize;
use std::io::{self, Write};

/// Output mode for CLI execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable output (default)
    Text,
    /// Single JSON object after analysis completes
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Diagnostic counts by severity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub errors: u32,
    pub warnings: u32,
    pub infos: u32,
}

impl Summary {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut summary = Summary::default();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Info => summary.infos += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> u32 {
        self.errors + self.warnings + self.infos
    }

    pub fn status(&self) -> &'static str {
        if self.total() == 0 {
            "clean"
        } else {
            "problems"
        }
    }

    /// One-line human summary, e.g. "2 errors, 1 warning"
    pub fn describe(&self) -> String {
        if self.total() == 0 {
            return "No problems found".to_string();
        }

        let mut parts = Vec::new();
        for (count, noun) in [
            (self.errors, "error"),
            (self.warnings, "warning"),
            (self.infos, "info"),
        ] {
            if count > 0 {
                let plural = if count == 1 || noun == "info" { "" } else { "s" };
                parts.push(format!("{} {}{}", count, noun, plural));
            }
        }
        parts.join(", ")
    }
}

/// JSON output for a check run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonCheckOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub language: Language,
    pub status: &'static str,
    pub summary: Summary,
    pub diagnostics: Vec<Diagnostic>,
}

/// JSON output for a token dump.
#[derive(Debug, Clone, Serialize)]
pub struct JsonTokensOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub language: Language,
    pub tokens: Vec<Token>,
}

/// JSON output for a fix run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFixOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub language: Language,
    pub applied: usize,
    pub source: String,
}

/// JSON output for errors.
#[derive(Debug, Clone, Serialize)]
pub struct JsonErrorOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub message: String,
}

/// Writer for JSON Lines output.
pub struct JsonlWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one value as a single line.
    pub fn write_line(&mut self, value: &impl Serialize) -> io::Result<()> {
        let json = serde_json::to_string(value)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

/// Print a value as one line of JSON on stdout.
pub fn print_json(value: &impl Serialize) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

/// `line:column: severity[rule]: message`, with the severity coloured
/// for terminals.
pub fn format_diagnostic(diagnostic: &Diagnostic, colored: bool) -> String {
    if !colored {
        return diagnostic.to_string();
    }

    let color = match diagnostic.severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[36m",
    };
    format!(
        "{}:{}: {}{}\x1b[0m[{}]: {}",
        diagnostic.line,
        diagnostic.column,
        color,
        diagnostic.severity,
        diagnostic.rule,
        diagnostic.message
    )
}
