//! Heuristic, line-local syntax checks for the editor's inline error list.
//!
//! The validator does not parse. Each physical line is matched against a
//! small table of per-language rules, and every rule that fires produces a
//! [`Diagnostic`], optionally carrying a corrected version of the line.
//! Rules see one line at a time, so multi-line statements can be both
//! over- and under-reported.

mod java;
mod python;
mod vbnet;


use crate::error::LangError;
use crate::language::Language;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// How serious a diagnostic is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Severity {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(LangError::unknown_severity(s)),
        }
    }
}

/// A reported issue on one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: u32,
    /// 1-based column, best effort
    pub column: u32,
    pub message: String,
    pub severity: Severity,
    /// Stable id of the rule that fired, e.g. `missing-colon`
    pub rule: &'static str,
    /// Candidate replacements for the whole line, best first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        rule: &'static str,
        line: u32,
        column: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            severity,
            rule,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Replace this diagnostic's line in `source` with the first suggestion.
    ///
    /// Returns `None` when there is no suggestion or the line does not
    /// exist. Line endings, including `\r\n`, are preserved.
    pub fn apply_fix(&self, source: &str) -> Option<String> {
        let suggestion = self.suggestions.first()?;
        let target = self.line.checked_sub(1)? as usize;

        let mut found = false;
        let lines: Vec<String> = source
            .split('\n')
            .enumerate()
            .map(|(index, line)| {
                if index != target {
                    return line.to_string();
                }
                found = true;
                match line.strip_suffix('\r') {
                    Some(_) => format!("{}\r", suggestion),
                    None => suggestion.clone(),
                }
            })
            .collect();

        found.then(|| lines.join("\n"))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}[{}]: {}",
            self.line, self.column, self.severity, self.rule, self.message
        )
    }
}

/// What a rule reports before the validator attaches its id and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub column: u32,
    pub message: String,
    pub suggestion: Option<String>,
}

impl Finding {
    fn new(column: u32, message: impl Into<String>) -> Self {
        Self {
            column,
            message: message.into(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    fn into_diagnostic(self, rule: &Rule, line: u32) -> Diagnostic {
        let diagnostic = Diagnostic::new(rule.severity, rule.id, line, self.column, self.message);
        match self.suggestion {
            Some(suggestion) => diagnostic.with_suggestion(suggestion),
            None => diagnostic,
        }
    }
}

/// One entry of a language's rule table
pub struct Rule {
    pub id: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub check: fn(&Line) -> Option<Finding>,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .finish()
    }
}

/// The rule table applied to every line of `language`, in firing order.
pub fn rules(language: Language) -> &'static [Rule] {
    match language {
        Language::Python => python::RULES,
        Language::VbNet => vbnet::RULES,
        Language::Java => java::RULES,
    }
}

/// A physical source line as seen by the rules.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: u32,
    /// Full line text without its line ending
    pub text: &'a str,
    /// `text` up to any trailing line comment, right-trimmed
    pub code: &'a str,
    /// Byte length of the leading indentation
    pub indent: usize,
}

impl<'a> Line<'a> {
    pub fn new(number: u32, text: &'a str, language: Language) -> Self {
        let text = text.strip_suffix('\r').unwrap_or(text);
        let code = text[..code_end(text, language)].trim_end();
        let indent = code.len() - code.trim_start().len();

        Self {
            number,
            text,
            code,
            indent,
        }
    }

    /// Code without indentation or trailing comment
    pub fn trimmed(&self) -> &'a str {
        &self.code[self.indent..]
    }

    /// 1-based column of a byte offset into `text`
    pub fn column_at(&self, byte_index: usize) -> u32 {
        self.text[..byte_index].chars().count() as u32 + 1
    }

    /// Column just past the last code character
    pub fn end_column(&self) -> u32 {
        self.column_at(self.code.len())
    }

    /// `text` with `insert` placed right after the code, before any
    /// trailing comment. Trailing blanks are dropped.
    pub fn with_code_suffix(&self, insert: &str) -> String {
        let rest = self.text[self.code.len()..].trim_end();
        format!("{}{}{}", self.code, insert, rest)
    }

    fn is_blank_or_comment(&self, language: Language) -> bool {
        let trimmed = self.trimmed();
        if trimmed.is_empty() {
            return true;
        }

        match language {
            Language::Python => false,
            Language::VbNet => trimmed == "REM" || trimmed.starts_with("REM "),
            Language::Java => trimmed.starts_with("/*") || trimmed.starts_with('*'),
        }
    }
}

/// Byte offset where a trailing line comment starts, or `text.len()`.
///
/// Quotes are tracked the way the tokenizer tracks them, so a comment
/// marker inside a string literal does not end the code.
fn code_end(text: &str, language: Language) -> usize {
    let marker = language.definition().line_comment;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        if text[index..].starts_with(marker) {
            return index;
        }
        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        }
    }

    text.len()
}

/// Iterate `(byte_index, char)` over the code of a line, skipping the
/// contents of string literals.
pub(crate) fn code_chars<'a>(line: &Line<'a>) -> impl Iterator<Item = (usize, char)> + 'a {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    line.code.char_indices().filter(move |&(_, ch)| {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            return false;
        }
        if ch == '"' || ch == '\'' {
            quote = Some(ch);
            return false;
        }
        true
    })
}

/// Options for [`Validator`]
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Rule ids that never fire
    pub disabled_rules: Vec<String>,
    /// Diagnostics below this severity are dropped
    pub min_severity: Severity,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            min_severity: Severity::Info,
        }
    }
}

/// Runs the rule tables over source text
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    fn is_enabled(&self, rule: &Rule) -> bool {
        rule.severity >= self.config.min_severity
            && !self.config.disabled_rules.iter().any(|id| id == rule.id)
    }

    /// Check every line of `source`, top to bottom.
    pub fn validate(&self, source: &str, language: Language) -> Vec<Diagnostic> {
        let rules: Vec<&Rule> = rules(language)
            .iter()
            .filter(|rule| self.is_enabled(rule))
            .collect();
        let mut diagnostics = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let line = Line::new(index as u32 + 1, text, language);
            if line.is_blank_or_comment(language) {
                continue;
            }

            for rule in &rules {
                if let Some(finding) = (rule.check)(&line) {
                    trace!(rule = rule.id, line = line.number, "rule fired");
                    diagnostics.push(finding.into_diagnostic(rule, line.number));
                }
            }
        }

        debug!(%language, diagnostics = diagnostics.len(), "validated source");
        diagnostics
    }
}

/// Validate `source` with every rule enabled.
pub fn validate(source: &str, language: Language) -> Vec<Diagnostic> {
    Validator::new().validate(source, language)
}
