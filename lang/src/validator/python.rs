use super::{code_chars, Finding, Line, Rule, Severity};
use regex::Regex;
use std::sync::LazyLock;

pub(super) static RULES: &[Rule] = &[
    Rule {
        id: "missing-colon",
        severity: Severity::Error,
        description: "block statement header does not end with ':'",
        check: missing_colon,
    },
    Rule {
        id: "mismatched-parens",
        severity: Severity::Error,
        description: "unequal number of '(' and ')' on one line",
        check: mismatched_parens,
    },
    Rule {
        id: "naming-convention",
        severity: Severity::Warning,
        description: "variable assigned with a class-style capitalised name",
        check: naming_convention,
    },
];

const BLOCK_KEYWORDS: &[&str] = &[
    "if", "elif", "else", "for", "while", "def", "class", "try", "except", "finally", "with",
];

static SIMPLE_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][A-Za-z0-9_]*)\s*=(?:[^=]|$)").expect("valid regex"));

/// The trailing `:` must be on the code. A colon inside a `#` comment does not count.
fn missing_colon(line: &Line) -> Option<Finding> {
    let trimmed = line.trimmed();
    let keyword = leading_word(trimmed);

    if !BLOCK_KEYWORDS.contains(&keyword) || trimmed.ends_with(':') {
        return None;
    }

    Some(
        Finding::new(
            line.end_column(),
            format!("Expected ':' at the end of the '{}' statement", keyword),
        )
        .with_suggestion(line.with_code_suffix(":")),
    )
}

/// Counts parentheses outside string literals and comments, so `print("(")`
/// is balanced.
fn mismatched_parens(line: &Line) -> Option<Finding> {
    let mut opens: Vec<usize> = Vec::new();
    let mut stray_close: Option<usize> = None;
    let mut open_count = 0;
    let mut close_count = 0;

    for (index, ch) in code_chars(line) {
        match ch {
            '(' => {
                open_count += 1;
                opens.push(index);
            }
            ')' => {
                close_count += 1;
                if opens.pop().is_none() && stray_close.is_none() {
                    stray_close = Some(index);
                }
            }
            _ => {}
        }
    }

    if open_count == close_count {
        return None;
    }

    let column = stray_close
        .or_else(|| opens.first().copied())
        .map(|index| line.column_at(index))
        .unwrap_or_else(|| line.column_at(line.indent));

    Some(Finding::new(
        column,
        format!(
            "Mismatched parentheses: {} '(' but {} ')'",
            open_count, close_count
        ),
    ))
}

fn naming_convention(line: &Line) -> Option<Finding> {
    let trimmed = line.trimmed();
    let name = SIMPLE_ASSIGNMENT.captures(trimmed)?.get(1)?.as_str();

    let is_constant = name
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    if is_constant {
        return None;
    }

    let mut renamed = name[..1].to_ascii_lowercase();
    renamed.push_str(&name[1..]);

    let indentation = &line.text[..line.indent];
    let rest = &line.text[line.indent + name.len()..];

    Some(
        Finding::new(
            line.column_at(line.indent),
            format!(
                "Variable '{}' is capitalised like a class; variables should start lower-case",
                name
            ),
        )
        .with_suggestion(format!("{}{}{}", indentation, renamed, rest.trim_end())),
    )
}

/// The run of identifier characters at the start of `text`
fn leading_word(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    &text[..end]
}
