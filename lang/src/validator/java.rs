use super::{Finding, Line, Rule, Severity};
use regex::Regex;
use std::sync::LazyLock;

pub(super) static RULES: &[Rule] = &[Rule {
    id: "missing-semicolon",
    severity: Severity::Error,
    description: "statement does not end with ';'",
    check: missing_semicolon,
}];

/// `[modifiers] Type[<..>][[]] name = ...`
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:public|private|protected|static|final|transient|volatile)\s+)*[A-Za-z_][\w.]*(?:<[^=]*>)?(?:\[\])*\s+[A-Za-z_]\w*\s*=(?:[^=]|$)",
    )
    .expect("valid regex")
});

static RETURN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^return\b").expect("valid regex"));

/// `target = ...`, `target += ...`, `a.b[i] = ...`
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][\w.\[\]]*\s*(?:[-+*/%&|^]|<<|>>>?)?=(?:[^=]|$)").expect("valid regex")
});

fn missing_semicolon(line: &Line) -> Option<Finding> {
    let trimmed = line.trimmed();

    if trimmed.ends_with([';', '{', '}', ')']) {
        return None;
    }

    let is_statement = DECLARATION.is_match(trimmed)
        || RETURN.is_match(trimmed)
        || (ASSIGNMENT.is_match(trimmed) && !is_control_header(line.text));
    if !is_statement {
        return None;
    }

    Some(
        Finding::new(line.end_column(), "Missing ';' at the end of the statement")
            .with_suggestion(line.with_code_suffix(";")),
    )
}

fn is_control_header(text: &str) -> bool {
    let padded = format!(" {} ", text);
    padded.contains(" if ") || padded.contains(" for ")
}
