use super::{Finding, Line, Rule, Severity};

pub(super) static RULES: &[Rule] = &[Rule {
    id: "missing-then",
    severity: Severity::Error,
    description: "'If' statement without 'Then'",
    check: missing_then,
}];

/// Looks for ` Then` in the code part only, so a ` Then` inside a trailing
/// comment does not satisfy the rule.
fn missing_then(line: &Line) -> Option<Finding> {
    if !line.trimmed().starts_with("If ") || line.code.contains(" Then") {
        return None;
    }

    Some(
        Finding::new(line.end_column(), "Expected 'Then' after the 'If' condition")
            .with_suggestion(line.with_code_suffix(" Then")),
    )
}
