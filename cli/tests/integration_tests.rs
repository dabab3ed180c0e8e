//! Integration tests for the CLI check, token and fix modes.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn cli() -> Command {
    Command::cargo_bin("codelab-cli").unwrap()
}

// ============================================================================
// Check Mode (Text)
// ============================================================================

#[test]
fn check_clean_file() {
    let assert = cli().arg(fixture("clean.py")).assert();
    assert.success().stdout("No problems found\n");
}

#[test]
fn check_python_file_with_problems() {
    let assert = cli().arg(fixture("broken.py")).assert();
    assert
        .code(2)
        .stdout(predicate::str::contains(
            ":1:15: error[missing-colon]: Expected ':' at the end of the 'def' statement",
        ))
        .stdout(predicate::str::contains("  suggestion: def area(w, h):"))
        .stdout(predicate::str::contains(":4:1: warning[naming-convention]"))
        .stdout(predicate::str::contains("  suggestion: total = area(2, 3)"))
        .stdout(predicate::str::ends_with("1 error, 1 warning\n"));
}

#[test]
fn check_java_file() {
    let assert = cli().arg(fixture("Main.java")).assert();
    assert
        .code(2)
        .stdout(predicate::str::contains(":3:18: error[missing-semicolon]"))
        .stdout(predicate::str::contains("  suggestion:         int x = 5;"));
}

#[test]
fn check_vbnet_file() {
    let assert = cli().arg(fixture("program.vb")).assert();
    assert
        .code(2)
        .stdout(predicate::str::contains(":4:17: error[missing-then]"))
        .stdout(predicate::str::contains("  suggestion:         If x > 5 Then"));
}

#[test]
fn eval_with_language() {
    let assert = cli().args(["-l", "java", "-e", "int x = 5;"]).assert();
    assert.success().stdout("No problems found\n");
}

#[test]
fn eval_without_language_fails() {
    let assert = cli().args(["-e", "x = 1"]).assert();
    assert
        .code(1)
        .stderr(predicate::str::contains("Cannot determine the language"));
}

#[test]
fn stdin_with_language() {
    let assert = cli().args(["-l", "python"]).write_stdin("if x\n    pass\n").assert();
    assert
        .code(2)
        .stdout(predicate::str::contains("<input>:1:5: error[missing-colon]"));
}

#[test]
fn language_flag_overrides_extension() {
    // As VB.NET, the Python fixture has no If statements to check
    let assert = cli().args(["-l", "vbnet"]).arg(fixture("broken.py")).assert();
    assert.success().stdout("No problems found\n");
}

#[test]
fn disabled_rules() {
    let assert = cli()
        .args(["-d", "missing-colon", "--disable", "naming-convention"])
        .arg(fixture("broken.py"))
        .assert();
    assert.success().stdout("No problems found\n");
}

#[test]
fn min_severity_filters_warnings() {
    let assert = cli()
        .args(["--min-severity", "error"])
        .arg(fixture("broken.py"))
        .assert();
    assert
        .code(2)
        .stdout(predicate::str::contains("naming-convention").not())
        .stdout(predicate::str::ends_with("1 error\n"));
}

#[test]
fn list_rules_for_language() {
    let assert = cli().args(["--list-rules", "-l", "vbnet"]).assert();
    assert
        .success()
        .stdout(predicate::str::contains("missing-then"))
        .stdout(predicate::str::contains("missing-colon").not());
}

#[test]
fn list_rules_for_all_languages() {
    let assert = cli().arg("--list-rules").assert();
    assert
        .success()
        .stdout(predicate::str::contains("missing-colon"))
        .stdout(predicate::str::contains("missing-then"))
        .stdout(predicate::str::contains("missing-semicolon"));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn unknown_language() {
    let assert = cli().args(["-l", "cobol", "-e", "x"]).assert();
    assert
        .code(1)
        .stderr(predicate::str::contains("Unknown language 'cobol'"));
}

#[test]
fn unknown_extension() {
    let manifest = format!("{}/Cargo.toml", env!("CARGO_MANIFEST_DIR"));
    let assert = cli().arg(manifest).assert();
    assert
        .code(1)
        .stderr(predicate::str::contains("Cannot infer language from extension 'toml'"));
}

#[test]
fn missing_file() {
    let assert = cli().arg(fixture("does-not-exist.py")).assert();
    assert.code(1).stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn invalid_output_format() {
    let assert = cli().args(["-o", "xml", "-l", "python", "-e", "x"]).assert();
    assert
        .code(1)
        .stderr(predicate::str::contains("Invalid output format: 'xml'"));
}

#[test]
fn invalid_severity() {
    let assert = cli()
        .args(["--min-severity", "fatal", "-l", "python", "-e", "x"])
        .assert();
    assert
        .code(1)
        .stderr(predicate::str::contains("Unknown severity 'fatal'"));
}

#[test]
fn json_error_output() {
    let assert = cli().args(["-o", "json", "-l", "cobol", "-e", "x"]).assert();
    assert.code(1).stdout(predicate::str::starts_with(
        r#"{"type":"error","message":"Unknown language 'cobol'"#,
    ));
}

// ============================================================================
// JSON / JSONL Output
// ============================================================================

#[test]
fn json_check_output() {
    let assert = cli().args(["-o", "json"]).arg(fixture("broken.py")).assert();
    assert
        .code(2)
        .stdout(predicate::str::contains(r#""type":"check""#))
        .stdout(predicate::str::contains(r#""language":"python""#))
        .stdout(predicate::str::contains(r#""status":"problems""#))
        .stdout(predicate::str::contains(r#""summary":{"errors":1,"warnings":1,"infos":0}"#))
        .stdout(predicate::str::contains(r#""suggestions":["def area(w, h):"]"#));
}

#[test]
fn json_clean_output() {
    let assert = cli().args(["-o", "json"]).arg(fixture("clean.py")).assert();
    assert
        .success()
        .stdout(predicate::str::contains(r#""status":"clean""#))
        .stdout(predicate::str::contains(r#""diagnostics":[]"#));
}

#[test]
fn jsonl_check_output() {
    let output = cli()
        .args(["-o", "jsonl"])
        .arg(fixture("broken.py"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(r#""rule":"missing-colon""#));
    assert!(lines[1].contains(r#""rule":"naming-convention""#));
    assert_eq!(lines[2], r#"{"errors":1,"warnings":1,"infos":0}"#);
}

// ============================================================================
// Token Mode
// ============================================================================

#[test]
fn tokens_text_output() {
    let assert = cli().args(["-l", "python", "-e", "2**3", "-t"]).assert();
    assert
        .success()
        .stdout("1:1-1:2 number \"2\"\n1:2-1:4 operator \"**\"\n1:4-1:5 number \"3\"\n");
}

#[test]
fn tokens_json_output() {
    let assert = cli()
        .args(["-l", "python", "-e", "2**3", "--tokens", "-o", "json"])
        .assert();
    assert
        .success()
        .stdout(predicate::str::contains(r#""type":"tokens""#))
        .stdout(predicate::str::contains(
            r#"{"type":"operator","value":"**","line":1,"start_column":2,"end_line":1,"end_column":4}"#,
        ));
}

#[test]
fn tokens_jsonl_output() {
    let output = cli()
        .args(["-l", "java", "-e", "int x;", "-t", "-o", "jsonl"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.starts_with(r#"{"type":"type","value":"int""#));
}

#[test]
fn tokens_mark_calls() {
    let assert = cli()
        .args(["-l", "python", "-e", "foo(1)", "-t", "--mark-calls"])
        .assert();
    assert
        .success()
        .stdout(predicate::str::starts_with("1:1-1:4 function \"foo\""));
}

#[test]
fn tokens_ignore_validation_errors() {
    let assert = cli().args(["-t"]).arg(fixture("Main.java")).assert();
    assert.success();
}

// ============================================================================
// Highlight and Fix Modes
// ============================================================================

#[test]
fn highlight_output() {
    let assert = cli().args(["-l", "python", "-e", "pass", "--highlight"]).assert();
    assert.success().stdout("\x1b[35mpass\x1b[0m");
}

#[test]
fn highlight_requires_text_output() {
    let assert = cli()
        .args(["-l", "python", "-e", "pass", "--highlight", "-o", "json"])
        .assert();
    assert.code(1);
}

#[test]
fn fix_output() {
    let assert = cli().arg("--fix").arg(fixture("broken.py")).assert();
    assert.success().stdout(
        "def area(w, h):\n    return w * h\n\ntotal = area(2, 3)\nprint(Total)\n",
    );
}

#[test]
fn fix_json_output() {
    let assert = cli()
        .args(["--fix", "-o", "json", "-l", "vbnet", "-e", "If ok"])
        .assert();
    assert
        .success()
        .stdout(predicate::str::contains(r#""type":"fix""#))
        .stdout(predicate::str::contains(r#""applied":1"#))
        .stdout(predicate::str::contains(r#""source":"If ok Then""#));
}
