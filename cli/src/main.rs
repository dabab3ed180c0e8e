//! Programming Lab code analysis CLI
//!
//! Usage:
//!   codelab-cli <FILE>                  Check a file (language from extension)
//!   codelab-cli -l java -e <CODE>       Check inline code
//!   codelab-cli -t <FILE>               Dump the token stream
//!   codelab-cli --highlight <FILE>      Print source with ANSI colours
//!   codelab-cli --fix <FILE>            Print source with first suggestions applied
//!   codelab-cli -o <FORMAT> <FILE>      Output format: text (default), json, jsonl
//!   cat file | codelab-cli -l python    Read source from stdin

mod highlight;
mod output;

use clap::Parser;
use codelab_lang::lexer::{tokenize_with, TokenizerConfig};
use codelab_lang::validator::{rules, Diagnostic, Severity, Validator, ValidatorConfig};
use codelab_lang::Language;
use output::{
    JsonCheckOutput, JsonErrorOutput, JsonFixOutput, JsonTokensOutput, JsonlWriter, OutputMode,
    Summary,
};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Tokenizer and syntax checker for Python, VB.NET and Java sources
#[derive(Parser, Debug)]
#[command(name = "codelab-cli")]
#[command(version, about = "Tokenizer and syntax checker for Programming Lab sources", long_about = None)]
struct Args {
    /// The source file to analyse (optional if using -e or stdin)
    file: Option<PathBuf>,

    /// Analyse inline source
    #[arg(short = 'e', long = "eval", value_name = "CODE")]
    eval: Option<String>,

    /// Source language: python, vbnet, java (inferred from the file extension)
    #[arg(short = 'l', long = "language", value_name = "LANG")]
    language: Option<String>,

    /// Dump the token stream instead of checking
    #[arg(short = 't', long = "tokens")]
    tokens: bool,

    /// Print the source with ANSI colours per token type
    #[arg(long = "highlight", conflicts_with_all = ["tokens", "fix"])]
    highlight: bool,

    /// Print the source with the first suggestion of each diagnostic applied
    #[arg(long = "fix", conflicts_with = "tokens")]
    fix: bool,

    /// Type identifiers followed by '(' as functions
    #[arg(long = "mark-calls")]
    mark_calls: bool,

    /// Disable a validator rule (repeatable)
    #[arg(short = 'd', long = "disable", value_name = "RULE")]
    disable: Vec<String>,

    /// Drop diagnostics below this severity: error, warning, info
    #[arg(long = "min-severity", value_name = "SEVERITY")]
    min_severity: Option<String>,

    /// List the validator rules and exit
    #[arg(long = "list-rules")]
    list_rules: bool,

    /// Output format: text (default), json, jsonl
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,

    /// Log debug information to stderr
    #[arg(long = "verbose")]
    verbose: bool,
}

/// Source of the code being analysed
enum Source {
    /// From a file path
    File { path: PathBuf, content: String },
    /// From -e flag or stdin (no file path)
    Inline { content: String },
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Source::File { content, .. } => content,
            Source::Inline { content } => content,
        }
    }

    fn path(&self) -> Option<&PathBuf> {
        match self {
            Source::File { path, .. } => Some(path),
            Source::Inline { .. } => None,
        }
    }
}

/// Parse the output mode from CLI args.
fn parse_output_mode(args: &Args) -> Result<OutputMode, String> {
    match args.output.as_deref() {
        None | Some("text") => Ok(OutputMode::Text),
        Some("json") => Ok(OutputMode::Json),
        Some("jsonl") => Ok(OutputMode::Jsonl),
        Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json, jsonl", other)),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let output_mode = match parse_output_mode(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    if args.list_rules {
        return list_rules(&args);
    }

    let validator_config = match build_validator_config(&args) {
        Ok(config) => config,
        Err(e) => return report_error(output_mode, &e),
    };

    // Determine source: -e flag > file argument > stdin
    let source = match get_source(&args) {
        Ok(s) => s,
        Err(e) => return report_error(output_mode, &e),
    };

    let language = match resolve_language(&args, &source) {
        Ok(language) => language,
        Err(e) => return report_error(output_mode, &e),
    };
    info!(%language, path = ?source.path(), "analysing source");

    if args.highlight {
        if output_mode != OutputMode::Text {
            return report_error(output_mode, "--highlight only supports text output");
        }
        let tokens = tokenize_with(source.content(), language, &tokenizer_config(&args));
        print!("{}", highlight::render(&tokens));
        return ExitCode::SUCCESS;
    }

    if args.tokens {
        return run_tokens(&args, &source, language, output_mode);
    }

    let validator = Validator::with_config(validator_config);
    let diagnostics = validator.validate(source.content(), language);
    debug!(count = diagnostics.len(), "diagnostics collected");

    if args.fix {
        return run_fix(&source, language, &diagnostics, output_mode);
    }

    run_check(&source, language, &diagnostics, output_mode)
}

fn get_source(args: &Args) -> Result<Source, String> {
    // Priority: -e flag > file argument > stdin
    if let Some(ref code) = args.eval {
        return Ok(Source::Inline {
            content: code.clone(),
        });
    }

    if let Some(ref path) = args.file {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {:?}: {}", path, e))?;
        return Ok(Source::File {
            path: path.clone(),
            content,
        });
    }

    // Try stdin if not a TTY
    if !atty::is(atty::Stream::Stdin) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| format!("Error reading from stdin: {}", e))?;
        return Ok(Source::Inline { content });
    }

    Err("No input provided. Use: codelab-cli <FILE>, codelab-cli -l <LANG> -e <CODE>, or pipe to stdin".to_string())
}

/// Explicit --language wins; otherwise infer from the file extension.
fn resolve_language(args: &Args, source: &Source) -> Result<Language, String> {
    if let Some(ref name) = args.language {
        return name.parse::<Language>().map_err(|e| e.to_string());
    }

    match source.path().and_then(|path| path.extension()) {
        Some(extension) => {
            Language::from_extension(&extension.to_string_lossy()).map_err(|e| e.to_string())
        }
        None => Err("Cannot determine the language. Use --language python|vbnet|java".to_string()),
    }
}

fn tokenizer_config(args: &Args) -> TokenizerConfig {
    TokenizerConfig {
        mark_calls: args.mark_calls,
    }
}

fn build_validator_config(args: &Args) -> Result<ValidatorConfig, String> {
    let min_severity = match args.min_severity.as_deref() {
        Some(name) => name.parse::<Severity>().map_err(|e| e.to_string())?,
        None => Severity::Info,
    };

    Ok(ValidatorConfig {
        disabled_rules: args.disable.clone(),
        min_severity,
    })
}

fn report_error(output_mode: OutputMode, message: &str) -> ExitCode {
    match output_mode {
        OutputMode::Text => eprintln!("{}", message),
        OutputMode::Json | OutputMode::Jsonl => {
            let output = JsonErrorOutput {
                output_type: "error",
                message: message.to_string(),
            };
            output::print_json(&output);
        }
    }
    ExitCode::from(1)
}

fn list_rules(args: &Args) -> ExitCode {
    let languages: Vec<Language> = match args.language.as_deref() {
        Some(name) => match name.parse::<Language>() {
            Ok(language) => vec![language],
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::from(1);
            }
        },
        None => Language::ALL.to_vec(),
    };

    for language in languages {
        for rule in rules(language) {
            println!("{:<8} {:<20} {:<8} {}", language, rule.id, rule.severity, rule.description);
        }
    }
    ExitCode::SUCCESS
}

fn run_tokens(args: &Args, source: &Source, language: Language, output_mode: OutputMode) -> ExitCode {
    let tokens = tokenize_with(source.content(), language, &tokenizer_config(args));

    match output_mode {
        OutputMode::Text => {
            for token in &tokens {
                println!(
                    "{}:{}-{}:{} {} {:?}",
                    token.line,
                    token.start_column,
                    token.end_line,
                    token.end_column,
                    token.token_type,
                    token.value
                );
            }
        }
        OutputMode::Json => {
            let output = JsonTokensOutput {
                output_type: "tokens",
                language,
                tokens,
            };
            output::print_json(&output);
        }
        OutputMode::Jsonl => {
            let stdout = io::stdout();
            let mut writer = JsonlWriter::new(stdout.lock());
            for token in &tokens {
                if let Err(e) = writer.write_line(token) {
                    eprintln!("Error writing output: {}", e);
                    return ExitCode::from(1);
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_check(
    source: &Source,
    language: Language,
    diagnostics: &[Diagnostic],
    output_mode: OutputMode,
) -> ExitCode {
    let summary = Summary::from_diagnostics(diagnostics);

    match output_mode {
        OutputMode::Text => {
            let colored = atty::is(atty::Stream::Stdout);
            let label = source
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<input>".to_string());

            for diagnostic in diagnostics {
                println!("{}:{}", label, output::format_diagnostic(diagnostic, colored));
                for suggestion in &diagnostic.suggestions {
                    println!("  suggestion: {}", suggestion);
                }
            }
            println!("{}", summary.describe());
        }
        OutputMode::Json => {
            let output = JsonCheckOutput {
                output_type: "check",
                language,
                status: summary.status(),
                summary: summary.clone(),
                diagnostics: diagnostics.to_vec(),
            };
            output::print_json(&output);
        }
        OutputMode::Jsonl => {
            let stdout = io::stdout();
            let mut writer = JsonlWriter::new(stdout.lock());
            let written = diagnostics
                .iter()
                .try_for_each(|d| writer.write_line(d))
                .and_then(|_| writer.write_line(&summary));
            if let Err(e) = written {
                eprintln!("Error writing output: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    if summary.errors > 0 {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    }
}

/// Apply the first suggestion of each diagnostic, at most one per line.
fn apply_fixes(content: &str, diagnostics: &[Diagnostic]) -> (String, usize) {
    let mut fixed = content.to_string();
    let mut fixed_lines = Vec::new();

    for diagnostic in diagnostics {
        if fixed_lines.contains(&diagnostic.line) {
            continue;
        }
        if let Some(updated) = diagnostic.apply_fix(&fixed) {
            fixed = updated;
            fixed_lines.push(diagnostic.line);
        }
    }

    (fixed, fixed_lines.len())
}

fn run_fix(
    source: &Source,
    language: Language,
    diagnostics: &[Diagnostic],
    output_mode: OutputMode,
) -> ExitCode {
    let (fixed, applied) = apply_fixes(source.content(), diagnostics);
    debug!(applied, "applied suggestions");

    match output_mode {
        OutputMode::Text => print!("{}", fixed),
        OutputMode::Json | OutputMode::Jsonl => {
            let output = JsonFixOutput {
                output_type: "fix",
                language,
                applied,
                source: fixed,
            };
            output::print_json(&output);
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("codelab-cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_args_file() {
        let args = parse(&["main.py"]);
        assert_eq!(args.file, Some(PathBuf::from("main.py")));
        assert!(!args.tokens);
        assert!(args.disable.is_empty());
    }

    #[test]
    fn parse_args_eval_with_language() {
        let args = parse(&["-l", "java", "-e", "int x = 1"]);
        assert_eq!(args.language.as_deref(), Some("java"));
        assert_eq!(args.eval.as_deref(), Some("int x = 1"));
    }

    #[test]
    fn parse_args_repeated_disable() {
        let args = parse(&["-d", "missing-colon", "--disable", "naming-convention", "a.py"]);
        assert_eq!(args.disable, vec!["missing-colon", "naming-convention"]);
    }

    #[test]
    fn parse_args_highlight_conflicts_with_tokens() {
        let result = Args::try_parse_from(["codelab-cli", "--highlight", "-t", "a.py"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_output_mode_values() {
        assert_eq!(parse_output_mode(&parse(&[])), Ok(OutputMode::Text));
        assert_eq!(parse_output_mode(&parse(&["-o", "json"])), Ok(OutputMode::Json));
        assert_eq!(parse_output_mode(&parse(&["--output", "jsonl"])), Ok(OutputMode::Jsonl));
        assert!(parse_output_mode(&parse(&["-o", "xml"])).is_err());
    }

    #[test]
    fn resolve_language_prefers_flag() {
        let args = parse(&["-l", "vb", "prog.java"]);
        let source = Source::File {
            path: PathBuf::from("prog.java"),
            content: String::new(),
        };
        assert_eq!(resolve_language(&args, &source), Ok(Language::VbNet));
    }

    #[test]
    fn resolve_language_from_extension() {
        let args = parse(&["prog.java"]);
        let source = Source::File {
            path: PathBuf::from("prog.java"),
            content: String::new(),
        };
        assert_eq!(resolve_language(&args, &source), Ok(Language::Java));
    }

    #[test]
    fn resolve_language_requires_a_hint() {
        let args = parse(&["-e", "x = 1"]);
        let source = Source::Inline {
            content: "x = 1".to_string(),
        };
        assert!(resolve_language(&args, &source).is_err());
    }

    #[test]
    fn validator_config_from_args() {
        let config = build_validator_config(&parse(&["--min-severity", "error", "-d", "x"])).unwrap();
        assert_eq!(config.min_severity, Severity::Error);
        assert_eq!(config.disabled_rules, vec!["x"]);
        assert!(build_validator_config(&parse(&["--min-severity", "loud"])).is_err());
    }

    #[test]
    fn apply_fixes_once_per_line() {
        let source = "if (x\nName = 1\n";
        let diagnostics = codelab_lang::validate(source, Language::Python);
        let (fixed, applied) = apply_fixes(source, &diagnostics);
        assert_eq!(applied, 2);
        assert_eq!(fixed, "if (x:\nname = 1\n");
    }
}
