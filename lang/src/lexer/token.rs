use serde::Serialize;
use std::fmt;

/// Position in source code (line and column, both 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Highlighting class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Keyword,
    Identifier,
    String,
    Number,
    Comment,
    Operator,
    Whitespace,
    Error,
    Function,
    Type,
    Builtin,
}

impl TokenType {
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::Identifier => "identifier",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Operator => "operator",
            TokenType::Whitespace => "whitespace",
            TokenType::Error => "error",
            TokenType::Function => "function",
            TokenType::Type => "type",
            TokenType::Builtin => "builtin",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified slice of source text.
///
/// `value` is the exact source text, delimiters included. `line` and
/// `start_column` locate the first character; `end_line` and `end_column`
/// point one column past the last character. A newline belongs to the
/// line it terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    pub line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Token {
    pub fn new(token_type: TokenType, value: String, start: Position, end: Position) -> Self {
        Self {
            token_type,
            value,
            line: start.line,
            start_column: start.column,
            end_line: end.line,
            end_column: end.column,
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_newline(&self) -> bool {
        self.token_type == TokenType::Whitespace && self.value == "\n"
    }

    pub fn start(&self) -> Position {
        Position::new(self.line, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }
}
