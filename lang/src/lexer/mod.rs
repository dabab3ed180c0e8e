//! Lossless tokenizer for the editor's syntax highlighter.
//!
//! A single left-to-right scan classifies every character of the source
//! into a [`Token`]. Nothing is dropped: whitespace and newlines become
//! `Whitespace` tokens, so concatenating the token values gives back the
//! exact input. Malformed input never fails the scan: unterminated strings
//! and block comments run to the end of the source, and characters no rule
//! recognises become one-character fallback tokens.

pub mod token;

pub use token::{Position, Token, TokenType};

use crate::language::{Language, LanguageDefinition};
use tracing::{debug, trace};


/// Options for [`tokenize_with`]
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Type identifiers directly followed by `(` as `Function`
    pub mark_calls: bool,
}

/// Tokenize `source` with the default configuration.
pub fn tokenize(source: &str, language: Language) -> Vec<Token> {
    tokenize_with(source, language, &TokenizerConfig::default())
}

pub fn tokenize_with(source: &str, language: Language, config: &TokenizerConfig) -> Vec<Token> {
    let mut lexer = Lexer::new(source, language.definition());
    let mut tokens = lexer.lex_all();

    if config.mark_calls {
        mark_calls(&mut tokens);
    }

    debug!(%language, chars = lexer.input.len(), tokens = tokens.len(), "tokenized source");
    tokens
}

/// Rebuild the source text from a token stream.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}

/// Group tokens by the line they start on, for line-oriented renderers.
///
/// Index 0 holds line 1. A line covered entirely by a multi-line token
/// from an earlier line is an empty group.
pub fn lines(tokens: &[Token]) -> Vec<Vec<&Token>> {
    let mut lines: Vec<Vec<&Token>> = Vec::new();

    for token in tokens {
        let index = token.line as usize - 1;
        if lines.len() <= index {
            lines.resize_with(index + 1, Vec::new);
        }
        lines[index].push(token);
    }

    lines
}

fn mark_calls(tokens: &mut [Token]) {
    for i in 0..tokens.len().saturating_sub(1) {
        let is_call = tokens[i].token_type == TokenType::Identifier
            && tokens[i].value.starts_with(|c: char| c.is_alphabetic() || c == '_')
            && tokens[i + 1].token_type == TokenType::Operator
            && tokens[i + 1].value == "(";

        if is_call {
            tokens[i].token_type = TokenType::Function;
        }
    }
}

struct Lexer<'a> {
    input: Vec<char>,
    definition: &'a LanguageDefinition,
    position: usize,
    line: u32,
    column: u32,
    /// Position just past the most recently consumed character
    last_end: Position,
}

impl<'a> Lexer<'a> {
    fn new(input: &str, definition: &'a LanguageDefinition) -> Self {
        Self {
            input: input.chars().collect(),
            definition,
            position: 0,
            line: 1,
            column: 1,
            last_end: Position::new(1, 1),
        }
    }

    fn lex_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            tokens.push(self.next_token());
        }

        tokens
    }

    fn next_token(&mut self) -> Token {
        let start_index = self.position;
        let start = self.current_position();

        let token_type = self.scan();

        // Every rule consumes at least one character
        debug_assert!(self.position > start_index);

        let value: String = self.input[start_index..self.position].iter().collect();
        trace!(?token_type, ?value, line = start.line, column = start.column, "token");
        Token::new(token_type, value, start, self.last_end)
    }

    fn scan(&mut self) -> TokenType {
        let definition = self.definition;

        if self.starts_with(definition.line_comment) {
            self.lex_line_comment();
            return TokenType::Comment;
        }

        if let Some((open, close)) = definition.block_comment {
            if self.starts_with(open) {
                self.lex_block_comment(open, close);
                return TokenType::Comment;
            }
        }

        let ch = self.peek();
        match ch {
            '"' | '\'' => {
                self.lex_string(ch);
                TokenType::String
            }
            '0'..='9' => {
                self.lex_number();
                TokenType::Number
            }
            '.' if self.peek_next().is_ascii_digit() => {
                self.lex_number();
                TokenType::Number
            }
            c if c.is_alphabetic() || c == '_' => self.lex_word(),
            _ => {
                if let Some(op) = self.match_operator() {
                    self.advance_by(op.chars().count());
                    return TokenType::Operator;
                }

                match ch {
                    '\n' => {
                        self.advance();
                        TokenType::Whitespace
                    }
                    ' ' | '\t' | '\r' => {
                        self.lex_whitespace();
                        TokenType::Whitespace
                    }
                    c if c.is_control() => {
                        self.advance();
                        TokenType::Error
                    }
                    _ => {
                        self.advance();
                        TokenType::Identifier
                    }
                }
            }
        }
    }

    fn lex_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn lex_block_comment(&mut self, open: &str, close: &str) {
        self.advance_by(open.chars().count());

        while !self.is_at_end() {
            if self.starts_with(close) {
                self.advance_by(close.chars().count());
                return;
            }
            self.advance();
        }
    }

    fn lex_string(&mut self, quote: char) {
        self.advance(); // Skip opening quote

        while !self.is_at_end() {
            let ch = self.advance();

            if ch == '\\' {
                // The escaped character never closes the literal
                if !self.is_at_end() {
                    self.advance();
                }
            } else if ch == quote {
                return;
            }
        }
    }

    fn lex_number(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                '0'..='9' | '.' => {
                    self.advance();
                }
                _ => break,
            }
        }
    }

    fn lex_word(&mut self) -> TokenType {
        let start = self.position;

        while !self.is_at_end() {
            let ch = self.peek();
            if ch.is_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }

        let word: String = self.input[start..self.position].iter().collect();
        self.classify_word(&word)
    }

    fn classify_word(&self, word: &str) -> TokenType {
        let definition = self.definition;

        if definition.is_keyword(word) {
            TokenType::Keyword
        } else if definition.is_builtin(word) {
            TokenType::Builtin
        } else if definition.is_type(word) {
            TokenType::Type
        } else {
            TokenType::Identifier
        }
    }

    fn lex_whitespace(&mut self) {
        while matches!(self.peek(), ' ' | '\t' | '\r') {
            self.advance();
        }
    }

    fn match_operator(&self) -> Option<&'static str> {
        self.definition
            .operators
            .iter()
            .copied()
            .find(|op| self.starts_with(op))
    }

    fn starts_with(&self, lexeme: &str) -> bool {
        let mut offset = self.position;
        for expected in lexeme.chars() {
            match self.input.get(offset) {
                Some(&ch) if ch == expected => offset += 1,
                _ => return false,
            }
        }
        !lexeme.is_empty()
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> char {
        self.input.get(self.position).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.input.get(self.position + 1).copied().unwrap_or('\0')
    }

    fn advance(&mut self) -> char {
        let ch = self.peek();
        self.position += 1;
        self.last_end = Position::new(self.line, self.column + 1);

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        ch
    }

    fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }
}
