//! ANSI terminal rendering of a token stream.

use codelab_lang::lexer::{Token, TokenType};

const RESET: &str = "\x1b[0m";

/// Escape sequence for a token type, `None` for uncoloured text.
pub fn color(token_type: TokenType) -> Option<&'static str> {
    match token_type {
        TokenType::Keyword => Some("\x1b[35m"),
        TokenType::String => Some("\x1b[32m"),
        TokenType::Number => Some("\x1b[33m"),
        TokenType::Comment => Some("\x1b[90m"),
        TokenType::Error => Some("\x1b[41m"),
        TokenType::Function => Some("\x1b[34m"),
        TokenType::Type => Some("\x1b[36m"),
        TokenType::Builtin => Some("\x1b[94m"),
        TokenType::Identifier | TokenType::Operator | TokenType::Whitespace => None,
    }
}

/// Render tokens back into source text, colouring each token by type.
///
/// Colour is reset before every newline inside a multi-line token so
/// terminals do not carry it into the gutter of the next line.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();

    for token in tokens {
        match color(token.token_type) {
            Some(code) => {
                let mut pieces = token.value.split('\n').peekable();
                while let Some(piece) = pieces.next() {
                    if !piece.is_empty() {
                        out.push_str(code);
                        out.push_str(piece);
                        out.push_str(RESET);
                    }
                    if pieces.peek().is_some() {
                        out.push('\n');
                    }
                }
            }
            None => out.push_str(&token.value),
        }
    }

    out
}
