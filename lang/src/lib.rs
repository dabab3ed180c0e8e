//! Lexical analysis for the Programming Lab code editor.
//!
//! Two independent, pure entry points over a source buffer:
//!
//! - [`tokenize`] turns Python, VB.NET or Java source into a lossless
//!   stream of classified tokens for syntax highlighting.
//! - [`validate`] scans the same text line by line for common syntax
//!   mistakes and returns diagnostics with suggested fixes.

pub mod error;
pub mod language;
pub mod lexer;
pub mod validator;

pub use error::LangError;
pub use language::Language;
pub use lexer::{tokenize, tokenize_with, Token, TokenType, TokenizerConfig};
pub use validator::{validate, Diagnostic, Severity, Validator, ValidatorConfig};
