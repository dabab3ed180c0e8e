//! Supported editor languages and their lexical definition tables.
//!
//! Each language is described by a [`LanguageDefinition`]: the word lists
//! that drive identifier classification, the operator lexemes, and the
//! comment markers. The tables are built once per process and shared
//! read-only by every tokenizer call.

mod definitions;

#[cfg(test)]
mod tests;

use crate::error::LangError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub use definitions::definition;

/// A language the Programming Lab editor can analyse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    VbNet,
    Java,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Python, Language::VbNet, Language::Java];

    /// Canonical lowercase name, as accepted by `FromStr`
    pub fn name(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::VbNet => "vbnet",
            Language::Java => "java",
        }
    }

    /// The lexical definition table for this language
    pub fn definition(self) -> &'static LanguageDefinition {
        definition(self)
    }

    /// Infer the language from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Result<Self, LangError> {
        match extension.to_ascii_lowercase().as_str() {
            "py" | "pyw" => Ok(Language::Python),
            "vb" => Ok(Language::VbNet),
            "java" => Ok(Language::Java),
            _ => Err(LangError::unknown_extension(extension)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Language {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(Language::Python),
            "vbnet" | "vb" | "vb.net" | "visualbasic" => Ok(Language::VbNet),
            "java" => Ok(Language::Java),
            _ => Err(LangError::unknown_language(s)),
        }
    }
}

/// Static lexical data for one language.
///
/// `operators` is ordered longest lexeme first so that a linear probe
/// always finds the longest match (`**` before `*`).
#[derive(Debug)]
pub struct LanguageDefinition {
    pub keywords: HashSet<&'static str>,
    pub builtins: HashSet<&'static str>,
    pub types: HashSet<&'static str>,
    pub operators: Vec<&'static str>,
    pub line_comment: &'static str,
    pub block_comment: Option<(&'static str, &'static str)>,
}

impl LanguageDefinition {
    fn new(
        keywords: &[&'static str],
        builtins: &[&'static str],
        types: &[&'static str],
        operators: &[&'static str],
        line_comment: &'static str,
        block_comment: Option<(&'static str, &'static str)>,
    ) -> Self {
        let mut operators = operators.to_vec();
        // Stable sort keeps declaration order among equal lengths
        operators.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        Self {
            keywords: keywords.iter().copied().collect(),
            builtins: builtins.iter().copied().collect(),
            types: types.iter().copied().collect(),
            operators,
            line_comment,
            block_comment,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.contains(word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }
}
