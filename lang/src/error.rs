//! Error type for the few fallible operations around the analysis core.
//!
//! Tokenizing and validating never fail: malformed source degrades into
//! fallback tokens or simply produces no diagnostics. What can fail is
//! resolving a language from user input, which is what the editor and
//! the CLI feed in.


use std::fmt;

/// Errors raised while resolving analysis inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LangError {
    /// A language name that is not one of the supported languages
    UnknownLanguage { name: String },

    /// A file extension with no associated language
    UnknownExtension { extension: String },

    /// A severity name that is not `error`, `warning` or `info`
    UnknownSeverity { name: String },
}

impl LangError {
    /// Create an unknown language error.
    pub fn unknown_language(name: impl Into<String>) -> Self {
        LangError::UnknownLanguage { name: name.into() }
    }

    /// Create an unknown extension error.
    pub fn unknown_extension(extension: impl Into<String>) -> Self {
        LangError::UnknownExtension {
            extension: extension.into(),
        }
    }

    /// Create an unknown severity error.
    pub fn unknown_severity(name: impl Into<String>) -> Self {
        LangError::UnknownSeverity { name: name.into() }
    }

    /// Get a short error kind description (e.g., "UnknownLanguage").
    pub fn kind(&self) -> &'static str {
        match self {
            LangError::UnknownLanguage { .. } => "UnknownLanguage",
            LangError::UnknownExtension { .. } => "UnknownExtension",
            LangError::UnknownSeverity { .. } => "UnknownSeverity",
        }
    }
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangError::UnknownLanguage { name } => {
                write!(f, "Unknown language '{}'. Use: python, vbnet, java", name)
            }
            LangError::UnknownExtension { extension } => {
                write!(
                    f,
                    "Cannot infer language from extension '{}'. Use --language",
                    extension
                )
            }
            LangError::UnknownSeverity { name } => {
                write!(f, "Unknown severity '{}'. Use: error, warning, info", name)
            }
        }
    }
}

impl std::error::Error for LangError {}
