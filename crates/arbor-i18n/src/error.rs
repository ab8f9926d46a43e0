//! Error types for fallback localization

use thiserror::Error;

/// Errors raised when a format string cannot be applied to its arguments.
///
/// Missing translations never produce an error; only malformed format input
/// does, so a host application with no localization configured keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A placeholder referenced an argument position that was not supplied
    #[error("placeholder {{{index}}} is out of range for {supplied} supplied argument(s)")]
    IndexOutOfRange { index: usize, supplied: usize },

    /// An opening brace was never closed
    #[error("unclosed placeholder starting at byte {position}")]
    UnclosedPlaceholder { position: usize },

    /// A placeholder token was not a numeric index
    #[error("placeholder '{{{placeholder}}}' at byte {position} is not a numeric index")]
    InvalidIndex {
        placeholder: String,
        position: usize,
    },

    /// A closing brace appeared outside a placeholder or `}}` escape
    #[error("unmatched '}}' at byte {position}")]
    UnmatchedBrace { position: usize },

    /// The pluralization rule selected a form the caller did not supply
    #[error("pluralization selected form {index} but only {available} form(s) were supplied")]
    MissingPluralForm { index: usize, available: usize },
}

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
