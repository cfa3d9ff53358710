//! Error types for the OmniCore system.
//!
//! The default pipeline is lenient and never fails; these errors are what the
//! strict pipeline reports instead of silently skipping malformed input.

use thiserror::Error;

use crate::symbols::Namespace;

/// Result type alias for OmniCore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for OmniCore operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context, usually the source line the error points into.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an unexpected character error.
    #[must_use]
    pub fn unexpected_character(character: char, offset: usize) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter { character, offset })
    }

    /// Creates an unexpected token error.
    #[must_use]
    pub fn unexpected_token(token: impl Into<String>, offset: usize) -> Self {
        Self::new(ErrorKind::UnexpectedToken {
            token: token.into(),
            offset,
        })
    }

    /// Creates an unbalanced delimiter error.
    #[must_use]
    pub fn unbalanced_delimiter(open: char, offset: usize) -> Self {
        Self::new(ErrorKind::UnbalancedDelimiter { open, offset })
    }

    /// Creates an unknown code error.
    #[must_use]
    pub fn unknown_code(namespace: Namespace, code: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCode {
            namespace,
            code: code.into(),
        })
    }

    /// Creates a nesting limit error.
    #[must_use]
    pub fn nesting_too_deep(limit: usize, offset: usize) -> Self {
        Self::new(ErrorKind::NestingTooDeep { limit, offset })
    }

    /// Returns the byte offset this error points at, if it has one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match &self.kind {
            ErrorKind::UnexpectedCharacter { offset, .. }
            | ErrorKind::UnexpectedToken { offset, .. }
            | ErrorKind::UnbalancedDelimiter { offset, .. }
            | ErrorKind::NestingTooDeep { offset, .. } => Some(*offset),
            ErrorKind::UnknownCode { .. }
            | ErrorKind::Io(_)
            | ErrorKind::Serialization(_)
            | ErrorKind::Internal(_) => None,
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character that is neither whitespace, a sigil, nor part of a word.
    #[error("unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        offset: usize,
    },

    /// A token that cannot start a statement.
    #[error("unexpected {token} at offset {offset}")]
    UnexpectedToken {
        /// Human-readable name of the token.
        token: String,
        /// Byte offset in the input.
        offset: usize,
    },

    /// A `(` or `[` without its matching closer.
    #[error("unbalanced '{open}' opened at offset {offset}")]
    UnbalancedDelimiter {
        /// The opening delimiter.
        open: char,
        /// Byte offset of the opening delimiter.
        offset: usize,
    },

    /// A code that is not registered in its symbol table.
    #[error("unknown {namespace} code: {code}")]
    UnknownCode {
        /// The table the code was looked up in.
        namespace: Namespace,
        /// The unregistered code.
        code: String,
    },

    /// Nested statements exceeded the configured depth.
    #[error("nesting deeper than {limit} at offset {offset}")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// Byte offset of the statement that exceeded it.
        offset: usize,
    },

    /// I/O failure in the runtime layer.
    #[error("I/O error: {0}")]
    Io(String),

    /// Failure encoding tokens or trees for display.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e.to_string()))
    }
}
