//! Error types for Quasi.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout Quasi.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Quasi operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
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
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(fragments: usize, substitutions: usize) -> Self {
        Self::new(ErrorKind::LengthMismatch {
            fragments,
            substitutions,
        })
    }

    /// Creates a template parse error at a 1-based position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates an unbound name error.
    #[must_use]
    pub fn unbound_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundName(name.into()))
    }

    /// Creates a limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(limit: usize, actual: usize) -> Self {
        Self::new(ErrorKind::LimitExceeded { limit, actual })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::internal("formatter reported an error while rendering a value")
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fragment count is not exactly one more than substitution count.
    #[error(
        "length mismatch: {fragments} fragments require {} substitutions, got {substitutions}",
        .fragments.saturating_sub(1)
    )]
    LengthMismatch {
        /// Number of fragments supplied.
        fragments: usize,
        /// Number of substitutions supplied.
        substitutions: usize,
    },

    /// Template source could not be parsed.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
    },

    /// A fragment's raw text holds an escape that cannot be cooked.
    #[error("invalid escape sequence in fragment {fragment}")]
    InvalidEscape {
        /// Zero-based index of the fragment.
        fragment: usize,
    },

    /// Placeholder names a binding absent from the scope.
    #[error("unbound name: {0}")]
    UnboundName(String),

    /// Template has more placeholders than the configured limit.
    #[error("limit exceeded: at most {limit} placeholders allowed, found {actual}")]
    LimitExceeded {
        /// The configured limit.
        limit: usize,
        /// The count encountered.
        actual: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("at <template>")?;
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, ":{line}:{col}")?;
        }
        Ok(())
    }
}
