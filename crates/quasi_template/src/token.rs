//! Token types for template source.
//!
//! The lexer alternates between literal text and `${...}` placeholders.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for template source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Literal text exactly as written, escapes included.
    ///
    /// Line terminators are normalized to `\n`.
    Text(String),
    /// The untrimmed body between `${` and `}`.
    Placeholder(String),
    /// Lexical error with message.
    Error(String),
    /// End of input.
    Eof,
}
