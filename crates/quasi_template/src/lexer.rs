//! Lexer for template source.
//!
//! Splits source like `` Hello ${name}! `` into text and placeholder tokens.
//! Text stays raw: escape sequences are kept verbatim and only cooked later.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for template source.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Every call before [`TokenKind::Eof`] consumes at least one character.
    pub fn next_token(&mut self) -> Token {
        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let kind = if self.rest.is_empty() {
            TokenKind::Eof
        } else if self.rest.starts_with("${") {
            self.scan_placeholder()
        } else {
            self.scan_text()
        };

        Token::new(kind, Span::new(start, self.position, start_line, start_column))
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes a line terminator, pushing a normalized `\n`.
    ///
    /// `\r\n` and lone `\r` both become `\n`.
    fn take_newline(&mut self, text: &mut String) {
        if self.peek_char() == Some('\r') {
            self.advance();
            if self.peek_char() == Some('\n') {
                self.position += 1;
                self.rest = &self.rest[1..];
            }
            self.line += 1;
            self.column = 1;
        } else {
            self.advance();
        }
        text.push('\n');
    }

    /// Scans literal text up to the next unescaped `${` or end of input.
    fn scan_text(&mut self) -> TokenKind {
        let mut text = String::new();
        loop {
            match self.peek_char() {
                None => break,
                Some('$') if self.rest.starts_with("${") => break,
                Some('\\') => {
                    self.advance();
                    text.push('\\');
                    match self.peek_char() {
                        Some('\r' | '\n') => self.take_newline(&mut text),
                        Some(c) => {
                            self.advance();
                            text.push(c);
                        }
                        None => {
                            return TokenKind::Error("trailing backslash at end of template".into());
                        }
                    }
                }
                Some('\r' | '\n') => self.take_newline(&mut text),
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }
        TokenKind::Text(text)
    }

    /// Scans a `${...}` placeholder. Braces may not nest.
    fn scan_placeholder(&mut self) -> TokenKind {
        // consume "${"
        self.advance();
        self.advance();
        let mut body = String::new();
        loop {
            match self.peek_char() {
                Some('}') => {
                    self.advance();
                    return TokenKind::Placeholder(body);
                }
                Some('{') => {
                    self.advance();
                    return TokenKind::Error("nested braces are not allowed in placeholders".into());
                }
                Some(c) => {
                    self.advance();
                    body.push(c);
                }
                None => return TokenKind::Error("unterminated placeholder".into()),
            }
        }
    }
}
