//! Parsed templates.
//!
//! A [`Template`] is the parsed form of `` text ${name} text `` source: its
//! [`TemplateStrings`] plus one [`Placeholder`] between each pair of
//! fragments. Parsing guarantees the fragment count is one more than the
//! placeholder count, so rendering a parsed template can only fail on
//! bindings or escapes, never on shape.

use std::sync::Arc;

use quasi_foundation::{Error, ErrorContext, Result, Value};
use tracing::{debug, trace};

use crate::config::{TemplateConfig, UnboundPolicy};
use crate::lexer::Lexer;
use crate::scope::Scope;
use crate::span::Span;
use crate::strings::TemplateStrings;
use crate::tag::{Cooked, Tag};
use crate::token::TokenKind;

/// A `${name}` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder {
    /// The identifier inside the braces.
    pub name: Arc<str>,
    /// Location of the whole `${...}` in the source.
    pub span: Span,
}

/// A parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    strings: TemplateStrings,
    placeholders: Vec<Placeholder>,
}

impl Template {
    /// Parses template source with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Template::parse_with`].
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with(source, &TemplateConfig::default())
    }

    /// Parses template source.
    ///
    /// Invalid escapes in literal text are not parse errors; they surface
    /// when a tag asks for cooked text.
    ///
    /// # Errors
    ///
    /// Returns a parse error for unterminated or empty placeholders, nested
    /// braces, placeholder bodies that are not identifiers, or a trailing
    /// backslash. Returns a limit error when the template has more
    /// placeholders than `config.max_placeholders`.
    pub fn parse_with(source: &str, config: &TemplateConfig) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let mut raw: Vec<String> = Vec::new();
        let mut placeholders = Vec::new();
        let mut current = String::new();

        loop {
            let token = lexer.next_token();
            match token.kind {
                TokenKind::Text(text) => current = text,
                TokenKind::Placeholder(body) => {
                    if placeholders.len() == config.max_placeholders {
                        let actual = placeholders.len() + 1;
                        return Err(Error::limit_exceeded(config.max_placeholders, actual));
                    }
                    let name = parse_identifier(&body, token.span)?;
                    raw.push(std::mem::take(&mut current));
                    placeholders.push(Placeholder {
                        name: name.into(),
                        span: token.span,
                    });
                }
                TokenKind::Error(message) => {
                    return Err(Error::parse(message, token.span.line, token.span.column));
                }
                TokenKind::Eof => {
                    raw.push(current);
                    break;
                }
            }
        }

        debug!(
            fragments = raw.len(),
            placeholders = placeholders.len(),
            "parsed template"
        );

        Ok(Self {
            strings: TemplateStrings::new(raw),
            placeholders,
        })
    }

    /// The template's literal fragments.
    #[must_use]
    pub fn strings(&self) -> &TemplateStrings {
        &self.strings
    }

    /// The placeholders, in source order.
    #[must_use]
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Resolves every placeholder against `scope`, in source order.
    ///
    /// # Errors
    ///
    /// Under [`UnboundPolicy::Error`], returns an unbound name error
    /// positioned at the first placeholder with no binding.
    pub fn substitutions(&self, scope: &Scope, config: &TemplateConfig) -> Result<Vec<Value>> {
        self.placeholders
            .iter()
            .map(|placeholder| match scope.get(&placeholder.name) {
                Some(value) => Ok(value.clone()),
                None => match config.unbound {
                    UnboundPolicy::Error => Err(Error::unbound_name(&*placeholder.name)
                        .with_context(
                            ErrorContext::new()
                                .with_position(placeholder.span.line, placeholder.span.column),
                        )),
                    UnboundPolicy::Undefined => {
                        trace!(name = %placeholder.name, "unbound placeholder rendered as undefined");
                        Ok(Value::Undefined)
                    }
                },
            })
            .collect()
    }

    /// Renders with plain cooked interpolation.
    ///
    /// # Errors
    ///
    /// Fails on unbound names (per `config`) or invalid escapes.
    pub fn render(&self, scope: &Scope, config: &TemplateConfig) -> Result<String> {
        self.render_with(&Cooked, scope, config)
    }

    /// Renders through an arbitrary tag.
    ///
    /// # Errors
    ///
    /// Fails on unbound names (per `config`) or whatever the tag reports.
    pub fn render_with<T>(&self, tag: &T, scope: &Scope, config: &TemplateConfig) -> Result<String>
    where
        T: Tag + ?Sized,
    {
        let substitutions = self.substitutions(scope, config)?;
        tag.apply(&self.strings, &substitutions)
    }
}

/// Trims a placeholder body and checks it is an identifier.
fn parse_identifier(body: &str, span: Span) -> Result<&str> {
    let name = body.trim();
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(Error::parse("empty placeholder", span.line, span.column));
    };
    let is_start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == '$';
    if !is_start(first) || !chars.all(|c| is_start(c) || c.is_ascii_digit()) {
        return Err(Error::parse(
            format!("placeholder must be an identifier, found `{name}`"),
            span.line,
            span.column,
        ));
    }
    Ok(name)
}
