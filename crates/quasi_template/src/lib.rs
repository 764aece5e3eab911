//! Interpolation renderer, template parsing, and tags for Quasi.
//!
//! The core is [`render`]: interleave `N` literal fragments with `N - 1`
//! substitutions. Everything else builds the inputs to that call:
//!
//! - [`Lexer`] and [`Template::parse`] turn `` text ${name} text `` source
//!   into [`TemplateStrings`] (cooked and raw fragments) plus placeholders.
//! - [`Scope`] resolves placeholder names to [`Value`]s.
//! - [`Tag`] implementations ([`Cooked`], [`Raw`], [`HtmlEscape`]) decide
//!   how fragments and substitutions are combined.
//!
//! ```
//! use quasi_template::{render, Value};
//!
//! let text = render(&["", " items cost $", "."], &[Value::from(10), Value::from("2.50")])?;
//! assert_eq!(text, "10 items cost $2.50.");
//! # Ok::<(), quasi_template::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cook;
pub mod lexer;
pub mod render;
pub mod scope;
pub mod span;
pub mod strings;
pub mod tag;
pub mod template;
pub mod token;


pub use config::{TemplateConfig, UnboundPolicy};
pub use cook::cook;
pub use lexer::Lexer;
pub use render::{render, render_to};
pub use scope::Scope;
pub use span::Span;
pub use strings::TemplateStrings;
pub use tag::{Cooked, HtmlEscape, Raw, Tag};
pub use template::{Placeholder, Template};
pub use token::{Token, TokenKind};

pub use quasi_foundation::{Error, ErrorContext, ErrorKind, Result, Value};
