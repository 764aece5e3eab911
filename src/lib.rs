//! Quasi - tagged template interpolation
//!
//! This crate re-exports both layers of Quasi for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: quasi_template   — render, lexer, parser, scope, tags, config
//! Layer 0: quasi_foundation — Core types (Value, Error, collections)
//! ```

pub use quasi_foundation as foundation;
pub use quasi_template as template;

pub use quasi_template::{
    Cooked, Error, ErrorKind, HtmlEscape, Raw, Result, Scope, Tag, Template, TemplateConfig,
    TemplateStrings, UnboundPolicy, Value, render, render_to,
};
