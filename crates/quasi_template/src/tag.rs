//! Tag functions.
//!
//! A tag receives the template strings and the evaluated substitutions and
//! produces the final text. Every built-in tag finishes with [`render`]; they
//! differ only in which fragments they hand it and whether substitutions are
//! transformed first.

use quasi_foundation::{Result, Value};

use crate::render::render;
use crate::strings::TemplateStrings;

/// Combines template strings with substitutions.
pub trait Tag {
    /// Produces the tagged result.
    ///
    /// # Errors
    ///
    /// Implementations report length mismatches from [`render`] and any
    /// tag-specific failure.
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String>;
}

impl<F> Tag for F
where
    F: Fn(&TemplateStrings, &[Value]) -> Result<String>,
{
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String> {
        self(strings, substitutions)
    }
}

/// Plain interpolation over cooked fragments.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cooked;

impl Tag for Cooked {
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String> {
        render(&strings.cooked_fragments()?, substitutions)
    }
}

/// Interpolation over raw fragments; escapes are left as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct Raw;

impl Tag for Raw {
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String> {
        render(strings.raw(), substitutions)
    }
}

/// Cooked interpolation with HTML-escaped substitutions.
///
/// Fragments are trusted markup and pass through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlEscape;

impl Tag for HtmlEscape {
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String> {
        let escaped: Vec<String> = substitutions
            .iter()
            .map(|v| escape_html(&v.to_string()))
            .collect();
        render(&strings.cooked_fragments()?, &escaped)
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
