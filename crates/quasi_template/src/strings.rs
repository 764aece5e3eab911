//! Cooked and raw fragment text.

use std::sync::Arc;

use quasi_foundation::{Error, ErrorKind, Result};

use crate::cook::cook;

/// The literal fragments of a template, kept both cooked and raw.
///
/// `raw` is the text as written. `cooked` has escapes processed, with
/// `None` where the raw text holds an invalid escape.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TemplateStrings {
    cooked: Vec<Option<Arc<str>>>,
    raw: Vec<Arc<str>>,
}

impl TemplateStrings {
    /// Builds template strings from raw fragment text, cooking each one.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let raw: Vec<Arc<str>> = raw.into_iter().map(Into::into).collect();
        let cooked = raw.iter().map(|r| cook(r).map(Arc::from)).collect();
        Self { cooked, raw }
    }

    /// Returns the number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if there are no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Cooked fragments, `None` where an escape was invalid.
    #[must_use]
    pub fn cooked(&self) -> &[Option<Arc<str>>] {
        &self.cooked
    }

    /// Raw fragments exactly as written.
    #[must_use]
    pub fn raw(&self) -> &[Arc<str>] {
        &self.raw
    }

    /// Returns every cooked fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidEscape`] naming the first fragment whose
    /// raw text could not be cooked.
    pub fn cooked_fragments(&self) -> Result<Vec<&str>> {
        self.cooked
            .iter()
            .enumerate()
            .map(|(fragment, cooked)| {
                cooked
                    .as_deref()
                    .ok_or_else(|| Error::new(ErrorKind::InvalidEscape { fragment }))
            })
            .collect()
    }
}
