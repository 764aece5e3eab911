//! Name bindings for placeholder resolution.

use std::sync::Arc;

use quasi_foundation::{LtMap, Value};

/// Immutable name to value bindings.
///
/// Binding returns a new scope; existing scopes are never modified, so a
/// base scope can be shared and extended per render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    bindings: LtMap<Arc<str>, Value>,
}

impl Scope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new scope with `name` bound to `value`, replacing any
    /// previous binding of the same name.
    #[must_use]
    pub fn bind(&self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        Self {
            bindings: self.bindings.insert(name.into(), value.into()),
        }
    }

    /// Looks up a binding.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Returns true if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over bound names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|name| &**name)
    }
}

impl<K, V> FromIterator<(K, V)> for Scope
where
    K: Into<Arc<str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
