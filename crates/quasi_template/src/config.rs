//! Configuration for template parsing and evaluation.

/// What to do when a placeholder names something the scope does not bind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnboundPolicy {
    /// Fail with an unbound name error.
    #[default]
    Error,
    /// Substitute [`Value::Undefined`](quasi_foundation::Value::Undefined).
    Undefined,
}

/// Configuration for template parsing and evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Handling of unbound placeholder names.
    pub unbound: UnboundPolicy,

    /// Maximum number of placeholders a template may contain.
    pub max_placeholders: usize,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            unbound: UnboundPolicy::Error,
            max_placeholders: 1024,
        }
    }
}

impl TemplateConfig {
    /// Strict configuration: unbound names are errors.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient configuration: unbound names render as `undefined`.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            unbound: UnboundPolicy::Undefined,
            ..Self::default()
        }
    }

    /// Builder method to set the unbound policy.
    #[must_use]
    pub fn with_unbound(mut self, unbound: UnboundPolicy) -> Self {
        self.unbound = unbound;
        self
    }

    /// Builder method to set the placeholder limit.
    #[must_use]
    pub fn with_max_placeholders(mut self, max: usize) -> Self {
        self.max_placeholders = max;
        self
    }
}
