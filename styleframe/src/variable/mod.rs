//! Design-token variables and namespaced variable factories.
//!
//! A [`Variable`] is a named token value that renders as a CSS custom
//! property. [`VariableFactory`] declares a whole family of variables under a
//! shared namespace, so `{"sm": "0.5rem", "default": "1rem"}` under
//! `spacing` becomes `spacing.sm` and `spacing`.

use indexmap::IndexMap;
use tracing::warn;

use crate::token::{Reference, TokenValue, css_variable_name};

/// Key declaring the bare namespace inside a [`VariableFactory`].
pub const DEFAULT_KEY: &str = "default";

/// A named token value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: TokenValue,
}

impl Variable {
    /// Declare `name` with `value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Dotted variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value.
    #[must_use]
    pub const fn value(&self) -> &TokenValue {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: TokenValue) {
        self.value = value;
    }

    /// Custom property name, for example `--spacing--sm`.
    #[must_use]
    pub fn css_name(&self, prefix: &str) -> String {
        css_variable_name(&self.name, prefix)
    }

    /// A reference to this variable.
    ///
    /// ```rust
    /// use styleframe::variable::Variable;
    ///
    /// let primary = Variable::new("color.primary", "#06f");
    /// assert_eq!(
    ///     primary.reference().with_fallback("blue").css_variable(""),
    ///     "--color--primary"
    /// );
    /// ```
    #[must_use]
    pub fn reference(&self) -> Reference {
        Reference::new(self.name.as_str())
    }
}

/// Declares variables under a namespace, first write wins per name.
///
/// ```rust
/// use styleframe::variable::VariableFactory;
///
/// let mut spacing = VariableFactory::new("spacing");
/// spacing.declare([("default", "1rem"), ("sm", "0.5rem")]);
/// spacing.declare([("sm", "0.25rem")]);
///
/// let names: Vec<_> = spacing.variables().map(|variable| variable.name()).collect();
/// assert_eq!(names, vec!["spacing", "spacing.sm"]);
/// assert_eq!(
///     spacing.get("sm").map(|variable| variable.value().to_css()),
///     Some(String::from("0.5rem"))
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableFactory {
    namespace: String,
    variables: IndexMap<String, Variable>,
}

impl VariableFactory {
    /// Create a factory for `namespace`.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            variables: IndexMap::new(),
        }
    }

    /// The namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Full variable name for `key`.
    #[must_use]
    pub fn qualify(&self, key: &str) -> String {
        if key == DEFAULT_KEY {
            self.namespace.clone()
        } else {
            format!("{}.{key}", self.namespace)
        }
    }

    /// Declare one variable per `(key, value)` pair. Returns the number of
    /// newly declared variables.
    pub fn declare<I, K, V>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<TokenValue>,
    {
        let mut declared = 0;
        for (key, value) in values {
            let name = self.qualify(key.as_ref());
            if self.variables.contains_key(&name) {
                warn!(variable = %name, "variable already declared; keeping the first");
                continue;
            }
            self.variables
                .insert(name.clone(), Variable::new(name, value));
            declared += 1;
        }
        declared
    }

    /// Variable declared for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.get(&self.qualify(key))
    }

    /// Reference to the variable for `key`.
    #[must_use]
    pub fn reference(&self, key: &str) -> Reference {
        Reference::new(self.qualify(key))
    }

    /// Declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Consume the factory, yielding its variables.
    pub fn into_variables(self) -> impl Iterator<Item = Variable> {
        self.variables.into_values()
    }
}

#[cfg(test)]
mod tests;
