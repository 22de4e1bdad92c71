//! Utility factories: one addressable declaration producer per option key.

use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::{Autogenerate, MultiplierAutogenerate};
use crate::case::{UtilityKeyTransform, kebab_case};
use crate::declarations::Declarations;
use crate::token::{Reference, TokenValue};

/// Values handed to a utility factory closure.
#[derive(Clone, Copy, Debug)]
pub struct UtilityContext<'a> {
    /// Utility name, for example `padding`.
    pub name: &'a str,
    /// Option key, for example `sm` or `[1.5]`.
    pub key: &'a str,
    /// Value bound to the option key.
    pub value: &'a TokenValue,
}

type Producer = dyn Fn(&UtilityContext<'_>) -> Declarations + Send + Sync;

/// A single registered utility and the declarations it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utility {
    name: String,
    key: String,
    value: TokenValue,
    modifier: Option<String>,
    declarations: Declarations,
}

impl Utility {
    /// Utility name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Option key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Bound value.
    #[must_use]
    pub const fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Modifier scoping this utility, if any.
    #[must_use]
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Declarations produced by the factory.
    #[must_use]
    pub const fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Generated class name, `_<name>:<key>` or `_<modifier>:<name>:<key>`.
    #[must_use]
    pub fn class_name(&self) -> String {
        class_name(self.modifier.as_deref(), &self.name, &self.key)
    }
}

fn class_name(modifier: Option<&str>, name: &str, key: &str) -> String {
    match modifier {
        Some(modifier) => format!("_{modifier}:{}:{key}", kebab_case(name)),
        None => format!("_{}:{key}", kebab_case(name)),
    }
}

/// Registers utilities from `option key -> value` maps.
///
/// Registration is idempotent per class name: the first write wins and later
/// writes for the same key are ignored.
///
/// ```rust
/// use styleframe::declarations::Declarations;
/// use styleframe::utility::UtilityFactory;
///
/// let mut padding = UtilityFactory::new("padding", |ctx| {
///     Declarations::new().set("padding", ctx.value.clone())
/// });
/// padding.register([("sm", "0.5rem"), ("md", "1rem")]);
/// padding.register([("sm", "9rem")]);
///
/// let sm = padding.get("sm").map(|utility| utility.value().to_css());
/// assert_eq!(sm, Some(String::from("0.5rem")));
/// assert_eq!(padding.len(), 2);
/// ```
pub struct UtilityFactory {
    name: String,
    factory: Box<Producer>,
    autogenerate: Box<dyn Autogenerate>,
    utilities: IndexMap<String, Utility>,
}

impl fmt::Debug for UtilityFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtilityFactory")
            .field("name", &self.name)
            .field("utilities", &self.utilities)
            .finish_non_exhaustive()
    }
}

impl UtilityFactory {
    /// Create a factory named `name`. Autogeneration defaults to the plain
    /// [`UtilityKeyTransform`].
    pub fn new<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&UtilityContext<'_>) -> Declarations + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            factory: Box::new(factory),
            autogenerate: Box::new(UtilityKeyTransform::new()),
            utilities: IndexMap::new(),
        }
    }

    /// Factory whose autogeneration multiplies against the `spacing`
    /// variable.
    ///
    /// ```rust
    /// use styleframe::declarations::Declarations;
    /// use styleframe::utility::UtilityFactory;
    ///
    /// let mut margin = UtilityFactory::spacing("margin", |ctx| {
    ///     Declarations::new().set("margin", ctx.value.clone())
    /// });
    /// margin.autogenerate(["@2"]);
    /// let two = margin.get("2").map(|utility| utility.value().to_css());
    /// assert_eq!(two, Some(String::from("calc(var(--spacing) * 2)")));
    /// ```
    pub fn spacing<F>(name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&UtilityContext<'_>) -> Declarations + Send + Sync + 'static,
    {
        Self::new(name, factory)
            .with_autogenerate(MultiplierAutogenerate::new(Reference::new("spacing")))
    }

    /// Replace the autogenerate hook.
    #[must_use]
    pub fn with_autogenerate(mut self, hook: impl Autogenerate + 'static) -> Self {
        self.autogenerate = Box::new(hook);
        self
    }

    /// Utility name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register one utility per `(key, value)` pair. Returns the number of
    /// newly registered utilities.
    pub fn register<I, K, V>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TokenValue>,
    {
        self.register_scoped(None, values)
    }

    /// Register utilities scoped to `modifier`, for example `hover`.
    pub fn register_modified<I, K, V>(&mut self, modifier: &str, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TokenValue>,
    {
        self.register_scoped(Some(modifier), values)
    }

    fn register_scoped<I, K, V>(&mut self, modifier: Option<&str>, values: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TokenValue>,
    {
        let mut registered = 0;
        for (key, value) in values {
            if self.register_one(modifier, key.into(), value.into()) {
                registered += 1;
            }
        }
        registered
    }

    /// Run the autogenerate hook over `inputs` and register the results.
    /// Blank inputs are skipped.
    pub fn autogenerate<I, S>(&mut self, inputs: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registered = 0;
        for input in inputs {
            let raw = input.as_ref();
            if raw.trim().is_empty() {
                debug!(utility = %self.name, "skipping blank autogenerate input");
                continue;
            }
            let (key, value) = self.autogenerate.generate(raw);
            if self.register_one(None, key, value) {
                registered += 1;
            }
        }
        registered
    }

    fn register_one(&mut self, modifier: Option<&str>, key: String, value: TokenValue) -> bool {
        let class = class_name(modifier, &self.name, &key);
        if self.utilities.contains_key(&class) {
            warn!(utility = %self.name, %class, "utility already registered; keeping the first");
            return false;
        }
        let declarations = (self.factory)(&UtilityContext {
            name: &self.name,
            key: &key,
            value: &value,
        });
        debug!(utility = %self.name, %class, "registered utility");
        self.utilities.insert(
            class,
            Utility {
                name: self.name.clone(),
                key,
                value,
                modifier: modifier.map(str::to_owned),
                declarations,
            },
        );
        true
    }

    /// Unscoped utility registered under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Utility> {
        self.utilities.get(&class_name(None, &self.name, key))
    }

    /// Utility registered under `key` for `modifier`.
    #[must_use]
    pub fn get_modified(&self, modifier: &str, key: &str) -> Option<&Utility> {
        self.utilities
            .get(&class_name(Some(modifier), &self.name, key))
    }

    /// Registered utilities in registration order.
    pub fn utilities(&self) -> impl Iterator<Item = &Utility> {
        self.utilities.values()
    }

    /// Number of registered utilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.utilities.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
    }
}
