//! Conversion of parsed JSON values into recipe definitions.
//!
//! The reader never stops at the first problem: every structural issue is
//! recorded against the path of the offending entry and reported together.

use serde_json::{Map, Value};

use crate::declarations::{Declarations, ModifierBlock};
use crate::recipe::{CompoundVariant, Recipe, RecipeDefinition, Variant};
use crate::runtime::UtilityValue;
use crate::token::{Literal, RawCss, RawPart, Reference, TokenValue};
use crate::StyleframeError;

/// Values that can appear in a declarations block.
pub(super) trait ReadValue: Sized {
    /// Whether `value` is a leaf value rather than a modifier block.
    fn is_value(value: &Value) -> bool;

    /// Read a leaf value, recording an issue on failure.
    fn read(reader: &mut DocumentReader, path: &str, value: &Value) -> Option<Self>;
}

impl ReadValue for TokenValue {
    fn is_value(value: &Value) -> bool {
        match value {
            Value::Object(object) => object.contains_key("ref") || object.contains_key("css"),
            _ => true,
        }
    }

    fn read(reader: &mut DocumentReader, path: &str, value: &Value) -> Option<Self> {
        reader.token(path, value)
    }
}

impl ReadValue for UtilityValue {
    fn is_value(value: &Value) -> bool {
        !value.is_object()
    }

    fn read(reader: &mut DocumentReader, path: &str, value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(Self::from(*flag)),
            Value::String(key) => Some(Self::from(key.as_str())),
            Value::Number(number) => {
                Some(Self::from(Literal::Number(number.clone()).as_text().into_owned()))
            }
            _ => {
                reader.issue(path, "expected a utility key, number, or boolean");
                None
            }
        }
    }
}

/// Accumulates validation issues while walking a document.
#[derive(Debug, Default)]
pub(super) struct DocumentReader {
    issues: Vec<StyleframeError>,
}

impl DocumentReader {
    pub(super) fn issue(&mut self, path: &str, message: impl Into<String>) {
        self.issues
            .push(StyleframeError::validation(path, message));
    }

    pub(super) fn into_issues(self) -> Vec<StyleframeError> {
        self.issues
    }

    /// Read `{"recipes": [...]}` into named recipes.
    pub(super) fn recipes(&mut self, root: &Value) -> Vec<Recipe> {
        let Some(root) = self.object("", root) else {
            return Vec::new();
        };
        let Some(entries) = root.get("recipes") else {
            self.issue("recipes", "missing `recipes` array");
            return Vec::new();
        };
        let Value::Array(entries) = entries else {
            self.issue("recipes", "expected an array");
            return Vec::new();
        };
        entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| self.recipe(&format!("recipes[{index}]"), entry))
            .collect()
    }

    fn recipe(&mut self, path: &str, value: &Value) -> Option<Recipe> {
        let object = self.object(path, value)?;
        let name = match object.get("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name.clone()),
            Some(_) => {
                self.issue(&format!("{path}.name"), "expected a non-empty string");
                None
            }
            None => {
                self.issue(&format!("{path}.name"), "missing recipe name");
                None
            }
        };
        let definition = self.definition::<TokenValue>(path, object, &["name"]);
        Some(Recipe::new(name?, definition?))
    }

    /// Read a recipe definition body. `extra` lists keys owned by the caller.
    pub(super) fn definition<V: ReadValue>(
        &mut self,
        path: &str,
        object: &Map<String, Value>,
        extra: &[&str],
    ) -> Option<RecipeDefinition<V>> {
        let before = self.issues.len();
        let mut definition = RecipeDefinition::default();
        for (key, value) in object {
            let entry_path = join(path, key);
            match key.as_str() {
                "base" => {
                    if let Some(base) = self.declarations(&entry_path, value) {
                        definition = definition.base(base);
                    }
                }
                "variants" => {
                    for (variant_key, variant) in self.variants(&entry_path, value) {
                        definition = definition.variant(variant_key, variant);
                    }
                }
                "defaultVariants" | "default_variants" => {
                    for (variant, option) in self.selections(&entry_path, value) {
                        definition = definition.default_variant(variant, option);
                    }
                }
                "compoundVariants" | "compound_variants" => {
                    for compound in self.compounds(&entry_path, value) {
                        definition = definition.compound_variant(compound);
                    }
                }
                other if extra.contains(&other) => {}
                other => self.issue(&entry_path, format!("unknown recipe field `{other}`")),
            }
        }
        (self.issues.len() == before).then_some(definition)
    }

    fn variants<V: ReadValue>(&mut self, path: &str, value: &Value) -> Vec<(String, Variant<V>)> {
        let Some(object) = self.object(path, value) else {
            return Vec::new();
        };
        let mut variants = Vec::with_capacity(object.len());
        for (variant_key, options) in object {
            let variant_path = join(path, variant_key);
            let Some(options) = self.object(&variant_path, options) else {
                continue;
            };
            let mut variant = Variant::default();
            for (option_key, block) in options {
                let option_path = join(&variant_path, option_key);
                match block {
                    Value::Null | Value::Bool(false) => variant.insert(option_key.as_str(), None),
                    _ => {
                        if let Some(declarations) = self.declarations(&option_path, block) {
                            variant.insert(option_key.as_str(), Some(declarations));
                        }
                    }
                }
            }
            variants.push((variant_key.clone(), variant));
        }
        variants
    }

    fn compounds<V: ReadValue>(&mut self, path: &str, value: &Value) -> Vec<CompoundVariant<V>> {
        let Value::Array(entries) = value else {
            self.issue(path, "expected an array");
            return Vec::new();
        };
        let mut compounds = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let entry_path = format!("{path}[{index}]");
            let Some(object) = self.object(&entry_path, entry) else {
                continue;
            };
            let css = match object.get("css") {
                Some(css) => self.declarations(&join(&entry_path, "css"), css),
                None => Some(Declarations::default()),
            };
            let conditions = match object.get("match") {
                Some(conditions) => self.selections(&join(&entry_path, "match"), conditions),
                None => Vec::new(),
            };
            for key in object.keys().filter(|key| !matches!(key.as_str(), "css" | "match")) {
                self.issue(
                    &join(&entry_path, key),
                    format!("unknown compound variant field `{key}`"),
                );
            }
            if let Some(css) = css {
                let compound = conditions
                    .into_iter()
                    .fold(CompoundVariant::new(css), |compound, (variant, option)| {
                        compound.when(variant, option)
                    });
                compounds.push(compound);
            }
        }
        compounds
    }

    /// Read a `variant -> option` map. Booleans and numbers become their
    /// textual option keys.
    fn selections(&mut self, path: &str, value: &Value) -> Vec<(String, String)> {
        let Some(object) = self.object(path, value) else {
            return Vec::new();
        };
        let mut selections = Vec::with_capacity(object.len());
        for (variant, option) in object {
            match option {
                Value::String(option) => selections.push((variant.clone(), option.clone())),
                Value::Bool(flag) => selections.push((variant.clone(), flag.to_string())),
                Value::Number(number) => selections.push((
                    variant.clone(),
                    Literal::Number(number.clone()).as_text().into_owned(),
                )),
                _ => self.issue(&join(path, variant), "expected an option key"),
            }
        }
        selections
    }

    pub(super) fn declarations<V: ReadValue>(
        &mut self,
        path: &str,
        value: &Value,
    ) -> Option<Declarations<V>> {
        let object = self.object(path, value)?;
        let before = self.issues.len();
        let mut block = Declarations::default();
        for (key, value) in object {
            let entry_path = join(path, key);
            if V::is_value(value) {
                if let Some(value) = self.leaf::<V>(&entry_path, value) {
                    block.insert(key.as_str(), value);
                }
                continue;
            }
            let Some(inner) = self.object(&entry_path, value) else {
                continue;
            };
            let mut modifier = ModifierBlock::default();
            for (property, value) in inner {
                let property_path = join(&entry_path, property);
                if !V::is_value(value) {
                    self.issue(&property_path, "modifier blocks cannot nest");
                    continue;
                }
                if let Some(value) = self.leaf::<V>(&property_path, value) {
                    modifier.insert(property.as_str(), value);
                }
            }
            block.insert_modifier(key.as_str(), modifier);
        }
        (self.issues.len() == before).then_some(block)
    }

    fn leaf<V: ReadValue>(&mut self, path: &str, value: &Value) -> Option<V> {
        if value.is_null() {
            self.issue(path, "null is only allowed for variant options");
            return None;
        }
        V::read(self, path, value)
    }

    fn token(&mut self, path: &str, value: &Value) -> Option<TokenValue> {
        match value {
            Value::String(text) => Some(TokenValue::from(text.as_str())),
            Value::Number(number) => Some(Literal::Number(number.clone()).into()),
            Value::Bool(flag) => Some(TokenValue::from(*flag)),
            Value::Object(object) if object.contains_key("ref") => self.reference(path, object),
            Value::Object(object) if object.contains_key("css") => self.raw(path, object),
            Value::Null => {
                self.issue(path, "null is only allowed for variant options");
                None
            }
            Value::Array(_) | Value::Object(_) => {
                self.issue(path, "expected a literal, `ref`, or `css` value");
                None
            }
        }
    }

    fn reference(&mut self, path: &str, object: &Map<String, Value>) -> Option<TokenValue> {
        let name = match object.get("ref") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => {
                self.issue(&join(path, "ref"), "expected a variable name");
                return None;
            }
        };
        for key in object.keys().filter(|key| !matches!(key.as_str(), "ref" | "fallback")) {
            self.issue(&join(path, key), format!("unknown reference field `{key}`"));
        }
        let mut reference = Reference::new(name);
        if let Some(fallback) = object.get("fallback") {
            reference = reference.with_fallback(self.token(&join(path, "fallback"), fallback)?);
        }
        Some(reference.into())
    }

    fn raw(&mut self, path: &str, object: &Map<String, Value>) -> Option<TokenValue> {
        let css_path = join(path, "css");
        let Some(Value::Array(parts)) = object.get("css") else {
            self.issue(&css_path, "expected an array of fragments");
            return None;
        };
        for key in object.keys().filter(|key| key.as_str() != "css") {
            self.issue(&join(path, key), format!("unknown css field `{key}`"));
        }
        let mut read = Vec::with_capacity(parts.len());
        for (index, part) in parts.iter().enumerate() {
            match part {
                Value::String(text) => read.push(RawPart::from(text.as_str())),
                other => read.push(RawPart::from(
                    self.token(&format!("{css_path}[{index}]"), other)?,
                )),
            }
        }
        Some(RawCss::from_parts(read).into())
    }

    pub(super) fn object<'v>(
        &mut self,
        path: &str,
        value: &'v Value,
    ) -> Option<&'v Map<String, Value>> {
        if let Value::Object(object) = value {
            Some(object)
        } else {
            self.issue(display_path(path), "expected an object");
            None
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}
