//! Recipe documents and runtime descriptor interchange.
//!
//! Recipes can be authored as data instead of code. A document holds a
//! `recipes` array; each recipe carries a `name` plus the usual `base`,
//! `variants`, `defaultVariants`, and `compoundVariants` fields:
//!
//! ```json
//! {
//!   "recipes": [{
//!     "name": "button",
//!     "base": { "borderWidth": "thin", "hover": { "opacity": 0.9 } },
//!     "variants": {
//!       "color": {
//!         "primary": { "background": { "ref": "color.primary" } },
//!         "ghost": null
//!       }
//!     },
//!     "defaultVariants": { "color": "primary" }
//!   }]
//! }
//! ```
//!
//! Token values are literals, `{"ref": name, "fallback"?: value}` references,
//! or `{"css": [fragments]}` compositions. Any other object inside a
//! declarations block is a modifier block. A variant option set to `null`
//! (or `false`, since TOML has no null) contributes nothing.
//!
//! Runtime descriptors serialise with [`RecipeDefinition::to_json`] and are
//! read back with [`parse_runtime`].

mod reader;

use std::fmt;
use std::sync::Arc;

use camino::Utf8Path;
use serde_json::Value;
use tracing::{debug, warn};

use crate::recipe::{Recipe, RecipeDefinition};
use crate::runtime::{RuntimeRecipe, UtilityValue};
use crate::{StyleframeError, StyleframeResult, StyleframeResultExt};
use reader::DocumentReader;

/// Serialisation format of a recipe document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// TOML, with recipes as `[[recipes]]` tables.
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "toml")]
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, text: &str) -> StyleframeResult<Value> {
        match self {
            Self::Json => serde_json::from_str(text).into_styleframe(),
            #[cfg(feature = "toml")]
            Self::Toml => toml::from_str(text).into_styleframe(),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            #[cfg(feature = "toml")]
            Self::Toml => f.write_str("TOML"),
        }
    }
}

/// Parse every recipe in `text`.
///
/// Structural problems are collected across the whole document: one problem
/// yields [`StyleframeError::Validation`], several yield
/// [`StyleframeError::Aggregate`]. Recipe diagnostics are logged at `warn`
/// level and do not fail parsing.
///
/// ```rust
/// use styleframe::document::{DocumentFormat, parse_recipes};
/// use styleframe::recipe::VariantSelection;
///
/// # fn main() -> styleframe::StyleframeResult<()> {
/// let recipes = parse_recipes(
///     r#"{"recipes": [{"name": "chip", "base": {"borderRadius": "full"}}]}"#,
///     DocumentFormat::Json,
/// )?;
/// let class = recipes[0].resolver().class_name(&VariantSelection::new());
/// assert_eq!(class, "chip _border-radius:full");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`StyleframeError::Document`] for syntax errors and validation
/// errors for well-formed documents with an invalid structure.
pub fn parse_recipes(text: &str, format: DocumentFormat) -> StyleframeResult<Vec<Recipe>> {
    let root = format.parse(text)?;
    let mut reader = DocumentReader::default();
    let recipes = reader.recipes(&root);
    finish(reader)?;
    for recipe in &recipes {
        for diagnostic in recipe.definition().diagnostics() {
            warn!(recipe = recipe.name(), %diagnostic, "recipe diagnostic");
        }
    }
    debug!(count = recipes.len(), %format, "parsed recipe document");
    Ok(recipes)
}

/// Read and parse a recipe document, inferring its format from the
/// extension.
///
/// # Errors
///
/// Returns [`StyleframeError::Io`] when the file cannot be read, a
/// validation error for an unsupported extension, and any error of
/// [`parse_recipes`].
pub fn load_recipes(path: &Utf8Path) -> StyleframeResult<Vec<Recipe>> {
    let Some(format) = DocumentFormat::from_path(path) else {
        return Err(Arc::new(StyleframeError::validation(
            path.as_str(),
            "unsupported document extension",
        )));
    };
    let text = std::fs::read_to_string(path)
        .map_err(|source| Arc::new(StyleframeError::io(path, source)))?;
    parse_recipes(&text, format)
}

/// Parse a runtime descriptor produced by [`RecipeDefinition::to_json`].
///
/// # Errors
///
/// Returns [`StyleframeError::Document`] for invalid JSON and validation
/// errors for an invalid structure.
pub fn parse_runtime(json: &str) -> StyleframeResult<RuntimeRecipe> {
    let root = DocumentFormat::Json.parse(json)?;
    let mut reader = DocumentReader::default();
    let definition = match reader.object("", &root) {
        Some(object) => reader.definition::<UtilityValue>("", object, &[]),
        None => None,
    };
    finish(reader)?;
    definition.ok_or_else(|| {
        Arc::new(StyleframeError::validation(
            "<root>",
            "runtime descriptor could not be read",
        ))
    })
}

fn finish(reader: DocumentReader) -> StyleframeResult<()> {
    match StyleframeError::try_aggregate(reader.into_issues()) {
        Some(err) => Err(Arc::new(err)),
        None => Ok(()),
    }
}

impl RecipeDefinition<UtilityValue> {
    /// Serialise the runtime descriptor as JSON for client code.
    ///
    /// # Errors
    ///
    /// Returns [`StyleframeError::Document`] if serialisation fails.
    pub fn to_json(&self) -> StyleframeResult<String> {
        serde_json::to_string(self).into_styleframe()
    }
}
