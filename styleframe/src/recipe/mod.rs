//! Recipes and the declaration merger.
//!
//! A recipe combines `base` declarations with named variants, default
//! variant selections, and compound variants that only apply when several
//! selections match at once. Resolving a recipe against a
//! [`VariantSelection`] flattens all of that into one ordered
//! [`ResolvedDeclarations`] map.
//!
//! Precedence is **base < variant < compound variant**. Later writes win at
//! the granularity of a single `(modifier, property)` key, but a key keeps
//! the position where it was first inserted.
//!
//! Resolution happens in two steps:
//!
//! 1. [`MergeComposer::compose`] turns the recipe and selection into an
//!    ordered list of [`MergeLayer`]s, each tagged with its
//!    [`MergeProvenance`].
//! 2. A [`DeclarationMerge`] implementation folds the layers. The author-time
//!    [`ResolvedMerge`] produces a declaration map; the runtime resolver folds
//!    the same layers into a class-name string.
//!
//! # Example
//!
//! ```rust
//! use styleframe::declarations::Declarations;
//! use styleframe::recipe::{Recipe, RecipeDefinition, Variant, VariantSelection};
//!
//! let button = Recipe::new(
//!     "button",
//!     RecipeDefinition::new()
//!         .base(Declarations::new().set("borderWidth", "thin"))
//!         .variant(
//!             "color",
//!             Variant::new()
//!                 .option("primary", Declarations::new().set("background", "primary"))
//!                 .option("secondary", Declarations::new().set("background", "secondary")),
//!         )
//!         .default_variant("color", "primary"),
//! );
//!
//! let resolved = button.resolve(&VariantSelection::new().with("color", "secondary"));
//! assert_eq!(
//!     resolved.get("background").map(|value| value.to_css()),
//!     Some(String::from("secondary"))
//! );
//! ```
//!
//! Merging never fails. Unknown variants, unknown options, and compound
//! variants that reference undeclared variants simply contribute nothing.
//! [`RecipeDefinition::diagnostics`] reports such oddities for tooling.

mod composer;
mod definition;
mod diagnostics;
mod layer;
mod merge;
mod resolved;
mod selection;

pub use composer::MergeComposer;
pub use definition::{CompoundVariant, Recipe, RecipeDefinition, Variant};
pub use diagnostics::RecipeDiagnostic;
pub use layer::{MergeLayer, MergeProvenance};
pub use merge::{DeclarationMerge, ResolvedMerge, merge_layers};
pub use resolved::{DeclarationKey, ResolvedDeclaration, ResolvedDeclarations};
pub use selection::VariantSelection;

#[cfg(test)]
mod tests;
