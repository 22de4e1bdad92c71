//! Runtime class-name resolution.
//!
//! Client code does not need raw declarations, only the names of utility
//! classes generated at build time. A runtime descriptor has the same shape
//! as an author-time recipe, but its values are [`UtilityValue`] keys into the
//! utility catalogue. Resolving it against a [`VariantSelection`] runs the
//! ordinary recipe merge and renders each resolved entry as one class:
//!
//! - `_<property>:<value>` or `_<property>` for flags;
//! - `_<modifier>:<property>:<value>` or `_<modifier>:<property>`.
//!
//! The recipe name always leads the string.
//!
//! [`VariantSelection`]: crate::recipe::VariantSelection

mod resolver;
mod value;

pub use resolver::{ClassNameMerge, RecipeResolver, resolve, utility_class};
pub use value::UtilityValue;

use crate::declarations::{Declarations, ModifierBlock};
use crate::recipe::{CompoundVariant, RecipeDefinition, Variant};

/// Runtime recipe descriptor.
pub type RuntimeRecipe = RecipeDefinition<UtilityValue>;

/// Declarations block of a runtime descriptor.
pub type RuntimeDeclarations = Declarations<UtilityValue>;

/// Modifier block of a runtime descriptor.
pub type RuntimeModifierBlock = ModifierBlock<UtilityValue>;

/// Variant axis of a runtime descriptor.
pub type RuntimeVariant = Variant<UtilityValue>;

/// Compound variant of a runtime descriptor.
pub type RuntimeCompoundVariant = CompoundVariant<UtilityValue>;
