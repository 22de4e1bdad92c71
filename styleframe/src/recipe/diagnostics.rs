//! Structural diagnostics for recipe definitions.
//!
//! Diagnostics never affect resolution; a definition with diagnostics still
//! resolves, with the offending parts contributing nothing.

use std::fmt;

use super::RecipeDefinition;

/// A structural oddity found in a recipe definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecipeDiagnostic {
    /// A default names a variant that is not declared.
    UnknownDefaultVariant {
        /// Undeclared variant key.
        variant: String,
    },
    /// A default names an option the variant does not declare.
    UnknownDefaultOption {
        /// Variant key.
        variant: String,
        /// Undeclared option key.
        option: String,
    },
    /// A compound variant conditions on an undeclared variant.
    UnknownCompoundVariant {
        /// Position of the compound variant.
        index: usize,
        /// Undeclared variant key.
        variant: String,
    },
    /// A compound variant requires an option the variant does not declare.
    UnknownCompoundOption {
        /// Position of the compound variant.
        index: usize,
        /// Variant key.
        variant: String,
        /// Undeclared option key.
        option: String,
    },
}

impl fmt::Display for RecipeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDefaultVariant { variant } => {
                write!(f, "default variant '{variant}' is not declared")
            }
            Self::UnknownDefaultOption { variant, option } => {
                write!(f, "default option '{option}' is not declared by variant '{variant}'")
            }
            Self::UnknownCompoundVariant { index, variant } => write!(
                f,
                "compound variant #{index} matches undeclared variant '{variant}' and can never apply"
            ),
            Self::UnknownCompoundOption {
                index,
                variant,
                option,
            } => write!(
                f,
                "compound variant #{index} requires undeclared option '{option}' of variant '{variant}'"
            ),
        }
    }
}

impl<V> RecipeDefinition<V> {
    /// Report defaults and compound conditions that reference undeclared
    /// variants or options.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<RecipeDiagnostic> {
        let mut found = Vec::new();
        for (variant, option) in self.default_variants() {
            match self.get_variant(variant) {
                None => found.push(RecipeDiagnostic::UnknownDefaultVariant {
                    variant: variant.to_owned(),
                }),
                Some(declared) if !declared.contains(option) => {
                    found.push(RecipeDiagnostic::UnknownDefaultOption {
                        variant: variant.to_owned(),
                        option: option.to_owned(),
                    });
                }
                Some(_) => {}
            }
        }
        for (index, compound) in self.compound_variants().iter().enumerate() {
            for (variant, option) in compound.conditions() {
                match self.get_variant(variant) {
                    None => found.push(RecipeDiagnostic::UnknownCompoundVariant {
                        index,
                        variant: variant.to_owned(),
                    }),
                    Some(declared) if !declared.contains(option) => {
                        found.push(RecipeDiagnostic::UnknownCompoundOption {
                            index,
                            variant: variant.to_owned(),
                            option: option.to_owned(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        found
    }
}
