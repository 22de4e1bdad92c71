//! Merge layers and their provenance.

use std::borrow::Cow;

use crate::declarations::Declarations;

/// Which part of a recipe contributed a layer.
///
/// Variants are declared in ascending precedence order, so comparing two
/// provenances tells which one wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum MergeProvenance {
    /// Base declarations of the recipe.
    Base,
    /// Declarations of a selected variant option.
    Variant,
    /// Declarations of a matched compound variant.
    Compound,
}

/// One declarations block contributed to a merge.
#[derive(Clone, Debug)]
pub struct MergeLayer<'a, V> {
    provenance: MergeProvenance,
    label: Cow<'a, str>,
    declarations: &'a Declarations<V>,
}

impl<'a, V> MergeLayer<'a, V> {
    /// Layer built from base declarations.
    #[must_use]
    pub const fn base(declarations: &'a Declarations<V>) -> Self {
        Self {
            provenance: MergeProvenance::Base,
            label: Cow::Borrowed("base"),
            declarations,
        }
    }

    /// Layer built from the selected `option` of `variant`.
    #[must_use]
    pub fn variant(variant: &str, option: &str, declarations: &'a Declarations<V>) -> Self {
        Self {
            provenance: MergeProvenance::Variant,
            label: Cow::Owned(format!("{variant}={option}")),
            declarations,
        }
    }

    /// Layer built from the compound variant at `index`.
    #[must_use]
    pub fn compound(index: usize, declarations: &'a Declarations<V>) -> Self {
        Self {
            provenance: MergeProvenance::Compound,
            label: Cow::Owned(format!("compound[{index}]")),
            declarations,
        }
    }

    /// Provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> MergeProvenance {
        self.provenance
    }

    /// Human-readable origin, for example `color=primary`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declarations contributed by the layer.
    #[must_use]
    pub const fn declarations(&self) -> &'a Declarations<V> {
        self.declarations
    }
}
