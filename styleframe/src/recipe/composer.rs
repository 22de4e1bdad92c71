//! Layer composition for recipe merging.

use tracing::debug;

use super::{MergeLayer, RecipeDefinition, VariantSelection};

/// Builder that accumulates [`MergeLayer`]s in precedence order.
///
/// [`MergeComposer::compose`] walks a recipe definition the way the merge
/// algorithm requires: base first, then each variant in declaration order,
/// then each matching compound variant in array order.
///
/// ```rust
/// use styleframe::declarations::Declarations;
/// use styleframe::recipe::{
///     CompoundVariant, MergeComposer, MergeProvenance, RecipeDefinition, Variant,
///     VariantSelection,
/// };
///
/// let definition = RecipeDefinition::new()
///     .base(Declarations::new().set("display", "flex"))
///     .variant("size", Variant::new().option("sm", Declarations::new().set("padding", "1")))
///     .compound_variant(
///         CompoundVariant::new(Declarations::new().set("padding", "2")).when("size", "sm"),
///     );
///
/// let selection = VariantSelection::new().with("size", "sm");
/// let provenances: Vec<_> = MergeComposer::compose(&definition, &selection)
///     .into_iter()
///     .map(|layer| layer.provenance())
///     .collect();
/// assert_eq!(
///     provenances,
///     vec![MergeProvenance::Base, MergeProvenance::Variant, MergeProvenance::Compound]
/// );
/// ```
#[derive(Debug)]
pub struct MergeComposer<'a, V> {
    layers: Vec<MergeLayer<'a, V>>,
}

impl<V> Default for MergeComposer<'_, V> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<'a, V> MergeComposer<'a, V> {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Compose the layers contributed by `definition` under `selection`.
    ///
    /// Variants without an explicit or default selection, unknown options,
    /// and options declared empty contribute no layer. A compound variant
    /// contributes a layer only when every condition equals the resolved
    /// selection.
    #[must_use]
    pub fn compose(definition: &'a RecipeDefinition<V>, selection: &'a VariantSelection) -> Self {
        let mut composer = Self::new();
        if let Some(base) = definition.base_block() {
            composer.push_layer(MergeLayer::base(base));
        }
        for (variant_key, variant) in definition.variants() {
            let Some(option) = definition.selected_option(selection, variant_key) else {
                continue;
            };
            if let Some(declarations) = variant.declarations(option) {
                composer.push_layer(MergeLayer::variant(variant_key, option, declarations));
            }
        }
        for (index, compound) in definition.compound_variants().iter().enumerate() {
            if compound.matches(|variant| definition.selected_option(selection, variant)) {
                composer.push_layer(MergeLayer::compound(index, compound.css()));
            } else {
                debug!(index, "compound variant did not match the resolved selection");
            }
        }
        debug!(layers = composer.layers.len(), "composed recipe layers");
        composer
    }

    /// Append a layer.
    pub fn push_layer(&mut self, layer: MergeLayer<'a, V>) {
        self.layers.push(layer);
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<MergeLayer<'a, V>> {
        self.layers
    }
}

impl<'a, V> IntoIterator for MergeComposer<'a, V> {
    type Item = MergeLayer<'a, V>;
    type IntoIter = std::vec::IntoIter<MergeLayer<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}
