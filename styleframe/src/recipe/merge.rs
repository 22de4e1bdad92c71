//! Declaration merge trait and the author-time accumulator.

use tracing::trace;

use super::{DeclarationKey, MergeLayer, ResolvedDeclarations};

/// Folds [`MergeLayer`]s into an output.
///
/// Implementations receive layers in precedence order and must let later
/// layers override earlier ones per declaration key. Merging is total: there
/// is no failure path.
///
/// # Example
///
/// ```rust
/// use styleframe::declarations::Declarations;
/// use styleframe::recipe::{DeclarationMerge, MergeLayer, ResolvedMerge};
///
/// let base = Declarations::new().set("color", "red").set("padding", "1");
/// let variant = Declarations::new().set("color", "blue");
///
/// let mut merge = ResolvedMerge::default();
/// merge.merge_layer(MergeLayer::base(&base));
/// merge.merge_layer(MergeLayer::variant("tone", "cool", &variant));
/// let resolved = merge.finish();
///
/// let keys: Vec<_> = resolved.iter().map(|(key, _)| key.property()).collect();
/// assert_eq!(keys, vec!["color", "padding"]);
/// assert_eq!(resolved.get("color").map(|value| value.to_css()), Some(String::from("blue")));
/// ```
pub trait DeclarationMerge<V> {
    /// Output produced once every layer is merged.
    type Output;

    /// Merge an additional layer into the accumulated state.
    fn merge_layer(&mut self, layer: MergeLayer<'_, V>);

    /// Finalise the merge.
    fn finish(self) -> Self::Output;
}

/// Accumulator producing [`ResolvedDeclarations`].
#[derive(Debug)]
pub struct ResolvedMerge<V> {
    resolved: ResolvedDeclarations<V>,
}

impl<V> Default for ResolvedMerge<V> {
    fn default() -> Self {
        Self {
            resolved: ResolvedDeclarations::default(),
        }
    }
}

impl<V: Clone> DeclarationMerge<V> for ResolvedMerge<V> {
    type Output = ResolvedDeclarations<V>;

    fn merge_layer(&mut self, layer: MergeLayer<'_, V>) {
        let provenance = layer.provenance();
        for (modifier, property, value) in layer.declarations().flatten() {
            let key = match modifier {
                Some(modifier) => DeclarationKey::scoped(modifier, property),
                None => DeclarationKey::top_level(property),
            };
            trace!(layer = layer.label(), %key, "merging declaration");
            self.resolved.write(key, value.clone(), provenance);
        }
    }

    fn finish(self) -> Self::Output {
        self.resolved
    }
}

/// Feed `layers` into `merge` in order and finish it.
pub fn merge_layers<'a, V, I, M>(layers: I, mut merge: M) -> M::Output
where
    V: 'a,
    I: IntoIterator<Item = MergeLayer<'a, V>>,
    M: DeclarationMerge<V>,
{
    for layer in layers {
        merge.merge_layer(layer);
    }
    merge.finish()
}
