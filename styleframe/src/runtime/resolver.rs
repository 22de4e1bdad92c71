//! Folding recipe layers into class-name strings.

use tracing::trace;

use super::{RuntimeRecipe, UtilityValue};
use crate::recipe::{
    DeclarationKey, DeclarationMerge, MergeComposer, MergeLayer, Recipe, ResolvedMerge,
    VariantSelection, merge_layers,
};

/// Accumulator producing the class-name string for one recipe call.
///
/// Layers are merged exactly as for author-time resolution; only the final
/// rendering differs.
#[derive(Debug)]
pub struct ClassNameMerge {
    name: String,
    resolved: ResolvedMerge<UtilityValue>,
}

impl ClassNameMerge {
    /// Start a merge whose output leads with `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolved: ResolvedMerge::default(),
        }
    }
}

impl DeclarationMerge<UtilityValue> for ClassNameMerge {
    type Output = String;

    fn merge_layer(&mut self, layer: MergeLayer<'_, UtilityValue>) {
        self.resolved.merge_layer(layer);
    }

    fn finish(self) -> Self::Output {
        let resolved = self.resolved.finish();
        let mut out = self.name;
        for (key, value) in resolved.iter() {
            out.push(' ');
            out.push_str(&utility_class(key, value));
        }
        trace!(class_name = %out, "resolved runtime class name");
        out
    }
}

/// The utility class name for one resolved declaration.
///
/// ```rust
/// use styleframe::recipe::DeclarationKey;
/// use styleframe::runtime::{UtilityValue, utility_class};
///
/// let key = DeclarationKey::scoped("hover", "backgroundColor");
/// assert_eq!(
///     utility_class(&key, &UtilityValue::from("darkblue")),
///     "_hover:background-color:darkblue"
/// );
/// assert_eq!(
///     utility_class(&DeclarationKey::top_level("truncate"), &UtilityValue::Flag),
///     "_truncate"
/// );
/// ```
#[must_use]
pub fn utility_class(key: &DeclarationKey, value: &UtilityValue) -> String {
    let mut class = String::from("_");
    if let Some(modifier) = key.modifier() {
        class.push_str(modifier);
        class.push(':');
    }
    class.push_str(&key.css_property());
    if let Some(value) = value.key() {
        class.push(':');
        class.push_str(value);
    }
    class
}

/// A recipe name paired with its runtime descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeResolver {
    name: String,
    descriptor: RuntimeRecipe,
}

impl RecipeResolver {
    /// Pair `name` with `descriptor`.
    #[must_use]
    pub fn new(name: impl Into<String>, descriptor: RuntimeRecipe) -> Self {
        Self {
            name: name.into(),
            descriptor,
        }
    }

    /// Recipe name, always the first class.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The runtime descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &RuntimeRecipe {
        &self.descriptor
    }

    /// Space-joined class names for `props`.
    #[must_use]
    pub fn class_name(&self, props: &VariantSelection) -> String {
        merge_layers(
            MergeComposer::compose(&self.descriptor, props),
            ClassNameMerge::new(self.name.as_str()),
        )
    }
}

/// Build a class-name function for the recipe `name`.
///
/// ```rust
/// use styleframe::declarations::Declarations;
/// use styleframe::recipe::{RecipeDefinition, Variant, VariantSelection};
/// use styleframe::runtime::{RuntimeRecipe, UtilityValue, resolve};
///
/// let descriptor: RuntimeRecipe = RecipeDefinition::default()
///     .base(Declarations::default().set("borderWidth", "thin"))
///     .variant(
///         "color",
///         Variant::default()
///             .option(
///                 "primary",
///                 Declarations::<UtilityValue>::default().set("background", "primary"),
///             )
///             .option("secondary", Declarations::default().set("background", "secondary")),
///     )
///     .default_variant("color", "primary");
///
/// let button = resolve("button", descriptor);
/// assert_eq!(button(&VariantSelection::new()), "button _border-width:thin _background:primary");
/// ```
pub fn resolve(
    name: &str,
    descriptor: RuntimeRecipe,
) -> impl Fn(&VariantSelection) -> String + Send + Sync + use<> {
    let resolver = RecipeResolver::new(name, descriptor);
    move |props: &VariantSelection| resolver.class_name(props)
}

impl Recipe {
    /// Derive the runtime descriptor for this recipe.
    ///
    /// Every value is replaced by the utility key it publishes under; see
    /// [`UtilityValue`]'s conversion from token values.
    #[must_use]
    pub fn to_runtime(&self) -> RuntimeRecipe {
        self.definition().map_values(|value| UtilityValue::from(value))
    }

    /// A resolver for this recipe's runtime descriptor.
    #[must_use]
    pub fn resolver(&self) -> RecipeResolver {
        RecipeResolver::new(self.name(), self.to_runtime())
    }
}
