//! Scenario state shared between behavioural steps.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use styleframe::declarations::Declarations;
use styleframe::recipe::{CompoundVariant, Recipe, RecipeDefinition, Variant};
use styleframe::utility::UtilityFactory;
use test_helpers::logging::init_tracing;

/// A recipe assembled step by step.
#[derive(Debug, Default)]
pub struct RecipeDraft {
    pub name: String,
    pub base: Declarations,
    pub options: Vec<(String, String, Option<Declarations>)>,
    pub defaults: Vec<(String, String)>,
    pub compounds: Vec<CompoundVariant>,
}

impl RecipeDraft {
    /// Declarations of `variant=option`, created on first use.
    pub fn option_mut(&mut self, variant: &str, option: &str) -> Option<&mut Declarations> {
        let matches = |entry: &(String, String, Option<Declarations>)| {
            entry.0 == variant && entry.1 == option
        };
        if !self.options.iter().any(matches) {
            self.options
                .push((variant.to_owned(), option.to_owned(), Some(Declarations::new())));
        }
        self.options
            .iter_mut()
            .find(|entry| matches(entry))
            .and_then(|entry| entry.2.as_mut())
    }

    /// Build the recipe, grouping options by variant in first-use order.
    pub fn build(&self) -> Recipe {
        let mut variants: Vec<(String, Variant)> = Vec::new();
        for (variant, option, block) in &self.options {
            let position = variants.iter().position(|(key, _)| key == variant);
            let index = match position {
                Some(index) => index,
                None => {
                    variants.push((variant.clone(), Variant::new()));
                    variants.len() - 1
                }
            };
            if let Some((_, axis)) = variants.get_mut(index) {
                axis.insert(option.as_str(), block.clone());
            }
        }
        let mut definition = RecipeDefinition::new().base(self.base.clone());
        for (key, variant) in variants {
            definition = definition.variant(key, variant);
        }
        for (variant, option) in &self.defaults {
            definition = definition.default_variant(variant.as_str(), option.as_str());
        }
        for compound in &self.compounds {
            definition = definition.compound_variant(compound.clone());
        }
        Recipe::new(self.name.as_str(), definition)
    }
}

/// State for recipe resolution scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct RecipeContext {
    pub draft: Slot<RecipeDraft>,
    pub class_name: Slot<String>,
}

/// State for utility autogeneration scenarios.
#[derive(Debug, Default, ScenarioState)]
pub struct UtilityContext {
    pub factory: Slot<UtilityFactory>,
    pub registered: Slot<usize>,
}

/// Fresh recipe scenario state.
#[fixture]
pub fn recipe_context() -> RecipeContext {
    init_tracing();
    RecipeContext::default()
}

/// Fresh utility scenario state.
#[fixture]
pub fn utility_context() -> UtilityContext {
    init_tracing();
    UtilityContext::default()
}
