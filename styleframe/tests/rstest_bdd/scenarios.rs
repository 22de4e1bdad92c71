//! Binds the behavioural feature files to the step registry.

use rstest_bdd_macros::scenarios;

use super::fixtures::{RecipeContext, UtilityContext, recipe_context, utility_context};

scenarios!(
    "tests/features/recipe_resolution.feature",
    fixtures = [recipe_context: RecipeContext]
);
scenarios!(
    "tests/features/utility_autogenerate.feature",
    fixtures = [utility_context: UtilityContext]
);
