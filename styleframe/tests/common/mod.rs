//! Shared recipe fixtures for integration tests.

use rstest::fixture;
use styleframe::declarations::Declarations;
use styleframe::recipe::{CompoundVariant, Recipe, RecipeDefinition, Variant};

/// A `button` recipe with a thin border, two colours defaulting to
/// `primary`, two sizes, and a compound padding for small primary buttons.
#[fixture]
pub fn button() -> Recipe {
    Recipe::new(
        "button",
        RecipeDefinition::new()
            .base(Declarations::new().set("borderWidth", "thin"))
            .variant(
                "color",
                Variant::new()
                    .option("primary", Declarations::new().set("background", "primary"))
                    .option("secondary", Declarations::new().set("background", "secondary")),
            )
            .variant(
                "size",
                Variant::new()
                    .option("sm", Declarations::new().set("padding", "0.5"))
                    .option("md", Declarations::new().set("padding", "0.75")),
            )
            .default_variant("color", "primary")
            .compound_variant(
                CompoundVariant::new(Declarations::new().set("padding", "1"))
                    .when("color", "primary")
                    .when("size", "sm"),
            ),
    )
}
