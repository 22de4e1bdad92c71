//! Unit tests for recipe merging.

use rstest::{fixture, rstest};

use super::{
    CompoundVariant, DeclarationKey, MergeComposer, MergeProvenance, RecipeDefinition,
    RecipeDiagnostic, Variant, VariantSelection,
};
use crate::declarations::{Declarations, ModifierBlock};
use crate::token::TokenValue;

#[fixture]
fn sized_button() -> RecipeDefinition {
    RecipeDefinition::new()
        .base(
            Declarations::new()
                .set("borderWidth", "thin")
                .set("padding", "0"),
        )
        .variant(
            "color",
            Variant::new()
                .option("primary", Declarations::new().set("background", "primary"))
                .option("secondary", Declarations::new().set("background", "secondary"))
                .undefined("ghost"),
        )
        .variant(
            "size",
            Variant::new()
                .option("sm", Declarations::new().set("padding", "0.5"))
                .option("md", Declarations::new().set("padding", "1")),
        )
        .default_variant("color", "primary")
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("padding", "1"))
                .when("color", "primary")
                .when("size", "sm"),
        )
}

fn text(value: Option<&TokenValue>) -> Option<String> {
    value.map(TokenValue::to_css)
}

#[rstest]
fn variant_overrides_base(sized_button: RecipeDefinition) {
    let resolved = sized_button.resolve(&VariantSelection::new().with("size", "md"));
    assert_eq!(text(resolved.get("padding")), Some(String::from("1")));
    let entry = resolved
        .entry(&DeclarationKey::top_level("padding"))
        .expect("padding resolves");
    assert_eq!(entry.provenance(), MergeProvenance::Variant);
}

#[rstest]
fn compound_overrides_variant(sized_button: RecipeDefinition) {
    let resolved = sized_button.resolve(&VariantSelection::new().with("size", "sm"));
    assert_eq!(text(resolved.get("padding")), Some(String::from("1")));
    let entry = resolved
        .entry(&DeclarationKey::top_level("padding"))
        .expect("padding resolves");
    assert_eq!(entry.provenance(), MergeProvenance::Compound);
}

#[rstest]
fn compound_fails_when_default_does_not_match(sized_button: RecipeDefinition) {
    let selection = VariantSelection::new()
        .with("size", "sm")
        .with("color", "secondary");
    let resolved = sized_button.resolve(&selection);
    assert_eq!(text(resolved.get("padding")), Some(String::from("0.5")));
}

#[rstest]
fn overrides_keep_first_insertion_order(sized_button: RecipeDefinition) {
    let resolved = sized_button.resolve(&VariantSelection::new().with("size", "sm"));
    let keys: Vec<&str> = resolved.iter().map(|(key, _)| key.property()).collect();
    assert_eq!(keys, vec!["borderWidth", "padding", "background"]);
}

#[rstest]
fn undefined_option_is_a_noop(sized_button: RecipeDefinition) {
    let ghost = sized_button.resolve(&VariantSelection::new().with("color", "ghost"));
    let without_color = RecipeDefinition::new()
        .base(
            Declarations::new()
                .set("borderWidth", "thin")
                .set("padding", "0"),
        )
        .variant(
            "size",
            Variant::new()
                .option("sm", Declarations::new().set("padding", "0.5"))
                .option("md", Declarations::new().set("padding", "1")),
        )
        .resolve(&VariantSelection::new());
    assert_eq!(ghost, without_color);
}

#[rstest]
fn unknown_option_contributes_nothing(sized_button: RecipeDefinition) {
    let resolved = sized_button.resolve(&VariantSelection::new().with("color", "tertiary"));
    assert_eq!(resolved.get("background"), None);
    assert_eq!(resolved.len(), 2);
}

#[test]
fn modifier_paths_merge_independently() {
    let definition = RecipeDefinition::new()
        .base(
            Declarations::new()
                .modifier("hover", ModifierBlock::new().set("background", "darkblue"))
                .set("background", "blue"),
        )
        .variant(
            "tone",
            Variant::new().option("loud", Declarations::new().set("background", "red")),
        )
        .default_variant("tone", "loud");
    let resolved = definition.resolve(&VariantSelection::new());
    assert_eq!(text(resolved.get("background")), Some(String::from("red")));
    assert_eq!(
        text(resolved.get_scoped("hover", "background")),
        Some(String::from("darkblue"))
    );
}

#[test]
fn later_compounds_win_when_both_match() {
    let definition = RecipeDefinition::new()
        .variant(
            "size",
            Variant::new().option("sm", Declarations::new().set("gap", "1")),
        )
        .default_variant("size", "sm")
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("gap", "2")).when("size", "sm"),
        )
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("gap", "3")).when("size", "sm"),
        );
    let resolved = definition.resolve(&VariantSelection::new());
    assert_eq!(text(resolved.get("gap")), Some(String::from("3")));
}

#[test]
fn compound_on_undeclared_variant_never_matches() {
    let definition = RecipeDefinition::new()
        .base(Declarations::new().set("color", "black"))
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("color", "white")).when("tone", "dark"),
        );
    let resolved = definition.resolve(&VariantSelection::new());
    assert_eq!(text(resolved.get("color")), Some(String::from("black")));
}

#[test]
fn explicit_undefined_text_is_not_absence() {
    let definition = RecipeDefinition::new()
        .variant(
            "tone",
            Variant::new().option("undefined", Declarations::new().set("color", "grey")),
        )
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("opacity", "0.5"))
                .when("tone", "undefined"),
        );
    let absent = definition.resolve(&VariantSelection::new());
    assert!(absent.is_empty());

    let explicit = definition.resolve(&VariantSelection::new().with("tone", "undefined"));
    assert_eq!(text(explicit.get("color")), Some(String::from("grey")));
    assert_eq!(text(explicit.get("opacity")), Some(String::from("0.5")));
}

#[test]
fn flags_can_be_overwritten_by_values() {
    let definition = RecipeDefinition::new()
        .base(Declarations::new().set("truncate", true))
        .variant(
            "wrap",
            Variant::new().option("yes", Declarations::new().set("truncate", "none")),
        );
    let flagged = definition.resolve(&VariantSelection::new());
    assert!(flagged.get("truncate").is_some_and(TokenValue::is_flag));
    let valued = definition.resolve(&VariantSelection::new().with("wrap", "yes"));
    assert_eq!(text(valued.get("truncate")), Some(String::from("none")));
}

#[rstest]
fn resolution_is_idempotent(sized_button: RecipeDefinition) {
    let selection = VariantSelection::new().with("size", "sm");
    assert_eq!(sized_button.resolve(&selection), sized_button.resolve(&selection));
}

#[rstest]
fn composer_skips_unselected_variants(sized_button: RecipeDefinition) {
    let selection = VariantSelection::new();
    let labels: Vec<String> = MergeComposer::compose(&sized_button, &selection)
        .into_iter()
        .map(|layer| layer.label().to_owned())
        .collect();
    assert_eq!(labels, vec![String::from("base"), String::from("color=primary")]);
}

#[test]
fn to_declarations_regroups_modifiers() {
    let definition = RecipeDefinition::new().base(
        Declarations::new()
            .set("color", "black")
            .modifier("hover", ModifierBlock::new().set("color", "grey"))
            .set("padding", "1"),
    );
    let folded = definition.resolve(&VariantSelection::new()).to_declarations();
    let keys: Vec<&str> = folded.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["color", "hover", "padding"]);
}

#[rstest]
fn diagnostics_report_dangling_references(sized_button: RecipeDefinition) {
    let definition = sized_button
        .default_variant("shape", "round")
        .compound_variant(
            CompoundVariant::new(Declarations::new().set("gap", "1"))
                .when("size", "xl")
                .when("density", "compact"),
        );
    assert_eq!(
        definition.diagnostics(),
        vec![
            RecipeDiagnostic::UnknownDefaultVariant {
                variant: String::from("shape"),
            },
            RecipeDiagnostic::UnknownCompoundOption {
                index: 1,
                variant: String::from("size"),
                option: String::from("xl"),
            },
            RecipeDiagnostic::UnknownCompoundVariant {
                index: 1,
                variant: String::from("density"),
            },
        ]
    );
}
