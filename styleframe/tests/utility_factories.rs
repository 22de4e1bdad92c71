//! Utility and variable factories, including multiplier autogeneration.

use rstest::{fixture, rstest};
use styleframe::case::UtilityKeyTransform;
use styleframe::declarations::Declarations;
use styleframe::token::{TokenValue, reference};
use styleframe::utility::{MultiplierAutogenerate, UtilityFactory};
use styleframe::variable::VariableFactory;

#[fixture]
fn gap() -> UtilityFactory {
    UtilityFactory::spacing("gap", |ctx| Declarations::new().set("gap", ctx.value.clone()))
}

fn value_of(factory: &UtilityFactory, key: &str) -> Option<String> {
    factory.get(key).map(|utility| utility.value().to_css())
}

#[rstest]
fn multipliers_scale_the_spacing_variable(mut gap: UtilityFactory) {
    let registered = gap.autogenerate(["@2", "@0.5", "@-1"]);
    assert_eq!(registered, 3);
    assert_eq!(value_of(&gap, "2").as_deref(), Some("calc(var(--spacing) * 2)"));
    assert_eq!(value_of(&gap, "0.5").as_deref(), Some("calc(var(--spacing) * 0.5)"));
    assert_eq!(value_of(&gap, "-1").as_deref(), Some("calc(var(--spacing) * -1)"));
}

#[rstest]
fn non_numeric_inputs_use_the_key_transform(mut gap: UtilityFactory) {
    gap.autogenerate(["@spacing.lg", "@spacing", "[3px]"]);
    assert_eq!(value_of(&gap, "lg").as_deref(), Some("var(--spacing--lg)"));
    assert_eq!(value_of(&gap, "default").as_deref(), Some("var(--spacing)"));
    assert_eq!(value_of(&gap, "[3px]").as_deref(), Some("3px"));
}

#[rstest]
fn generated_utilities_carry_class_names_and_declarations(mut gap: UtilityFactory) {
    gap.autogenerate(["@1.5"]);
    let utility = gap.get("1.5").expect("generated utility");
    assert_eq!(utility.class_name(), "_gap:1.5");
    let declared = utility
        .declarations()
        .get("gap")
        .and_then(|entry| entry.as_value())
        .map(TokenValue::to_css);
    assert_eq!(declared.as_deref(), Some("calc(var(--spacing) * 1.5)"));
}

#[test]
fn multiplier_base_may_carry_a_fallback() {
    let mut inset = UtilityFactory::new("inset", |ctx| {
        Declarations::new().set("inset", ctx.value.clone())
    })
    .with_autogenerate(MultiplierAutogenerate::new(
        reference("size.unit").with_fallback("4px"),
    ));
    inset.autogenerate(["@3"]);
    assert_eq!(
        value_of(&inset, "3").as_deref(),
        Some("calc(var(--size--unit, 4px) * 3)")
    );
}

#[test]
fn explicit_registration_wins_over_autogeneration() {
    let mut width = UtilityFactory::new("width", |ctx| {
        Declarations::new().set("width", ctx.value.clone())
    })
    .with_autogenerate(UtilityKeyTransform::namespaced("size"));
    width.register([("full", "100%")]);
    assert_eq!(width.autogenerate(["@size.full", "@size.half"]), 1);
    assert_eq!(value_of(&width, "full").as_deref(), Some("100%"));
    assert_eq!(value_of(&width, "half").as_deref(), Some("var(--size--half)"));
}

#[test]
fn variable_factories_qualify_keys() {
    let mut spacing = VariableFactory::new("spacing");
    spacing.declare([("default", "1rem"), ("sm", "0.5rem"), ("sm", "9rem")]);
    let names: Vec<(String, String)> = spacing
        .variables()
        .map(|variable| (variable.css_name(""), variable.value().to_css()))
        .collect();
    assert_eq!(
        names,
        vec![
            (String::from("--spacing"), String::from("1rem")),
            (String::from("--spacing--sm"), String::from("0.5rem")),
        ]
    );
    assert_eq!(
        TokenValue::from(spacing.reference("sm")).to_css(),
        "var(--spacing--sm)"
    );
}
