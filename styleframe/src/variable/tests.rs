//! Unit tests for variables.

use rstest::rstest;

use super::{Variable, VariableFactory};
use crate::token::TokenValue;

#[rstest]
#[case("color.primary", "", "--color--primary")]
#[case("color.primary", "sf-", "--sf-color--primary")]
#[case("--raw", "sf-", "--raw")]
fn variables_map_onto_custom_properties(
    #[case] name: &str,
    #[case] prefix: &str,
    #[case] expected: &str,
) {
    assert_eq!(Variable::new(name, "x").css_name(prefix), expected);
}

#[test]
fn default_key_declares_the_namespace() {
    let mut radius = VariableFactory::new("borderRadius");
    assert_eq!(radius.declare([("default", "4px"), ("lg", "8px")]), 2);
    assert_eq!(
        radius.get("default").map(Variable::name),
        Some("borderRadius")
    );
    assert_eq!(radius.reference("lg").name(), "borderRadius.lg");
}

#[test]
fn redeclaring_keeps_the_first_value() {
    let mut spacing = VariableFactory::new("spacing");
    spacing.declare([("sm", "0.5rem")]);
    assert_eq!(spacing.declare([("sm", "1rem"), ("md", "1rem")]), 1);
    assert_eq!(
        spacing.get("sm").map(Variable::value),
        Some(&TokenValue::from("0.5rem"))
    );
    let variables: Vec<Variable> = spacing.into_variables().collect();
    assert_eq!(variables.len(), 2);
}

#[test]
fn variables_can_reference_each_other() {
    let mut color = VariableFactory::new("color");
    color.declare([("primary", TokenValue::from("#0066ff"))]);
    let link = color.reference("primary");
    color.declare([("link", link)]);
    assert_eq!(
        color.get("link").map(|variable| variable.value().to_css()),
        Some(String::from("var(--color--primary)"))
    );
}
