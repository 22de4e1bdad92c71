//! Unit tests for declaration blocks.

use super::{Declarations, Entry, ModifierBlock};
use crate::token::TokenValue;

#[test]
fn overwriting_keeps_first_position() {
    let block = Declarations::new()
        .set("color", "red")
        .set("padding", "1")
        .set("color", "blue");
    let keys: Vec<&str> = block.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["color", "padding"]);
    assert_eq!(
        block.get("color").and_then(Entry::as_value),
        Some(&TokenValue::from("blue"))
    );
}

#[test]
fn flatten_expands_modifiers_in_place() {
    let block = Declarations::new()
        .modifier(
            "hover",
            ModifierBlock::new()
                .set("background", "darkblue")
                .set("color", "white"),
        )
        .set("background", "blue")
        .modifier("hover:focus", ModifierBlock::new().set("outline", "none"));

    let flat: Vec<(Option<&str>, &str)> = block
        .flatten()
        .map(|(modifier, property, _)| (modifier, property))
        .collect();
    assert_eq!(
        flat,
        vec![
            (Some("hover"), "background"),
            (Some("hover"), "color"),
            (None, "background"),
            (Some("hover:focus"), "outline"),
        ]
    );
}

#[test]
fn map_values_preserves_structure() {
    let block = Declarations::new()
        .set("width", 4)
        .modifier("hover", ModifierBlock::new().set("width", 8));
    let mapped: Declarations<String> = block.map_values(TokenValue::to_css);
    let flat: Vec<(Option<&str>, &str, &String)> = mapped.flatten().collect();
    assert_eq!(flat.len(), 2);
    assert_eq!(flat.first().map(|entry| entry.2.as_str()), Some("4"));
    assert_eq!(flat.last().map(|entry| entry.2.as_str()), Some("8"));
}

#[test]
fn serialises_modifiers_as_nested_objects() {
    let block = Declarations::new()
        .set("background", "blue")
        .modifier("hover", ModifierBlock::new().set("background", "darkblue"));
    let json = serde_json::to_value(&block).expect("blocks serialise");
    assert_eq!(
        json,
        serde_json::json!({"background": "blue", "hover": {"background": "darkblue"}})
    );
}

#[test]
fn collects_from_pairs() {
    let block: Declarations<TokenValue> = [("a", TokenValue::from("1")), ("b", TokenValue::flag())]
        .into_iter()
        .collect();
    assert_eq!(block.len(), 2);
    assert!(!block.is_empty());
}
