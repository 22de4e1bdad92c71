//! Selector text for generated classes and modifier paths.

/// Modifiers rendered as pseudo-elements (`::`) rather than pseudo-classes.
pub const PSEUDO_ELEMENTS: &[&str] = &[
    "after",
    "backdrop",
    "before",
    "file-selector-button",
    "first-letter",
    "first-line",
    "marker",
    "placeholder",
    "selection",
];

/// Escape a class name for use in a selector.
///
/// ```rust
/// use styleframe::emit::escape_class;
///
/// assert_eq!(escape_class("_padding:[1.5]"), r"_padding\:\[1\.5\]");
/// ```
#[must_use]
pub fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    for (index, ch) in class.chars().enumerate() {
        match ch {
            '0'..='9' if index == 0 => {
                escaped.push_str("\\3");
                escaped.push(ch);
                escaped.push(' ');
            }
            '\\' | ':' | '/' | '[' | ']' | '(' | ')' | '&' | '>' | '+' | ',' | '%' | '='
            | '!' | '*' | '@' | '#' | '\'' | '"' | '.' | ' ' | '~' | '$' | '^' | '|'
            | '{' | '}' | ';' | '<' | '?' | '`' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `.`-prefixed, escaped class selector.
#[must_use]
pub fn class_selector(class: &str) -> String {
    format!(".{}", escape_class(class))
}

/// Pseudo-selector suffix for a modifier path such as `hover:focus`.
///
/// ```rust
/// use styleframe::emit::modifier_selector;
///
/// assert_eq!(modifier_selector("hover:focus"), ":hover:focus");
/// assert_eq!(modifier_selector("hover:before"), ":hover::before");
/// ```
#[must_use]
pub fn modifier_selector(path: &str) -> String {
    let mut selector = String::with_capacity(path.len() + 2);
    for segment in path.split(':').filter(|segment| !segment.is_empty()) {
        if PSEUDO_ELEMENTS.contains(&segment) {
            selector.push_str("::");
        } else {
            selector.push(':');
        }
        selector.push_str(segment);
    }
    selector
}
