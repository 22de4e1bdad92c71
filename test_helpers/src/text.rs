//! Shared text normalisation helpers for behavioural test suites.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    if let Some(stripped) = trimmed.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        return stripped;
    }
    if let Some(stripped) = trimmed
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
    {
        return stripped;
    }
    trimmed
}

/// Normalises a scalar placeholder by trimming and unquoting one outer layer.
#[must_use]
pub fn normalize_scalar(value: &str) -> String {
    unquote(value).trim().to_owned()
}

/// Splits a class string into its whitespace-separated tokens.
#[must_use]
pub fn class_tokens(classes: &str) -> Vec<&str> {
    classes.split_whitespace().collect()
}

/// Parses `key=value` pairs separated by commas, for example
/// `color=primary, size=sm`. Entries without `=` are skipped.
#[must_use]
pub fn key_value_pairs(text: &str) -> Vec<(String, String)> {
    text.split(',')
        .filter_map(|pair| pair.split_once('='))
        .map(|(key, value)| (normalize_scalar(key), normalize_scalar(value)))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
