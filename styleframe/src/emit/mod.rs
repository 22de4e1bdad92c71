//! CSS text emission.
//!
//! [`inline_at_rule`] is the bit-exact contract for single-line at-rules such
//! as `@import` and `@charset`. [`CssWriter`] renders style rules, custom
//! property blocks, and block at-rules using the formatting settings of
//! [`StyleframeConfig`](crate::config::StyleframeConfig).

mod selector;
mod writer;

use crate::declarations::Declarations;

pub use selector::{PSEUDO_ELEMENTS, class_selector, escape_class, modifier_selector};
pub use writer::CssWriter;

/// Render `@<keyword> <params>;` exactly, with no whitespace normalisation.
///
/// ```rust
/// use styleframe::emit::inline_at_rule;
///
/// assert_eq!(
///     inline_at_rule("import", "url('a.css')  screen"),
///     "@import url('a.css')  screen;"
/// );
/// ```
#[must_use]
pub fn inline_at_rule(keyword: &str, params: &str) -> String {
    format!("@{keyword} {params};")
}

/// A selector paired with its declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    selector: String,
    declarations: Declarations,
}

impl StyleRule {
    /// Rule applying `declarations` to `selector`.
    #[must_use]
    pub fn new(selector: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    /// Selector text.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Declarations applied by the rule.
    #[must_use]
    pub const fn declarations(&self) -> &Declarations {
        &self.declarations
    }
}

/// An `@`-rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum AtRule {
    /// Single statement such as `@import url(a.css);`.
    Inline {
        /// Keyword without the leading `@`.
        keyword: String,
        /// Verbatim parameters.
        params: String,
    },
    /// Block such as `@media (min-width: 40rem) { … }`.
    Block {
        /// Keyword without the leading `@`.
        keyword: String,
        /// Verbatim prelude; may be empty.
        params: String,
        /// Nested style rules.
        rules: Vec<StyleRule>,
    },
}

impl AtRule {
    /// An inline at-rule.
    #[must_use]
    pub fn inline(keyword: impl Into<String>, params: impl Into<String>) -> Self {
        Self::Inline {
            keyword: keyword.into(),
            params: params.into(),
        }
    }

    /// An empty block at-rule; add nested rules with [`AtRule::rule`].
    #[must_use]
    pub fn block(keyword: impl Into<String>, params: impl Into<String>) -> Self {
        Self::Block {
            keyword: keyword.into(),
            params: params.into(),
            rules: Vec::new(),
        }
    }

    /// Nest a style rule inside a block at-rule. Inline at-rules are
    /// returned unchanged.
    #[must_use]
    pub fn rule(mut self, selector: impl Into<String>, declarations: Declarations) -> Self {
        if let Self::Block { rules, .. } = &mut self {
            rules.push(StyleRule::new(selector, declarations));
        }
        self
    }

    /// Returns `true` for [`AtRule::Inline`].
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    /// Keyword without the leading `@`.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Inline { keyword, .. } | Self::Block { keyword, .. } => keyword,
        }
    }
}
