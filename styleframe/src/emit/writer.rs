//! Indentation-aware CSS text writer.

use crate::case::kebab_case;
use crate::config::StyleframeConfig;
use crate::declarations::{Declarations, Entry};
use crate::token::TokenValue;
use crate::variable::Variable;

use super::{AtRule, StyleRule, inline_at_rule, modifier_selector};

/// Accumulates rendered CSS.
///
/// Pretty output indents nested blocks by [`StyleframeConfig::indent`]
/// spaces and separates top-level blocks with a blank line. Minified output
/// drops all optional whitespace.
///
/// ```rust
/// use styleframe::config::StyleframeConfig;
/// use styleframe::declarations::{Declarations, ModifierBlock};
/// use styleframe::emit::CssWriter;
///
/// let button = Declarations::new()
///     .set("backgroundColor", "blue")
///     .modifier("hover", ModifierBlock::new().set("opacity", 0.9));
///
/// let mut writer = CssWriter::new(&StyleframeConfig::default());
/// writer.rule(".button", &button);
/// assert_eq!(
///     writer.finish(),
///     ".button {\n  background-color: blue;\n  &:hover {\n    opacity: 0.9;\n  }\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct CssWriter {
    out: String,
    indent: usize,
    minify: bool,
    prefix: String,
    depth: usize,
    after_block: bool,
}

impl CssWriter {
    /// Writer honouring the formatting settings of `config`.
    #[must_use]
    pub fn new(config: &StyleframeConfig) -> Self {
        Self {
            out: String::new(),
            indent: config.indent,
            minify: config.minify,
            prefix: config.variable_prefix.clone(),
            depth: 0,
            after_block: false,
        }
    }

    /// Write a style rule. Rules without declarations are skipped.
    pub fn rule(&mut self, selector: &str, declarations: &Declarations) {
        if declarations.is_empty() {
            return;
        }
        self.open(selector);
        for (key, entry) in declarations.iter() {
            match entry {
                Entry::Value(value) => self.declaration(&kebab_case(key), value),
                Entry::Modifier(block) if block.is_empty() => {}
                Entry::Modifier(block) => {
                    self.open(&format!("&{}", modifier_selector(key)));
                    for (property, value) in block.iter() {
                        self.declaration(&kebab_case(property), value);
                    }
                    self.close();
                }
            }
        }
        self.close();
    }

    /// Write a [`StyleRule`].
    pub fn style_rule(&mut self, rule: &StyleRule) {
        self.rule(rule.selector(), rule.declarations());
    }

    /// Write custom property declarations under `selector`.
    pub fn variables<'v, I>(&mut self, selector: &str, variables: I)
    where
        I: IntoIterator<Item = &'v Variable>,
    {
        let mut variables = variables.into_iter().peekable();
        if variables.peek().is_none() {
            return;
        }
        self.open(selector);
        for variable in variables {
            let name = variable.css_name(&self.prefix);
            self.declaration(&name, variable.value());
        }
        self.close();
    }

    /// Write an at-rule. Block at-rules wrap their nested style rules.
    pub fn at_rule(&mut self, rule: &AtRule) {
        match rule {
            AtRule::Inline { keyword, params } => {
                self.separate(false);
                self.pad();
                self.out.push_str(&inline_at_rule(keyword, params));
                self.end_line();
                self.after_block = false;
            }
            AtRule::Block {
                keyword,
                params,
                rules,
            } => {
                let head = if params.is_empty() {
                    format!("@{keyword}")
                } else {
                    format!("@{keyword} {params}")
                };
                self.open(&head);
                for nested in rules {
                    self.style_rule(nested);
                }
                self.close();
            }
        }
    }

    /// The rendered stylesheet.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    fn open(&mut self, head: &str) {
        self.separate(true);
        self.pad();
        self.out.push_str(head);
        self.out.push_str(if self.minify { "{" } else { " {" });
        self.end_line();
        self.depth = self.depth.saturating_add(1);
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.pad();
        self.out.push('}');
        self.end_line();
        if self.depth == 0 {
            self.after_block = true;
        }
    }

    fn declaration(&mut self, property: &str, value: &TokenValue) {
        self.pad();
        self.out.push_str(property);
        self.out.push_str(if self.minify { ":" } else { ": " });
        self.out.push_str(&value.to_css_with(&self.prefix));
        self.out.push(';');
        self.end_line();
    }

    /// Blank line between top-level blocks in pretty output.
    fn separate(&mut self, block: bool) {
        if self.minify || self.depth > 0 || self.out.is_empty() {
            return;
        }
        if block || self.after_block {
            self.out.push('\n');
        }
    }

    fn pad(&mut self) {
        if !self.minify {
            let width = self.depth.saturating_mul(self.indent);
            self.out.extend(std::iter::repeat_n(' ', width));
        }
    }

    fn end_line(&mut self) {
        if !self.minify {
            self.out.push('\n');
        }
    }
}
