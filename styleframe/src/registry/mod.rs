//! The stylesheet registry.
//!
//! [`Styleframe`] owns everything that ends up in the generated stylesheet:
//! variables, plain selectors, utility factories, recipes, and at-rules.
//! [`Styleframe::render`] emits them in a fixed order:
//!
//! 1. inline at-rules such as `@import` and `@charset`;
//! 2. variables under the configured root selector;
//! 3. plain selectors;
//! 4. utility classes, including every class a registered recipe can
//!    produce at run time;
//! 5. recipe base classes;
//! 6. block at-rules.

use indexmap::map::Entry as MapEntry;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::config::StyleframeConfig;
use crate::declarations::Declarations;
use crate::emit::{AtRule, CssWriter, StyleRule, class_selector, modifier_selector};
use crate::recipe::{CompoundVariant, DeclarationKey, Recipe, RecipeDefinition};
use crate::runtime::{RecipeResolver, UtilityValue, utility_class};
use crate::token::{Reference, TokenValue};
use crate::utility::UtilityFactory;
use crate::variable::{Variable, VariableFactory};

/// Root registry of a stylesheet.
///
/// ```rust
/// use styleframe::Styleframe;
/// use styleframe::declarations::Declarations;
///
/// let mut sf = Styleframe::default();
/// let primary = sf.variable("color.primary", "#06f");
/// sf.selector("a", Declarations::new().set("color", primary));
///
/// assert_eq!(
///     sf.render(),
///     ":root {\n  --color--primary: #06f;\n}\n\na {\n  color: var(--color--primary);\n}\n"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Styleframe {
    config: StyleframeConfig,
    variables: IndexMap<String, Variable>,
    selectors: Vec<StyleRule>,
    utilities: IndexMap<String, UtilityFactory>,
    recipes: IndexMap<String, Recipe>,
    at_rules: Vec<AtRule>,
}

impl Styleframe {
    /// Empty registry rendering with `config`.
    #[must_use]
    pub fn new(config: StyleframeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Rendering configuration.
    #[must_use]
    pub const fn config(&self) -> &StyleframeConfig {
        &self.config
    }

    /// Declare `name`, returning a reference to it.
    ///
    /// Redeclaring a variable replaces its value in place, so the original
    /// declaration order is kept.
    pub fn variable(&mut self, name: impl Into<String>, value: impl Into<TokenValue>) -> Reference {
        let name = name.into();
        let value = value.into();
        let reference = Reference::new(name.as_str());
        match self.variables.entry(name) {
            MapEntry::Occupied(mut occupied) => {
                debug!(variable = occupied.key().as_str(), "redeclared variable");
                occupied.get_mut().set_value(value);
            }
            MapEntry::Vacant(vacant) => {
                let variable = Variable::new(vacant.key().as_str(), value);
                vacant.insert(variable);
            }
        }
        reference
    }

    /// Declare every variable of `factory`.
    pub fn variables_from(&mut self, factory: VariableFactory) {
        for variable in factory.into_variables() {
            let value = variable.value().clone();
            self.variable(variable.name(), value);
        }
    }

    /// Look up a declared variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Declared variables in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Add a plain style rule.
    pub fn selector(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.selectors.push(StyleRule::new(selector, declarations));
    }

    /// Register a utility factory and return it for further registration.
    ///
    /// Factories are keyed by name; registering a second factory under an
    /// existing name keeps the first one.
    pub fn utility(&mut self, factory: UtilityFactory) -> &mut UtilityFactory {
        match self.utilities.entry(factory.name().to_owned()) {
            MapEntry::Occupied(occupied) => {
                warn!(utility = occupied.key().as_str(), "ignored duplicate utility factory");
                occupied.into_mut()
            }
            MapEntry::Vacant(vacant) => vacant.insert(factory),
        }
    }

    /// Look up a utility factory by name.
    #[must_use]
    pub fn get_utility(&self, name: &str) -> Option<&UtilityFactory> {
        self.utilities.get(name)
    }

    /// Register a recipe and return its runtime resolver.
    ///
    /// Recipe diagnostics are logged at `warn` level. A second recipe with
    /// an existing name is ignored.
    pub fn recipe(&mut self, recipe: Recipe) -> RecipeResolver {
        match self.recipes.entry(recipe.name().to_owned()) {
            MapEntry::Occupied(occupied) => {
                warn!(recipe = occupied.key().as_str(), "ignored duplicate recipe");
                occupied.get().resolver()
            }
            MapEntry::Vacant(vacant) => {
                for diagnostic in recipe.definition().diagnostics() {
                    warn!(recipe = recipe.name(), %diagnostic, "recipe diagnostic");
                }
                vacant.insert(recipe).resolver()
            }
        }
    }

    /// Look up a registered recipe.
    #[must_use]
    pub fn get_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Registered recipes in registration order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Add `@import <params>;`.
    pub fn import(&mut self, params: impl Into<String>) {
        self.at_rule(AtRule::inline("import", params));
    }

    /// Add `@charset <params>;`.
    pub fn charset(&mut self, params: impl Into<String>) {
        self.at_rule(AtRule::inline("charset", params));
    }

    /// Add an at-rule. Inline at-rules render first and block at-rules
    /// last, each group in insertion order.
    pub fn at_rule(&mut self, rule: AtRule) {
        self.at_rules.push(rule);
    }

    /// Every utility class rule, in emission order.
    ///
    /// Registered utilities come first. Recipe-derived classes follow for
    /// every declaration in a recipe's base, options, and compound
    /// variants. A class name is emitted once; earlier rules win.
    #[must_use]
    pub fn utility_rules(&self) -> Vec<StyleRule> {
        let mut seen = IndexSet::new();
        let mut rules = Vec::new();
        for utility in self.utilities.values().flat_map(|factory| factory.utilities()) {
            let class = utility.class_name();
            let selector = utility_selector(&class, utility.modifier());
            if seen.insert(class) {
                rules.push(StyleRule::new(selector, utility.declarations().clone()));
            }
        }
        for recipe in self.recipes.values() {
            for block in recipe_blocks(recipe.definition()) {
                for (modifier, property, value) in block.flatten() {
                    let key = modifier.map_or_else(
                        || DeclarationKey::top_level(property),
                        |path| DeclarationKey::scoped(path, property),
                    );
                    let class = utility_class(&key, &UtilityValue::from(value));
                    let selector = utility_selector(&class, modifier);
                    if seen.insert(class) {
                        let declarations = Declarations::new().set(property, value.clone());
                        rules.push(StyleRule::new(selector, declarations));
                    }
                }
            }
        }
        rules
    }

    /// Render the whole stylesheet.
    #[must_use]
    pub fn render(&self) -> String {
        let mut writer = CssWriter::new(&self.config);
        for rule in self.at_rules.iter().filter(|rule| rule.is_inline()) {
            writer.at_rule(rule);
        }
        writer.variables(&self.config.root_selector, self.variables.values());
        for rule in &self.selectors {
            writer.style_rule(rule);
        }
        let utilities = self.utility_rules();
        for rule in &utilities {
            writer.style_rule(rule);
        }
        for recipe in self.recipes.values() {
            if let Some(base) = recipe.definition().base_block() {
                writer.rule(&class_selector(recipe.name()), base);
            }
        }
        for rule in self.at_rules.iter().filter(|rule| !rule.is_inline()) {
            writer.at_rule(rule);
        }
        let css = writer.finish();
        debug!(
            variables = self.variables.len(),
            utilities = utilities.len(),
            recipes = self.recipes.len(),
            bytes = css.len(),
            "rendered stylesheet"
        );
        css
    }
}

fn utility_selector(class: &str, modifier: Option<&str>) -> String {
    let mut selector = class_selector(class);
    if let Some(modifier) = modifier {
        selector.push_str(&modifier_selector(modifier));
    }
    selector
}

fn recipe_blocks(definition: &RecipeDefinition) -> impl Iterator<Item = &Declarations> {
    let options = definition
        .variants()
        .flat_map(|(_, variant)| variant.options().filter_map(|(_, block)| block));
    definition
        .base_block()
        .into_iter()
        .chain(options)
        .chain(definition.compound_variants().iter().map(CompoundVariant::css))
}
