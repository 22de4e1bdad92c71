//! Step definitions for recipe and utility scenarios.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use styleframe::declarations::{Declarations, ModifierBlock};
use styleframe::recipe::{CompoundVariant, VariantSelection};
use styleframe::utility::UtilityFactory;
use test_helpers::text::{class_tokens, key_value_pairs, normalize_scalar};

use super::fixtures::{RecipeContext, RecipeDraft, UtilityContext};

fn with_draft<F>(recipe_context: &RecipeContext, f: F) -> Result<()>
where
    F: FnOnce(&mut RecipeDraft) -> Result<()>,
{
    let mut draft = recipe_context.draft.get_or_insert_with(RecipeDraft::default);
    f(&mut draft)
}

fn resolve(recipe_context: &RecipeContext, props: VariantSelection) -> Result<()> {
    let recipe = recipe_context
        .draft
        .with_ref(RecipeDraft::build)
        .ok_or_else(|| anyhow!("no recipe has been described"))?;
    recipe_context
        .class_name
        .set(recipe.resolver().class_name(&props));
    Ok(())
}

fn class_name(recipe_context: &RecipeContext) -> Result<String> {
    recipe_context
        .class_name
        .get()
        .ok_or_else(|| anyhow!("the recipe has not been resolved"))
}

#[given("a recipe named {name}")]
fn recipe_named(recipe_context: &RecipeContext, name: String) -> Result<()> {
    ensure!(recipe_context.draft.is_empty(), "recipe already described");
    recipe_context.draft.set(RecipeDraft {
        name: normalize_scalar(&name),
        ..RecipeDraft::default()
    });
    Ok(())
}

#[given("the base sets {property} to {value}")]
fn base_sets(recipe_context: &RecipeContext, property: String, value: String) -> Result<()> {
    with_draft(recipe_context, |draft| {
        draft
            .base
            .insert(normalize_scalar(&property), normalize_scalar(&value));
        Ok(())
    })
}

#[given("the {modifier} modifier sets {property} to {value}")]
fn modifier_sets(
    recipe_context: &RecipeContext,
    modifier: String,
    property: String,
    value: String,
) -> Result<()> {
    with_draft(recipe_context, |draft| {
        let block = ModifierBlock::new().set(normalize_scalar(&property), normalize_scalar(&value));
        draft.base.insert_modifier(normalize_scalar(&modifier), block);
        Ok(())
    })
}

#[given("option {option} of variant {variant} sets {property} to {value}")]
fn option_sets(
    recipe_context: &RecipeContext,
    option: String,
    variant: String,
    property: String,
    value: String,
) -> Result<()> {
    with_draft(recipe_context, |draft| {
        let block = draft
            .option_mut(&normalize_scalar(&variant), &normalize_scalar(&option))
            .ok_or_else(|| anyhow!("option {option} of {variant} is undefined"))?;
        block.insert(normalize_scalar(&property), normalize_scalar(&value));
        Ok(())
    })
}

#[given("option {option} of variant {variant} is undefined")]
fn option_undefined(recipe_context: &RecipeContext, option: String, variant: String) -> Result<()> {
    with_draft(recipe_context, |draft| {
        draft
            .options
            .push((normalize_scalar(&variant), normalize_scalar(&option), None));
        Ok(())
    })
}

#[given("the default for {variant} is {option}")]
fn default_option(recipe_context: &RecipeContext, variant: String, option: String) -> Result<()> {
    with_draft(recipe_context, |draft| {
        draft
            .defaults
            .push((normalize_scalar(&variant), normalize_scalar(&option)));
        Ok(())
    })
}

#[given("a compound variant matching {conditions} sets {property} to {value}")]
fn compound_sets(
    recipe_context: &RecipeContext,
    conditions: String,
    property: String,
    value: String,
) -> Result<()> {
    let pairs = key_value_pairs(&normalize_scalar(&conditions));
    ensure!(!pairs.is_empty(), "compound variant needs conditions");
    with_draft(recipe_context, |draft| {
        let css = Declarations::new().set(normalize_scalar(&property), normalize_scalar(&value));
        let compound = pairs
            .into_iter()
            .fold(CompoundVariant::new(css), |compound, (variant, option)| {
                compound.when(variant, option)
            });
        draft.compounds.push(compound);
        Ok(())
    })
}

#[when("the recipe is resolved without props")]
fn resolve_without_props(recipe_context: &RecipeContext) -> Result<()> {
    resolve(recipe_context, VariantSelection::new())
}

#[when("the recipe is resolved with props {props}")]
fn resolve_with_props(recipe_context: &RecipeContext, props: String) -> Result<()> {
    let selection = key_value_pairs(&normalize_scalar(&props))
        .into_iter()
        .collect::<VariantSelection>();
    resolve(recipe_context, selection)
}

#[then("the class name is {expected}")]
fn class_name_is(recipe_context: &RecipeContext, expected: String) -> Result<()> {
    let actual = class_name(recipe_context)?;
    ensure!(
        actual == normalize_scalar(&expected),
        "expected {expected}, got {actual}"
    );
    Ok(())
}

#[then("the class name contains {token}")]
fn class_name_contains(recipe_context: &RecipeContext, token: String) -> Result<()> {
    let actual = class_name(recipe_context)?;
    let wanted = normalize_scalar(&token);
    ensure!(
        class_tokens(&actual).contains(&wanted.as_str()),
        "{actual} lacks {wanted}"
    );
    Ok(())
}

#[then("the class name does not contain {token}")]
fn class_name_lacks(recipe_context: &RecipeContext, token: String) -> Result<()> {
    let actual = class_name(recipe_context)?;
    let unwanted = normalize_scalar(&token);
    ensure!(
        !class_tokens(&actual).contains(&unwanted.as_str()),
        "{actual} still has {unwanted}"
    );
    Ok(())
}

#[given("a spacing utility named {name}")]
fn spacing_utility(utility_context: &UtilityContext, name: String) -> Result<()> {
    ensure!(utility_context.factory.is_empty(), "utility already created");
    let utility = normalize_scalar(&name);
    let property = utility.clone();
    let factory = UtilityFactory::spacing(utility, move |ctx| {
        Declarations::new().set(property.as_str(), ctx.value.clone())
    });
    utility_context.factory.set(factory);
    Ok(())
}

#[when("the inputs {inputs} are autogenerated")]
fn autogenerate(utility_context: &UtilityContext, inputs: String) -> Result<()> {
    let normalized = normalize_scalar(&inputs);
    let raw: Vec<&str> = normalized.split(',').map(str::trim).collect();
    let mut factory = utility_context
        .factory
        .take()
        .ok_or_else(|| anyhow!("no utility has been created"))?;
    let registered = factory.autogenerate(raw);
    utility_context.factory.set(factory);
    utility_context.registered.set(registered);
    Ok(())
}

#[then("{count:usize} utilities are registered")]
fn registered_count(utility_context: &UtilityContext, count: usize) -> Result<()> {
    let registered = utility_context
        .registered
        .get()
        .ok_or_else(|| anyhow!("nothing was autogenerated"))?;
    let total = utility_context
        .factory
        .with_ref(UtilityFactory::len)
        .ok_or_else(|| anyhow!("no utility has been created"))?;
    ensure!(registered == count, "registered {registered}, expected {count}");
    ensure!(total == count, "factory holds {total}, expected {count}");
    Ok(())
}

#[then("utility {key} has the value {css}")]
fn utility_value(utility_context: &UtilityContext, key: String, css: String) -> Result<()> {
    let wanted = normalize_scalar(&key);
    let actual = utility_context
        .factory
        .with_ref(|factory| factory.get(&wanted).map(|utility| utility.value().to_css()))
        .flatten()
        .ok_or_else(|| anyhow!("utility {wanted} is not registered"))?;
    ensure!(
        actual == normalize_scalar(&css),
        "utility {wanted} renders {actual}, expected {css}"
    );
    Ok(())
}

#[then("utility {key} has the class name {class}")]
fn utility_class_name(utility_context: &UtilityContext, key: String, class: String) -> Result<()> {
    let wanted = normalize_scalar(&key);
    let actual = utility_context
        .factory
        .with_ref(|factory| factory.get(&wanted).map(|utility| utility.class_name()))
        .flatten()
        .ok_or_else(|| anyhow!("utility {wanted} is not registered"))?;
    ensure!(
        actual == normalize_scalar(&class),
        "utility {wanted} has class {actual}, expected {class}"
    );
    Ok(())
}
