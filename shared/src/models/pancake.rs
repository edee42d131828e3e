//! Pancake recipe types
//!
//! A recipe is either one of the five fixed menu entries or a custom build
//! accumulated ingredient by ingredient and frozen by an explicit finish
//! step. Every recipe renders a description of the form
//! `"Delicious pancake with <ingredient>, <ingredient>, ...!"`.

use crate::error::RecipeError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Ingredients
// ============================================================================

/// Pancake ingredient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ingredient {
    MilkChocolate,
    DarkChocolate,
    Hazelnuts,
    WhippedCream,
    Mustard,
}

impl Ingredient {
    /// Name used in rendered descriptions
    pub fn title(&self) -> &'static str {
        match self {
            Ingredient::MilkChocolate => "milk chocolate",
            Ingredient::DarkChocolate => "dark chocolate",
            Ingredient::Hazelnuts => "hazelnuts",
            Ingredient::WhippedCream => "whipped cream",
            Ingredient::Mustard => "mustard",
        }
    }
}

// ============================================================================
// Fixed recipes
// ============================================================================

/// Fixed menu recipe with a hardcoded ingredient sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixedRecipe {
    DarkChocolate,
    DarkChocolateWhippedCream,
    DarkChocolateWhippedCreamHazelnuts,
    MilkChocolate,
    MilkChocolateHazelnuts,
}

impl FixedRecipe {
    /// Ingredient names, in rendering order
    pub fn ingredients(&self) -> &'static [&'static str] {
        match self {
            FixedRecipe::DarkChocolate => &["dark chocolate"],
            FixedRecipe::DarkChocolateWhippedCream => &["dark chocolate", "whipped cream"],
            // mustard is intentional, the menu really sells this
            FixedRecipe::DarkChocolateWhippedCreamHazelnuts => {
                &["dark chocolate", "mustard", "whipped cream", "hazelnuts"]
            }
            FixedRecipe::MilkChocolate => &["milk chocolate"],
            FixedRecipe::MilkChocolateHazelnuts => &["milk chocolate", "hazelnuts"],
        }
    }
}

// ============================================================================
// Custom build
// ============================================================================

/// Custom pancake built ingredient by ingredient
///
/// `finish` freezes the rendered ingredient names. Additions after `finish`
/// still land in the accumulator but are not reflected in the frozen
/// snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomPancake {
    ingredients: Vec<Ingredient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frozen: Option<Vec<String>>,
}

impl CustomPancake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ingredient; safe to call repeatedly
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// Snapshot the accumulated ingredient names into the frozen sequence
    pub fn finish(&mut self) {
        self.frozen = Some(
            self.ingredients
                .iter()
                .map(|i| i.title().to_string())
                .collect(),
        );
    }

    pub fn is_finished(&self) -> bool {
        self.frozen.is_some()
    }

    /// Frozen ingredient names; fails before `finish`
    pub fn ingredients(&self) -> Result<&[String], RecipeError> {
        self.frozen.as_deref().ok_or(RecipeError::NotFinished)
    }
}

// ============================================================================
// Recipe
// ============================================================================

/// A pancake recipe: a fixed menu entry or a custom build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recipe {
    Fixed(FixedRecipe),
    Custom(CustomPancake),
}

impl Recipe {
    /// Rendered description sentence
    ///
    /// Fails with [`RecipeError::NotFinished`] for a custom build that has
    /// not been frozen yet.
    pub fn description(&self) -> Result<String, RecipeError> {
        let names: Vec<&str> = match self {
            Recipe::Fixed(fixed) => fixed.ingredients().to_vec(),
            Recipe::Custom(custom) => custom.ingredients()?.iter().map(String::as_str).collect(),
        };
        Ok(format!("Delicious pancake with {}!", names.join(", ")))
    }
}

impl From<FixedRecipe> for Recipe {
    fn from(fixed: FixedRecipe) -> Self {
        Recipe::Fixed(fixed)
    }
}

impl From<CustomPancake> for Recipe {
    fn from(custom: CustomPancake) -> Self {
        Recipe::Custom(custom)
    }
}

/// A recipe attached to an order, tagged with the owning order id at the
/// moment of attachment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pancake {
    pub order_id: Uuid,
    pub recipe: Recipe,
}

impl Pancake {
    pub fn new(order_id: Uuid, recipe: impl Into<Recipe>) -> Self {
        Self {
            order_id,
            recipe: recipe.into(),
        }
    }

    pub fn description(&self) -> Result<String, RecipeError> {
        self.recipe.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_recipe_descriptions() {
        assert_eq!(
            Recipe::Fixed(FixedRecipe::DarkChocolate).description().unwrap(),
            "Delicious pancake with dark chocolate!"
        );
        assert_eq!(
            Recipe::Fixed(FixedRecipe::MilkChocolateHazelnuts)
                .description()
                .unwrap(),
            "Delicious pancake with milk chocolate, hazelnuts!"
        );
        assert_eq!(
            Recipe::Fixed(FixedRecipe::DarkChocolateWhippedCreamHazelnuts)
                .description()
                .unwrap(),
            "Delicious pancake with dark chocolate, mustard, whipped cream, hazelnuts!"
        );
    }

    #[test]
    fn test_custom_description_requires_finish() {
        let mut custom = CustomPancake::new();
        custom.add_ingredient(Ingredient::DarkChocolate);
        assert!(!custom.is_finished());

        let recipe = Recipe::Custom(custom.clone());
        assert_eq!(recipe.description(), Err(RecipeError::NotFinished));

        custom.finish();
        assert!(custom.is_finished());
        assert_eq!(
            Recipe::Custom(custom).description().unwrap(),
            "Delicious pancake with dark chocolate!"
        );
    }

    #[test]
    fn test_custom_preserves_insertion_order() {
        let mut custom = CustomPancake::new();
        custom.add_ingredient(Ingredient::DarkChocolate);
        custom.add_ingredient(Ingredient::Hazelnuts);
        custom.add_ingredient(Ingredient::Mustard);
        custom.finish();

        assert_eq!(
            Recipe::Custom(custom).description().unwrap(),
            "Delicious pancake with dark chocolate, hazelnuts, mustard!"
        );
    }

    #[test]
    fn test_additions_after_finish_do_not_change_snapshot() {
        let mut custom = CustomPancake::new();
        custom.add_ingredient(Ingredient::MilkChocolate);
        custom.finish();

        // The accumulator still accepts ingredients, but the frozen snapshot
        // taken at finish is what renders.
        custom.add_ingredient(Ingredient::Mustard);
        assert_eq!(
            Recipe::Custom(custom).description().unwrap(),
            "Delicious pancake with milk chocolate!"
        );
    }

    #[test]
    fn test_duplicate_ingredients_are_kept() {
        let mut custom = CustomPancake::new();
        custom.add_ingredient(Ingredient::Hazelnuts);
        custom.add_ingredient(Ingredient::Hazelnuts);
        custom.finish();

        assert_eq!(
            Recipe::Custom(custom).description().unwrap(),
            "Delicious pancake with hazelnuts, hazelnuts!"
        );
    }

    #[test]
    fn test_ingredient_serde_names() {
        assert_eq!(
            serde_json::to_string(&Ingredient::WhippedCream).unwrap(),
            "\"WHIPPED_CREAM\""
        );
        assert_eq!(
            serde_json::from_str::<Ingredient>("\"DARK_CHOCOLATE\"").unwrap(),
            Ingredient::DarkChocolate
        );
    }
}
