// ABOUTME: Rule-based recipe classifier deriving objective and dietary tags
// ABOUTME: Objective tags come from macro ratios, dietary tags from ingredient text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! Recipe classification
//!
//! Classification is a pure function of a recipe: the same record always
//! yields the same [`RecipeTags`], whatever else is in the catalog.
//!
//! Objective rules (defaults from [`ClassificationThresholds`]):
//! - **endurance**: carbs > 60g, or carbs / (protein + fat) > 2
//! - **performance**: protein >= 20g and carbs >= 40g
//! - **weightLoss**: calories < 400 and protein / carbs > 0.5
//! - **recovery**: protein > 25g, or protein / calories > 0.15
//!
//! Every ratio requires a positive denominator. Recipes without usable
//! nutrition data get no objective tag and no `highProtein` tag.

use super::models::{DietaryTag, NutritionFacts, ObjectiveTag, Recipe, RecipeTags};
use super::vocabulary::IngredientText;
use crate::config::ClassificationThresholds;
use std::collections::BTreeSet;

/// Derives [`RecipeTags`] from recipe fields
#[derive(Debug, Clone, Default)]
pub struct RecipeClassifier {
    thresholds: ClassificationThresholds,
}

impl RecipeClassifier {
    /// Create a classifier with explicit thresholds
    #[must_use]
    pub const fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    /// Compute both tag families for a recipe
    #[must_use]
    pub fn classify(&self, recipe: &Recipe) -> RecipeTags {
        let mut tags = RecipeTags {
            objectives: BTreeSet::new(),
            dietary: dietary_properties(&recipe.ingredients),
        };

        if let Some(nutrition) = usable_nutrition(recipe) {
            tags.objectives = self.objectives(&nutrition);
            if nutrition.macros.protein > self.thresholds.high_protein_g {
                tags.dietary.insert(DietaryTag::HighProtein);
            }
        }

        tags
    }

    /// Objective tags for a set of nutrition facts
    #[must_use]
    pub fn objectives(&self, nutrition: &NutritionFacts) -> BTreeSet<ObjectiveTag> {
        let t = &self.thresholds;
        let calories = nutrition.calories;
        let carbs = nutrition.macros.carbs;
        let protein = nutrition.macros.protein;
        let fat = nutrition.macros.fat;

        let mut objectives = BTreeSet::new();

        if carbs > t.endurance_carbs_g
            || ratio(carbs, protein + fat).is_some_and(|r| r > t.endurance_carb_ratio)
        {
            objectives.insert(ObjectiveTag::Endurance);
        }

        if protein >= t.performance_protein_g && carbs >= t.performance_carbs_g {
            objectives.insert(ObjectiveTag::Performance);
        }

        if calories < t.weight_loss_max_calories
            && ratio(protein, carbs).is_some_and(|r| r > t.weight_loss_protein_ratio)
        {
            objectives.insert(ObjectiveTag::WeightLoss);
        }

        if protein > t.recovery_protein_g
            || ratio(protein, calories).is_some_and(|r| r > t.recovery_protein_per_kcal)
        {
            objectives.insert(ObjectiveTag::Recovery);
        }

        objectives
    }
}

/// Dietary tags derived from ingredient text (`highProtein` excluded)
#[must_use]
pub fn dietary_properties(ingredients: &[String]) -> BTreeSet<DietaryTag> {
    let text = IngredientText::new(ingredients);
    let mut dietary = BTreeSet::new();

    let oats_unlabelled = text.mentions_oats() && !text.has_gluten_free_label();
    if !text.mentions_gluten() && !oats_unlabelled {
        dietary.insert(DietaryTag::GlutenFree);
    }

    let dairy = text.mentions_dairy();
    if !text.mentions_meat() {
        dietary.insert(DietaryTag::Vegetarian);
        if !dairy && !text.mentions_eggs() {
            dietary.insert(DietaryTag::Vegan);
        }
    }

    if !dairy {
        dietary.insert(DietaryTag::DairyFree);
    }

    dietary
}

/// Nutrition facts worth classifying: present, with calories and some macros
fn usable_nutrition(recipe: &Recipe) -> Option<NutritionFacts> {
    recipe.nutrition.filter(|n| {
        let macro_total = n.macros.carbs + n.macros.protein + n.macros.fat;
        n.calories > 0.0 && macro_total > 0.0
    })
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}
