// ABOUTME: Data models for the recipe catalog, classification tags, and user profiles
// ABOUTME: Defines Recipe, NutritionFacts, RecipeCategory, ObjectiveTag, DietaryTag, and UserProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Fixed set of catalog categories a recipe belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipeCategory {
    /// Morning meals, usually eaten well before a ride
    Breakfast,
    /// Bars, balls and bites carried on the bike
    Snack,
    /// Hydration and recovery drinks
    Drink,
    /// Full meals
    Main,
}

impl RecipeCategory {
    /// All categories, in menu order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Snack, Self::Drink, Self::Main];

    /// Stable identifier used in the catalog and in lookups
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Snack => "snack",
            Self::Drink => "drink",
            Self::Main => "main",
        }
    }

    /// Resolve a category identifier, returning `None` for unknown values
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == id)
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Training objective a recipe serves best
///
/// Derived from macro ratios and calorie count by the classifier. A recipe can
/// carry several objectives at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveTag {
    /// Carbohydrate-dominant fuel for long rides
    Endurance,
    /// Balanced protein and carbs for hard sessions
    Performance,
    /// Low-calorie, protein-leaning meals
    WeightLoss,
    /// Protein-dense recovery food
    Recovery,
}

impl ObjectiveTag {
    /// All objective tags
    pub const ALL: [Self; 4] = [
        Self::Endurance,
        Self::Performance,
        Self::WeightLoss,
        Self::Recovery,
    ];

    /// Stable identifier used by callers and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Endurance => "endurance",
            Self::Performance => "performance",
            Self::WeightLoss => "weightLoss",
            Self::Recovery => "recovery",
        }
    }

    /// Resolve an objective identifier, returning `None` for unknown values
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }
}

impl fmt::Display for ObjectiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary property a recipe satisfies
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietaryTag {
    /// No gluten-containing cereal (and no unlabelled oats)
    GlutenFree,
    /// No meat
    Vegetarian,
    /// Vegetarian and free of eggs and dairy
    Vegan,
    /// No dairy products
    DairyFree,
    /// More than 20g protein per serving
    HighProtein,
}

impl DietaryTag {
    /// All dietary tags
    pub const ALL: [Self; 5] = [
        Self::GlutenFree,
        Self::Vegetarian,
        Self::Vegan,
        Self::DairyFree,
        Self::HighProtein,
    ];

    /// Stable identifier used by callers and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GlutenFree => "glutenFree",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::DairyFree => "dairyFree",
            Self::HighProtein => "highProtein",
        }
    }

    /// Resolve a dietary identifier, returning `None` for unknown values
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == id)
    }
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Macronutrients per serving, in grams
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Macros {
    /// Carbohydrates
    pub carbs: f64,
    /// Protein
    pub protein: f64,
    /// Fat
    pub fat: f64,
    /// Fiber
    #[serde(default)]
    pub fiber: f64,
}

/// Nutrition facts per serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Macronutrient breakdown
    pub macros: Macros,
}

/// A catalog recipe
///
/// Records are validated once when the catalog loads and never mutated
/// afterwards. Nutrition is optional: the classifier is the only place that
/// decides what a missing value means. Only serialization is derived; input
/// goes through the catalog loader so that every record is validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: RecipeCategory,
    /// Free-text timing label ("avant l'effort", "pendant", ...)
    pub timing: Option<String>,
    /// Preparation time in minutes
    #[serde(rename = "prepTime")]
    pub prep_time_mins: u32,
    /// Cooking time in minutes
    #[serde(rename = "cookTime")]
    pub cook_time_mins: u32,
    /// Nutrition per serving
    #[serde(rename = "nutritionalInfo")]
    pub nutrition: Option<NutritionFacts>,
    /// Ingredient descriptions, in recipe order
    pub ingredients: Vec<String>,
    /// Preparation steps, in order
    pub instructions: Vec<String>,
    /// Benefit blurbs shown alongside the recipe
    pub benefits: Vec<String>,
    /// Optional chef tip
    pub tips: Option<String>,
}

impl Recipe {
    /// Create a recipe with the required fields and everything else empty
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: RecipeCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            timing: None,
            prep_time_mins: 0,
            cook_time_mins: 0,
            nutrition: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            benefits: Vec::new(),
            tips: None,
        }
    }

    /// Set nutrition facts
    #[must_use]
    pub fn with_nutrition(mut self, calories: f64, macros: Macros) -> Self {
        self.nutrition = Some(NutritionFacts { calories, macros });
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Set the timing label
    #[must_use]
    pub fn with_timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = Some(timing.into());
        self
    }

    /// Set preparation and cooking times
    #[must_use]
    pub const fn with_times(mut self, prep_mins: u32, cook_mins: u32) -> Self {
        self.prep_time_mins = prep_mins;
        self.cook_time_mins = cook_mins;
        self
    }

    /// Total time (prep + cook)
    #[must_use]
    pub const fn total_time_mins(&self) -> u32 {
        self.prep_time_mins.saturating_add(self.cook_time_mins)
    }

    /// Lower-cased haystack used by free-text search
    pub(crate) fn search_text(&self) -> String {
        let mut text = String::with_capacity(64);
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(self.category.as_str());
        for ingredient in &self.ingredients {
            text.push(' ');
            text.push_str(ingredient);
        }
        text.to_lowercase()
    }
}

/// Tags derived for one recipe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeTags {
    /// Objective family
    pub objectives: BTreeSet<ObjectiveTag>,
    /// Dietary-property family
    pub dietary: BTreeSet<DietaryTag>,
}

impl RecipeTags {
    /// Whether the objective tag is present
    #[must_use]
    pub fn has_objective(&self, tag: ObjectiveTag) -> bool {
        self.objectives.contains(&tag)
    }

    /// Whether the dietary tag is present
    #[must_use]
    pub fn has_dietary(&self, tag: DietaryTag) -> bool {
        self.dietary.contains(&tag)
    }
}

/// Caller-supplied personalisation input for recommendations
///
/// Identifiers stay as strings: an unknown goal or restriction is a valid
/// input that simply matches no group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Objective identifier (`endurance`, `performance`, `weightLoss`, `recovery`)
    #[serde(default)]
    pub goal: Option<String>,
    /// Dietary identifiers the recipe must all satisfy
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl UserProfile {
    /// Profile with a goal and no restriction
    #[must_use]
    pub fn with_goal(goal: impl Into<String>) -> Self {
        Self {
            goal: Some(goal.into()),
            dietary_restrictions: Vec::new(),
        }
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.push(restriction.into());
        self
    }
}
