// ABOUTME: Recipe catalog loading and validation from the platform's static JSON asset
// ABOUTME: Rejects missing ids, duplicate ids, and unusable fields before any query is served
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

use super::models::{Macros, NutritionFacts, Recipe, RecipeCategory};
use crate::errors::{CatalogError, CatalogResult};
use serde::de;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use tracing::{info, warn};

/// Cycling nutrition recipes shipped with the platform
const BUNDLED_CATALOG: &str = include_str!("../../../data/recipes.json");

/// Recipe record as found in the catalog document, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    timing: Option<String>,
    #[serde(default)]
    prep_time: Option<u32>,
    #[serde(default)]
    cook_time: Option<u32>,
    #[serde(default)]
    nutritional_info: Option<RawNutrition>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    benefits: Vec<String>,
    #[serde(default)]
    tips: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawNutrition {
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    macros: Option<RawMacros>,
}

#[derive(Debug, Deserialize)]
struct RawMacros {
    #[serde(default)]
    carbs: Option<f64>,
    #[serde(default)]
    protein: Option<f64>,
    #[serde(default)]
    fat: Option<f64>,
    #[serde(default)]
    fiber: Option<f64>,
}

impl RawRecipe {
    fn into_recipe(self, index: usize) -> CatalogResult<Recipe> {
        let id = match self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(CatalogError::MissingId { index }),
        };
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| CatalogError::invalid_entry(index, format!("recipe `{id}` has no name")))?;
        let category_id = self.category.ok_or_else(|| {
            CatalogError::invalid_entry(index, format!("recipe `{id}` has no category"))
        })?;
        let category = RecipeCategory::from_id(category_id.trim()).ok_or_else(|| {
            CatalogError::invalid_entry(
                index,
                format!("recipe `{id}` has unknown category `{category_id}`"),
            )
        })?;

        let nutrition = self.nutritional_info.map(|raw| {
            let macros = raw.macros.map_or_else(Macros::default, |m| Macros {
                carbs: m.carbs.unwrap_or(0.0),
                protein: m.protein.unwrap_or(0.0),
                fat: m.fat.unwrap_or(0.0),
                fiber: m.fiber.unwrap_or(0.0),
            });
            NutritionFacts {
                calories: raw.calories.unwrap_or(0.0),
                macros,
            }
        });

        Ok(Recipe {
            id,
            name,
            category,
            timing: self.timing,
            prep_time_mins: self.prep_time.unwrap_or(0),
            cook_time_mins: self.cook_time.unwrap_or(0),
            nutrition,
            ingredients: self.ingredients,
            instructions: self.instructions,
            benefits: self.benefits,
            tips: self.tips,
        })
    }
}

/// Validated, immutable recipe catalog
///
/// Construction is all-or-nothing: a single bad record rejects the whole
/// catalog, so no partially-loaded catalog can ever reach the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Validate already-built recipes
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for a blank id, a duplicate id, or a negative or
    /// non-finite nutrition value
    pub fn from_recipes(recipes: Vec<Recipe>) -> CatalogResult<Self> {
        {
            let mut seen: HashMap<&str, usize> = HashMap::with_capacity(recipes.len());
            for (index, recipe) in recipes.iter().enumerate() {
                if recipe.id.trim().is_empty() {
                    return Err(CatalogError::MissingId { index });
                }
                if let Some(&first_index) = seen.get(recipe.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        id: recipe.id.clone(),
                        first_index,
                        index,
                    });
                }
                seen.insert(recipe.id.as_str(), index);
                validate_nutrition(index, recipe)?;
            }
        }
        Ok(Self { recipes })
    }

    /// Parse and validate a catalog document
    ///
    /// Accepts a bare JSON array of recipes or an object with a `recipes` array.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or any record is invalid
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: Value = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "recipe catalog is not valid JSON");
            CatalogError::Malformed(e)
        })?;
        Self::from_value(document)
    }

    /// Parse and validate a catalog document from a reader
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or any record is invalid
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let document: Value = serde_json::from_reader(reader).map_err(|e| {
            warn!(error = %e, "recipe catalog is not valid JSON");
            CatalogError::Malformed(e)
        })?;
        Self::from_value(document)
    }

    /// Load the catalog bundled with the crate
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled asset is invalid
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    fn from_value(document: Value) -> CatalogResult<Self> {
        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("recipes") {
                Some(Value::Array(entries)) => entries,
                _ => return Err(malformed("catalog object has no `recipes` array")),
            },
            _ => return Err(malformed("catalog must be an array of recipes")),
        };

        let recipes = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value::<RawRecipe>(entry)
                    .map_err(|e| CatalogError::invalid_entry(index, e.to_string()))
                    .and_then(|raw| raw.into_recipe(index))
            })
            .collect::<CatalogResult<Vec<_>>>()
            .inspect_err(|e| warn!(error = %e, "rejecting recipe catalog"))?;

        let catalog = Self::from_recipes(recipes)
            .inspect_err(|e| warn!(error = %e, "rejecting recipe catalog"))?;
        info!(recipes = catalog.len(), "recipe catalog loaded");
        Ok(catalog)
    }

    /// Recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipe
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Consume the catalog, returning its recipes
    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }
}

fn malformed(message: &str) -> CatalogError {
    warn!(message, "rejecting recipe catalog");
    CatalogError::Malformed(de::Error::custom(message))
}

fn validate_nutrition(index: usize, recipe: &Recipe) -> CatalogResult<()> {
    let Some(nutrition) = recipe.nutrition else {
        return Ok(());
    };
    let fields = [
        ("calories", nutrition.calories),
        ("carbs", nutrition.macros.carbs),
        ("protein", nutrition.macros.protein),
        ("fat", nutrition.macros.fat),
        ("fiber", nutrition.macros.fiber),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(CatalogError::invalid_entry(
                index,
                format!("recipe `{}` has invalid {name} value {value}", recipe.id),
            ));
        }
    }
    Ok(())
}
