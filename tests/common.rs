// ABOUTME: Shared test utilities and fixture builders for recipe engine integration tests
// ABOUTME: Provides recipe constructors, engine setup, and id extraction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `velo_altitude`

use velo_altitude::config::RecipeEngineConfig;
use velo_altitude::intelligence::recipes::{
    Catalog, Macros, Recipe, RecipeCategory, RecipeEngine,
};

/// Build a recipe with nutrition and ingredients
pub fn recipe(
    id: &str,
    category: RecipeCategory,
    calories: f64,
    carbs: f64,
    protein: f64,
    fat: f64,
    ingredients: &[&str],
) -> Recipe {
    let mut recipe = Recipe::new(id, format!("Recette {id}"), category).with_nutrition(
        calories,
        Macros {
            carbs,
            protein,
            fat,
            fiber: 0.0,
        },
    );
    for ingredient in ingredients {
        recipe = recipe.with_ingredient(*ingredient);
    }
    recipe
}

/// Build a recipe that only has ingredients (no nutrition data)
pub fn ingredients_only(id: &str, ingredients: &[&str]) -> Recipe {
    ingredients
        .iter()
        .fold(Recipe::new(id, format!("Recette {id}"), RecipeCategory::Main), |r, i| {
            r.with_ingredient(*i)
        })
}

/// Build an engine with default configuration
pub fn engine(recipes: Vec<Recipe>) -> RecipeEngine {
    RecipeEngine::build(
        Catalog::from_recipes(recipes).expect("valid test catalog"),
        RecipeEngineConfig::default(),
    )
}

/// Engine over the bundled catalog
pub fn bundled_engine() -> RecipeEngine {
    RecipeEngine::bundled().expect("bundled catalog loads")
}

/// Ids of a result list, in order
pub fn ids<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
    recipes.iter().map(|r| r.id.as_str()).collect()
}

/// Deterministic catalog of `count` recipes cycling through categories and macro profiles
pub fn generated_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| {
            let category = RecipeCategory::ALL[i % RecipeCategory::ALL.len()];
            let step = (i % 7) as f64;
            let ingredients: &[&str] = match i % 4 {
                0 => &["flocons d'avoine", "miel"],
                1 => &["250ml de lait", "banane"],
                2 => &["blanc de poulet", "riz"],
                _ => &["tofu", "brocoli"],
            };
            recipe(
                &format!("generated-{i}"),
                category,
                150.0 + step * 80.0,
                20.0 + step * 10.0,
                5.0 + step * 5.0,
                3.0 + step * 2.0,
                ingredients,
            )
        })
        .collect()
}
