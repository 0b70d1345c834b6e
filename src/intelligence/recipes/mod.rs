// ABOUTME: Recipe classification and recommendation module for cycling nutrition content
// ABOUTME: Loads a static catalog, tags recipes by rule, indexes them, and serves queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! # Recipes Module
//!
//! Turns the platform's static recipe catalog into an immutable, queryable
//! engine.
//!
//! ## Pipeline
//!
//! 1. [`Catalog`] validates the raw records (ids present and unique).
//! 2. [`RecipeClassifier`] derives objective and dietary tags per recipe.
//! 3. [`RecipeIndex`] groups catalog positions by category and tag.
//! 4. [`RecipeEngine`] serves search, group lookups and recommendations.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use velo_altitude::intelligence::recipes::{RecipeEngine, UserProfile};
//!
//! let engine = RecipeEngine::bundled()?;
//! let profile = UserProfile::with_goal("recovery").with_restriction("vegan");
//! for recipe in engine.recommend(Some(&profile), 5) {
//!     println!("{}", recipe.name);
//! }
//! # Ok::<(), velo_altitude::errors::CatalogError>(())
//! ```

/// Catalog loading and validation
pub mod catalog;
/// Rule-based tag derivation
pub mod classifier;
/// Engine construction and accessors
pub mod engine;
/// Category and tag groupings
pub mod index;
/// Core data models for recipes, tags, and profiles
pub mod models;
/// Query operations
pub mod query;
/// Ingredient vocabularies for dietary rules
pub mod vocabulary;

pub use catalog::Catalog;
pub use classifier::{dietary_properties, RecipeClassifier};
pub use engine::RecipeEngine;
pub use index::{CatalogFacets, RecipeIndex};
pub use models::{
    DietaryTag, Macros, NutritionFacts, ObjectiveTag, Recipe, RecipeCategory, RecipeTags,
    UserProfile,
};
