// ABOUTME: Intelligence module for nutrition content classification and recommendations
// ABOUTME: Hosts the recipe engine and re-exports its main types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! # Intelligence Module
//!
//! Rule-based analysis of the platform's nutrition content.

/// Recipe classification, indexing and recommendation
pub mod recipes;

pub use recipes::{
    Catalog, CatalogFacets, DietaryTag, ObjectiveTag, Recipe, RecipeCategory, RecipeClassifier,
    RecipeEngine, RecipeIndex, RecipeTags, UserProfile,
};
