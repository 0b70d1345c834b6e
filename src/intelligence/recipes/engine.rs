// ABOUTME: Recipe engine construction: catalog, classifier output, and index in one immutable value
// ABOUTME: Reloading a catalog means building a new engine; nothing is mutated after build
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

use super::catalog::Catalog;
use super::classifier::RecipeClassifier;
use super::index::{CatalogFacets, RecipeIndex};
use super::models::{Recipe, RecipeTags};
use crate::config::RecipeEngineConfig;
use crate::errors::CatalogResult;
use tracing::info;

/// Classified, indexed recipe catalog serving read-only queries
///
/// All state is computed eagerly in [`RecipeEngine::build`]. The engine is
/// `Send + Sync` and can be shared by concurrent readers without locking.
#[derive(Debug, Clone)]
pub struct RecipeEngine {
    pub(super) recipes: Vec<Recipe>,
    pub(super) search_texts: Vec<String>,
    pub(super) index: RecipeIndex,
    pub(super) config: RecipeEngineConfig,
}

impl RecipeEngine {
    /// Classify and index a validated catalog
    #[must_use]
    pub fn build(catalog: Catalog, config: RecipeEngineConfig) -> Self {
        let recipes = catalog.into_recipes();
        let classifier = RecipeClassifier::new(config.thresholds.clone());
        let index = RecipeIndex::build(&recipes, &classifier);
        let search_texts = recipes.iter().map(Recipe::search_text).collect();

        let facets = index.facets();
        info!(
            recipes = recipes.len(),
            objectives = ?facets.objectives,
            dietary = ?facets.dietary,
            "recipe engine built"
        );

        Self {
            recipes,
            search_texts,
            index,
            config,
        }
    }

    /// Parse, validate, classify and index a catalog document
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or any record is invalid
    pub fn from_json_str(json: &str, config: RecipeEngineConfig) -> CatalogResult<Self> {
        Ok(Self::build(Catalog::from_json_str(json)?, config))
    }

    /// Engine over the bundled catalog with default configuration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled asset is invalid
    pub fn bundled() -> CatalogResult<Self> {
        Ok(Self::build(
            Catalog::bundled()?,
            RecipeEngineConfig::default(),
        ))
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

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Configuration the engine was built with
    #[must_use]
    pub const fn config(&self) -> &RecipeEngineConfig {
        &self.config
    }

    /// Underlying index
    #[must_use]
    pub const fn index(&self) -> &RecipeIndex {
        &self.index
    }

    /// Recipe by id
    #[must_use]
    pub fn recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.index
            .position(recipe_id)
            .and_then(|p| self.recipes.get(p))
    }

    /// Cached tags of a recipe by id
    #[must_use]
    pub fn tags(&self, recipe_id: &str) -> Option<&RecipeTags> {
        self.index
            .position(recipe_id)
            .and_then(|p| self.index.tags_at(p))
    }

    /// Group sizes for filter menus
    #[must_use]
    pub fn facets(&self) -> CatalogFacets {
        self.index.facets()
    }
}
