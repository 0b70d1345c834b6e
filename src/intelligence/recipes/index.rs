// ABOUTME: Immutable recipe index grouping catalog positions by category and tag
// ABOUTME: Built once from classifier output; unknown group ids resolve to empty groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

use super::classifier::RecipeClassifier;
use super::models::{DietaryTag, ObjectiveTag, Recipe, RecipeCategory, RecipeTags};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Group sizes, for filter menus
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CatalogFacets {
    /// Recipes per category
    pub categories: BTreeMap<RecipeCategory, usize>,
    /// Recipes per objective tag
    pub objectives: BTreeMap<ObjectiveTag, usize>,
    /// Recipes per dietary tag
    pub dietary: BTreeMap<DietaryTag, usize>,
}

/// Catalog positions grouped by category, objective and dietary property
///
/// Every group lists positions in ascending (catalog) order. Membership of a
/// tag group is exactly the set of recipes whose cached tags contain the tag.
#[derive(Debug, Clone)]
pub struct RecipeIndex {
    tags: Vec<RecipeTags>,
    positions: HashMap<String, usize>,
    categories: BTreeMap<RecipeCategory, Vec<usize>>,
    objectives: BTreeMap<ObjectiveTag, Vec<usize>>,
    dietary: BTreeMap<DietaryTag, Vec<usize>>,
}

impl RecipeIndex {
    /// Classify every recipe and build the groups
    #[must_use]
    pub fn build(recipes: &[Recipe], classifier: &RecipeClassifier) -> Self {
        let mut categories: BTreeMap<RecipeCategory, Vec<usize>> =
            RecipeCategory::ALL.into_iter().map(|c| (c, Vec::new())).collect();
        let mut objectives: BTreeMap<ObjectiveTag, Vec<usize>> =
            ObjectiveTag::ALL.into_iter().map(|t| (t, Vec::new())).collect();
        let mut dietary: BTreeMap<DietaryTag, Vec<usize>> =
            DietaryTag::ALL.into_iter().map(|t| (t, Vec::new())).collect();
        let mut positions = HashMap::with_capacity(recipes.len());
        let mut tags = Vec::with_capacity(recipes.len());

        for (position, recipe) in recipes.iter().enumerate() {
            let recipe_tags = classifier.classify(recipe);
            debug!(
                recipe_id = %recipe.id,
                objectives = ?recipe_tags.objectives,
                dietary = ?recipe_tags.dietary,
                "classified recipe"
            );

            categories.entry(recipe.category).or_default().push(position);
            for tag in &recipe_tags.objectives {
                objectives.entry(*tag).or_default().push(position);
            }
            for tag in &recipe_tags.dietary {
                dietary.entry(*tag).or_default().push(position);
            }
            positions.insert(recipe.id.clone(), position);
            tags.push(recipe_tags);
        }

        Self {
            tags,
            positions,
            categories,
            objectives,
            dietary,
        }
    }

    /// Catalog position of a recipe id
    #[must_use]
    pub fn position(&self, recipe_id: &str) -> Option<usize> {
        self.positions.get(recipe_id).copied()
    }

    /// Cached tags of the recipe at a catalog position
    #[must_use]
    pub fn tags_at(&self, position: usize) -> Option<&RecipeTags> {
        self.tags.get(position)
    }

    /// Positions in a category
    #[must_use]
    pub fn category(&self, category: RecipeCategory) -> &[usize] {
        self.categories.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Positions carrying an objective tag
    #[must_use]
    pub fn objective(&self, tag: ObjectiveTag) -> &[usize] {
        self.objectives.get(&tag).map_or(&[], Vec::as_slice)
    }

    /// Positions carrying a dietary tag
    #[must_use]
    pub fn dietary(&self, tag: DietaryTag) -> &[usize] {
        self.dietary.get(&tag).map_or(&[], Vec::as_slice)
    }

    /// Positions in a category given by identifier; empty when unknown
    #[must_use]
    pub fn category_by_id(&self, id: &str) -> &[usize] {
        RecipeCategory::from_id(id).map_or(&[], |c| self.category(c))
    }

    /// Positions carrying an objective given by identifier; empty when unknown
    #[must_use]
    pub fn objective_by_id(&self, id: &str) -> &[usize] {
        ObjectiveTag::from_id(id).map_or(&[], |t| self.objective(t))
    }

    /// Positions carrying a dietary property given by identifier; empty when unknown
    #[must_use]
    pub fn dietary_by_id(&self, id: &str) -> &[usize] {
        DietaryTag::from_id(id).map_or(&[], |t| self.dietary(t))
    }

    /// Size of every group
    #[must_use]
    pub fn facets(&self) -> CatalogFacets {
        CatalogFacets {
            categories: self.categories.iter().map(|(k, v)| (*k, v.len())).collect(),
            objectives: self.objectives.iter().map(|(k, v)| (*k, v.len())).collect(),
            dietary: self.dietary.iter().map(|(k, v)| (*k, v.len())).collect(),
        }
    }
}
