// ABOUTME: Read-only query operations over the recipe engine
// ABOUTME: Search, group lookups, and profile-based recommendations with catalog-order padding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! Query API
//!
//! Every operation is total: unknown identifiers, absent profiles and empty
//! matches all produce (possibly empty) result lists. Results always follow
//! catalog order and never exceed the requested limit.

use super::engine::RecipeEngine;
use super::models::{DietaryTag, ObjectiveTag, Recipe, RecipeCategory, UserProfile};
use std::collections::HashSet;

impl RecipeEngine {
    /// Free-text search over name, category and ingredients
    ///
    /// The query is split on whitespace; a recipe matches when any term is a
    /// case-insensitive substring of its text. An empty query returns the
    /// first `limit` recipes.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Recipe> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if terms.is_empty() {
            return self.first(limit);
        }

        self.recipes
            .iter()
            .zip(&self.search_texts)
            .filter(|(_, text)| terms.iter().any(|term| text.contains(term.as_str())))
            .map(|(recipe, _)| recipe)
            .take(limit)
            .collect()
    }

    /// Search with the configured default limit
    #[must_use]
    pub fn search_default(&self, query: &str) -> Vec<&Recipe> {
        self.search(query, self.config.default_limit)
    }

    /// Recipes in a category identified by string; empty when unknown
    #[must_use]
    pub fn by_category(&self, id: &str, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.category_by_id(id), limit)
    }

    /// Recipes carrying an objective identified by string; empty when unknown
    #[must_use]
    pub fn by_objective(&self, id: &str, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.objective_by_id(id), limit)
    }

    /// Recipes carrying a dietary property identified by string; empty when unknown
    #[must_use]
    pub fn by_dietary_property(&self, id: &str, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.dietary_by_id(id), limit)
    }

    /// Recipes in a category
    #[must_use]
    pub fn in_category(&self, category: RecipeCategory, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.category(category), limit)
    }

    /// Recipes carrying an objective tag
    #[must_use]
    pub fn with_objective(&self, tag: ObjectiveTag, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.objective(tag), limit)
    }

    /// Recipes carrying a dietary tag
    #[must_use]
    pub fn with_dietary_property(&self, tag: DietaryTag, limit: usize) -> Vec<&Recipe> {
        self.resolve(self.index.dietary(tag), limit)
    }

    /// Personalised recommendations
    ///
    /// Starts from the objective group of the profile's goal, keeps only the
    /// recipes present in every restriction's dietary group, then pads with
    /// the remaining catalog in order until `limit` is reached. Without a
    /// profile, returns the first `limit` recipes.
    #[must_use]
    pub fn recommend(&self, profile: Option<&UserProfile>, limit: usize) -> Vec<&Recipe> {
        let Some(profile) = profile else {
            return self.first(limit);
        };

        let mut selected: Vec<usize> = profile
            .goal
            .as_deref()
            .map_or(&[][..], |goal| self.index.objective_by_id(goal))
            .to_vec();

        for restriction in &profile.dietary_restrictions {
            let group = self.index.dietary_by_id(restriction);
            selected.retain(|position| group.binary_search(position).is_ok());
        }
        selected.truncate(limit);

        if selected.len() < limit {
            let mut taken: HashSet<usize> = selected.iter().copied().collect();
            for position in 0..self.recipes.len() {
                if selected.len() >= limit {
                    break;
                }
                if taken.insert(position) {
                    selected.push(position);
                }
            }
        }

        selected
            .into_iter()
            .filter_map(|position| self.recipes.get(position))
            .collect()
    }

    /// Recommendations with the configured default limit
    #[must_use]
    pub fn recommend_default(&self, profile: Option<&UserProfile>) -> Vec<&Recipe> {
        self.recommend(profile, self.config.default_limit)
    }

    fn first(&self, limit: usize) -> Vec<&Recipe> {
        self.recipes.iter().take(limit).collect()
    }

    fn resolve(&self, positions: &[usize], limit: usize) -> Vec<&Recipe> {
        positions
            .iter()
            .take(limit)
            .filter_map(|&position| self.recipes.get(position))
            .collect()
    }
}
