// ABOUTME: Ingredient vocabularies used to derive dietary properties from free text
// ABOUTME: Bilingual (English/French) term lists matched as case-insensitive substrings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

use regex::Regex;
use std::sync::LazyLock;

/// Cereals that contain gluten
pub const GLUTEN_TERMS: &[&str] = &["wheat", "gluten", "barley", "rye", "blé", "orge", "seigle"];

/// Oats, assumed cross-contaminated unless labelled
pub const OAT_TERMS: &[&str] = &["oats", "avoine"];

/// Meat products
pub const MEAT_TERMS: &[&str] = &[
    "meat", "chicken", "beef", "pork", "ham", "bacon", "sausage", "viande", "poulet", "bœuf",
    "boeuf", "porc", "jambon", "lardon", "saucisse",
];

/// Dairy products
pub const DAIRY_TERMS: &[&str] = &[
    "milk", "cheese", "yogurt", "yoghurt", "cream", "butter", "lait", "fromage", "yaourt",
    "crème", "creme", "beurre",
];

/// Eggs (animal products excluded from vegan recipes on top of dairy)
pub const EGG_TERMS: &[&str] = &["egg", "œuf", "oeuf"];

/// Label that clears oats ("gluten-free oats", "avoine sans gluten")
static GLUTEN_FREE_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)gluten[- ]?free|sans[- ]gluten").ok());

/// Substring test; `text` is already lower-cased and every term is lower case
fn mentions(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// Lower-cased ingredient text the dietary rules are evaluated against
#[derive(Debug, Clone)]
pub struct IngredientText {
    text: String,
}

impl IngredientText {
    /// Join and lower-case all ingredient lines
    #[must_use]
    pub fn new(ingredients: &[String]) -> Self {
        Self {
            text: ingredients.join(" ").to_lowercase(),
        }
    }

    /// Whether the text carries a gluten-free label
    #[must_use]
    pub fn has_gluten_free_label(&self) -> bool {
        GLUTEN_FREE_LABEL.as_ref().map_or_else(
            || self.text.contains("gluten-free") || self.text.contains("sans gluten"),
            |re| re.is_match(&self.text),
        )
    }

    /// Whether a gluten cereal is mentioned, ignoring the gluten-free label itself
    #[must_use]
    pub fn mentions_gluten(&self) -> bool {
        let unlabelled = GLUTEN_FREE_LABEL.as_ref().map_or_else(
            || self.text.replace("gluten-free", " ").replace("sans gluten", " "),
            |re| re.replace_all(&self.text, " ").into_owned(),
        );
        mentions(&unlabelled, GLUTEN_TERMS)
    }

    /// Whether oats are mentioned
    #[must_use]
    pub fn mentions_oats(&self) -> bool {
        mentions(&self.text, OAT_TERMS)
    }

    /// Whether meat is mentioned
    #[must_use]
    pub fn mentions_meat(&self) -> bool {
        mentions(&self.text, MEAT_TERMS)
    }

    /// Whether a dairy product is mentioned
    #[must_use]
    pub fn mentions_dairy(&self) -> bool {
        mentions(&self.text, DAIRY_TERMS)
    }

    /// Whether eggs are mentioned
    #[must_use]
    pub fn mentions_eggs(&self) -> bool {
        mentions(&self.text, EGG_TERMS)
    }
}
