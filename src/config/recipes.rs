// ABOUTME: Recipe engine configuration with classification thresholds and query defaults
// ABOUTME: Loads defaults, applies VELO_RECIPES_* environment overrides, and validates ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! Recipe Engine Configuration
//!
//! Thresholds for objective classification and the default page size of
//! query helpers. Defaults reproduce the platform's classification rules.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static RECIPE_ENGINE_CONFIG: OnceLock<RecipeEngineConfig> = OnceLock::new();

/// Thresholds used by the objective classifier (grams unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Endurance: carbs strictly above this
    pub endurance_carbs_g: f64,
    /// Endurance: carbs / (protein + fat) strictly above this
    pub endurance_carb_ratio: f64,
    /// Performance: protein at or above this
    pub performance_protein_g: f64,
    /// Performance: carbs at or above this
    pub performance_carbs_g: f64,
    /// Weight loss: calories strictly below this (kcal)
    pub weight_loss_max_calories: f64,
    /// Weight loss: protein / carbs strictly above this
    pub weight_loss_protein_ratio: f64,
    /// Recovery: protein strictly above this
    pub recovery_protein_g: f64,
    /// Recovery: protein grams per kcal strictly above this
    pub recovery_protein_per_kcal: f64,
    /// High protein: protein strictly above this
    pub high_protein_g: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            endurance_carbs_g: 60.0,
            endurance_carb_ratio: 2.0,
            performance_protein_g: 20.0,
            performance_carbs_g: 40.0,
            weight_loss_max_calories: 400.0,
            weight_loss_protein_ratio: 0.5,
            recovery_protein_g: 25.0,
            recovery_protein_per_kcal: 0.15,
            high_protein_g: 20.0,
        }
    }
}

impl ClassificationThresholds {
    /// Validate that every threshold is finite and non-negative, and ratios positive
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` naming the first offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amounts = [
            ("endurance_carbs_g", self.endurance_carbs_g),
            ("performance_protein_g", self.performance_protein_g),
            ("performance_carbs_g", self.performance_carbs_g),
            ("weight_loss_max_calories", self.weight_loss_max_calories),
            ("recovery_protein_g", self.recovery_protein_g),
            ("high_protein_g", self.high_protein_g),
        ];
        for (name, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a finite value >= 0, got {value}"
                )));
            }
        }

        let ratios = [
            ("endurance_carb_ratio", self.endurance_carb_ratio),
            ("weight_loss_protein_ratio", self.weight_loss_protein_ratio),
            ("recovery_protein_per_kcal", self.recovery_protein_per_kcal),
        ];
        for (name, value) in ratios {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be a finite value > 0, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Recipe engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEngineConfig {
    /// Objective and high-protein thresholds
    pub thresholds: ClassificationThresholds,
    /// Page size used by the `*_default` query helpers
    pub default_limit: usize,
}

impl Default for RecipeEngineConfig {
    fn default() -> Self {
        Self {
            thresholds: ClassificationThresholds::default(),
            default_limit: 10,
        }
    }
}

impl RecipeEngineConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults when the environment holds invalid overrides.
    #[must_use]
    pub fn global() -> &'static Self {
        RECIPE_ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recipe engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for unusable thresholds or a zero default limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if self.default_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_limit must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let t = &mut self.thresholds;
        Self::apply_env_var("VELO_RECIPES_ENDURANCE_CARBS_G", &mut t.endurance_carbs_g)?;
        Self::apply_env_var("VELO_RECIPES_ENDURANCE_CARB_RATIO", &mut t.endurance_carb_ratio)?;
        Self::apply_env_var(
            "VELO_RECIPES_PERFORMANCE_PROTEIN_G",
            &mut t.performance_protein_g,
        )?;
        Self::apply_env_var("VELO_RECIPES_PERFORMANCE_CARBS_G", &mut t.performance_carbs_g)?;
        Self::apply_env_var(
            "VELO_RECIPES_WEIGHT_LOSS_MAX_CALORIES",
            &mut t.weight_loss_max_calories,
        )?;
        Self::apply_env_var(
            "VELO_RECIPES_WEIGHT_LOSS_PROTEIN_RATIO",
            &mut t.weight_loss_protein_ratio,
        )?;
        Self::apply_env_var("VELO_RECIPES_RECOVERY_PROTEIN_G", &mut t.recovery_protein_g)?;
        Self::apply_env_var(
            "VELO_RECIPES_RECOVERY_PROTEIN_PER_KCAL",
            &mut t.recovery_protein_per_kcal,
        )?;
        Self::apply_env_var("VELO_RECIPES_HIGH_PROTEIN_G", &mut t.high_protein_g)?;
        Self::apply_env_var("VELO_RECIPES_DEFAULT_LIMIT", &mut self.default_limit)?;
        Ok(self)
    }
}
