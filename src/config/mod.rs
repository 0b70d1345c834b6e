// ABOUTME: Configuration module for recipe engine thresholds and defaults
// ABOUTME: Re-exports configuration types and their error enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

/// Configuration error types
pub mod error;
/// Recipe engine configuration (classification thresholds, query defaults)
pub mod recipes;

pub use error::ConfigError;
pub use recipes::{ClassificationThresholds, RecipeEngineConfig};
