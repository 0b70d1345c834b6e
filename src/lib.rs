// ABOUTME: Main library entry point for the Velo-Altitude recipe engine
// ABOUTME: Classifies cycling nutrition recipes and serves search and recommendation queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Velo-Altitude Recipe Engine
//!
//! Classification and recommendation engine for the Velo-Altitude cycling
//! platform's nutrition recipes.
//!
//! ## Features
//!
//! - **Validated catalog**: all-or-nothing loading of the static recipe asset
//! - **Rule-based tagging**: objective tags from macros, dietary tags from ingredients
//! - **Immutable index**: groups built once, shared freely between threads
//! - **Queries**: search, category/objective/dietary lookups, personalised recommendations
//!
//! ## Architecture
//!
//! - **Errors**: catalog-load failures, the only error the engine raises
//! - **Config**: classification thresholds with environment overrides
//! - **Logging**: `tracing` subscriber setup for host applications
//! - **Intelligence**: catalog, classifier, index and query API
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use velo_altitude::config::RecipeEngineConfig;
//! use velo_altitude::intelligence::recipes::{Catalog, RecipeEngine};
//!
//! let catalog = Catalog::bundled()?;
//! let engine = RecipeEngine::build(catalog, RecipeEngineConfig::global().clone());
//! let bars = engine.search("barre avoine", 5);
//! println!("{} matching recipes", bars.len());
//! # Ok::<(), velo_altitude::errors::CatalogError>(())
//! ```

/// Recipe engine configuration (thresholds, defaults, environment overrides)
pub mod config;

/// Catalog error types
pub mod errors;

/// Recipe classification and recommendation
pub mod intelligence;

/// Structured logging setup
pub mod logging;
