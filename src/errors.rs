// ABOUTME: Error types raised while loading and validating a recipe catalog
// ABOUTME: Catalog problems are fatal to engine construction; queries never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Velo-Altitude

//! # Catalog Errors
//!
//! The engine has exactly one failure mode: a catalog that cannot be trusted.
//! Every variant of [`CatalogError`] describes an invalid catalog entry and is
//! returned synchronously from the loader, before any index is built. Query
//! operations model "nothing found" as an empty result instead.

use thiserror::Error;

/// Invalid catalog data detected at load time
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Document is not valid JSON or does not have the catalog shape
    #[error("invalid catalog entry: malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Record has no id, or a blank one
    #[error("invalid catalog entry at index {index}: missing required field `id`")]
    MissingId {
        /// Position of the record in the catalog
        index: usize,
    },

    /// Two records share an id
    #[error(
        "invalid catalog entry at index {index}: duplicate id `{id}` (first seen at index {first_index})"
    )]
    DuplicateId {
        /// The repeated identifier
        id: String,
        /// Position of the first record carrying this id
        first_index: usize,
        /// Position of the offending record
        index: usize,
    },

    /// Record is present but one of its fields is unusable
    #[error("invalid catalog entry at index {index}: {reason}")]
    InvalidEntry {
        /// Position of the record in the catalog
        index: usize,
        /// What is wrong with the record
        reason: String,
    },
}

impl CatalogError {
    /// Build an [`CatalogError::InvalidEntry`]
    #[must_use]
    pub fn invalid_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            index,
            reason: reason.into(),
        }
    }

    /// Catalog position of the offending record, when known
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Malformed(_) => None,
            Self::MissingId { index }
            | Self::DuplicateId { index, .. }
            | Self::InvalidEntry { index, .. } => Some(*index),
        }
    }
}

/// Result alias for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;
