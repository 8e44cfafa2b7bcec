// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for building and addressing pyramids, and for loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or addressing a pyramid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PyramidError {
    /// Row count below the smallest supported pyramid.
    #[error("Pyramid needs at least {min} row(s), got {rows}")]
    InvalidSize { rows: usize, min: usize },

    /// Lookup outside the built shape.
    #[error("Glass ({row}, {column}) is outside a pyramid of {rows} row(s)")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
    },
}

/// Errors raised while loading search configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, PyramidError>;
