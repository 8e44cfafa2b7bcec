// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basic types for the glass pyramid.
//!
//! - Position: (row, column) address of a glass
//! - Container: a single glass with its overflow paths
//! - constants: capacity, row limits and search defaults

pub mod constants;
pub mod container;
pub mod position;

// Re-export for convenience
pub use constants::*;
pub use container::{Container, ContainerId};
pub use position::Position;
