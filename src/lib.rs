// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal pour search for a pyramid of overflowing glasses.
//!
//! Water is poured into the top glass of a triangular pyramid. Every glass
//! holds one unit; whatever it cannot hold is split evenly between the two
//! glasses below it, and anything spilled from a glass without a neighbour
//! below is lost. Given a target glass, the search finds the smallest volume
//! that must be poured into the top for the target to become full.
//!
//! # Architecture
//!
//! - [`geometry`]: positions, the single-glass [`Container`] and constants
//! - [`pyramid`]: the arena of glasses, overflow propagation and pruning
//! - [`search`]: bisection over the poured volume, driven by a monotone
//!   [`FillPredicate`]
//! - [`config`]: precision, bounds and reporting rate, loadable from TOML
//!
//! # Search Algorithm
//!
//! 1. **Prune**: keep only the overflow edges on some path from the top to
//!    the target, so trial pours touch no other glass.
//! 2. **Bisect**: pour the midpoint of `[low, high]`, check whether the
//!    target is full, move one end, empty the pyramid, repeat.
//!
//! Bisection is valid because pouring more into the top never lowers the
//! level of any glass, so "the target is full" is monotone in the volume.

pub mod config;
pub mod error;
pub mod geometry;
pub mod pyramid;
pub mod search;

// Re-export commonly used types
pub use config::SearchConfig;
pub use error::{ConfigError, PyramidError};
pub use geometry::{Container, ContainerId, Position};
pub use pyramid::{Pyramid, RelevantSet};
pub use search::{find_minimal_pour, FillPredicate, FillSearch, SearchOutcome};
