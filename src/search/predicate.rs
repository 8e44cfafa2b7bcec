// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conditions the search inverts.
//!
//! A fill predicate is checked after every trial pour. Bisection is only
//! valid for predicates that are monotone in the poured volume: once the
//! condition holds for some volume it must hold for every larger one. Any
//! threshold on the fill level of a single glass qualifies, because pouring
//! more into the top never lowers the level of a glass below it.
//!
//! # Example
//!
//! ```
//! use glass_pyramid::pyramid::Pyramid;
//! use glass_pyramid::search::{FillPredicate, TargetFull};
//!
//! let mut pyramid = Pyramid::build(2).unwrap();
//! let target = pyramid.id_of(1, 0).unwrap();
//! let full = TargetFull::new(target);
//!
//! pyramid.pour_at_top(2.0);
//! assert!(!full.is_satisfied(&pyramid));
//!
//! pyramid.reset_all();
//! pyramid.pour_at_top(3.0);
//! assert!(full.is_satisfied(&pyramid));
//! ```

use std::fmt::Debug;

use crate::geometry::ContainerId;
use crate::pyramid::Pyramid;

/// Monotone condition on a pyramid after a pour.
pub trait FillPredicate: Debug {
    /// The glass the condition is about. Only paths to it are simulated.
    fn target(&self) -> ContainerId;

    /// Whether the condition holds for the pyramid's current fill levels.
    fn is_satisfied(&self, pyramid: &Pyramid) -> bool;

    /// Name used in log output.
    fn name(&self) -> &str {
        "anonymous"
    }
}

/// The target glass is completely full.
///
/// Exact equality with the capacity counts as full; there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetFull {
    target: ContainerId,
}

impl TargetFull {
    pub fn new(target: ContainerId) -> Self {
        Self { target }
    }
}

impl FillPredicate for TargetFull {
    fn target(&self) -> ContainerId {
        self.target
    }

    fn is_satisfied(&self, pyramid: &Pyramid) -> bool {
        pyramid.container(self.target).is_full()
    }

    fn name(&self) -> &str {
        "TargetFull"
    }
}

/// The target glass holds at least `level` units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetLevel {
    target: ContainerId,
    level: f64,
}

impl TargetLevel {
    /// `level` is clamped to `[0, capacity]` when checked, so a level above
    /// capacity behaves like [`TargetFull`].
    pub fn new(target: ContainerId, level: f64) -> Self {
        Self { target, level }
    }
}

impl FillPredicate for TargetLevel {
    fn target(&self) -> ContainerId {
        self.target
    }

    fn is_satisfied(&self, pyramid: &Pyramid) -> bool {
        let glass = pyramid.container(self.target);
        glass.current_volume() >= self.level.clamp(0.0, glass.max_volume())
    }

    fn name(&self) -> &str {
        "TargetLevel"
    }
}
