// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Container type for a single glass.
//!
//! A container holds up to [`CAPACITY`] units. Anything poured past that is
//! overflow, which the pyramid splits evenly between the two glasses below.
//! Children are stored as arena ids rather than references because a glass
//! in the interior of the pyramid has two parents.

use crate::geometry::constants::CAPACITY;
use crate::geometry::Position;

/// Index of a container in the pyramid's arena.
pub type ContainerId = usize;

/// One glass of the pyramid.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    position: Position,
    capacity: f64,
    fill_level: f64,
    left_child: Option<ContainerId>,
    right_child: Option<ContainerId>,
}

impl Container {
    /// Create an empty container with no overflow paths.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            capacity: CAPACITY,
            fill_level: 0.0,
            left_child: None,
            right_child: None,
        }
    }

    /// Add `amount` to this glass and return the overflow it cannot hold.
    ///
    /// Non-positive amounts are ignored. When the glass overflows it is left
    /// exactly full and the excess is returned for the caller to distribute.
    pub fn add_volume(&mut self, amount: f64) -> f64 {
        if amount <= 0.0 {
            return 0.0;
        }

        if self.fill_level + amount <= self.capacity {
            self.fill_level += amount;
            return 0.0;
        }

        let overflow = self.fill_level + amount - self.capacity;
        self.fill_level = self.capacity;
        overflow
    }

    pub fn reset_volume(&mut self) {
        self.fill_level = 0.0;
    }

    pub fn current_volume(&self) -> f64 {
        self.fill_level
    }

    pub fn max_volume(&self) -> f64 {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.fill_level >= self.capacity
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn left_child(&self) -> Option<ContainerId> {
        self.left_child
    }

    pub fn right_child(&self) -> Option<ContainerId> {
        self.right_child
    }

    pub fn set_left_child(&mut self, child: Option<ContainerId>) {
        self.left_child = child;
    }

    pub fn set_right_child(&mut self, child: Option<ContainerId>) {
        self.right_child = child;
    }

    /// Both overflow paths, absent ones included.
    pub fn children(&self) -> [Option<ContainerId>; 2] {
        [self.left_child, self.right_child]
    }
}
