// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The glass pyramid.
//!
//! Glasses live in a flat arena ordered row by row, so every overflow edge
//! points from a lower index to a higher one. Glass `(r, c)` overflows into
//! `(r + 1, c)` on the left and `(r + 1, c + 1)` on the right; glasses in
//! the last row have no children and anything they spill is lost.
//!
//! # Overflow propagation
//!
//! Pouring is done with a pending-volume sweep in arena order instead of one
//! recursive call per edge. A glass with two parents therefore receives the
//! sum of both halves at once. The final fill levels are the same as with
//! per-edge recursion (once a glass is full, everything further it receives
//! overflows), but the work per pour is bounded by the number of glasses
//! rather than by the number of paths through the pyramid.

pub mod relevance;

pub use relevance::RelevantSet;

use tracing::debug;

use crate::error::{PyramidError, Result};
use crate::geometry::constants::{glass_count, MIN_ROWS};
use crate::geometry::{Container, ContainerId, Position};

/// Triangular arrangement of glasses.
#[derive(Debug, Clone)]
pub struct Pyramid {
    rows: usize,
    containers: Vec<Container>,
    pending: Vec<f64>,
}

impl Pyramid {
    /// Arena id of the top glass.
    pub const TOP: ContainerId = 0;

    /// Build an empty pyramid with `rows` rows, wired by Pascal adjacency.
    pub fn build(rows: usize) -> Result<Self> {
        if rows < MIN_ROWS {
            return Err(PyramidError::InvalidSize {
                rows,
                min: MIN_ROWS,
            });
        }

        let mut containers = Vec::with_capacity(glass_count(rows));
        for row in 0..rows {
            for column in 0..=row {
                let position = Position::new(row, column);
                let mut container = Container::new(position);
                if row + 1 < rows {
                    container.set_left_child(Some(position.left_child().index()));
                    container.set_right_child(Some(position.right_child().index()));
                }
                containers.push(container);
            }
        }

        debug!(rows, glasses = containers.len(), "built pyramid");

        Ok(Self {
            rows,
            pending: vec![0.0; containers.len()],
            containers,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of glasses.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn top(&self) -> &Container {
        &self.containers[Self::TOP]
    }

    /// Arena id of the glass at `(row, column)`.
    pub fn id_of(&self, row: usize, column: usize) -> Result<ContainerId> {
        match Position::try_new(row, column) {
            Some(position) if position.fits(self.rows) => Ok(position.index()),
            _ => Err(PyramidError::OutOfRange {
                row,
                column,
                rows: self.rows,
            }),
        }
    }

    /// Bounds-checked lookup by `(row, column)`.
    pub fn get_container(&self, row: usize, column: usize) -> Result<&Container> {
        let id = self.id_of(row, column)?;
        Ok(&self.containers[id])
    }

    /// Lookup by arena id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this pyramid.
    pub fn container(&self, id: ContainerId) -> &Container {
        &self.containers[id]
    }

    /// All glasses in arena order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Pour `amount` into the top glass. Returns the volume that drained out
    /// of the pyramid through missing overflow paths.
    pub fn pour_at_top(&mut self, amount: f64) -> f64 {
        self.add_water(Self::TOP, amount)
    }

    /// Pour `amount` into glass `id` and let the overflow run downhill.
    ///
    /// Returns the volume lost past the open edges. Non-positive amounts
    /// have no effect.
    pub fn add_water(&mut self, id: ContainerId, amount: f64) -> f64 {
        if amount <= 0.0 {
            return 0.0;
        }

        let mut drained = 0.0;
        self.pending[id] = amount;

        for current in id..self.containers.len() {
            let incoming = std::mem::take(&mut self.pending[current]);
            if incoming <= 0.0 {
                continue;
            }

            let container = &mut self.containers[current];
            let overflow = container.add_volume(incoming);
            if overflow <= 0.0 {
                continue;
            }

            let half = overflow / 2.0;
            for child in container.children() {
                match child {
                    Some(child) => self.pending[child] += half,
                    None => drained += half,
                }
            }
        }

        drained
    }

    /// Empty every glass, pruned or not.
    pub fn reset_all(&mut self) {
        self.containers.iter_mut().for_each(Container::reset_volume);
    }

    /// Remove every overflow edge that is not on a path from the top to `target`.
    ///
    /// Glasses outside the returned set keep their own edges but can no
    /// longer be reached from the top. Running this again with the same
    /// target changes nothing.
    pub fn prune(&mut self, target: ContainerId) -> RelevantSet {
        let relevant = RelevantSet::discover(&self.containers, Self::TOP, target);

        let mut removed = 0;
        for id in relevant.iter() {
            let container = &mut self.containers[id];
            let [left, right] = container.children();
            if left.is_some() && !relevant.contains_link(left) {
                container.set_left_child(None);
                removed += 1;
            }
            if right.is_some() && !relevant.contains_link(right) {
                container.set_right_child(None);
                removed += 1;
            }
        }

        debug!(
            glass = %self.containers[target].position(),
            relevant = relevant.len(),
            removed,
            "pruned pyramid"
        );
        relevant
    }

    /// Fill levels, one vector per row.
    pub fn fill_levels(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|row| {
                let start = glass_count(row);
                self.containers[start..=start + row]
                    .iter()
                    .map(Container::current_volume)
                    .collect()
            })
            .collect()
    }

    /// Total volume held by all glasses.
    pub fn total_volume(&self) -> f64 {
        self.containers.iter().map(Container::current_volume).sum()
    }
}
