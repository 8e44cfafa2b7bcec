// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use glass_pyramid::{ContainerId, Pyramid};

/// Absolute tolerance for comparing simulated volumes.
pub const EPSILON: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// Build a pyramid and resolve a target in one step.
pub fn pyramid_with_target(rows: usize, row: usize, column: usize) -> (Pyramid, ContainerId) {
    let pyramid = Pyramid::build(rows).unwrap();
    let target = pyramid.id_of(row, column).unwrap();
    (pyramid, target)
}

/// Straightforward per-edge recursion over an unpruned pyramid.
///
/// Each overflowing glass calls into both children immediately, so a glass
/// with two parents receives its halves one at a time. Returns the fill
/// levels per row and the drained volume.
pub fn reference_pour(rows: usize, amount: f64) -> (Vec<Vec<f64>>, f64) {
    fn add(levels: &mut [Vec<f64>], row: usize, column: usize, amount: f64) -> f64 {
        if row == levels.len() {
            return amount;
        }
        if amount <= 0.0 {
            return 0.0;
        }
        let level = &mut levels[row][column];
        if *level + amount <= 1.0 {
            *level += amount;
            return 0.0;
        }
        let half = (*level + amount - 1.0) / 2.0;
        *level = 1.0;
        add(levels, row + 1, column, half) + add(levels, row + 1, column + 1, half)
    }

    let mut levels: Vec<Vec<f64>> = (0..rows).map(|row| vec![0.0; row + 1]).collect();
    let drained = add(&mut levels, 0, 0, amount);
    (levels, drained)
}
