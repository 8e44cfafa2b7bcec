// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of overflow propagation that the search relies on.

mod common;

use common::{assert_close, pyramid_with_target, reference_pour, EPSILON};
use glass_pyramid::geometry::constants::CAPACITY;
use glass_pyramid::Pyramid;

const AMOUNTS: [f64; 8] = [0.0, 0.3, 1.0, 2.0, 3.0, 7.5, 19.25, 100.0];

#[test]
fn test_volume_is_conserved() {
    for rows in 1..=6 {
        for amount in AMOUNTS {
            let mut pyramid = Pyramid::build(rows).unwrap();
            let drained = pyramid.pour_at_top(amount);
            assert_close(pyramid.total_volume() + drained, amount, EPSILON);
        }
    }
}

#[test]
fn test_matches_per_edge_recursion() {
    for rows in 1..=7 {
        for amount in AMOUNTS {
            let mut pyramid = Pyramid::build(rows).unwrap();
            let drained = pyramid.pour_at_top(amount);
            let (expected, expected_drained) = reference_pour(rows, amount);

            for (actual_row, expected_row) in pyramid.fill_levels().iter().zip(&expected) {
                for (&actual, &expected) in actual_row.iter().zip(expected_row) {
                    assert_close(actual, expected, EPSILON);
                }
            }
            assert_close(drained, expected_drained, EPSILON);
        }
    }
}

#[test]
fn test_fill_level_is_monotone_in_volume() {
    for (row, column) in [(0, 0), (2, 0), (3, 1), (4, 2), (5, 5)] {
        let (mut pyramid, target) = pyramid_with_target(6, row, column);
        let mut previous = 0.0;
        for step in 0..200 {
            pyramid.pour_at_top(step as f64 * 0.25);
            let level = pyramid.container(target).current_volume();
            assert!(level >= previous, "level fell at step {} for ({}, {})", step, row, column);
            previous = level;
            pyramid.reset_all();
        }
    }
}

#[test]
fn test_reset_empties_every_glass() {
    let (mut pyramid, target) = pyramid_with_target(6, 4, 1);
    pyramid.pour_at_top(12.0);
    pyramid.prune(target);
    pyramid.reset_all();
    assert!(pyramid.containers().iter().all(|c| c.current_volume() == 0.0));

    pyramid.reset_all();
    assert_eq!(pyramid.total_volume(), 0.0);
}

#[test]
fn test_pruning_does_not_change_target_level() {
    for rows in 2..=6 {
        for row in 0..rows {
            for column in 0..=row {
                for amount in AMOUNTS {
                    let (mut full, target) = pyramid_with_target(rows, row, column);
                    let (mut pruned, _) = pyramid_with_target(rows, row, column);
                    pruned.prune(target);

                    full.pour_at_top(amount);
                    pruned.pour_at_top(amount);
                    assert_close(
                        pruned.container(target).current_volume(),
                        full.container(target).current_volume(),
                        EPSILON,
                    );
                }
            }
        }
    }
}

#[test]
fn test_pruned_glasses_stay_empty() {
    let (mut pyramid, target) = pyramid_with_target(5, 3, 1);
    let relevant = pyramid.prune(target);
    pyramid.pour_at_top(1000.0);

    for (id, container) in pyramid.containers().iter().enumerate() {
        if !relevant.contains(id) {
            assert_eq!(container.current_volume(), 0.0, "{}", container.position());
        }
    }
}

#[test]
fn test_levels_stay_within_capacity() {
    let mut pyramid = Pyramid::build(8).unwrap();
    for amount in AMOUNTS.iter().chain(&[0.1, 5.0, -2.0, 40.0]) {
        pyramid.pour_at_top(*amount);
        for container in pyramid.containers() {
            let level = container.current_volume();
            assert!((0.0..=CAPACITY).contains(&level), "{}", level);
        }
    }
}

#[test]
fn test_repeated_pours_accumulate() {
    let mut once = Pyramid::build(4).unwrap();
    once.pour_at_top(6.0);

    let mut twice = Pyramid::build(4).unwrap();
    twice.pour_at_top(2.5);
    twice.pour_at_top(3.5);

    for (a, b) in once.fill_levels().iter().flatten().zip(twice.fill_levels().iter().flatten()) {
        assert_close(*a, *b, EPSILON);
    }
}
