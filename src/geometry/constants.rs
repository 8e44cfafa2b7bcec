// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants shared by the pyramid model, the search and the driver.

/// Capacity of every glass in the pyramid.
pub const CAPACITY: f64 = 1.0;

/// Smallest pyramid that can be built (a single glass).
pub const MIN_ROWS: usize = 1;

/// Smallest target row the driver accepts (1-based).
pub const MIN_TARGET_ROW: usize = 2;

/// Largest target row the driver accepts (1-based).
pub const MAX_TARGET_ROW: usize = 50;

/// Width of the bisection interval at which the search stops.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Upper end of the initial bisection interval.
///
/// Filling the last row of an `n`-row pyramid never needs more than `2^n`
/// units, so this is far beyond anything the driver can ask for while
/// staying well inside the `f64` range.
pub const DEFAULT_UPPER_BOUND: f64 = 1e50;

/// Seconds taken to pour one unit of water into the top glass.
pub const SECONDS_PER_UNIT: f64 = 10.0;

/// Number of glasses in a pyramid with `rows` rows.
pub const fn glass_count(rows: usize) -> usize {
    rows * (rows + 1) / 2
}
