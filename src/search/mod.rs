// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bisection search for the minimal pour.
//!
//! The search keeps an interval `[low, high]` where `low` is known to be
//! insufficient and `high` is known (or assumed, initially) to be enough.
//! Each iteration pours the midpoint into a freshly emptied pyramid, checks
//! the predicate, and moves one end of the interval. It stops once the
//! interval is no wider than the configured precision and returns `high`.
//!
//! Before the first pour the pyramid is pruned down to the glasses that can
//! reach the target, so each trial pour only touches those.
//!
//! Large targets need volumes around `2^rows`, where adjacent `f64` values
//! can be further apart than the precision. When the midpoint can no longer
//! be separated from the ends of the interval the search stops there too,
//! with an interval one representable step wide.
//!
//! # Example
//!
//! ```
//! use glass_pyramid::pyramid::Pyramid;
//! use glass_pyramid::search::find_minimal_pour;
//!
//! let mut pyramid = Pyramid::build(2).unwrap();
//! let target = pyramid.id_of(1, 0).unwrap();
//! let volume = find_minimal_pour(&mut pyramid, target);
//! assert!((volume - 3.0).abs() <= 1e-4);
//! ```

pub mod predicate;
pub mod statistics;

pub use predicate::{FillPredicate, TargetFull, TargetLevel};
pub use statistics::{Counters, Statistics};

use tracing::{info, trace};

use crate::config::SearchConfig;
use crate::geometry::ContainerId;
use crate::pyramid::Pyramid;

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Smallest volume found that satisfies the predicate (the final `high`).
    pub volume: f64,

    /// Largest volume found that does not satisfy it (the final `low`).
    pub low: f64,

    pub statistics: Statistics,
}

impl SearchOutcome {
    /// Width of the final interval.
    pub fn width(&self) -> f64 {
        self.volume - self.low
    }

    /// Number of trial pours made.
    pub fn pours(&self) -> u64 {
        self.statistics.get(Counters::Pours)
    }

    /// Time needed to pour the volume at the given rate.
    pub fn fill_time(&self, seconds_per_unit: f64) -> f64 {
        self.volume * seconds_per_unit
    }
}

/// Bisection over the poured volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSearch {
    precision: f64,
    upper_bound: f64,
}

impl FillSearch {
    /// Create a search from a validated configuration.
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            precision: config.precision,
            upper_bound: config.upper_bound,
        }
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Find the minimal pour that fills `target` completely.
    ///
    /// `target` must be an id from `pyramid` (see [`Pyramid::id_of`]). The
    /// pyramid is pruned for that target and left empty afterwards.
    pub fn run(&self, pyramid: &mut Pyramid, target: ContainerId) -> SearchOutcome {
        self.run_until(pyramid, &TargetFull::new(target))
    }

    /// Find the minimal pour after which `predicate` holds.
    pub fn run_until<P>(&self, pyramid: &mut Pyramid, predicate: &P) -> SearchOutcome
    where
        P: FillPredicate + ?Sized,
    {
        let mut statistics = Statistics::new();
        let mut low = 0.0;
        let mut high = self.upper_bound;

        pyramid.prune(predicate.target());
        pyramid.reset_all();

        while high - low > self.precision {
            let mid = low + (high - low) / 2.0;
            if mid <= low || mid >= high {
                statistics.increment_counter(Counters::Stalls);
                break;
            }

            let drained = pyramid.pour_at_top(mid);
            statistics.increment_counter(Counters::Pours);
            statistics.add_drained(drained);

            if predicate.is_satisfied(pyramid) {
                statistics.increment_counter(Counters::SufficientPours);
                high = mid;
            } else {
                statistics.increment_counter(Counters::InsufficientPours);
                low = mid;
            }
            trace!(low, high, "narrowed interval");

            pyramid.reset_all();
        }

        info!(
            predicate = predicate.name(),
            glass = %pyramid.container(predicate.target()).position(),
            volume = high,
            pours = statistics.get(Counters::Pours),
            "search converged"
        );

        SearchOutcome {
            volume: high,
            low,
            statistics,
        }
    }
}

impl Default for FillSearch {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

/// Minimal volume that fills `target`, with the default precision and bound.
pub fn find_minimal_pour(pyramid: &mut Pyramid, target: ContainerId) -> f64 {
    FillSearch::default().run(pyramid, target).volume
}
