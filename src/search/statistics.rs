// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters collected while a search runs, returned with its outcome.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Trial pours into the top glass.
    Pours,
    /// Pours after which the condition held.
    SufficientPours,
    /// Pours after which the condition did not hold.
    InsufficientPours,
    /// Iterations cut short because the midpoint was no longer representable.
    Stalls,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statistics {
    stats: [u64; COUNT],
    drained: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn add_drained(&mut self, volume: f64) {
        self.drained += volume;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Volume that left the pyramid over all trial pours.
    pub fn drained(&self) -> f64 {
        self.drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::Pours), 0);
        assert_eq!(stats.get(Counters::Stalls), 0);
        assert_eq!(stats.drained(), 0.0);
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Pours);
        stats.increment_counter(Counters::Pours);
        stats.increment_counter(Counters::SufficientPours);
        stats.add_drained(1.5);
        assert_eq!(stats.get(Counters::Pours), 2);
        assert_eq!(stats.get(Counters::SufficientPours), 1);
        assert_eq!(stats.get(Counters::InsufficientPours), 0);
        assert_eq!(stats.drained(), 1.5);
    }
}
