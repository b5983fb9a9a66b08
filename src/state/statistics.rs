// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are stored in the context and incremented by the profile builder
//! and the propagation driver. They are reported at `info` level after a run.

use log::info;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Profile sets composed row by row from the transition tables.
    ProfileSetsComposed,
    /// Profile sets derived by reflecting the set of a mirrored column.
    ProfileSetsReflected,
    /// Lookups answered by an already cached profile set.
    ProfileCacheHits,
    /// Profile sets that turned out empty.
    EmptyProfileSets,
    /// Columns folded into the propagation vector.
    ColumnsPropagated,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Log every counter at `info` level.
    pub fn report(&self) {
        for counter in Counters::iter() {
            let name: &'static str = counter.into();
            info!("[Statistics] {}: {}", name, self.get(counter));
        }
    }
}
