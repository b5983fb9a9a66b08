// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Left-to-right propagation of counts across columns.
//!
//! The propagation vector has one arbitrary-precision count per profile: the
//! number of ways to label the columns processed so far so that the last
//! column's exit profile is that index. Each new column is a join on exact
//! index equality: a pair (entry, exit) of the column moves the count at
//! `entry` into `exit`.
//!
//! # Double buffering
//!
//! Two vectors are owned by the driver. Each column zeroes the scratch
//! vector, fills it from the current one, and the two are swapped. No vector
//! is reallocated after construction.
//!
//! # Example
//!
//! ```
//! use preimage_count::memo::{ColumnProfileSet, ProfilePair};
//! use preimage_count::propagation::PropagationDriver;
//!
//! // A one-row column whose only configuration keeps profile 0b01.
//! let set = ColumnProfileSet::from_pairs(vec![ProfilePair::new(0b01, 0b01)]);
//!
//! let mut driver = PropagationDriver::new(1);
//! driver.seed(&set);
//! driver.advance(&set);
//! assert_eq!(driver.total().to_string(), "1");
//! ```

pub mod accumulator;

pub use accumulator::{accumulate, render};

use crate::grid::profile_count;
use crate::memo::ColumnProfileSet;
use num_bigint::BigUint;
use num_traits::Zero;

/// Double-buffered propagation vectors for one sweep.
#[derive(Debug, Clone)]
pub struct PropagationDriver {
    current: Vec<BigUint>,
    scratch: Vec<BigUint>,
    columns: usize,
}

impl PropagationDriver {
    /// Create zeroed vectors for columns of `rows` cells.
    pub fn new(rows: usize) -> Self {
        let len = profile_count(rows);
        Self {
            current: vec![BigUint::zero(); len],
            scratch: vec![BigUint::zero(); len],
            columns: 0,
        }
    }

    /// Start the sweep with the leftmost column.
    ///
    /// The leftmost column has no predecessor, so each of its pairs counts
    /// once under its exit profile and its entry profile is ignored.
    pub fn seed(&mut self, set: &ColumnProfileSet) {
        self.current.iter_mut().for_each(Zero::set_zero);
        for pair in set.iter() {
            self.current[pair.exit as usize] += 1u32;
        }
        self.columns = 1;
    }

    /// Fold one more column into the vector.
    ///
    /// An empty set leaves the vector identically zero.
    pub fn advance(&mut self, set: &ColumnProfileSet) {
        self.scratch.iter_mut().for_each(Zero::set_zero);
        for pair in set.iter() {
            let count = &self.current[pair.entry as usize];
            if !count.is_zero() {
                self.scratch[pair.exit as usize] += count;
            }
        }
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.columns += 1;
    }

    /// Counts per exit profile after the columns processed so far.
    pub fn counts(&self) -> &[BigUint] {
        &self.current
    }

    /// Number of columns processed so far.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of labelings of the columns processed so far.
    pub fn total(&self) -> BigUint {
        accumulate(&self.current)
    }

    /// Whether no labeling survives, i.e. every count is zero.
    pub fn is_dead(&self) -> bool {
        self.current.iter().all(Zero::is_zero)
    }

    /// Count of the single most frequent exit profile, for diagnostics.
    pub fn peak(&self) -> BigUint {
        self.current
            .iter()
            .max()
            .cloned()
            .unwrap_or_else(BigUint::zero)
    }
}
