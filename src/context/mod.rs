// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count context combining configuration, MEMO data and statistics.
//!
//! The CountContext owns everything one configuration needs:
//! - the validated [`CountConfig`];
//! - the [`ProfileBuilder`] and its cache of column profile sets (MEMO);
//! - the [`Statistics`] counters.
//!
//! Nothing is global, so contexts for different configurations can run in
//! the same process without sharing a cache.
//!
//! # Example
//!
//! ```
//! use preimage_count::config::CountConfig;
//! use preimage_count::context::CountContext;
//! use preimage_count::grid::Grid;
//!
//! let mut ctx = CountContext::new(CountConfig::new(3, 3)).unwrap();
//! let grid: Grid = "#.#\n.#.\n#.#".parse().unwrap();
//! assert_eq!(ctx.count(&grid).unwrap().to_string(), "4");
//! ```

use crate::config::CountConfig;
use crate::errors::ConfigError;
use crate::grid::{ColumnCode, Grid};
use crate::memo::{ColumnProfileSet, ProfileBuilder};
use crate::propagation::PropagationDriver;
use crate::state::statistics::{Counters, Statistics};
use log::{debug, info};
use num_bigint::BigUint;

/// Everything needed to count preimages for one configuration.
#[derive(Debug, Clone)]
pub struct CountContext {
    config: CountConfig,
    /// Column profile sets (MEMO), filled lazily.
    pub profiles: ProfileBuilder,
    pub statistics: Statistics,
}

impl CountContext {
    /// Validate `config` and create an empty context for it.
    pub fn new(config: CountConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let profiles = ProfileBuilder::new(config.rows, config.tables.clone());
        Ok(Self {
            config,
            profiles,
            statistics: Statistics::new(),
        })
    }

    /// Context for the reference configuration.
    pub fn reference() -> Result<Self, ConfigError> {
        Self::new(CountConfig::reference())
    }

    pub fn config(&self) -> &CountConfig {
        &self.config
    }

    /// Profile set of one column encoding, built on first use.
    pub fn profile_set(&mut self, code: ColumnCode) -> &ColumnProfileSet {
        self.profiles.profile_set(code, &mut self.statistics)
    }

    /// Count the preimages of `grid`.
    ///
    /// The only possible error is a grid that does not have the configured
    /// shape. A column with no configuration makes the count 0, which is a
    /// result, not an error.
    pub fn count(&mut self, grid: &Grid) -> Result<BigUint, ConfigError> {
        self.config.check_grid(grid)?;
        let codes = grid.encode_columns();
        info!(
            "[CountContext] Counting preimages of a {}x{} grid...",
            self.config.rows, self.config.cols
        );
        let total = self.count_columns(&codes);
        debug_assert!(total.bits() <= self.config.precision_bits);
        info!(
            "[CountContext] Done ({} distinct columns, {}-bit total).",
            self.profiles.cached(),
            total.bits()
        );
        self.statistics.report();
        Ok(total)
    }

    /// Sweep the given column encodings left to right.
    ///
    /// `codes` must be non-empty and match the configured height.
    fn count_columns(&mut self, codes: &[ColumnCode]) -> BigUint {
        let mut driver = PropagationDriver::new(self.config.rows);
        for (col, &code) in codes.iter().enumerate() {
            let set = self.profiles.profile_set(code, &mut self.statistics);
            if col == 0 {
                driver.seed(set);
            } else {
                driver.advance(set);
            }
            self.statistics.increment_counter(Counters::ColumnsPropagated);
            debug!(
                "[CountContext] column {} {}: {} pairs, peak count {}",
                col,
                code.display(self.config.rows),
                set.len(),
                driver.peak()
            );
        }
        driver.total()
    }
}
