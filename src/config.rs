// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting configuration.
//!
//! A configuration fixes the grid shape, the transition tables and the
//! declared accumulator width. It is validated once, before any profile set
//! is built, so an undersized accumulator is reported as a configuration
//! error instead of being discovered mid-run.

use crate::errors::ConfigError;
use crate::grid::{required_bits, Grid, COLS, MAX_ROWS, PRECISION_BITS, ROWS};
use crate::transition::TransitionTables;
use log::debug;

/// Shape, tables and precision for one count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub rows: usize,
    pub cols: usize,
    pub precision_bits: u64,
    pub tables: TransitionTables,
}

impl CountConfig {
    /// A rows×cols configuration with the reference tables and precision.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            precision_bits: PRECISION_BITS,
            tables: TransitionTables::reference(),
        }
    }

    /// The configuration run by the binary.
    pub fn reference() -> Self {
        Self::new(ROWS, COLS)
    }

    /// Replace the transition tables.
    pub fn with_tables(mut self, tables: TransitionTables) -> Self {
        self.tables = tables;
        self
    }

    /// Replace the declared accumulator width.
    pub fn with_precision_bits(mut self, precision_bits: u64) -> Self {
        self.precision_bits = precision_bits;
        self
    }

    /// Accumulator bits this shape and these tables can need.
    pub fn required_bits(&self) -> u64 {
        required_bits(self.rows, self.cols, self.tables.largest_len())
    }

    /// Check the shape and the accumulator width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(ConfigError::RowsOutOfRange {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        if self.cols == 0 {
            return Err(ConfigError::EmptyWidth);
        }
        let required_bits = self.required_bits();
        if required_bits > self.precision_bits {
            return Err(ConfigError::InsufficientPrecision {
                rows: self.rows,
                cols: self.cols,
                precision_bits: self.precision_bits,
                required_bits,
            });
        }
        debug!(
            "[CountConfig] {}x{} grid needs {} of {} accumulator bits",
            self.rows, self.cols, required_bits, self.precision_bits
        );
        Ok(())
    }

    /// Check that `grid` has the configured shape.
    pub fn check_grid(&self, grid: &Grid) -> Result<(), ConfigError> {
        if grid.rows() != self.rows || grid.cols() != self.cols {
            return Err(ConfigError::GridShapeMismatch {
                rows: self.rows,
                cols: self.cols,
                actual_rows: grid.rows(),
                actual_cols: grid.cols(),
            });
        }
        Ok(())
    }
}

impl Default for CountConfig {
    fn default() -> Self {
        Self::reference()
    }
}
