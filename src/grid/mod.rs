// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The input grid of category flags and its column encoding.
//!
//! - `constants`: reference grid shape and derived sizes
//! - `column`: packed column codes and bit reflection
//!
//! # Examples
//!
//! ```
//! use preimage_count::grid::Grid;
//!
//! let grid: Grid = "#.#\n.#.\n#.#".parse().unwrap();
//! assert_eq!(grid.rows(), 3);
//! assert_eq!(grid.cols(), 3);
//!
//! let codes: Vec<u32> = grid.encode_columns().iter().map(|c| c.bits()).collect();
//! assert_eq!(codes, vec![0b101, 0b010, 0b101]);
//! ```

pub mod column;
pub mod constants;

pub use column::{reflect_bits, ColumnCode};
pub use constants::*;

use crate::errors::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A rows×cols grid of category flags, stored row-major.
///
/// `true` is category 1, `false` category 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// A grid with every cell in category 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// The reference grid: `ROWS`×`COLS`, all category 0.
    ///
    /// This maximizes the number of preimages, which makes it the stress case.
    pub fn reference() -> Self {
        Self::new(ROWS, COLS)
    }

    /// Build a grid from rows of flags.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, ConfigError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(ConfigError::RaggedRow {
                row,
                len: cells.len(),
                expected,
            });
        }
        let height = rows.len();
        Ok(Self {
            rows: height,
            cols: expected,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Category flag at (`row`, `col`).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Set the category flag at (`row`, `col`).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, flag: bool) {
        self.cells[row * self.cols + col] = flag;
    }

    /// Pack each column into a [`ColumnCode`], left to right.
    pub fn encode_columns(&self) -> Vec<ColumnCode> {
        (0..self.cols)
            .map(|col| ColumnCode::from_flags((0..self.rows).map(|row| self.get(row, col))))
            .collect()
    }
}

impl FromStr for Grid {
    type Err = ConfigError;

    /// Parse one line per row, `#` for category 1 and `.` for category 0.
    ///
    /// Surrounding whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        _ => Err(ConfigError::InvalidCell { ch, row, col }),
                    })
                    .collect::<Result<Vec<bool>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", if self.get(row, col) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
