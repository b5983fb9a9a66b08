// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration and grid validation.
//!
//! Counting itself cannot fail: every transformation is total once the
//! configuration has been accepted. All of these errors are therefore raised
//! before the dynamic program starts, and none of them is worth retrying.

use thiserror::Error;

/// Errors rejecting a configuration, a transition table or an input grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Grid height is zero or too large for `u32` profiles and the propagation vector.
    #[error("grid height {rows} is outside the supported range 1..={max}")]
    RowsOutOfRange { rows: usize, max: usize },

    /// Grid width is zero.
    #[error("grid width must be at least 1 column")]
    EmptyWidth,

    /// The accumulator cannot hold the largest count this grid shape can produce.
    #[error(
        "{precision_bits}-bit accumulator is too narrow for a {rows}x{cols} grid \
         (counts may need {required_bits} bits)"
    )]
    InsufficientPrecision {
        rows: usize,
        cols: usize,
        precision_bits: u64,
        required_bits: u64,
    },

    /// A transition table holds a boundary state wider than 2 bits.
    #[error("transition ({entry}, {exit}) in table {table} has a state wider than 2 bits")]
    StateOutOfRange { table: &'static str, entry: u8, exit: u8 },

    /// The grid does not have the configured shape.
    #[error("grid is {actual_rows}x{actual_cols} but the configuration expects {rows}x{cols}")]
    GridShapeMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// A grid row has a different length from the first row.
    #[error("grid row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    /// A grid needs at least one row and one column.
    #[error("grid has no cells")]
    EmptyGrid,

    /// A grid pattern contains a character other than `#` or `.`.
    #[error("unexpected character {ch:?} at row {row}, column {col} of grid pattern")]
    InvalidCell { ch: char, row: usize, col: usize },
}
