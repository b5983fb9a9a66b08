// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the reference grid and derived sizes.
//!
//! The binary counts preimages of one fixed `ROWS`×`COLS` grid. The library
//! accepts other shapes through [`crate::config::CountConfig`], but every
//! shape goes through the same size helpers defined here.
//!
//! # Precision
//!
//! Counts are kept in unbounded integers, but a configuration still declares
//! an accumulator width and is rejected when that width could be exceeded.
//! For the reference grid, a preimage is a 10×51 boolean grid, so no count
//! can reach 2^510. 512 bits is enough.

/// Height of the reference grid.
pub const ROWS: usize = 9;

/// Width of the reference grid.
pub const COLS: usize = 50;

/// Declared accumulator width for the reference grid.
pub const PRECISION_BITS: u64 = 512;

/// Tallest grid a configuration may ask for.
///
/// The binding limit is the profile set, not the 2^(rows+1) propagation
/// vector: an all-category-0 column has 121552 pairs at 9 rows and grows
/// roughly 3.3x per row, so 12 rows already need a few million pairs.
pub const MAX_ROWS: usize = 12;

/// Width in bits of one boundary state in a transition table.
pub const STATE_BITS: u32 = 2;

/// Number of bits in a profile spanning a column of `rows` cells.
pub const fn profile_width(rows: usize) -> usize {
    rows + 1
}

/// Number of distinct profiles, i.e. the length of a propagation vector.
pub const fn profile_count(rows: usize) -> usize {
    1 << profile_width(rows)
}

/// Exponent of the preimage-space bound: a preimage is an (rows+1)×(cols+1)
/// boolean grid, so no count reaches `2^preimage_bits`.
pub const fn preimage_bits(rows: usize, cols: usize) -> u64 {
    (profile_width(rows) * (cols + 1)) as u64
}

/// Exponent of the table bound: each of the rows×cols cells picks at most
/// one of `largest_table` transitions.
pub const fn table_bits(rows: usize, cols: usize, largest_table: usize) -> u64 {
    let per_cell = if largest_table <= 1 {
        0
    } else {
        (usize::BITS - (largest_table - 1).leading_zeros()) as u64
    };
    (rows * cols) as u64 * per_cell
}

/// Accumulator bits needed to hold any count for this shape.
///
/// Takes the tighter of the two bounds. A count below `2^bound` fits in
/// `bound` bits, one more is demanded so that the bound itself would fit.
pub const fn required_bits(rows: usize, cols: usize, largest_table: usize) -> u64 {
    let preimage = preimage_bits(rows, cols);
    let table = table_bits(rows, cols, largest_table);
    let bound = if preimage < table { preimage } else { table };
    bound + 1
}

/// Number of propagation vector entries for the reference grid.
pub const NPROFILES: usize = profile_count(ROWS);

const _: () = assert!(ROWS >= 1 && ROWS <= MAX_ROWS, "ROWS out of range");
const _: () = assert!(COLS >= 1, "COLS must be positive");
const _: () = assert!(
    required_bits(ROWS, COLS, 12) <= PRECISION_BITS,
    "PRECISION_BITS too small for ROWS x COLS"
);
const _: () = assert!(
    profile_width(MAX_ROWS) < u32::BITS as usize,
    "profiles must fit in u32"
);
