// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column encodings and bit reflection.
//!
//! A column of category flags is packed into a [`ColumnCode`], bit i holding
//! the flag of row i. Equal codes describe computationally identical columns,
//! which is what makes the code usable as a cache key.
//!
//! # Examples
//!
//! ```
//! use preimage_count::grid::{reflect_bits, ColumnCode};
//!
//! let code = ColumnCode::from_bits(0b001);
//! assert!(code.category(0));
//! assert_eq!(code.mirror(3), ColumnCode::from_bits(0b100));
//! assert_eq!(format!("{}", code), "|#..|");
//!
//! assert_eq!(reflect_bits(0b0011, 4), 0b1100);
//! ```

use std::fmt;

/// Reverse the low `width` bits of `value`, dropping any bits above them.
///
/// `width` must be in `1..=32`.
#[inline]
pub fn reflect_bits(value: u32, width: usize) -> u32 {
    debug_assert!((1..=32).contains(&width), "width {} out of range", width);
    let mask = if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    };
    (value & mask).reverse_bits() >> (32 - width)
}

/// Packed category flags of one grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnCode(u32);

impl ColumnCode {
    /// Create a column code from raw bits (bit i = flag of row i).
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Pack a column given its flags from row 0 downwards.
    pub fn from_flags<I: IntoIterator<Item = bool>>(flags: I) -> Self {
        let bits = flags
            .into_iter()
            .enumerate()
            .fold(0, |acc, (row, flag)| acc | (u32::from(flag) << row));
        Self(bits)
    }

    /// Get the underlying bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Category flag of `row`: `true` selects category 1.
    #[inline]
    pub fn category(self, row: usize) -> bool {
        (self.0 >> row) & 1 != 0
    }

    /// The same column read bottom-to-top, for a column of `rows` cells.
    pub fn mirror(self, rows: usize) -> Self {
        Self(reflect_bits(self.0, rows))
    }

    /// Render the low `rows` flags, row 0 first.
    pub fn display(self, rows: usize) -> ColumnDisplay {
        ColumnDisplay { code: self, rows }
    }
}

/// Helper returned by [`ColumnCode::display`].
pub struct ColumnDisplay {
    code: ColumnCode,
    rows: usize,
}

impl fmt::Display for ColumnDisplay {
    /// Format as "|#..|", category 1 as `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for row in 0..self.rows {
            let ch = if self.code.category(row) { '#' } else { '.' };
            write!(f, "{}", ch)?;
        }
        write!(f, "|")
    }
}

impl fmt::Display for ColumnCode {
    /// Format up to the highest set bit, at least three rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (u32::BITS - self.0.leading_zeros()).max(3) as usize;
        write!(f, "{}", self.display(rows))
    }
}
