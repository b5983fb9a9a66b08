// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact summation of the final propagation vector.

use num_bigint::BigUint;

/// Sum all counts exactly.
pub fn accumulate(counts: &[BigUint]) -> BigUint {
    counts.iter().sum()
}

/// Decimal rendering of a total, with no grouping or padding.
pub fn render(total: &BigUint) -> String {
    total.to_str_radix(10)
}
