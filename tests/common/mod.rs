// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use preimage_count::transition::{Transition, TransitionTables};
use preimage_count::Grid;

/// Count preimages of `grid` by trying every (rows+1)×(cols+1) boolean grid.
///
/// Cell (i, j) of the preimage is bit `i * (cols + 1) + j`. Only usable for
/// tiny grids; it shares nothing with the column transfer except the tables.
pub fn brute_force_count(grid: &Grid, tables: &TransitionTables) -> u64 {
    let (rows, cols) = (grid.rows(), grid.cols());
    let width = cols + 1;
    let cells = (rows + 1) * width;
    assert!(cells <= 20, "brute force limited to 20 preimage cells");

    let mut count = 0;
    for preimage in 0u32..(1 << cells) {
        let alive = |i: usize, j: usize| ((preimage >> (i * width + j)) & 1) as u8;
        let admissible = (0..rows).all(|i| {
            (0..cols).all(|j| {
                let entry = alive(i, j) | (alive(i + 1, j) << 1);
                let exit = alive(i, j + 1) | (alive(i + 1, j + 1) << 1);
                let t = Transition::new(entry, exit);
                tables.for_category(grid.get(i, j)).iter().any(|x| x == t)
            })
        });
        if admissible {
            count += 1;
        }
    }
    count
}

/// Build a grid from the low rows×cols bits of `bits`, row-major.
pub fn grid_from_bits(rows: usize, cols: usize, bits: u32) -> Grid {
    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            grid.set(row, col, (bits >> (row * cols + col)) & 1 != 0);
        }
    }
    grid
}

/// Build transition tables from 16-bit membership masks.
///
/// Bit `entry * 4 + exit` of a mask admits the transition (entry, exit).
pub fn tables_from_masks(category_one: u16, category_zero: u16) -> TransitionTables {
    let pairs = |mask: u16| -> Vec<(u8, u8)> {
        (0u8..16)
            .filter(|bit| (mask >> bit) & 1 != 0)
            .map(|bit| (bit / 4, bit % 4))
            .collect()
    };
    TransitionTables::new(&pairs(category_one), &pairs(category_zero))
        .expect("masks only produce 2-bit states")
}
