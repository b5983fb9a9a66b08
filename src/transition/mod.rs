// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transition tables between single-cell boundary states.
//!
//! A transition `(entry, exit)` describes one admissible 2×2 neighbourhood of
//! a grid cell. Each component is a 2-bit state of the column edge on that
//! side of the cell:
//!
//! - bit 0 is the row edge shared with the cell below it in the composition,
//!   which must match what has been accumulated so far;
//! - bit 1 is the new row edge carried upward.
//!
//! The category flag of a cell selects one of two tables. The reference
//! tables are fixed constants and must be preserved bit for bit: changing them
//! changes the problem being counted.

use crate::errors::ConfigError;
use crate::grid::STATE_BITS;
use log::debug;

/// Category 1 transitions ("table A").
pub const CATEGORY_ONE_TRANSITIONS: [(u8, u8); 4] = [(2, 0), (0, 2), (1, 0), (0, 1)];

/// Category 0 transitions ("table B").
pub const CATEGORY_ZERO_TRANSITIONS: [(u8, u8); 12] = [
    (0, 0),
    (1, 1),
    (2, 2),
    (3, 3),
    (0, 3),
    (3, 0),
    (1, 3),
    (3, 1),
    (2, 3),
    (3, 2),
    (1, 2),
    (2, 1),
];

/// One (entry, exit) pair of 2-bit boundary states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Transition {
    pub entry: u8,
    pub exit: u8,
}

impl Transition {
    pub const fn new(entry: u8, exit: u8) -> Self {
        Self { entry, exit }
    }

    /// The (entry, exit) bits of the shared lower edge.
    #[inline]
    pub const fn shared_edge(self) -> (u8, u8) {
        (self.entry & 1, self.exit & 1)
    }

    /// The (entry, exit) bits of the new upper edge.
    #[inline]
    pub const fn carried_edge(self) -> (u8, u8) {
        ((self.entry >> 1) & 1, (self.exit >> 1) & 1)
    }

    /// Swap the lower and upper edges of both components.
    pub const fn reflect(self) -> Self {
        const fn swap(state: u8) -> u8 {
            ((state & 1) << 1) | ((state >> 1) & 1)
        }
        Self::new(swap(self.entry), swap(self.exit))
    }
}

/// A finite set of transitions, validated to hold only 2-bit states.
///
/// Repeated pairs collapse to one; a transition is either admitted or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    name: &'static str,
    transitions: Vec<Transition>,
}

impl TransitionTable {
    /// Build a table, rejecting any state wider than 2 bits.
    ///
    /// Duplicates are dropped, keeping the first occurrence's position.
    pub fn new(name: &'static str, pairs: &[(u8, u8)]) -> Result<Self, ConfigError> {
        let limit = 1u8 << STATE_BITS;
        let mut transitions: Vec<Transition> = Vec::with_capacity(pairs.len());
        for &(entry, exit) in pairs {
            if entry >= limit || exit >= limit {
                return Err(ConfigError::StateOutOfRange { table: name, entry, exit });
            }
            let t = Transition::new(entry, exit);
            if !transitions.contains(&t) {
                transitions.push(t);
            }
        }
        if transitions.len() < pairs.len() {
            debug!(
                "[TransitionTable] {}: dropped {} repeated transitions",
                name,
                pairs.len() - transitions.len()
            );
        }
        Ok(Self { name, transitions })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions.iter().copied()
    }

    /// Whether swapping the edges of every transition yields the same set.
    pub fn is_reflection_symmetric(&self) -> bool {
        self.iter().all(|t| self.transitions.contains(&t.reflect()))
    }
}

/// The pair of tables selected by a cell's category flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTables {
    category_one: TransitionTable,
    category_zero: TransitionTable,
}

impl TransitionTables {
    /// Build from explicit transition lists.
    pub fn new(
        category_one: &[(u8, u8)],
        category_zero: &[(u8, u8)],
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            category_one: TransitionTable::new("A", category_one)?,
            category_zero: TransitionTable::new("B", category_zero)?,
        })
    }

    /// The fixed reference tables.
    pub fn reference() -> Self {
        let table = |name, pairs: &[(u8, u8)]| TransitionTable {
            name,
            transitions: pairs.iter().map(|&(e, x)| Transition::new(e, x)).collect(),
        };
        Self {
            category_one: table("A", &CATEGORY_ONE_TRANSITIONS),
            category_zero: table("B", &CATEGORY_ZERO_TRANSITIONS),
        }
    }

    /// The table governing a cell of the given category.
    #[inline]
    pub fn for_category(&self, category: bool) -> &TransitionTable {
        if category {
            &self.category_one
        } else {
            &self.category_zero
        }
    }

    /// Size of the larger table, used to bound the count.
    pub fn largest_len(&self) -> usize {
        self.category_one.len().max(self.category_zero.len())
    }

    /// Whether vertically mirrored columns have mirrored profile sets.
    pub fn is_reflection_symmetric(&self) -> bool {
        self.category_one.is_reflection_symmetric() && self.category_zero.is_reflection_symmetric()
    }
}

impl Default for TransitionTables {
    fn default() -> Self {
        Self::reference()
    }
}
