// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column profile sets and their cached builder.
//!
//! A column profile set holds every globally consistent (entry, exit) pair of
//! profiles for one column encoding. It is built by stacking transitions row
//! by row, from row 0 upward.
//!
//! # Composition
//!
//! After row i−1 a partial pair spans i+1 bits per component. Row i accepts a
//! transition only when the transition's shared edge equals bit i of the
//! partial pair (see [`overlaps`]). The accepted transition then contributes
//! its carried edge at bit i+1 (see [`stack`]). After the last row each
//! component spans rows+1 bits.
//!
//! # Mirror memoization
//!
//! Reading a column bottom-to-top reflects every one of its profiles. When the
//! tables are invariant under that reflection, the profile set of `mirror(c)`
//! is the reflected profile set of `c`, which costs one pass over the set
//! instead of a full composition. For the reference tables this holds; for
//! asymmetric custom tables the builder always composes.

use crate::grid::{profile_width, reflect_bits, ColumnCode};
use crate::state::statistics::{Counters, Statistics};
use crate::transition::{Transition, TransitionTable, TransitionTables};
use log::{debug, trace};
use std::collections::HashMap;

/// One (entry, exit) pair of profiles.
///
/// Bit j of each component is the state of row edge j on that side of the
/// column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfilePair {
    pub entry: u32,
    pub exit: u32,
}

impl ProfilePair {
    pub const fn new(entry: u32, exit: u32) -> Self {
        Self { entry, exit }
    }

    /// A one-row partial pair taken straight from a transition.
    pub fn from_transition(t: Transition) -> Self {
        Self::new(u32::from(t.entry), u32::from(t.exit))
    }

    /// The (entry, exit) bits of row edge `edge`.
    #[inline]
    pub fn edge(self, edge: usize) -> (u8, u8) {
        (((self.entry >> edge) & 1) as u8, ((self.exit >> edge) & 1) as u8)
    }

    /// Reflect both components over `width` bits.
    pub fn reflect(self, width: usize) -> Self {
        Self::new(reflect_bits(self.entry, width), reflect_bits(self.exit, width))
    }
}

/// Whether `block` can sit on row `row` above `partial`.
///
/// The top edge of `partial` (bit `row`) must equal the shared edge of `block`.
#[inline]
pub fn overlaps(partial: ProfilePair, block: Transition, row: usize) -> bool {
    partial.edge(row) == block.shared_edge()
}

/// Extend `partial` with the carried edge of `block` at bit `row + 1`.
#[inline]
pub fn stack(partial: ProfilePair, block: Transition, row: usize) -> ProfilePair {
    let (entry, exit) = block.carried_edge();
    ProfilePair::new(
        partial.entry | (u32::from(entry) << (row + 1)),
        partial.exit | (u32::from(exit) << (row + 1)),
    )
}

/// Join every partial pair with every compatible transition of `layer`.
pub fn stack_layer(
    partials: &[ProfilePair],
    layer: &TransitionTable,
    row: usize,
) -> Vec<ProfilePair> {
    partials
        .iter()
        .flat_map(move |&partial| {
            layer
                .iter()
                .filter(move |&block| overlaps(partial, block, row))
                .map(move |block| stack(partial, block, row))
        })
        .collect()
}

/// All consistent (entry, exit) pairs for one column encoding.
///
/// Immutable once built. An empty set is valid: the column admits no
/// configuration at all.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnProfileSet {
    pairs: Vec<ProfilePair>,
}

impl ColumnProfileSet {
    pub fn from_pairs(pairs: Vec<ProfilePair>) -> Self {
        Self { pairs }
    }

    /// Compose the set for `code` from scratch, one row at a time.
    pub fn compose(code: ColumnCode, rows: usize, tables: &TransitionTables) -> Self {
        let mut pairs: Vec<ProfilePair> = tables
            .for_category(code.category(0))
            .iter()
            .map(ProfilePair::from_transition)
            .collect();

        for row in 1..rows {
            let layer = tables.for_category(code.category(row));
            pairs = stack_layer(&pairs, layer, row);
            trace!(
                "[ColumnProfileSet] {} row {}: {} partial pairs",
                code.display(rows),
                row,
                pairs.len()
            );
        }

        Self { pairs }
    }

    /// This set read bottom-to-top, i.e. the set of the mirrored column.
    pub fn reflect(&self, rows: usize) -> Self {
        let width = profile_width(rows);
        Self {
            pairs: self.pairs.iter().map(|pair| pair.reflect(width)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[ProfilePair] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = ProfilePair> + '_ {
        self.pairs.iter().copied()
    }

    /// The pairs in ascending order, for order-insensitive comparison.
    pub fn sorted_pairs(&self) -> Vec<ProfilePair> {
        let mut pairs = self.pairs.clone();
        pairs.sort_unstable();
        pairs
    }
}

/// Builds column profile sets on demand and caches them per encoding.
///
/// The cache belongs to the builder, so builders for different
/// configurations never see each other's sets.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    rows: usize,
    tables: TransitionTables,
    reflect_mirrors: bool,
    cache: HashMap<ColumnCode, ColumnProfileSet>,
}

impl ProfileBuilder {
    /// Create a builder for columns of `rows` cells.
    pub fn new(rows: usize, tables: TransitionTables) -> Self {
        let reflect_mirrors = tables.is_reflection_symmetric();
        if !reflect_mirrors {
            debug!("[ProfileBuilder] tables are not reflection symmetric, mirror reuse disabled");
        }
        Self {
            rows,
            tables,
            reflect_mirrors,
            cache: HashMap::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tables(&self) -> &TransitionTables {
        &self.tables
    }

    /// Whether mirrored columns are derived by reflection.
    pub fn reflects_mirrors(&self) -> bool {
        self.reflect_mirrors
    }

    /// Get the profile set for `code`, building and caching it if needed.
    pub fn profile_set(&mut self, code: ColumnCode, stats: &mut Statistics) -> &ColumnProfileSet {
        if self.cache.contains_key(&code) {
            stats.increment_counter(Counters::ProfileCacheHits);
        } else {
            let set = self.build(code, stats);
            if set.is_empty() {
                stats.increment_counter(Counters::EmptyProfileSets);
            }
            self.cache.insert(code, set);
        }
        &self.cache[&code]
    }

    /// Get an already cached profile set.
    pub fn get(&self, code: ColumnCode) -> Option<&ColumnProfileSet> {
        self.cache.get(&code)
    }

    /// Number of distinct encodings cached so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn build(&self, code: ColumnCode, stats: &mut Statistics) -> ColumnProfileSet {
        let mirror = code.mirror(self.rows);
        if self.reflect_mirrors {
            if let Some(mirrored) = self.cache.get(&mirror) {
                debug!(
                    "[ProfileBuilder] {} reflected from {} ({} pairs)",
                    code.display(self.rows),
                    mirror.display(self.rows),
                    mirrored.len()
                );
                stats.increment_counter(Counters::ProfileSetsReflected);
                return mirrored.reflect(self.rows);
            }
        }

        let set = ColumnProfileSet::compose(code, self.rows, &self.tables);
        debug!(
            "[ProfileBuilder] {} composed ({} pairs)",
            code.display(self.rows),
            set.len()
        );
        stats.increment_counter(Counters::ProfileSetsComposed);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_builder(rows: usize) -> ProfileBuilder {
        ProfileBuilder::new(rows, TransitionTables::reference())
    }

    #[test]
    fn test_overlaps_matches_top_edge_only() {
        // Row 1 looks at bit 1 of both components.
        let partial = ProfilePair::new(0b010, 0b001);
        assert!(overlaps(partial, Transition::new(1, 0), 1));
        assert!(overlaps(partial, Transition::new(3, 2), 1));
        assert!(!overlaps(partial, Transition::new(0, 0), 1));
        assert!(!overlaps(partial, Transition::new(1, 1), 1));
    }

    #[test]
    fn test_stack_places_carried_edge_above_row() {
        let partial = ProfilePair::new(0b01, 0b00);
        let stacked = stack(partial, Transition::new(3, 2), 1);
        assert_eq!(stacked, ProfilePair::new(0b101, 0b100));
        let stacked = stack(partial, Transition::new(1, 0), 1);
        assert_eq!(stacked, partial);
    }

    #[test]
    fn test_single_row_set_is_the_table() {
        let tables = TransitionTables::reference();
        let set = ColumnProfileSet::compose(ColumnCode::from_bits(1), 1, &tables);
        let expected: Vec<ProfilePair> = tables
            .for_category(true)
            .iter()
            .map(ProfilePair::from_transition)
            .collect();
        assert_eq!(set.pairs(), &expected[..]);
    }

    #[test]
    fn test_two_category_one_rows() {
        // Rows 0 and 1 both need exactly one live cell in their 2x2 window.
        let tables = TransitionTables::reference();
        let set = ColumnProfileSet::compose(ColumnCode::from_bits(0b11), 2, &tables);
        let expected = vec![
            ProfilePair::new(0b000, 0b010),
            ProfilePair::new(0b000, 0b101),
            ProfilePair::new(0b010, 0b000),
            ProfilePair::new(0b101, 0b000),
            ProfilePair::new(0b100, 0b001),
            ProfilePair::new(0b001, 0b100),
        ];
        let mut expected_sorted = expected.clone();
        expected_sorted.sort_unstable();
        assert_eq!(set.sorted_pairs(), expected_sorted);
    }

    #[test]
    fn test_all_category_zero_reference_column_size() {
        let tables = TransitionTables::reference();
        let set = ColumnProfileSet::compose(ColumnCode::from_bits(0), 9, &tables);
        assert_eq!(set.len(), 121_552);
        assert!(set.iter().all(|p| p.entry < (1 << 10) && p.exit < (1 << 10)));
    }

    #[test]
    fn test_pairs_are_distinct() {
        let tables = TransitionTables::reference();
        for bits in 0..(1 << 4) {
            let set = ColumnProfileSet::compose(ColumnCode::from_bits(bits), 4, &tables);
            let mut sorted = set.sorted_pairs();
            sorted.dedup();
            assert_eq!(sorted.len(), set.len(), "duplicates for {:04b}", bits);
        }
    }

    #[test]
    fn test_empty_set_is_cached() {
        // Table B empty: any column with a category 0 row admits nothing.
        let tables = TransitionTables::new(&[(2, 0), (1, 0)], &[]).unwrap();
        let mut builder = ProfileBuilder::new(3, tables);
        let mut stats = Statistics::new();
        let code = ColumnCode::from_bits(0b101);
        assert!(builder.profile_set(code, &mut stats).is_empty());
        assert!(builder.get(code).is_some());
        assert_eq!(stats.get(Counters::EmptyProfileSets), 1);
        assert!(builder.profile_set(code, &mut stats).is_empty());
        assert_eq!(stats.get(Counters::ProfileCacheHits), 1);
    }

    #[test]
    fn test_mirror_is_reflected_not_composed() {
        let mut builder = reference_builder(3);
        let mut stats = Statistics::new();
        let code = ColumnCode::from_bits(0b001);
        let mirror = code.mirror(3);
        let original = builder.profile_set(code, &mut stats).clone();
        let reflected = builder.profile_set(mirror, &mut stats).clone();

        assert_eq!(stats.get(Counters::ProfileSetsComposed), 1);
        assert_eq!(stats.get(Counters::ProfileSetsReflected), 1);
        assert_eq!(
            reflected.sorted_pairs(),
            ColumnProfileSet::compose(mirror, 3, builder.tables()).sorted_pairs()
        );
        assert_eq!(original.reflect(3).reflect(3), original);
    }

    #[test]
    fn test_palindromic_column_is_cache_hit_after_first_build() {
        let mut builder = reference_builder(3);
        let mut stats = Statistics::new();
        let code = ColumnCode::from_bits(0b101);
        builder.profile_set(code, &mut stats);
        builder.profile_set(code, &mut stats);
        assert_eq!(stats.get(Counters::ProfileSetsComposed), 1);
        assert_eq!(stats.get(Counters::ProfileSetsReflected), 0);
        assert_eq!(stats.get(Counters::ProfileCacheHits), 1);
        assert_eq!(builder.cached(), 1);
    }

    #[test]
    fn test_asymmetric_tables_always_compose() {
        let tables = TransitionTables::new(&[(2, 0), (0, 0)], &[(0, 0), (1, 1)]).unwrap();
        let mut builder = ProfileBuilder::new(2, tables);
        assert!(!builder.reflects_mirrors());
        let mut stats = Statistics::new();
        builder.profile_set(ColumnCode::from_bits(0b01), &mut stats);
        builder.profile_set(ColumnCode::from_bits(0b10), &mut stats);
        assert_eq!(stats.get(Counters::ProfileSetsComposed), 2);
        assert_eq!(stats.get(Counters::ProfileSetsReflected), 0);
    }
}
