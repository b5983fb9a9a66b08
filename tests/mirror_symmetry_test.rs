// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertical reflection and caching of column profile sets.

use preimage_count::grid::profile_width;
use preimage_count::state::statistics::{Counters, Statistics};
use preimage_count::{ColumnCode, ColumnProfileSet, ProfileBuilder, TransitionTables};

#[test]
fn test_mirror_property_exhaustive_for_three_rows() {
    let rows = 3;
    let tables = TransitionTables::reference();
    for bits in 0..(1u32 << rows) {
        let code = ColumnCode::from_bits(bits);
        let mirror = code.mirror(rows);
        let composed = ColumnProfileSet::compose(code, rows, &tables);
        let mirrored = ColumnProfileSet::compose(mirror, rows, &tables);
        assert_eq!(
            composed.reflect(rows).sorted_pairs(),
            mirrored.sorted_pairs(),
            "reflection of {} differs from {}",
            code.display(rows),
            mirror.display(rows)
        );
    }
}

#[test]
fn test_mirror_property_up_to_six_rows() {
    let tables = TransitionTables::reference();
    for rows in 1..=6 {
        let width = profile_width(rows);
        for bits in 0..(1u32 << rows) {
            let code = ColumnCode::from_bits(bits);
            let composed = ColumnProfileSet::compose(code, rows, &tables);
            let mirrored = ColumnProfileSet::compose(code.mirror(rows), rows, &tables);
            let mut reflected: Vec<_> = composed.iter().map(|p| p.reflect(width)).collect();
            reflected.sort_unstable();
            assert_eq!(reflected, mirrored.sorted_pairs());
        }
    }
}

#[test]
fn test_builder_reflection_matches_composition() {
    // Warm the cache in ascending order so every non-palindrome is reflected
    // from its mirror, then compare against fresh compositions.
    let rows = 4;
    let tables = TransitionTables::reference();
    let mut builder = ProfileBuilder::new(rows, tables.clone());
    let mut stats = Statistics::new();
    for bits in 0..(1u32 << rows) {
        let code = ColumnCode::from_bits(bits);
        let built = builder.profile_set(code, &mut stats).sorted_pairs();
        assert_eq!(built, ColumnProfileSet::compose(code, rows, &tables).sorted_pairs());
    }
    // 4 palindromes and 6 mirror pairs: 10 compositions, 6 reflections.
    assert_eq!(stats.get(Counters::ProfileSetsComposed), 10);
    assert_eq!(stats.get(Counters::ProfileSetsReflected), 6);
    assert_eq!(builder.cached(), 16);
}

#[test]
fn test_cold_and_warm_cache_agree() {
    let rows = 5;
    let tables = TransitionTables::reference();
    let code = ColumnCode::from_bits(0b00110);

    let mut cold = ProfileBuilder::new(rows, tables.clone());
    let mut stats = Statistics::new();
    let first = cold.profile_set(code, &mut stats).clone();

    let mut warm = ProfileBuilder::new(rows, tables);
    warm.profile_set(code.mirror(rows), &mut stats);
    warm.profile_set(code, &mut stats);
    let second = warm.profile_set(code, &mut stats).clone();

    assert_eq!(first.sorted_pairs(), second.sorted_pairs());
    // A second lookup on the same builder returns the identical set.
    assert_eq!(cold.profile_set(code, &mut stats), &first);
}
