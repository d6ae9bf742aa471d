//! Deck accounting: remaining tiles for the UI counter and the draw bag.

use std::collections::{BTreeMap, HashMap};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::catalog::{STARTING_TILE, TILE_CATALOG};
use super::types::TileKind;

fn drawn_counts(drawn: &[TileKind]) -> HashMap<TileKind, u32> {
    let mut counts = HashMap::new();
    for kind in drawn {
        *counts.entry(*kind).or_insert(0) += 1;
    }
    counts
}

/// Remaining count per kind. Exhausted kinds are omitted; over-drawn kinds
/// clamp to zero.
pub fn remaining_counts(drawn: &[TileKind]) -> BTreeMap<TileKind, u32> {
    let counts = drawn_counts(drawn);
    TILE_CATALOG
        .iter()
        .filter_map(|d| {
            let left = d.count.saturating_sub(counts.get(&d.kind).copied().unwrap_or(0));
            (left > 0).then_some((d.kind, left))
        })
        .collect()
}

/// Remaining tiles as a multiset, grouped by kind in catalog order.
pub fn remaining(drawn: &[TileKind]) -> Vec<TileKind> {
    remaining_counts(drawn)
        .into_iter()
        .flat_map(|(kind, n)| std::iter::repeat(kind).take(n as usize))
        .collect()
}

/// Build the draw bag. Excludes the starting tile already on the board.
pub fn build_tile_bag() -> Vec<TileKind> {
    remaining(&[STARTING_TILE])
}

/// Draw bag shuffled with a fixed seed, for reproducible local replays.
pub fn shuffled_tile_bag(seed: u64) -> Vec<TileKind> {
    let mut bag = build_tile_bag();
    let mut rng = StdRng::seed_from_u64(seed);
    bag.shuffle(&mut rng);
    bag
}
