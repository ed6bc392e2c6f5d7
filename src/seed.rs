//! Deterministic seed derivation for hierarchical generation.
//!
//! Every sub-generator computes its own seed from its parent's seed and
//! a structural identifier, so any element can be regenerated in
//! isolation without global coordination or shared mutable state.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Derived seeds stay below this bound so they fit downstream
/// generators expecting 31-bit seeds.
pub const SEED_BOUND: u64 = 1 << 31;

/// Derives a child seed from a parent seed and an identifier.
///
/// Pure: the same `(parent_seed, identifier)` always yields the same
/// seed, and different identifiers under one parent are decorrelated by
/// the hash (adjacent indices do not give adjacent seeds).
///
/// The identifier can be any hashable value; tuples work well:
/// `derive_seed(floor_seed, ("wall", edge_index))`.
pub fn derive_seed<I: Hash>(parent_seed: u64, identifier: I) -> u64 {
    let mut hasher = DefaultHasher::new();
    parent_seed.hash(&mut hasher);
    identifier.hash(&mut hasher);
    hasher.finish() % SEED_BOUND
}

/// Derives `count` seeds from one parent, by index.
pub fn split_seed(parent_seed: u64, count: usize) -> Vec<u64> {
    (0..count).map(|i| derive_seed(parent_seed, i)).collect()
}

/// Builds the deterministic random stream used by generators.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
