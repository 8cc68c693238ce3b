//! Deterministic per-entity and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each entity (unit or station) gets a fresh independent `SmallRng` every
//! tick, seeded by:
//!
//!   seed = global_seed XOR fxhash(entity_id) XOR (tick * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ticks uniformly across the seed space.  This
//! means:
//!
//! - Entities never share RNG state, so the per-entity compute phase can run
//!   sequentially or on a Rayon pool with bit-identical results.
//! - Entities created mid-run (fleet maintenance) get stable streams keyed
//!   by their id — existing entities' draws are never disturbed.
//! - Re-running a failed tick (the counter only advances on commit) replays
//!   the exact same draws against the unchanged store.

use std::hash::Hasher;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHasher;

use crate::Tick;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// FxHash of an entity id string, for seed derivation.
fn id_hash(key: &str) -> u64 {
    let mut h = FxHasher::default();
    h.write(key.as_bytes());
    h.finish()
}

// ── EntityRng ─────────────────────────────────────────────────────────────────

/// Per-entity, per-tick deterministic RNG.
///
/// Derive one inside the compute closure for each unit or station; the type
/// is `!Sync` to prevent accidental sharing across threads.
pub struct EntityRng(SmallRng);

impl EntityRng {
    /// Seed deterministically from the run's global seed, an entity id, and
    /// the current tick.
    pub fn derive(global_seed: u64, key: &str, tick: Tick) -> Self {
        let seed = global_seed ^ id_hash(key) ^ tick.0.wrapping_mul(MIXING_CONSTANT);
        EntityRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A uniform draw in `[-half, half)` — jitter around zero.
    #[inline]
    pub fn jitter(&mut self, half: f64) -> f64 {
        (self.random::<f64>() - 0.5) * 2.0 * half
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (fleet maintenance spawns).
///
/// Used only in the single-threaded phases of a tick.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
