//! Individual value samplers used by the generator.
//!
//! Each sampler takes the RNG explicitly so the generator threads a single
//! seeded `StdRng` through all sampling calls.

pub mod identifier;
pub mod money;
pub mod timestamp;

use rand::Rng;

/// Pick a uniformly random element of a slice.
///
/// `items` must be non-empty; all call sites sample from fixed reference
/// tables or a catalog already checked for emptiness.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
