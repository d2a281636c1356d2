use std::ops::RangeInclusive;
use std::time::Duration;

use rand_xoshiro::rand_core::{RngCore, SeedableRng};

pub use rand_xoshiro::Xoroshiro128StarStar as Rng;

/// Creates a randomly seeded generator for the glitch effect.
pub fn new_rng() -> Rng {
    let seed = getrandom::u64().unwrap_or(0x5eed_c10c);
    Rng::seed_from_u64(seed)
}

/// Uniform integer in `lo..=hi`.
pub(crate) fn uniform(rng: &mut Rng, lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi);
    lo + rng.next_u32() % (hi - lo + 1)
}

/// Uniform duration within the given range, at millisecond resolution.
pub(crate) fn uniform_duration(rng: &mut Rng, range: &RangeInclusive<Duration>) -> Duration {
    let lo = range.start().as_millis() as u64;
    let hi = range.end().as_millis() as u64;
    debug_assert!(lo <= hi);
    Duration::from_millis(lo + rng.next_u64() % (hi - lo + 1))
}
