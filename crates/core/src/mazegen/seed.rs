//! Seed selection and the small set of random draws the generator needs.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

static RUNTIME_SEED_CALLS: AtomicU64 = AtomicU64::new(0);

pub(crate) fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seed used when the caller does not ask for a reproducible maze. Clock, process id and a
/// per-process call counter are folded in as separate streams, so two calls in the same
/// nanosecond still differ.
pub fn runtime_seed() -> u64 {
    let clock = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| {
        elapsed.as_secs() ^ u64::from(elapsed.subsec_nanos()).rotate_left(32)
    });
    let call = RUNTIME_SEED_CALLS.fetch_add(1, Ordering::Relaxed);
    [u64::from(process::id()), call].into_iter().fold(clock, fold_stream)
}

/// Uniform draw in `min_value..=max_value`.
pub(super) fn random_in(rng: &mut ChaCha8Rng, min_value: usize, max_value: usize) -> usize {
    debug_assert!(min_value <= max_value);
    let range_size = (max_value - min_value + 1) as u64;
    min_value + (rng.next_u64() % range_size) as usize
}

pub(super) fn random_percent_below(rng: &mut ChaCha8Rng, percent: u8) -> bool {
    (rng.next_u64() % 100) < u64::from(percent)
}

pub(super) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for index in (1..items.len()).rev() {
        let swap_with = random_in(rng, 0, index);
        items.swap(index, swap_with);
    }
}

fn fold_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}
