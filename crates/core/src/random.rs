//! Seed mixing and uniform picks over an injected random stream.

use rand_chacha::rand_core::Rng;

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(random_index(rng, items.len()))
}

/// Per-level seed derived from a run seed, so each level of a run gets its own layout.
pub fn derive_level_seed(run_seed: u64, level_number: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(level_number).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
