//! Run seed selection: an explicit `--seed` wins, otherwise fresh entropy.

use std::process;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use trek_core::random::derive_level_seed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Flag,
    Entropy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSeed {
    pub value: u64,
    pub source: SeedSource,
}

impl RunSeed {
    pub fn resolve(flag: Option<u64>) -> Self {
        match flag {
            Some(value) => Self { value, source: SeedSource::Flag },
            None => Self { value: entropy_seed(), source: SeedSource::Entropy },
        }
    }
}

static ENTROPY_DRAWS: AtomicU32 = AtomicU32::new(0);

/// Clock, pid and a draw counter folded through the level seed mixer.
pub fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    let pid = u64::from(process::id());
    let draw = ENTROPY_DRAWS.fetch_add(1, Ordering::Relaxed);
    derive_level_seed(nanos ^ (pid << 40), draw)
}
