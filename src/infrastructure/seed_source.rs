//! Clock-based seed generation.

use chrono::Utc;
use rand::Rng;

use crate::domain::ports::SeedSource;

/// Modulus applied to the millisecond clock before mixing in randomness.
const CLOCK_MODULUS: i64 = 10_000_000;

/// Mixes the current time with a random offset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSeedSource;

impl ClockSeedSource {
    /// Creates a new seed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SeedSource for ClockSeedSource {
    fn next_seed(&self) -> u64 {
        let millis = Utc::now().timestamp_millis().rem_euclid(CLOCK_MODULUS);
        let clock = u64::try_from(millis).unwrap_or_default();
        clock + rand::thread_rng().gen_range(1..=9999)
    }
}
