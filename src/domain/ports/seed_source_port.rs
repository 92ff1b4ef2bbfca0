//! Port definition for seed generation.

/// Supplies fresh numeric values for the `seed` query parameter.
///
/// Two calls within one process must return different values with
/// overwhelming probability.
#[cfg_attr(test, mockall::automock)]
pub trait SeedSource: Send + Sync {
    /// Returns a new seed value.
    fn next_seed(&self) -> u64;
}
