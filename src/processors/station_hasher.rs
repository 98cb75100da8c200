use ahash::RandomState;

/// 64-bit hash of a station identifier, shared by every worker of a run.
///
/// The same identifier bytes always hash to the same value through one
/// hasher; different hashers (different seeds) disagree.
#[derive(Clone)]
pub struct StationHasher {
    state: RandomState,
}

impl StationHasher {
    /// Hasher keyed from the process-wide random source
    pub fn new() -> Self {
        Self {
            state: RandomState::new(),
        }
    }

    /// Deterministic hasher for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: RandomState::with_seeds(
                seed,
                seed.rotate_left(17) ^ 0x243f_6a88_85a3_08d3,
                seed.rotate_left(31) ^ 0x1319_8a2e_0370_7344,
                seed.rotate_left(47) ^ 0xa409_3822_299f_31d0,
            ),
        }
    }

    #[inline]
    pub fn hash(&self, station: &[u8]) -> u64 {
        self.state.hash_one(station)
    }
}

impl Default for StationHasher {
    fn default() -> Self {
        Self::new()
    }
}
