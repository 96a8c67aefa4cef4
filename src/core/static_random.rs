// src/core/static_random.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8-backed randomness source, freshly seeded from the OS generator.
///
/// One instance is created per randomized probe so no generator state leaks
/// between search invocations.
pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed[..]);
        let mut rng = ChaCha8Rng::from_seed(seed);
        // decorrelate from the raw seed
        let burn = rng.random_range(100..200);
        for _ in 0..burn {
            rng.next_u32();
        }
        StaticRandom { rng }
    }

    pub fn next_bytes(&mut self, bytes: &mut [u8]) {
        self.rng.fill(bytes);
    }

    /// Uniform draw from `[lower, upper]`, by rejection sampling over the
    /// byte width of the interval.
    pub fn next_bigint(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        if lower > upper {
            panic!("upper must be greater than or equal to lower");
        }

        let delta = upper - lower;
        let delta_bytes = delta.to_bytes_be().1;
        let mut buffer = vec![0u8; delta_bytes.len()];

        loop {
            self.next_bytes(&mut buffer);
            let result = BigInt::from_bytes_be(Sign::Plus, &buffer) + lower;

            if &result >= lower && &result <= upper {
                return result;
            }
        }
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}
