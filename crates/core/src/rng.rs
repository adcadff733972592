//! RNG module - seeded random source for dealing decks
//!
//! A small 64-bit LCG drives a Fisher-Yates shuffle. The generator is
//! deterministic for a given seed so tests and replays can reproduce a deal;
//! fresh games seed it from the OS-backed thread RNG.

/// Simple 64-bit LCG (Linear Congruential Generator) RNG
///
/// Uses Knuth's MMIX constants and returns the high 32 bits of the state,
/// which have a much longer period than the low bits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a new RNG seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        (self.state >> 32) as u32
    }

    /// Generate random value in range [0, max)
    ///
    /// Multiply-shift with rejection, so every value is equally likely.
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }

        let mut m = u64::from(self.next_u32()) * u64::from(max);
        let mut low = m as u32;
        if low < max {
            let threshold = max.wrapping_neg() % max;
            while low < threshold {
                m = u64::from(self.next_u32()) * u64::from(max);
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for max in 1..50 {
            for _ in 0..100 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(3);
        let mut values: Vec<u32> = (0..16).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_uniform_over_small_permutations() {
        // 3 elements have 6 orderings; each should show up ~1/6 of the time.
        let mut rng = SimpleRng::new(2024);
        let mut counts = std::collections::HashMap::new();
        let trials = 60_000;
        for _ in 0..trials {
            let mut v = [0u8, 1, 2];
            rng.shuffle(&mut v);
            *counts.entry(v).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials / 6;
        for (perm, count) in counts {
            assert!(
                count.abs_diff(expected) < 600,
                "permutation {:?} drawn {} times, expected ~{}",
                perm,
                count,
                expected
            );
        }
    }
}
