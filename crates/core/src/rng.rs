//! RNG module - deterministic randomness for spawning
//!
//! The spawn algorithm needs three random draws: a starting cell for the free
//! cell scan, the heuristic gate, and a uniform color. A seeded LCG keeps whole
//! sessions reproducible for tests and replays.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of an LCG cycle with a short period, so the high half is used.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            let _ = self.next_u32();
            return 0;
        }
        (self.next_u32() >> 16) % max
    }

    /// Random index in [0, len)
    pub fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    /// True with the given probability in percent (0..=100)
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent.min(100)
    }

    /// Current state, usable as a seed to replay from this point
    pub fn seed(&self) -> u32 {
        self.state
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
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(27) < 27);
        }
        assert_eq!(rng.next_range(1), 0);
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_covers_all_values() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_index(7)] = true;
        }
        assert!(seen.iter().all(|s| *s), "seen: {:?}", seen);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SimpleRng::new(3);
        for _ in 0..200 {
            assert!(rng.chance(100));
            assert!(!rng.chance(0));
        }
    }

    #[test]
    fn test_chance_is_roughly_fair() {
        let mut rng = SimpleRng::new(2024);
        let hits = (0..2000).filter(|_| rng.chance(50)).count();
        assert!((800..1200).contains(&hits), "hits: {}", hits);
    }
}
