//! RNG trait abstraction for the interaction rules
//!
//! The rules only need percentile rolls and unit-interval probabilities. Any
//! `rand::Rng` works: the seeded `Xoshiro256StarStar` used by the driver and in
//! tests, or `rand::rng()` for ad-hoc runs.

/// Highest value a percentile roll can produce (inclusive)
pub const PERCENT_MAX: u32 = 100;

/// Random number generator trait for the interaction rules
pub trait SimRng {
    /// Uniform integer in `0..=100`
    fn roll_percent(&mut self) -> u32;

    /// Uniform f64 in [0.0, 1.0)
    fn gen_unit(&mut self) -> f64;

    /// Percentile roll strictly above `threshold`
    fn roll_above(&mut self, threshold: u32) -> bool {
        self.roll_percent() > threshold
    }

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f64) -> bool {
        self.gen_unit() < probability
    }
}

impl<T: ?Sized + rand::Rng> SimRng for T {
    fn roll_percent(&mut self) -> u32 {
        rand::Rng::random_range(self, 0..=PERCENT_MAX)
    }

    fn gen_unit(&mut self) -> f64 {
        rand::Rng::random(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_roll_percent_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);
        let mut seen_zero = false;
        let mut seen_max = false;

        for _ in 0..10_000 {
            let roll = rng.roll_percent();
            assert!(roll <= PERCENT_MAX);
            seen_zero |= roll == 0;
            seen_max |= roll == PERCENT_MAX;
        }

        assert!(seen_zero);
        assert!(seen_max);
    }

    #[test]
    fn test_gen_unit_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            let val = rng.gen_unit();
            assert!(val >= 0.0);
            assert!(val < 1.0);
        }
    }

    #[test]
    fn test_roll_above_frequency() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        let trials = 100_000;
        let hits = (0..trials).filter(|_| rng.roll_above(75)).count();

        // 25 of 101 outcomes exceed 75
        let rate = hits as f64 / trials as f64;
        assert!((rate - 25.0 / 101.0).abs() < 0.01, "rate was {rate}");
    }

    #[test]
    fn test_roll_above_max_never_fires() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(!rng.roll_above(PERCENT_MAX));
        }
    }

    #[test]
    fn test_check_probability_extremes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);

        for _ in 0..100 {
            assert!(rng.check_probability(1.0));
            assert!(!rng.check_probability(0.0));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_percent(), rng2.roll_percent());
        }
    }
}
