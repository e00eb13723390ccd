//! Initial population seeding
//!
//! Generates creatures with uniformly random starting traits.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::creature::{Predator, Prey};

/// Range for every starting predator trait
pub const PREDATOR_TRAIT_RANGE: RangeInclusive<i32> = 0..=16;

/// Range for every starting prey trait
pub const PREY_TRAIT_RANGE: RangeInclusive<i32> = 0..=9;

/// Spawn `count` predators with random heat resistance, speed and camouflage
pub fn random_predators<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Predator> {
    let predators: Vec<Predator> = (0..count)
        .map(|_| {
            Predator::new(
                rng.random_range(PREDATOR_TRAIT_RANGE),
                rng.random_range(PREDATOR_TRAIT_RANGE),
                rng.random_range(PREDATOR_TRAIT_RANGE),
            )
        })
        .collect();

    log::debug!("Spawned {} random predators", predators.len());
    predators
}

/// Spawn `count` prey with random awareness and speed
pub fn random_prey<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Prey> {
    let prey: Vec<Prey> = (0..count)
        .map(|_| Prey::new(rng.random_range(PREY_TRAIT_RANGE), rng.random_range(PREY_TRAIT_RANGE)))
        .collect();

    log::debug!("Spawned {} random prey", prey.len());
    prey
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Creature;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;
    use std::collections::HashSet;

    #[test]
    fn test_random_predators_count_and_ranges() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);
        let bugs = random_predators(100, &mut rng);

        assert_eq!(bugs.len(), 100);
        for bug in &bugs {
            assert!(PREDATOR_TRAIT_RANGE.contains(&bug.heat_resistance()));
            assert!(PREDATOR_TRAIT_RANGE.contains(&bug.speed()));
            assert!(PREDATOR_TRAIT_RANGE.contains(&bug.camouflage()));
            assert_eq!(bug.age(), 0);
        }
    }

    #[test]
    fn test_random_prey_count_and_ranges() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);
        let aphids = random_prey(500, &mut rng);

        assert_eq!(aphids.len(), 500);
        for aphid in &aphids {
            assert!(PREY_TRAIT_RANGE.contains(&aphid.awareness()));
            assert!(PREY_TRAIT_RANGE.contains(&aphid.speed()));
        }
    }

    #[test]
    fn test_spawned_ids_are_unique() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let aphids = random_prey(1000, &mut rng);
        let ids: HashSet<_> = aphids.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        assert!(random_predators(0, &mut rng).is_empty());
        assert!(random_prey(0, &mut rng).is_empty());
    }

    #[test]
    fn test_seeding_is_deterministic_per_seed() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);

        let a = random_predators(20, &mut rng1);
        let b = random_predators(20, &mut rng2);

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.heat_resistance(), y.heat_resistance());
            assert_eq!(x.speed(), y.speed());
            assert_eq!(x.camouflage(), y.camouflage());
        }
    }
}
