//! Trait inheritance
//!
//! Every inherited trait is the parent's value plus a uniform integer
//! perturbation in `[-MUTATION_STEP, MUTATION_STEP]`. No floor or ceiling is
//! applied, so traits can drift negative over many generations.

use rand::Rng;

use crate::creature::{Creature, Predator, Prey};

/// Largest absolute change a single trait can take per generation
pub const MUTATION_STEP: i32 = 2;

/// Perturb a single trait value
pub fn perturb<R: Rng + ?Sized>(value: i32, rng: &mut R) -> i32 {
    value + rng.random_range(-MUTATION_STEP..=MUTATION_STEP)
}

impl Predator {
    /// Build one child with independently perturbed traits
    ///
    /// Each call draws fresh perturbations, so siblings are not clones.
    pub fn offspring<R: Rng + ?Sized>(&self, rng: &mut R) -> Predator {
        let speed = perturb(self.speed(), rng);
        let heat_resistance = perturb(self.heat_resistance(), rng);
        let camouflage = perturb(self.camouflage(), rng);
        Predator::new(heat_resistance, speed, camouflage)
    }
}

impl Prey {
    /// Build one child with independently perturbed speed and awareness
    pub fn offspring<R: Rng + ?Sized>(&self, rng: &mut R) -> Prey {
        let speed = perturb(self.speed(), rng);
        let awareness = perturb(self.awareness(), rng);
        Prey::new(awareness, speed)
    }
}
