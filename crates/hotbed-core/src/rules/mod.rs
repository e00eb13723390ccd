//! Interaction rules
//!
//! Each species implements [`Behavior`]: the capability to survive and feed
//! for one tick, and the capability to reproduce. The tick driver runs both
//! species through the same phase logic using this trait.

pub mod hunting;
pub mod reproduction;
pub mod survival;

use rand::Rng;

use hotbed_creature::{Creature, Predator, Prey};

use crate::environment::Environment;
use crate::stats::{DeathCause, SimStats};

pub use hunting::{consumption_count, eligible_prey, hunt};
pub use reproduction::{PreyFate, culling_probability, reproduce_predator, reproduce_prey};
pub use survival::{Survival, survival_check};

/// Oldest age at which a predator still acts; at this age it dies
pub const PREDATOR_MAX_AGE: u32 = 10;

/// Prey die once they reach this age
pub const PREY_MAX_AGE: u32 = 5;

/// Species-specific behaviour run once per tick
pub trait Behavior: Creature + Clone + Sized {
    /// Age at which the creature dies before acting
    const MAX_AGE: u32;

    /// Live collection of this species
    fn roster(env: &Environment) -> &[Self];

    /// Survive and feed for this tick
    ///
    /// On failure the caller removes the creature for the returned cause.
    fn sustain<S: SimStats>(
        &self,
        env: &mut Environment,
        stats: &mut S,
    ) -> Result<(), DeathCause>;

    /// Produce offspring into the registry
    fn reproduce<R, S>(&self, env: &mut Environment, rng: &mut R, stats: &mut S)
    where
        R: Rng + ?Sized,
        S: SimStats;
}

impl Behavior for Predator {
    const MAX_AGE: u32 = PREDATOR_MAX_AGE;

    fn roster(env: &Environment) -> &[Self] {
        env.predators()
    }

    fn sustain<S: SimStats>(
        &self,
        env: &mut Environment,
        stats: &mut S,
    ) -> Result<(), DeathCause> {
        if let Survival::Fails(cause) = survival_check(self, env) {
            return Err(cause);
        }
        if !hunt(self, env, stats) {
            return Err(DeathCause::Starvation);
        }
        Ok(())
    }

    fn reproduce<R, S>(&self, env: &mut Environment, rng: &mut R, stats: &mut S)
    where
        R: Rng + ?Sized,
        S: SimStats,
    {
        reproduce_predator(self, env, rng, stats);
    }
}

impl Behavior for Prey {
    const MAX_AGE: u32 = PREY_MAX_AGE;

    fn roster(env: &Environment) -> &[Self] {
        env.prey()
    }

    // Prey need no food
    fn sustain<S: SimStats>(
        &self,
        _env: &mut Environment,
        _stats: &mut S,
    ) -> Result<(), DeathCause> {
        Ok(())
    }

    fn reproduce<R, S>(&self, env: &mut Environment, rng: &mut R, stats: &mut S)
    where
        R: Rng + ?Sized,
        S: SimStats,
    {
        reproduce_prey(self, env, rng, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::NoopStats;

    #[test]
    fn test_predator_sustain_heat_death() {
        let bug = Predator::new(4, 10, 10);
        let mut env = Environment::new(vec![bug.clone()], vec![Prey::new(1, 1)], 5, 100).unwrap();

        let result = bug.sustain(&mut env, &mut NoopStats);
        assert_eq!(result, Err(DeathCause::HeatResistance));
        // Failed the heat check, so it never hunted
        assert_eq!(env.prey_count(), 1);
    }

    #[test]
    fn test_predator_sustain_starvation() {
        let bug = Predator::new(10, 1, 1);
        let mut env = Environment::new(vec![bug.clone()], vec![Prey::new(5, 5)], 5, 100).unwrap();

        let result = bug.sustain(&mut env, &mut NoopStats);
        assert_eq!(result, Err(DeathCause::Starvation));
    }

    #[test]
    fn test_prey_sustain_always_succeeds() {
        let aphid = Prey::new(0, 0);
        let mut env = Environment::new(vec![], vec![aphid.clone()], 1000, 1).unwrap();

        assert_eq!(aphid.sustain(&mut env, &mut NoopStats), Ok(()));
    }

    #[test]
    fn test_rosters() {
        let env = Environment::new(vec![Predator::new(1, 1, 1)], vec![], 0, 1).unwrap();
        assert_eq!(Predator::roster(&env).len(), 1);
        assert!(Prey::roster(&env).is_empty());
        assert_eq!(<Predator as Behavior>::MAX_AGE, 10);
        assert_eq!(<Prey as Behavior>::MAX_AGE, 5);
    }
}
