//! Tick driver
//!
//! One tick runs, in order:
//!
//! 1. **Census**: record predator/prey counts and heat before any change.
//! 2. **Heat**: every [`HEAT_INTERVAL`] ticks (tick 0 included) heat rises by one.
//! 3. **Predators**: for each predator alive at phase start, die of old age,
//!    fail the heat check, or hunt; a predator that eats reproduces and ages.
//! 4. **Prey**: for each prey alive at phase start, die of old age or run the
//!    density check and reproduce, then age.
//! 5. **Advance** the tick counter.
//!
//! Each phase iterates an id snapshot taken at phase start while the live
//! collections shrink and grow, so newborns never act in the tick they are
//! born. The driver has no terminal condition; empty populations simply make
//! every phase a no-op.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use hotbed_creature::{Predator, Prey, random_predators, random_prey};

use crate::config::SimConfig;
use crate::environment::Environment;
use crate::error::SimError;
use crate::rules::Behavior;
use crate::stats::{Census, DeathCause, SimStats, TickSummary};

/// Heat rises on every tick index divisible by this
pub const HEAT_INTERVAL: u64 = 5;

/// Heat added at each interval
pub const HEAT_STEP: i32 = 1;

/// Run steps 2-4 of a tick against the registry
pub fn advance<R, S>(env: &mut Environment, tick: u64, rng: &mut R, stats: &mut S)
where
    R: Rng + ?Sized,
    S: SimStats,
{
    if tick % HEAT_INTERVAL == 0 {
        env.raise_heat(HEAT_STEP);
        log::debug!("Tick {}: heat rises to {}", tick, env.heat());
    }

    run_phase::<Predator, R, S>(env, rng, stats);
    run_phase::<Prey, R, S>(env, rng, stats);
}

fn run_phase<C, R, S>(env: &mut Environment, rng: &mut R, stats: &mut S)
where
    C: Behavior,
    R: Rng + ?Sized,
    S: SimStats,
{
    let snapshot = env.snapshot(C::SPECIES);

    for id in snapshot {
        let Some(creature) = C::roster(env).iter().find(|c| c.id() == id).cloned() else {
            continue;
        };

        if creature.age() >= C::MAX_AGE {
            env.remove(id, C::SPECIES);
            stats.record_death(C::SPECIES, DeathCause::OldAge);
            continue;
        }

        if let Err(cause) = creature.sustain(env, stats) {
            env.remove(id, C::SPECIES);
            stats.record_death(C::SPECIES, cause);
            log::trace!("{} {} died: {}", C::SPECIES, id, cause);
            continue;
        }

        creature.reproduce(env, rng, stats);

        // A prey culled while reproducing is already gone; aging it is a no-op
        env.age(id, C::SPECIES);
    }
}

/// Owns the registry, the RNG and the tick counter
pub struct Simulation<R = Xoshiro256StarStar> {
    env: Environment,
    rng: R,
    tick: u64,
    seed: Option<u64>,
}

impl Simulation<Xoshiro256StarStar> {
    /// Seed random populations from a config
    ///
    /// Uses `config.seed` when set, otherwise draws a seed and logs it so the
    /// run can be reproduced.
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

        let predators = random_predators(config.initial_predators, &mut rng);
        let prey = random_prey(config.initial_prey, &mut rng);
        let env = Environment::new(predators, prey, config.initial_heat, config.prey_capacity)?;

        log::info!(
            "Seeded {} predators and {} prey (heat {}, capacity {}, seed {})",
            config.initial_predators,
            config.initial_prey,
            config.initial_heat,
            config.prey_capacity,
            seed
        );

        Ok(Self {
            env,
            rng,
            tick: 0,
            seed: Some(seed),
        })
    }

    /// Drive an existing environment with a seeded RNG
    pub fn seeded(env: Environment, seed: u64) -> Self {
        Self {
            env,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            tick: 0,
            seed: Some(seed),
        }
    }
}

impl<R: Rng> Simulation<R> {
    pub fn new(env: Environment, rng: R) -> Self {
        Self {
            env,
            rng,
            tick: 0,
            seed: None,
        }
    }

    /// Execute one tick and report what happened
    pub fn step(&mut self) -> TickSummary {
        let mut summary = TickSummary::new(self.tick, self.env.census());

        advance(&mut self.env, self.tick, &mut self.rng, &mut summary);

        summary.end = self.env.census();
        self.tick += 1;
        summary
    }

    /// Execute `ticks` ticks, handing each summary to `on_tick`
    pub fn run(&mut self, ticks: u64, mut on_tick: impl FnMut(&TickSummary)) {
        for _ in 0..ticks {
            let summary = self.step();
            on_tick(&summary);
        }
    }

    /// Index of the next tick to execute
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn census(&self) -> Census {
        self.env.census()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }
}
