//! Offspring production for both species
//!
//! Each trigger that fires appends one child whose traits are perturbed from
//! the parent independently of its siblings.

use rand::Rng;

use hotbed_creature::{Creature, Predator, Prey, Species};

use crate::environment::Environment;
use crate::rng::SimRng;
use crate::stats::{DeathCause, SimStats};

/// Percentile thresholds for the two chance-based predator births
pub const PREDATOR_BIRTH_THRESHOLDS: [u32; 2] = [75, 90];

/// Prey must exceed this fraction of capacity to guarantee a predator birth
pub const CROWDED_PREY_FRACTION: f64 = 0.9;

/// Percentile thresholds for the two chance-based prey births
pub const PREY_BIRTH_THRESHOLDS: [u32; 2] = [67, 90];

/// What happened to a prey during its reproduction step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreyFate {
    /// Removed by density culling before it could breed
    Culled,
    /// Bred this many offspring (possibly zero)
    Bred(usize),
}

/// Breed a predator after a successful hunt
///
/// Returns the number of offspring appended.
pub fn reproduce_predator<R, S>(
    parent: &Predator,
    env: &mut Environment,
    rng: &mut R,
    stats: &mut S,
) -> usize
where
    R: Rng + ?Sized,
    S: SimStats,
{
    let mut births = 0;

    for threshold in PREDATOR_BIRTH_THRESHOLDS {
        if rng.roll_above(threshold) {
            env.append(parent.offspring(rng));
            births += 1;
        }
    }

    // Prey near capacity always feeds one extra birth
    if env.prey_count() as f64 > CROWDED_PREY_FRACTION * env.prey_capacity() as f64 {
        env.append(parent.offspring(rng));
        births += 1;
    }

    for _ in 0..births {
        stats.record_birth(Species::Predator);
    }
    if births > 0 {
        log::trace!("{} produced {} offspring", parent.id(), births);
    }
    births
}

/// Chance that a prey is culled at the given prey density
///
/// Zero at or below capacity, then `density - 1`, saturating at one.
pub fn culling_probability(density: f64) -> f64 {
    if density > 1.0 {
        (density - 1.0).min(1.0)
    } else {
        0.0
    }
}

/// Run a prey's density check and, if it survives, breed it
pub fn reproduce_prey<R, S>(
    parent: &Prey,
    env: &mut Environment,
    rng: &mut R,
    stats: &mut S,
) -> PreyFate
where
    R: Rng + ?Sized,
    S: SimStats,
{
    let cull_chance = culling_probability(env.prey_density());
    if cull_chance > 0.0 && rng.check_probability(cull_chance) {
        if env.remove(parent.id(), Species::Prey) {
            stats.record_death(Species::Prey, DeathCause::Crowding);
        }
        return PreyFate::Culled;
    }

    let mut births = 0;
    for threshold in PREY_BIRTH_THRESHOLDS {
        if rng.roll_above(threshold) {
            env.append(parent.offspring(rng));
            stats.record_birth(Species::Prey);
            births += 1;
        }
    }

    PreyFate::Bred(births)
}
