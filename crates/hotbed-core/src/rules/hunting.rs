//! Predator hunting
//!
//! A predator can catch prey that is both slower than it and less aware than
//! its camouflage. How many it eats depends on how crowded the predators are
//! and how plentiful the prey is:
//!
//! ```text
//! n     = ceil(eligible / (predators * 1.2) + bonus)
//! bonus = 0.8 if prey > 1.5 * predators else 0.4
//! ```

use hotbed_creature::{Creature, CreatureId, Predator, Species};

use crate::environment::Environment;
use crate::stats::{DeathCause, SimStats};

/// Divisor weight applied to the live predator count
pub const PREDATOR_CROWDING: f64 = 1.2;
/// Prey-to-predator ratio above which prey counts as abundant
pub const ABUNDANT_PREY_RATIO: f64 = 1.5;
pub const ABUNDANT_PREY_BONUS: f64 = 0.8;
pub const SCARCE_PREY_BONUS: f64 = 0.4;

/// Prey this predator can catch, in registry order
pub fn eligible_prey(predator: &Predator, env: &Environment) -> Vec<CreatureId> {
    env.prey()
        .iter()
        .filter(|prey| predator.can_catch(prey))
        .map(|prey| prey.id())
        .collect()
}

/// Number of eligible prey a predator wants to eat
///
/// May exceed `eligible`; the hunt eats at most what is available.
pub fn consumption_count(eligible: usize, predators: usize, prey: usize) -> usize {
    if eligible == 0 {
        return 0;
    }

    // The hunter itself is always counted
    let predators = predators.max(1) as f64;
    let bonus = if prey as f64 > ABUNDANT_PREY_RATIO * predators {
        ABUNDANT_PREY_BONUS
    } else {
        SCARCE_PREY_BONUS
    };

    (eligible as f64 / (predators * PREDATOR_CROWDING) + bonus).ceil() as usize
}

/// Hunt once, removing the eaten prey from the registry
///
/// Returns false when no prey was eligible; the predator starves.
pub fn hunt<S: SimStats>(predator: &Predator, env: &mut Environment, stats: &mut S) -> bool {
    let eligible = eligible_prey(predator, env);
    if eligible.is_empty() {
        return false;
    }

    let wanted = consumption_count(eligible.len(), env.predator_count(), env.prey_count());
    for &prey_id in eligible.iter().take(wanted) {
        if env.remove(prey_id, Species::Prey) {
            stats.record_death(Species::Prey, DeathCause::Eaten);
        }
    }

    log::trace!(
        "{} ate {} of {} eligible prey",
        predator.id(),
        wanted.min(eligible.len()),
        eligible.len()
    );
    true
}
