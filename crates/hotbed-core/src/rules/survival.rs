//! Heat tolerance gate for predators

use hotbed_creature::Predator;

use crate::environment::Environment;
use crate::stats::DeathCause;

/// Result of a survival check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Survival {
    Survives,
    Fails(DeathCause),
}

/// A predator survives the tick only if its heat resistance is at least the current heat
pub fn survival_check(predator: &Predator, env: &Environment) -> Survival {
    if predator.heat_resistance() < env.heat() {
        Survival::Fails(DeathCause::HeatResistance)
    } else {
        Survival::Survives
    }
}
