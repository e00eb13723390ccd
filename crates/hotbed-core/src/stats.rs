//! Population counts and per-tick statistics

use serde::{Deserialize, Serialize};

use hotbed_creature::Species;

/// Population sizes and heat at a tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    pub predators: usize,
    pub prey: usize,
    pub heat: i32,
}

/// Why a creature was removed from the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    /// Heat resistance below the current heat
    HeatResistance,
    /// No eligible prey this tick
    Starvation,
    /// Consumed by a predator
    Eaten,
    /// Culled by prey density above capacity
    Crowding,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::OldAge => "old_age",
            DeathCause::HeatResistance => "heat_resistance",
            DeathCause::Starvation => "starvation",
            DeathCause::Eaten => "eaten",
            DeathCause::Crowding => "crowding",
        }
    }
}

impl std::fmt::Display for DeathCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for collecting simulation statistics
///
/// The rules report births and deaths through this sink so callers can decide
/// whether to count them.
pub trait SimStats {
    fn record_birth(&mut self, species: Species);

    fn record_death(&mut self, species: Species, cause: DeathCause);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Debug, Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_birth(&mut self, _species: Species) {}
    fn record_death(&mut self, _species: Species, _cause: DeathCause) {}
}

/// Deaths of one species, by cause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeathTally {
    pub old_age: usize,
    pub heat: usize,
    pub starvation: usize,
    pub eaten: usize,
    pub crowding: usize,
}

impl DeathTally {
    pub fn record(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::OldAge => self.old_age += 1,
            DeathCause::HeatResistance => self.heat += 1,
            DeathCause::Starvation => self.starvation += 1,
            DeathCause::Eaten => self.eaten += 1,
            DeathCause::Crowding => self.crowding += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.old_age + self.heat + self.starvation + self.eaten + self.crowding
    }

    /// Add another tally into this one
    pub fn merge(&mut self, other: &DeathTally) {
        self.old_age += other.old_age;
        self.heat += other.heat;
        self.starvation += other.starvation;
        self.eaten += other.eaten;
        self.crowding += other.crowding;
    }
}

/// Everything that happened during one tick
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickSummary {
    /// Index of the tick that was executed
    pub tick: u64,
    /// Counts recorded before any change this tick
    pub start: Census,
    /// Counts after the tick completed
    pub end: Census,
    pub predator_births: usize,
    pub prey_births: usize,
    pub predator_deaths: DeathTally,
    pub prey_deaths: DeathTally,
}

impl TickSummary {
    pub fn new(tick: u64, start: Census) -> Self {
        Self {
            tick,
            start,
            end: start,
            ..Default::default()
        }
    }
}

impl SimStats for TickSummary {
    fn record_birth(&mut self, species: Species) {
        match species {
            Species::Predator => self.predator_births += 1,
            Species::Prey => self.prey_births += 1,
        }
    }

    fn record_death(&mut self, species: Species, cause: DeathCause) {
        match species {
            Species::Predator => self.predator_deaths.record(cause),
            Species::Prey => self.prey_deaths.record(cause),
        }
    }
}
