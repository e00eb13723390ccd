//! Simulation parameters

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Parameters for a single simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of randomly seeded predators
    pub initial_predators: usize,
    /// Number of randomly seeded prey
    pub initial_prey: usize,
    /// Heat level before the first tick
    pub initial_heat: i32,
    /// Prey population above which crowding culls aphids
    pub prey_capacity: u32,
    /// Number of ticks the driver runs
    pub ticks: u64,
    /// RNG seed (None = draw a random one)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_predators: 100,
            initial_prey: 500,
            initial_heat: 9,
            prey_capacity: 2000,
            ticks: 100,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check the parameters before seeding an environment
    pub fn validate(&self) -> Result<(), SimError> {
        if self.prey_capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }
        Ok(())
    }
}
