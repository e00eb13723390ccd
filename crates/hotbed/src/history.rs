//! Population history recorded at the start of each round

use serde::{Deserialize, Serialize};

use hotbed_core::{Census, DeathTally, TickSummary};

/// Counts recorded at the start of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub round: u64,
    pub predators: usize,
    pub prey: usize,
    pub heat: i32,
}

/// Largest population seen for each species, with the round it occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Peaks {
    pub predators: usize,
    pub predators_round: u64,
    pub prey: usize,
    pub prey_round: u64,
}

/// Time series of the census plus running totals of births and deaths
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationHistory {
    samples: Vec<Sample>,
    pub predator_births: usize,
    pub prey_births: usize,
    pub predator_deaths: DeathTally,
    pub prey_deaths: DeathTally,
}

impl PopulationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the census taken at the start of `round`
    pub fn record(&mut self, round: u64, census: Census) {
        self.samples.push(Sample {
            round,
            predators: census.predators,
            prey: census.prey,
            heat: census.heat,
        });
    }

    /// Add one tick's births and deaths to the running totals
    pub fn accumulate(&mut self, summary: &TickSummary) {
        self.predator_births += summary.predator_births;
        self.prey_births += summary.prey_births;
        self.predator_deaths.merge(&summary.predator_deaths);
        self.prey_deaths.merge(&summary.prey_deaths);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn predator_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.predators).collect()
    }

    pub fn prey_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.prey).collect()
    }

    /// Earliest round holding the maximum of each series
    pub fn peaks(&self) -> Peaks {
        let mut peaks = Peaks::default();
        for (i, sample) in self.samples.iter().enumerate() {
            if i == 0 || sample.predators > peaks.predators {
                peaks.predators = sample.predators;
                peaks.predators_round = sample.round;
            }
            if i == 0 || sample.prey > peaks.prey {
                peaks.prey = sample.prey;
                peaks.prey_round = sample.round;
            }
        }
        peaks
    }

    /// Largest count across both series, used to scale the chart
    pub fn max_population(&self) -> usize {
        self.samples
            .iter()
            .map(|s| s.predators.max(s.prey))
            .max()
            .unwrap_or(0)
    }
}
