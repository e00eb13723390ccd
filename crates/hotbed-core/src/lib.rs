//! # Hotbed core - predator-prey population engine
//!
//! Bugs hunt aphids while the environment heats up. The engine advances both
//! populations one discrete tick at a time; callers own the outer loop and
//! whatever they do with the per-tick [`Census`].

pub mod config;
pub mod environment;
pub mod error;
pub mod rng;
pub mod rules;
pub mod stats;
pub mod tick;

// Re-export from hotbed-creature so callers need only one dependency
pub mod creature {
    pub use hotbed_creature::*;
}

pub use config::SimConfig;
pub use environment::Environment;
pub use error::SimError;
pub use stats::{Census, DeathCause, DeathTally, NoopStats, SimStats, TickSummary};
pub use tick::{Simulation, advance};
