//! Creature model for Hotbed
//!
//! This crate implements:
//! - Predator ("bug") and prey ("aphid") entities with integer trait vectors
//! - Collision-free creature identities
//! - Bounded random trait inheritance for offspring
//! - Random seeding of initial populations

pub mod creature;
pub mod mutation;
pub mod spawning;
pub mod types;

// Re-export main types for convenience
pub use creature::{Creature, Organism, Predator, Prey};
pub use mutation::MUTATION_STEP;
pub use spawning::{random_predators, random_prey};
pub use types::{CreatureId, Species};
