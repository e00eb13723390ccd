//! Errors raised while setting up a simulation
//!
//! Running a tick never fails: a missing creature or an empty prey pool is a
//! normal outcome reported through return values.

use hotbed_creature::{CreatureId, Species};

/// Errors that can occur when building an environment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The density ratio divides by the capacity
    #[error("prey carrying capacity must be greater than zero")]
    ZeroCapacity,

    /// Two creatures of the same species share an identity
    #[error("duplicate {species} identity {id}")]
    DuplicateCreature {
        /// The repeated identity
        id: CreatureId,
        /// Collection the duplicate was found in
        species: Species,
    },
}
