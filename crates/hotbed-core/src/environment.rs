//! Population registry
//!
//! Holds both live populations in insertion order plus the global heat and
//! prey carrying capacity. Every rule reads and mutates this structure through
//! an explicit `&mut Environment`.

use std::collections::HashSet;

use hotbed_creature::{Creature, CreatureId, Organism, Predator, Prey, Species};

use crate::error::SimError;
use crate::stats::Census;

/// Live creatures and global conditions
#[derive(Debug, Clone)]
pub struct Environment {
    predators: Vec<Predator>,
    prey: Vec<Prey>,
    heat: i32,
    prey_capacity: u32,
}

impl Environment {
    /// Build an environment from seeded populations
    ///
    /// Fails if the capacity is zero or if a collection contains the same
    /// identity twice.
    pub fn new(
        predators: Vec<Predator>,
        prey: Vec<Prey>,
        heat: i32,
        prey_capacity: u32,
    ) -> Result<Self, SimError> {
        if prey_capacity == 0 {
            return Err(SimError::ZeroCapacity);
        }
        ensure_unique(&predators)?;
        ensure_unique(&prey)?;

        if predators.is_empty() {
            log::warn!("Environment starts without predators");
        }
        if prey.is_empty() {
            log::warn!("Environment starts without prey");
        }

        Ok(Self {
            predators,
            prey,
            heat,
            prey_capacity,
        })
    }

    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    pub fn prey(&self) -> &[Prey] {
        &self.prey
    }

    pub fn predator_count(&self) -> usize {
        self.predators.len()
    }

    pub fn prey_count(&self) -> usize {
        self.prey.len()
    }

    pub fn heat(&self) -> i32 {
        self.heat
    }

    pub fn prey_capacity(&self) -> u32 {
        self.prey_capacity
    }

    /// Live prey per unit of carrying capacity
    pub fn prey_density(&self) -> f64 {
        self.prey.len() as f64 / self.prey_capacity as f64
    }

    /// Add `amount` to the heat, saturating at the `i32` bounds
    pub fn raise_heat(&mut self, amount: i32) {
        self.heat = self.heat.saturating_add(amount);
    }

    /// Current `(predators, prey, heat)` tuple
    pub fn census(&self) -> Census {
        Census {
            predators: self.predators.len(),
            prey: self.prey.len(),
            heat: self.heat,
        }
    }

    pub fn find_predator(&self, id: CreatureId) -> Option<&Predator> {
        self.predators.iter().find(|p| p.id() == id)
    }

    pub fn find_prey(&self, id: CreatureId) -> Option<&Prey> {
        self.prey.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: CreatureId, species: Species) -> bool {
        match species {
            Species::Predator => self.find_predator(id).is_some(),
            Species::Prey => self.find_prey(id).is_some(),
        }
    }

    /// Identities of one species in registry order
    ///
    /// The tick driver iterates this snapshot while the live collection changes.
    pub fn snapshot(&self, species: Species) -> Vec<CreatureId> {
        match species {
            Species::Predator => self.predators.iter().map(|p| p.id()).collect(),
            Species::Prey => self.prey.iter().map(|p| p.id()).collect(),
        }
    }

    /// Remove a creature by identity
    ///
    /// Returns false without touching anything if no creature matches, so
    /// several death paths may safely target the same id.
    pub fn remove(&mut self, id: CreatureId, species: Species) -> bool {
        let removed = match species {
            Species::Predator => remove_by_id(&mut self.predators, id),
            Species::Prey => remove_by_id(&mut self.prey, id),
        };

        if removed {
            log::trace!("Removed {} {}", species, id);
        }
        removed
    }

    /// Add a creature to the collection of its species
    pub fn append(&mut self, creature: impl Into<Organism>) {
        match creature.into() {
            Organism::Predator(predator) => self.predators.push(predator),
            Organism::Prey(prey) => self.prey.push(prey),
        }
    }

    /// Increment a creature's age
    ///
    /// Returns false if the creature is no longer registered.
    pub fn age(&mut self, id: CreatureId, species: Species) -> bool {
        match species {
            Species::Predator => age_by_id(&mut self.predators, id),
            Species::Prey => age_by_id(&mut self.prey, id),
        }
    }
}

fn age_by_id<C: Creature>(creatures: &mut [C], id: CreatureId) -> bool {
    match creatures.iter_mut().find(|c| c.id() == id) {
        Some(creature) => {
            creature.grow_older();
            true
        }
        None => false,
    }
}

fn remove_by_id<C: Creature>(creatures: &mut Vec<C>, id: CreatureId) -> bool {
    match creatures.iter().position(|c| c.id() == id) {
        Some(index) => {
            creatures.remove(index);
            true
        }
        None => false,
    }
}

fn ensure_unique<C: Creature>(creatures: &[C]) -> Result<(), SimError> {
    let mut seen = HashSet::with_capacity(creatures.len());
    for creature in creatures {
        if !seen.insert(creature.id()) {
            return Err(SimError::DuplicateCreature {
                id: creature.id(),
                species: C::SPECIES,
            });
        }
    }
    Ok(())
}
