//! Predator and prey entities
//!
//! Creatures only hold data. Hunting, reproduction and survival rules live in
//! `hotbed-core`, which dispatches on [`Species`].

use crate::types::{CreatureId, Species};

/// State shared by both species: identity, age and speed
pub trait Creature {
    /// Collection this creature type lives in
    const SPECIES: Species;

    fn id(&self) -> CreatureId;

    /// Ticks survived so far
    fn age(&self) -> u32;

    fn speed(&self) -> i32;

    /// Advance age by one tick
    fn grow_older(&mut self);

    fn species(&self) -> Species {
        Self::SPECIES
    }
}

/// A bug
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predator {
    id: CreatureId,
    age: u32,
    speed: i32,
    heat_resistance: i32,
    /// Prey whose awareness is below this cannot notice the predator
    camouflage: i32,
}

impl Predator {
    /// Create a newborn predator with a fresh identity
    pub fn new(heat_resistance: i32, speed: i32, camouflage: i32) -> Self {
        Self::with_id(CreatureId::new(), heat_resistance, speed, camouflage)
    }

    /// Create a newborn predator with an explicit identity
    pub fn with_id(id: CreatureId, heat_resistance: i32, speed: i32, camouflage: i32) -> Self {
        Self {
            id,
            age: 0,
            speed,
            heat_resistance,
            camouflage,
        }
    }

    pub fn heat_resistance(&self) -> i32 {
        self.heat_resistance
    }

    pub fn camouflage(&self) -> i32 {
        self.camouflage
    }

    /// Whether this predator can both outrun and sneak up on `prey`
    pub fn can_catch(&self, prey: &Prey) -> bool {
        prey.speed < self.speed && prey.awareness < self.camouflage
    }
}

impl Creature for Predator {
    const SPECIES: Species = Species::Predator;

    fn id(&self) -> CreatureId {
        self.id
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn speed(&self) -> i32 {
        self.speed
    }

    fn grow_older(&mut self) {
        self.age += 1;
    }
}

/// An aphid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prey {
    id: CreatureId,
    age: u32,
    speed: i32,
    awareness: i32,
}

impl Prey {
    /// Create a newborn prey with a fresh identity
    pub fn new(awareness: i32, speed: i32) -> Self {
        Self::with_id(CreatureId::new(), awareness, speed)
    }

    /// Create a newborn prey with an explicit identity
    pub fn with_id(id: CreatureId, awareness: i32, speed: i32) -> Self {
        Self {
            id,
            age: 0,
            speed,
            awareness,
        }
    }

    pub fn awareness(&self) -> i32 {
        self.awareness
    }
}

impl Creature for Prey {
    const SPECIES: Species = Species::Prey;

    fn id(&self) -> CreatureId {
        self.id
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn speed(&self) -> i32 {
        self.speed
    }

    fn grow_older(&mut self) {
        self.age += 1;
    }
}

/// A creature of either species, as handed to the population registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Organism {
    Predator(Predator),
    Prey(Prey),
}

impl Organism {
    pub fn id(&self) -> CreatureId {
        match self {
            Organism::Predator(p) => p.id(),
            Organism::Prey(p) => p.id(),
        }
    }

    pub fn species(&self) -> Species {
        match self {
            Organism::Predator(_) => Species::Predator,
            Organism::Prey(_) => Species::Prey,
        }
    }
}

impl From<Predator> for Organism {
    fn from(predator: Predator) -> Self {
        Organism::Predator(predator)
    }
}

impl From<Prey> for Organism {
    fn from(prey: Prey) -> Self {
        Organism::Prey(prey)
    }
}
