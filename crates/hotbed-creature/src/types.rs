//! Identity and species tags shared by every creature

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a creature
///
/// Identities come from a process-wide counter, so two creatures never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(u64);

static NEXT_CREATURE_ID: AtomicU64 = AtomicU64::new(1);

impl CreatureId {
    /// Generate a new unique creature ID
    pub fn new() -> Self {
        CreatureId(NEXT_CREATURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Create a CreatureId from a raw u64
    pub fn from_raw(id: u64) -> Self {
        // Keep the counter ahead of any id handed in from outside
        NEXT_CREATURE_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        CreatureId(id)
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Creature({})", self.0)
    }
}

/// Which population collection a creature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Bugs: hunt prey, die from heat
    Predator,
    /// Aphids: reproduce quickly, limited by carrying capacity
    Prey,
}

impl Species {
    /// Plural name used in per-round reports
    pub fn common_name(&self) -> &'static str {
        match self {
            Species::Predator => "bugs",
            Species::Prey => "aphids",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Predator => write!(f, "predator"),
            Species::Prey => write!(f, "prey"),
        }
    }
}
