use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stat::{Stat, StatBlock};
use crate::target::StatTarget;

/// Unique identifier for every entity an effect can target.
///
/// Copyable handle: reversal tables key on this, never on a reference to the
/// entity itself, so they cannot keep an entity alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A named game entity with a full set of attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier for this actor.
    pub id: EntityId,
    /// Display name of the actor.
    pub name: String,
    /// Current attribute values.
    pub stats: StatBlock,
}

impl Actor {
    /// Create a new actor with a random ID and all attributes at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(EntityId::new(), name)
    }

    /// Create an actor with a pre-assigned ID.
    pub fn with_id(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stats: StatBlock::default(),
        }
    }

    /// Replace the actor's stat block.
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }
}

impl StatTarget for Actor {
    fn id(&self) -> EntityId {
        self.id
    }

    fn stat(&self, stat: Stat) -> i32 {
        self.stats.get(stat)
    }

    fn set_stat(&mut self, stat: Stat, value: i32) {
        self.stats.set(stat, value);
    }
}
