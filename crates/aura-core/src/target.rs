use crate::entity::EntityId;
use crate::stat::Stat;

/// Mutable attribute access to one game entity.
///
/// Implemented by whatever owns entity state in the surrounding simulation.
/// The stat name is already validated by the time it reaches this trait, so
/// get and set cannot fail.
pub trait StatTarget {
    /// Stable identity of the entity behind this accessor.
    fn id(&self) -> EntityId;

    /// Current value of an attribute.
    fn stat(&self, stat: Stat) -> i32;

    /// Overwrite an attribute.
    fn set_stat(&mut self, stat: Stat, value: i32);
}
