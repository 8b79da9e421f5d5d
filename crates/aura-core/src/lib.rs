//! Core types for Aura: entity identity, the closed attribute set, and the
//! accessor the effect engine reads and writes through.
//!
//! The effect engine never owns game entities. It only needs a stable
//! [`EntityId`] to key reversal data by, and get/set access to a fixed set of
//! integer attributes, both provided by the [`StatTarget`] trait. [`Actor`] is
//! a small reference implementation backed by a [`StatBlock`].

/// Entity identifiers and the reference actor.
pub mod entity;
/// The closed attribute set and per-entity stat storage.
pub mod stat;
/// The accessor trait consumed by the effect engine.
pub mod target;

/// Re-export entity types.
pub use entity::{Actor, EntityId};
/// Re-export stat types.
pub use stat::{Stat, StatBlock, UnknownStat};
/// Re-export the accessor trait.
pub use target::StatTarget;
