//! Status-effect engine for Aura.
//!
//! Applies, ticks, and exactly reverses temporary modifications on game
//! entities. Effects are built from data through an [`EffectFactory`],
//! composed of [`EffectComponent`]s, and driven by an external orchestrator
//! that owns the clock and decides when to attach and detach them.

pub mod component;
pub mod config;
pub mod definition;
pub mod effect;
pub mod error;
pub mod factory;
pub mod library;
pub mod validate;

pub use component::{EffectComponent, StatModifier, VisualMarker};
pub use config::FactoryConfig;
pub use definition::EffectDefinition;
pub use effect::Effect;
pub use error::{EffectError, EffectResult};
pub use factory::EffectFactory;
pub use library::EffectLibrary;
pub use validate::{ValidationIssue, validate_definitions};
