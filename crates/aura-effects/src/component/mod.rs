//! Effect components: the atomic behaviors an effect is composed of.
//!
//! Every variant honors the same contract:
//! - **apply** mutates the target and records whatever it needs to undo itself
//! - **tick** runs once per simulation step while the owning effect is active
//! - **remove** undoes the apply for that target, or does nothing if the
//!   target was never applied
//!
//! Variants form a closed set. Adding one means extending [`EffectComponent`]
//! and the factory, and the compiler points at every dispatch site.

pub mod stat_modifier;
pub mod visual_marker;

pub use stat_modifier::StatModifier;
pub use visual_marker::VisualMarker;

use aura_core::StatTarget;

use crate::error::EffectResult;

/// One behavior inside an effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectComponent {
    /// Additive or multiplicative change to one attribute.
    StatModifier(StatModifier),
    /// Opaque marker for a presentation layer.
    VisualMarker(VisualMarker),
}

impl EffectComponent {
    /// Registered type name, as used in authoring data.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::StatModifier(_) => StatModifier::TYPE_NAME,
            Self::VisualMarker(_) => VisualMarker::TYPE_NAME,
        }
    }

    /// Apply this component to a target.
    pub fn on_apply(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        match self {
            Self::StatModifier(c) => c.on_apply(target),
            Self::VisualMarker(c) => c.on_apply(target),
        }
    }

    /// Advance this component by one simulation step.
    pub fn on_tick(&mut self, target: &mut dyn StatTarget, delta_time: f64) -> EffectResult<()> {
        match self {
            Self::StatModifier(c) => c.on_tick(target, delta_time),
            Self::VisualMarker(c) => c.on_tick(target, delta_time),
        }
    }

    /// Undo this component's apply for a target.
    pub fn on_remove(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        match self {
            Self::StatModifier(c) => c.on_remove(target),
            Self::VisualMarker(c) => c.on_remove(target),
        }
    }
}

impl From<StatModifier> for EffectComponent {
    fn from(c: StatModifier) -> Self {
        Self::StatModifier(c)
    }
}

impl From<VisualMarker> for EffectComponent {
    fn from(c: VisualMarker) -> Self {
        Self::VisualMarker(c)
    }
}

impl std::fmt::Display for EffectComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StatModifier(c) => write!(f, "{c}"),
            Self::VisualMarker(c) => write!(f, "{c}"),
        }
    }
}
