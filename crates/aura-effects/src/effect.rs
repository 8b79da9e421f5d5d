//! The effect (buff) container.
//!
//! An [`Effect`] is an ordered list of components plus metadata. It has no
//! clock: the orchestrator decides when to call [`Effect::apply`],
//! [`Effect::tick`] and [`Effect::remove`], and tracks how long it has been
//! attached.
//!
//! All three calls walk the components in list order and stop at the first
//! failure. Components that ran before the failure are not rolled back.

use aura_core::{EntityId, StatTarget};

use crate::component::EffectComponent;
use crate::error::{EffectError, EffectResult};

/// A named, time-boxed bundle of components.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    id: String,
    name: String,
    duration: f64,
    components: Vec<EffectComponent>,
}

impl Effect {
    /// Create an effect. The id must be non-empty.
    ///
    /// `duration` is in whatever unit the orchestrator ticks with. A negative
    /// or infinite duration marks the effect as permanent until removed.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        components: Vec<EffectComponent>,
    ) -> EffectResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(EffectError::EmptyId);
        }
        Ok(Self {
            id,
            name: name.into(),
            duration,
            components,
        })
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Authored duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns true if the effect never expires on its own.
    pub fn is_permanent(&self) -> bool {
        self.duration < 0.0 || self.duration.is_infinite()
    }

    /// The components, in application order.
    pub fn components(&self) -> &[EffectComponent] {
        &self.components
    }

    /// Identifiers of all visual markers, for a presentation layer.
    pub fn marker_ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().filter_map(|c| match c {
            EffectComponent::VisualMarker(m) => Some(m.effect_id.as_str()),
            EffectComponent::StatModifier(_) => None,
        })
    }

    /// Returns true if any component holds reversal data for the target.
    pub fn has_snapshot_for(&self, target: EntityId) -> bool {
        self.components.iter().any(|c| match c {
            EffectComponent::StatModifier(m) => m.snapshot_for(target).is_some(),
            EffectComponent::VisualMarker(_) => false,
        })
    }

    /// Attach the effect to a target.
    pub fn apply(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        tracing::debug!(effect = %self.id, target = %target.id(), "applying effect");
        for (index, component) in self.components.iter_mut().enumerate() {
            component
                .on_apply(target)
                .inspect_err(|e| log_abort(&self.id, "apply", index, e))?;
        }
        Ok(())
    }

    /// Advance the effect by one simulation step.
    pub fn tick(&mut self, target: &mut dyn StatTarget, delta_time: f64) -> EffectResult<()> {
        tracing::trace!(effect = %self.id, target = %target.id(), delta_time, "ticking effect");
        for (index, component) in self.components.iter_mut().enumerate() {
            component
                .on_tick(target, delta_time)
                .inspect_err(|e| log_abort(&self.id, "tick", index, e))?;
        }
        Ok(())
    }

    /// Detach the effect from a target, reverting its mutations.
    ///
    /// Components are removed in list order, not reverse order; each one
    /// restores from its own snapshot.
    pub fn remove(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        tracing::debug!(effect = %self.id, target = %target.id(), "removing effect");
        for (index, component) in self.components.iter_mut().enumerate() {
            component
                .on_remove(target)
                .inspect_err(|e| log_abort(&self.id, "remove", index, e))?;
        }
        Ok(())
    }
}

fn log_abort(effect: &str, phase: &str, index: usize, error: &EffectError) {
    tracing::warn!(effect, phase, component = index, %error, "effect call aborted");
}
