//! Presentation markers: pure data for renderers.

use aura_core::StatTarget;

use crate::error::EffectResult;

/// Tags an effect with an identifier a presentation layer can key visuals on.
///
/// The engine never acts on the marker. Renderers look up the active effects
/// on an entity and spawn or despawn their own visuals by `effect_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualMarker {
    /// Opaque identifier for the presentation layer.
    pub effect_id: String,
}

impl VisualMarker {
    /// Name used for this component in authoring data.
    pub const TYPE_NAME: &'static str = "VisualMarker";

    /// Create a marker.
    pub fn new(effect_id: impl Into<String>) -> Self {
        Self {
            effect_id: effect_id.into(),
        }
    }

    pub(crate) fn on_apply(&mut self, _target: &mut dyn StatTarget) -> EffectResult<()> {
        Ok(())
    }

    pub(crate) fn on_tick(
        &mut self,
        _target: &mut dyn StatTarget,
        _delta_time: f64,
    ) -> EffectResult<()> {
        Ok(())
    }

    pub(crate) fn on_remove(&mut self, _target: &mut dyn StatTarget) -> EffectResult<()> {
        Ok(())
    }
}

impl std::fmt::Display for VisualMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker '{}'", self.effect_id)
    }
}
