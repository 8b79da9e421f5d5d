//! Builds typed components and effects from generic authoring records.
//!
//! A record is a JSON object with a mandatory `type` string naming the
//! component, plus variant fields:
//!
//! | type           | fields                                           |
//! |----------------|--------------------------------------------------|
//! | `StatModifier` | `stat` (string), `value` (number), `isMultiplier` (bool) |
//! | `VisualMarker` | `effectId` (string)                              |
//!
//! Absent fields take their defaults (`""`, `0`, `false`). Stat names are
//! not checked against the closed set here; that happens when the modifier
//! is first applied or removed.

use serde_json::{Map, Value};

use crate::component::{EffectComponent, StatModifier, VisualMarker};
use crate::config::FactoryConfig;
use crate::definition::EffectDefinition;
use crate::effect::Effect;
use crate::error::{EffectError, EffectResult};

/// Turns authoring records into components and effects.
#[derive(Debug, Clone, Default)]
pub struct EffectFactory {
    config: FactoryConfig,
}

impl EffectFactory {
    /// Create a factory with the given configuration.
    pub fn new(config: FactoryConfig) -> Self {
        Self { config }
    }

    /// The factory's configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Build one component from a record.
    pub fn build_component(&self, record: &Value) -> EffectResult<EffectComponent> {
        let fields = record.as_object().ok_or(EffectError::MissingType)?;
        let type_name = match fields.get("type") {
            Some(Value::String(s)) if !s.is_empty() => s.as_str(),
            _ => return Err(EffectError::MissingType),
        };

        match type_name {
            StatModifier::TYPE_NAME => {
                let component = StatModifier::TYPE_NAME;
                let stat = read_string(fields, component, "stat")?.unwrap_or_default();
                let value = read_f64(fields, component, "value")?.unwrap_or(0.0);
                let is_multiplier =
                    read_bool(fields, component, "isMultiplier")?.unwrap_or(false);
                Ok(StatModifier::new(
                    self.config.canonical_stat_name(&stat),
                    value,
                    is_multiplier,
                )
                .into())
            }
            VisualMarker::TYPE_NAME => {
                let effect_id =
                    read_string(fields, VisualMarker::TYPE_NAME, "effectId")?.unwrap_or_default();
                Ok(VisualMarker::new(effect_id).into())
            }
            other => Err(EffectError::UnknownComponentType(other.to_string())),
        }
    }

    /// Build a complete effect, components in authored order.
    ///
    /// The first component that fails to build aborts the whole effect.
    pub fn build_effect(&self, definition: &EffectDefinition) -> EffectResult<Effect> {
        let components = definition
            .components
            .iter()
            .map(|record| self.build_component(record))
            .collect::<EffectResult<Vec<_>>>()?;
        Effect::new(
            definition.id.clone(),
            definition.name.clone(),
            definition.duration,
            components,
        )
    }
}

fn read_string(
    fields: &Map<String, Value>,
    component: &'static str,
    field: &'static str,
) -> EffectResult<Option<String>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(EffectError::InvalidField {
            component,
            field,
            expected: "a string",
        }),
    }
}

fn read_f64(
    fields: &Map<String, Value>,
    component: &'static str,
    field: &'static str,
) -> EffectResult<Option<f64>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or(EffectError::InvalidField {
            component,
            field,
            expected: "a finite number",
        }),
        Some(_) => Err(EffectError::InvalidField {
            component,
            field,
            expected: "a number",
        }),
    }
}

fn read_bool(
    fields: &Map<String, Value>,
    component: &'static str,
    field: &'static str,
) -> EffectResult<Option<bool>> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(EffectError::InvalidField {
            component,
            field,
            expected: "a boolean",
        }),
    }
}
