//! Authoring-side description of an effect.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EffectResult;

/// An effect as written in data files, before its components are built.
///
/// Components stay as raw records here; the factory turns them into typed
/// components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Duration in orchestrator units. Negative means permanent.
    #[serde(default)]
    pub duration: f64,
    /// Raw component records, in application order.
    #[serde(default)]
    pub components: Vec<Value>,
}

impl EffectDefinition {
    /// Parse a JSON array of definitions.
    pub fn list_from_json(source: &str) -> EffectResult<Vec<Self>> {
        Ok(serde_json::from_str(source)?)
    }
}
