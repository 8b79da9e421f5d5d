//! A catalog of authored effects, indexed by id.
//!
//! The library keeps pristine copies that are never applied. Orchestrators
//! call [`EffectLibrary::instantiate`] to get their own instance, so reversal
//! data never leaks between unrelated attachments.

use std::collections::HashMap;

use crate::definition::EffectDefinition;
use crate::effect::Effect;
use crate::error::{EffectError, EffectResult};
use crate::factory::EffectFactory;

/// Id-indexed collection of effects in authored order.
#[derive(Debug, Clone, Default)]
pub struct EffectLibrary {
    effects: Vec<Effect>,
    index: HashMap<String, usize>,
}

impl EffectLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of effect definitions and build every effect.
    pub fn from_json(source: &str, factory: &EffectFactory) -> EffectResult<Self> {
        let definitions = EffectDefinition::list_from_json(source)?;
        Self::from_definitions(&definitions, factory)
    }

    /// Build every definition. Stops at the first effect that fails.
    pub fn from_definitions(
        definitions: &[EffectDefinition],
        factory: &EffectFactory,
    ) -> EffectResult<Self> {
        let mut library = Self::new();
        for definition in definitions {
            library.insert(factory.build_effect(definition)?)?;
        }
        tracing::debug!(effects = library.len(), "effect library loaded");
        Ok(library)
    }

    /// Add an effect. Fails if the id is already taken.
    pub fn insert(&mut self, effect: Effect) -> EffectResult<()> {
        if self.index.contains_key(effect.id()) {
            return Err(EffectError::DuplicateEffect(effect.id().to_string()));
        }
        self.index.insert(effect.id().to_string(), self.effects.len());
        self.effects.push(effect);
        Ok(())
    }

    /// Look up the pristine copy of an effect.
    pub fn get(&self, id: &str) -> Option<&Effect> {
        self.index.get(id).map(|&i| &self.effects[i])
    }

    /// A fresh, never-applied instance of an effect.
    pub fn instantiate(&self, id: &str) -> EffectResult<Effect> {
        self.get(id)
            .cloned()
            .ok_or_else(|| EffectError::EffectNotFound(id.to_string()))
    }

    /// All effect ids, in authored order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().map(Effect::id)
    }

    /// All effects, in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.iter()
    }

    /// Number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns true if the library holds no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
