//! Error types for the effect engine.

use aura_core::UnknownStat;

/// Errors that can occur while building or running effects.
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    /// A component description has no usable `type` discriminator.
    #[error("component description is missing a type")]
    MissingType,

    /// The `type` discriminator does not name a registered component.
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    /// A stat modifier references an attribute outside the closed set.
    #[error("unknown stat: {0}")]
    UnknownStat(String),

    /// A component field is present but has the wrong type.
    #[error("{component}.{field}: expected {expected}")]
    InvalidField {
        /// Component type being built.
        component: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Human-readable expected type.
        expected: &'static str,
    },

    /// An effect was constructed with an empty id.
    #[error("effect id must not be empty")]
    EmptyId,

    /// Two effect definitions share an id.
    #[error("duplicate effect id: {0}")]
    DuplicateEffect(String),

    /// No effect with this id is registered.
    #[error("effect '{0}' not found")]
    EffectNotFound(String),

    /// Authoring data is not valid JSON or does not match the definition shape.
    #[error("invalid effect data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<UnknownStat> for EffectError {
    fn from(err: UnknownStat) -> Self {
        Self::UnknownStat(err.0)
    }
}

/// Convenience result type for effect operations.
pub type EffectResult<T> = Result<T, EffectError>;
