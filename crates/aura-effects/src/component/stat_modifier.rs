//! Additive or multiplicative attribute changes with exact reversal.
//!
//! The modifier snapshots the attribute before changing it and writes the
//! snapshot back on remove, so reversal is bit-exact no matter how the delta
//! was rounded. Snapshots are kept per target, keyed by [`EntityId`], which
//! lets one instance be attached to many entities at once.

use std::collections::HashMap;

use aura_core::{EntityId, Stat, StatTarget};

use crate::error::EffectResult;

/// Changes one attribute by a flat amount or a factor.
#[derive(Debug, Clone, PartialEq)]
pub struct StatModifier {
    /// Attribute name as authored. Resolved against the closed set on use.
    pub stat: String,
    /// Flat delta, or factor when `is_multiplier` is set.
    pub value: f64,
    /// Multiply instead of add.
    pub is_multiplier: bool,
    original_values: HashMap<EntityId, i32>,
}

impl StatModifier {
    /// Name used for this component in authoring data.
    pub const TYPE_NAME: &'static str = "StatModifier";

    /// Create a modifier with no recorded snapshots.
    pub fn new(stat: impl Into<String>, value: f64, is_multiplier: bool) -> Self {
        Self {
            stat: stat.into(),
            value,
            is_multiplier,
            original_values: HashMap::new(),
        }
    }

    /// Resolve the authored stat name against the closed attribute set.
    pub fn resolve_stat(&self) -> EffectResult<Stat> {
        Ok(self.stat.parse::<Stat>()?)
    }

    /// The value this modifier would write over `current`.
    ///
    /// Computed in floating point and truncated toward zero. Results outside
    /// the `i32` range saturate.
    pub fn modified_value(&self, current: i32) -> i32 {
        let current = f64::from(current);
        let result = if self.is_multiplier {
            current * self.value
        } else {
            current + self.value.trunc()
        };
        result.trunc() as i32
    }

    /// The pre-apply value recorded for a target, if it is currently applied.
    pub fn snapshot_for(&self, target: EntityId) -> Option<i32> {
        self.original_values.get(&target).copied()
    }

    /// Number of targets this modifier is currently applied to.
    pub fn active_targets(&self) -> usize {
        self.original_values.len()
    }

    pub(crate) fn on_apply(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        let stat = self.resolve_stat()?;
        let id = target.id();
        let current = target.stat(stat);

        // A second apply before remove replaces the snapshot; it does not nest.
        if let Some(previous) = self.original_values.insert(id, current) {
            tracing::debug!(
                %id,
                %stat,
                previous,
                current,
                "stat modifier re-applied, snapshot overwritten"
            );
        }

        let next = self.modified_value(current);
        target.set_stat(stat, next);
        tracing::trace!(%id, %stat, from = current, to = next, "stat modifier applied");
        Ok(())
    }

    pub(crate) fn on_tick(
        &mut self,
        _target: &mut dyn StatTarget,
        _delta_time: f64,
    ) -> EffectResult<()> {
        Ok(())
    }

    pub(crate) fn on_remove(&mut self, target: &mut dyn StatTarget) -> EffectResult<()> {
        let stat = self.resolve_stat()?;
        let id = target.id();
        match self.original_values.remove(&id) {
            Some(original) => {
                target.set_stat(stat, original);
                tracing::trace!(%id, %stat, restored = original, "stat modifier removed");
            }
            None => {
                tracing::trace!(%id, %stat, "stat modifier not applied to target, nothing to revert");
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for StatModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_multiplier {
            write!(f, "{} x{}", self.stat, self.value)
        } else if self.value >= 0.0 {
            write!(f, "{} +{}", self.stat, self.value)
        } else {
            write!(f, "{} {}", self.stat, self.value)
        }
    }
}
