//! Configuration for the component factory.

use std::collections::HashMap;

use aura_core::Stat;

/// How the factory interprets authored stat names.
#[derive(Debug, Clone, Default)]
pub struct FactoryConfig {
    /// Authoring aliases mapped onto an attribute from the closed set
    /// (e.g. `AttackSpeed` → `Luck`).
    pub stat_aliases: HashMap<String, Stat>,
    /// Accept stat names in any ASCII case (`strength` → `Strength`).
    pub normalize_stat_case: bool,
}

impl FactoryConfig {
    /// Map an authoring alias onto an existing attribute.
    pub fn with_alias(mut self, alias: impl Into<String>, stat: Stat) -> Self {
        self.stat_aliases.insert(alias.into(), stat);
        self
    }

    /// Enable or disable case-insensitive stat names.
    pub fn with_stat_case_normalization(mut self, enabled: bool) -> Self {
        self.normalize_stat_case = enabled;
        self
    }

    /// Rewrite an authored stat name to its canonical form, if the config
    /// knows one. Unrecognised names pass through untouched so the
    /// modifier can reject them when it is first used.
    pub fn canonical_stat_name(&self, authored: &str) -> String {
        if let Some(stat) = self.stat_aliases.get(authored) {
            return stat.as_str().to_string();
        }
        if self.normalize_stat_case
            && let Some(stat) = Stat::find_ignore_case(authored)
        {
            return stat.as_str().to_string();
        }
        authored.to_string()
    }
}
