//! Validation of authored effect definitions.
//!
//! Catches problems at load time that would otherwise only surface when an
//! effect is applied, such as a stat modifier naming an attribute outside the
//! closed set. Nothing here touches an entity.

use std::collections::HashSet;

use aura_core::Stat;

use crate::component::EffectComponent;
use crate::definition::EffectDefinition;
use crate::factory::EffectFactory;

/// A warning or error found while validating effect definitions.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// The effect id where the issue was found.
    pub effect: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(effect: &str, message: impl Into<String>) -> Self {
        Self {
            effect: effect.to_string(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(effect: &str, message: impl Into<String>) -> Self {
        Self {
            effect: effect.to_string(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.effect, self.message)
    }
}

/// Validate a set of effect definitions against a factory.
///
/// Returns every issue found; an empty list means the definitions would
/// load and apply cleanly.
pub fn validate_definitions(
    definitions: &[EffectDefinition],
    factory: &EffectFactory,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (position, definition) in definitions.iter().enumerate() {
        let label = if definition.id.is_empty() {
            format!("#{position}")
        } else {
            definition.id.clone()
        };

        if definition.id.is_empty() {
            issues.push(ValidationIssue::error(&label, "effect id is empty"));
        } else if !seen.insert(definition.id.as_str()) {
            issues.push(ValidationIssue::error(&label, "duplicate effect id"));
        }

        if definition.components.is_empty() {
            issues.push(ValidationIssue::warning(&label, "effect has no components"));
        }

        for (index, record) in definition.components.iter().enumerate() {
            match factory.build_component(record) {
                Ok(component) => validate_component(&label, index, &component, &mut issues),
                Err(e) => {
                    issues.push(ValidationIssue::error(
                        &label,
                        format!("component {index}: {e}"),
                    ));
                }
            }
        }
    }

    issues
}

/// Check a built component for problems the factory lets through.
fn validate_component(
    effect: &str,
    index: usize,
    component: &EffectComponent,
    issues: &mut Vec<ValidationIssue>,
) {
    match component {
        EffectComponent::StatModifier(m) => {
            if m.stat.parse::<Stat>().is_err() {
                issues.push(ValidationIssue::warning(
                    effect,
                    format!(
                        "component {index}: unknown stat '{}' will fail when applied",
                        m.stat
                    ),
                ));
            }
            if m.is_multiplier && m.value <= 0.0 {
                issues.push(ValidationIssue::warning(
                    effect,
                    format!(
                        "component {index}: multiplier {} is not positive",
                        m.value
                    ),
                ));
            }
        }
        EffectComponent::VisualMarker(v) => {
            if v.effect_id.is_empty() {
                issues.push(ValidationIssue::warning(
                    effect,
                    format!("component {index}: visual marker has no effectId"),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactoryConfig;
    use serde_json::json;

    fn definition(id: &str, components: Vec<serde_json::Value>) -> EffectDefinition {
        EffectDefinition {
            id: id.to_string(),
            name: id.to_string(),
            duration: 5.0,
            components,
        }
    }

    #[test]
    fn clean_definitions_have_no_issues() {
        let defs = vec![definition(
            "rage",
            vec![
                json!({"type": "StatModifier", "stat": "Strength", "value": 5}),
                json!({"type": "VisualMarker", "effectId": "red_glow"}),
            ],
        )];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn empty_and_duplicate_ids_error() {
        let marker = || json!({"type": "VisualMarker", "effectId": "x"});
        let defs = vec![
            definition("", vec![marker()]),
            definition("haste", vec![marker()]),
            definition("haste", vec![marker()]),
        ];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert_eq!(issues.len(), 2);
        assert!(issues[0].is_error && issues[0].effect == "#0");
        assert_eq!(issues[0].to_string(), "error: #0: effect id is empty");
        assert!(issues[1].is_error && issues[1].message == "duplicate effect id");
    }

    #[test]
    fn unbuildable_component_errors() {
        let defs = vec![definition(
            "odd",
            vec![json!({"type": "Frobnicate"}), json!({"stat": "Luck"})],
        )];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error));
        assert!(issues[0].message.contains("unknown component type: Frobnicate"));
        assert!(issues[1].message.contains("missing a type"));
    }

    #[test]
    fn unknown_stat_warns() {
        let defs = vec![definition(
            "arcane",
            vec![json!({"type": "StatModifier", "stat": "Mana", "value": 5})],
        )];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
        assert!(issues[0].message.contains("unknown stat 'Mana'"));
    }

    #[test]
    fn alias_silences_unknown_stat() {
        let defs = vec![definition(
            "quick",
            vec![json!({"type": "StatModifier", "stat": "AttackSpeed", "value": 1})],
        )];
        let strict = validate_definitions(&defs, &EffectFactory::default());
        assert_eq!(strict.len(), 1);

        let factory =
            EffectFactory::new(FactoryConfig::default().with_alias("AttackSpeed", Stat::Luck));
        assert!(validate_definitions(&defs, &factory).is_empty());
    }

    #[test]
    fn non_positive_multiplier_warns() {
        let defs = vec![definition(
            "null",
            vec![json!({
                "type": "StatModifier",
                "stat": "Luck",
                "value": 0,
                "isMultiplier": true
            })],
        )];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert!(
            issues
                .iter()
                .any(|i| !i.is_error && i.message.contains("not positive"))
        );
    }

    #[test]
    fn empty_marker_and_empty_effect_warn() {
        let defs = vec![
            definition("blank", vec![json!({"type": "VisualMarker"})]),
            definition("hollow", vec![]),
        ];
        let issues = validate_definitions(&defs, &EffectFactory::default());
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error));
        assert!(issues[0].message.contains("no effectId"));
        assert_eq!(issues[1].message, "effect has no components");
    }
}
