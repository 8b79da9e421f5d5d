pub mod check;
pub mod list;
pub mod simulate;

use std::path::Path;

use aura_core::Stat;
use aura_effects::{EffectDefinition, EffectFactory, EffectLibrary, FactoryConfig};

/// Build the factory from the global `--alias` and `--ignore-case` flags.
pub fn factory_from_args(aliases: &[String], ignore_case: bool) -> Result<EffectFactory, String> {
    let mut config = FactoryConfig::default().with_stat_case_normalization(ignore_case);
    for alias in aliases {
        let (name, target) = split_assignment(alias)?;
        let stat = parse_stat(target, ignore_case)?;
        config = config.with_alias(name, stat);
    }
    Ok(EffectFactory::new(config))
}

/// Read a file of effect definitions without building them.
fn read_definitions(file: &Path) -> Result<Vec<EffectDefinition>, String> {
    let source = read_source(file)?;
    EffectDefinition::list_from_json(&source).map_err(|e| format!("{}: {e}", file.display()))
}

/// Read and build a whole effect library.
fn load_library(file: &Path, factory: &EffectFactory) -> Result<EffectLibrary, String> {
    let source = read_source(file)?;
    EffectLibrary::from_json(&source, factory).map_err(|e| format!("{}: {e}", file.display()))
}

fn read_source(file: &Path) -> Result<String, String> {
    std::fs::read_to_string(file).map_err(|e| format!("cannot read {}: {e}", file.display()))
}

/// Split `NAME=VALUE`.
fn split_assignment(raw: &str) -> Result<(&str, &str), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() && !value.is_empty() => {
            Ok((name.trim(), value.trim()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

fn parse_stat(name: &str, ignore_case: bool) -> Result<Stat, String> {
    if ignore_case && let Some(stat) = Stat::find_ignore_case(name) {
        return Ok(stat);
    }
    name.parse::<Stat>().map_err(|e| e.to_string())
}
