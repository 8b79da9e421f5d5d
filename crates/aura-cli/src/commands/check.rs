use std::path::Path;

use aura_effects::{EffectFactory, validate_definitions};
use colored::Colorize;

pub fn run(file: &Path, factory: &EffectFactory) -> Result<(), String> {
    let definitions = super::read_definitions(file)?;
    let issues = validate_definitions(&definitions, factory);

    for issue in &issues {
        if issue.is_error {
            eprintln!("  {} {}: {}", "error".red().bold(), issue.effect, issue.message);
        } else {
            eprintln!("  {} {}: {}", "warning".yellow().bold(), issue.effect, issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} effect{}, {} warning{}",
        definitions.len(),
        if definitions.len() == 1 { "" } else { "s" },
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
    Ok(())
}
