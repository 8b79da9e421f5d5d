use std::path::Path;

use aura_effects::{Effect, EffectFactory};
use comfy_table::{ContentArrangement, Table};

pub fn run(file: &Path, factory: &EffectFactory) -> Result<(), String> {
    let library = super::load_library(file, factory)?;

    if library.is_empty() {
        println!("  No effects found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Duration", "Components"]);

    for effect in library.iter() {
        let name = if effect.name().is_empty() {
            "—".to_string()
        } else {
            effect.name().to_string()
        };
        table.add_row(vec![
            effect.id().to_string(),
            name,
            duration_label(effect),
            component_summary(effect),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} effects", library.len());

    Ok(())
}

pub(super) fn duration_label(effect: &Effect) -> String {
    if effect.is_permanent() {
        "permanent".to_string()
    } else {
        effect.duration().to_string()
    }
}

fn component_summary(effect: &Effect) -> String {
    if effect.components().is_empty() {
        return "—".to_string();
    }
    effect
        .components()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
