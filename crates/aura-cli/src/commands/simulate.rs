//! A minimal orchestrator: attach one effect, tick it until it expires,
//! then detach it, showing the subject's attributes at each stage.

use std::path::Path;

use aura_core::{Actor, Stat, StatBlock};
use aura_effects::EffectFactory;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

/// Ticks run for a permanent effect when `--ticks` is not given.
const PERMANENT_TICKS: u64 = 10;

/// Value every attribute starts at unless overridden with `--set`.
const DEFAULT_STAT: i32 = 10;

pub fn run(
    file: &Path,
    factory: &EffectFactory,
    effect_id: &str,
    ticks: Option<u64>,
    dt: f64,
    overrides: &[String],
) -> Result<(), String> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(format!("--dt must be a positive number, got {dt}"));
    }

    let library = super::load_library(file, factory)?;
    let mut effect = library.instantiate(effect_id).map_err(|e| e.to_string())?;
    let mut subject = Actor::new("Subject").with_stats(starting_stats(
        overrides,
        factory.config().normalize_stat_case,
    )?);

    let ticks = ticks.unwrap_or_else(|| {
        if effect.is_permanent() {
            PERMANENT_TICKS
        } else {
            (effect.duration() / dt).ceil() as u64
        }
    });

    println!(
        "  {} '{}' {}",
        "Simulating".bold(),
        effect.id(),
        format!(
            "(duration {}, {ticks} ticks of {dt})",
            super::list::duration_label(&effect)
        )
        .dimmed()
    );
    println!();

    let before = subject.stats;
    let mut rows = vec![("before".to_string(), before)];

    effect
        .apply(&mut subject)
        .map_err(|e| format!("apply failed: {e}"))?;
    rows.push(("applied".to_string(), subject.stats));

    let mut elapsed = 0.0;
    for _ in 0..ticks {
        effect
            .tick(&mut subject, dt)
            .map_err(|e| format!("tick failed: {e}"))?;
        elapsed += dt;
    }
    rows.push((format!("after {ticks} ticks ({elapsed})"), subject.stats));

    effect
        .remove(&mut subject)
        .map_err(|e| format!("remove failed: {e}"))?;
    rows.push(("removed".to_string(), subject.stats));

    println!("{}", stat_table(&rows));
    println!();

    let markers: Vec<&str> = effect.marker_ids().collect();
    if !markers.is_empty() {
        println!("  Markers: {}", markers.join(", "));
    }

    if subject.stats == before {
        println!("  {}", "All attributes restored.".green());
    } else {
        println!(
            "  {}",
            "Attributes differ from their starting values after removal.".yellow()
        );
    }

    Ok(())
}

fn starting_stats(overrides: &[String], ignore_case: bool) -> Result<StatBlock, String> {
    let mut stats = StatBlock::default();
    for stat in Stat::ALL {
        stats.set(stat, DEFAULT_STAT);
    }
    for raw in overrides {
        let (name, value) = super::split_assignment(raw)?;
        let stat = super::parse_stat(name, ignore_case)?;
        let value = value
            .parse::<i32>()
            .map_err(|e| format!("invalid value for {stat}: {e}"))?;
        stats.set(stat, value);
    }
    Ok(stats)
}

fn stat_table(rows: &[(String, StatBlock)]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Phase".to_string()];
    header.extend(Stat::ALL.iter().map(|s| s.to_string()));
    table.set_header(header);

    for (phase, stats) in rows {
        let mut row = vec![phase.clone()];
        row.extend(stats.iter().map(|(_, v)| v.to_string()));
        table.add_row(row);
    }
    table
}
