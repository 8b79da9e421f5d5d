//! Integration tests for the `aura` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write an effect file into a fresh temp directory.
fn effect_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("effects.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn standard_effects() -> (TempDir, PathBuf) {
    effect_file(
        r#"[
    {
        "id": "rage",
        "name": "Rage",
        "duration": 3,
        "components": [
            {"type": "StatModifier", "stat": "Strength", "value": 5},
            {"type": "VisualMarker", "effectId": "red_glow"}
        ]
    },
    {
        "id": "might",
        "name": "Might",
        "duration": -1,
        "components": [
            {"type": "StatModifier", "stat": "Strength", "value": 2, "isMultiplier": true}
        ]
    },
    {
        "id": "quick",
        "name": "Quick",
        "duration": 2,
        "components": [
            {"type": "StatModifier", "stat": "AttackSpeed", "value": 1}
        ]
    }
]"#,
    )
}

fn aura() -> Command {
    Command::cargo_bin("aura").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_with_warnings() {
    let (_dir, path) = standard_effects();
    aura()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("3 effects, 1 warning"))
        .stderr(predicate::str::contains("unknown stat 'AttackSpeed'"));
}

#[test]
fn check_alias_silences_warning() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["check", "--alias", "AttackSpeed=Luck"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 effects, 0 warnings"));
}

#[test]
fn check_fails_on_unknown_component() {
    let (_dir, path) = effect_file(r#"[{"id": "odd", "components": [{"type": "Frobnicate"}]}]"#);
    aura()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown component type: Frobnicate"))
        .stderr(predicate::str::contains("1 error, 0 warnings"));
}

#[test]
fn check_fails_on_malformed_json() {
    let (_dir, path) = effect_file("{ not json");
    aura()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid effect data"));
}

#[test]
fn check_missing_file() {
    aura()
        .args(["check", "/nonexistent/effects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_effects() {
    let (_dir, path) = standard_effects();
    aura()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("rage"))
        .stdout(predicate::str::contains("Strength +5"))
        .stdout(predicate::str::contains("permanent"))
        .stdout(predicate::str::contains("3 effects"));
}

#[test]
fn list_empty_file() {
    let (_dir, path) = effect_file("[]");
    aura()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No effects found."));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_additive_restores() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "rage"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 ticks of 1"))
        .stdout(predicate::str::contains("15"))
        .stdout(predicate::str::contains("Markers: red_glow"))
        .stdout(predicate::str::contains("All attributes restored."));
}

#[test]
fn simulate_multiplier_with_start_value() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "might", "--set", "Strength=7", "--ticks", "2"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("permanent"))
        .stdout(predicate::str::contains("14"))
        .stdout(predicate::str::contains("All attributes restored."));
}

#[test]
fn simulate_unknown_stat_fails_at_apply() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "quick"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("apply failed: unknown stat: AttackSpeed"));
}

#[test]
fn simulate_alias_maps_stat() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "quick", "--alias", "AttackSpeed=Luck"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("11"))
        .stdout(predicate::str::contains("All attributes restored."));
}

#[test]
fn simulate_unknown_effect() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "ghost"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("effect 'ghost' not found"));
}

#[test]
fn simulate_rejects_zero_dt() {
    let (_dir, path) = standard_effects();
    aura()
        .args(["simulate", "--effect", "rage", "--dt", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dt must be a positive number"));
}
