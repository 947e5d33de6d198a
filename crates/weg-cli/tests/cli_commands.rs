//! Integration tests for the `weg` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SHEET_JSON: &str = r#"{
    "name": "Kyra Voss",
    "template": "Smuggler",
    "attributes": {
        "dexterity": "3D+1",
        "knowledge": "2D",
        "mechanical": "4D",
        "perception": "3D+1",
        "strength": "2D+2",
        "technical": "2D"
    },
    "skills": {
        "blaster": "5D",
        "space transports": "6D",
        "Sabacc Cheating": "4D"
    },
    "force_points": 2,
    "credits": 1500,
    "equipment": ["Heavy blaster pistol", "Comlink"]
}"#;

const SHEET_TEXT: &str = "Name: Kyra Voss
Template: Smuggler

Force Points: 2
Credits: 1500
";

fn weg() -> Command {
    let mut cmd = Command::cargo_bin("weg").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("WEG_SEED")
        .env_remove("WEG_USE_WILD_DIE")
        .env_remove("WEG_MAX_DICE")
        .env_remove("WEG_MAX_FILE_SIZE")
        .env_remove("WEG_LOG");
    cmd
}

fn sheet(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

// -----------------------------------------------------------------------
// parse
// -----------------------------------------------------------------------

#[test]
fn parse_json_sheet() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyra Voss"))
        .stdout(predicate::str::contains("Smuggler"))
        .stdout(predicate::str::contains("space_transports 6D"))
        .stdout(predicate::str::contains("Credits: 1500"))
        .stdout(predicate::str::contains("parsed as json"));
}

#[test]
fn parse_reports_defaults() {
    let (_dir, path) = sheet("kyra.json", r#"{"name": "Kyra Voss", "credits": "lots"}"#);
    weg()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("dexterity missing, defaulted to 2D"))
        .stdout(predicate::str::contains("credits value 'lots' unreadable"));
}

#[test]
fn parse_as_json_output() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    let output = weg()
        .args(["parse", path.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["character"]["name"], "Kyra Voss");
    assert_eq!(doc["character"]["skills"]["space_transports"], "6D");
    assert_eq!(doc["format"], "json");
}

#[test]
fn parse_text_sheet_with_forced_format() {
    let (_dir, path) = sheet("kyra.sheet", SHEET_TEXT);
    weg()
        .args(["parse", path.to_str().unwrap(), "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyra Voss"))
        .stdout(predicate::str::contains("Force Points: 2"))
        .stdout(predicate::str::contains("parsed as text"));
}

#[test]
fn parse_unknown_format_fails() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["parse", path.to_str().unwrap(), "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: yaml"));
}

#[test]
fn parse_invalid_json_fails() {
    let (_dir, path) = sheet("broken.json", "{\"name\": ");
    weg()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON format"));
}

#[test]
fn parse_empty_sheet_fails() {
    let (_dir, path) = sheet("empty.txt", "  \n");
    weg()
        .args(["parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("character sheet is empty"));
}

#[test]
fn parse_respects_size_limit() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["--max-file-size", "10", "parse", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limit is 10"));
}

#[test]
fn parse_missing_file_fails() {
    weg()
        .args(["parse", "/nonexistent/kyra.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

// -----------------------------------------------------------------------
// roll
// -----------------------------------------------------------------------

#[test]
fn roll_without_dice() {
    weg()
        .args(["roll", "0D+3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No dice +3"))
        .stdout(predicate::str::contains("Total: 3"));
}

#[test]
fn roll_shows_wild_die() {
    weg()
        .args(["--seed", "7", "roll", "3D+2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wild:"))
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn roll_without_wild_die() {
    weg()
        .args(["roll", "3D", "--wild-die", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wild:").not());
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = weg().args(["--seed", "42", "roll", "5D+1"]).output().unwrap();
    let second = weg()
        .env("WEG_SEED", "42")
        .args(["roll", "5D+1"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_against_difficulty() {
    weg()
        .args(["roll", "0D+12", "-d", "moderate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moderate (10): success, margin +2"));
}

#[test]
fn roll_against_target_number() {
    weg()
        .args(["roll", "0D+4", "-d", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 25 (25): failure, margin -21"));
}

#[test]
fn roll_with_unknown_difficulty() {
    weg()
        .args(["roll", "0D+4", "-d", "impossible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown difficulty: impossible"));
}

#[test]
fn roll_with_negative_modifier() {
    weg()
        .args(["roll", "0D+4", "-m", "-6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No dice -2"));
}

#[test]
fn roll_invalid_code_fails() {
    weg()
        .args(["roll", "XD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice code format: XD"));
}

#[test]
fn roll_over_dice_limit_fails() {
    weg()
        .args(["roll", "30D"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many dice: 30 (limit 20)"));
}

#[test]
fn dice_limit_can_be_lifted() {
    weg()
        .args(["--max-dice", "0", "--seed", "1", "roll", "30D"])
        .assert()
        .success();
}

#[test]
fn roll_many_times() {
    weg()
        .args(["--seed", "3", "roll", "2D", "--count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakdown"))
        .stdout(predicate::str::contains("4 rolls of 2D"));
}

#[test]
fn roll_many_against_difficulty() {
    weg()
        .args(["--seed", "3", "roll", "2D", "--count", "2", "-d", "heroic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Difficulty"))
        .stdout(predicate::str::contains("Complications"))
        .stdout(predicate::str::contains("Heroic (25):"))
        .stdout(predicate::str::contains("of 2 succeeded"));
}

#[test]
fn roll_many_reports_each_outcome() {
    weg()
        .args(["roll", "0D+12", "--count", "3", "-d", "moderate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("success +2"))
        .stdout(predicate::str::contains("Moderate (10): 3 of 3 succeeded"));
}

#[test]
fn roll_many_with_unknown_difficulty() {
    weg()
        .args(["roll", "0D+1", "--count", "2", "-d", "impossible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown difficulty: impossible"));
}

#[test]
fn negative_armor_absorbs_nothing() {
    weg()
        .args(["damage", "0D+6", "--armor=-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 raw, 0 absorbed by armor 0"))
        .stdout(predicate::str::contains("Final: 6"));
}

// -----------------------------------------------------------------------
// opposed, damage, force
// -----------------------------------------------------------------------

#[test]
fn opposed_tie_on_equal_totals() {
    weg()
        .args(["opposed", "0D+5", "0D+5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tie"));
}

#[test]
fn opposed_names_the_winner() {
    weg()
        .args(["opposed", "0D+5", "0D+2", "--second-modifier", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winner: 1 (0D+5) by 2"));
}

#[test]
fn damage_absorbed_by_armor() {
    weg()
        .args(["damage", "0D+6", "--armor", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6 raw, 4 absorbed by armor 4"))
        .stdout(predicate::str::contains("Final: 2"));
}

#[test]
fn damage_never_negative() {
    weg()
        .args(["damage", "0D+2", "--armor", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final: 0"));
}

#[test]
fn force_power_roll() {
    weg()
        .args(["force", "0D+12", "-d", "moderate", "--temptation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("success"))
        .stdout(predicate::str::contains("Dark Side temptation rule in effect"));
}

// -----------------------------------------------------------------------
// skill
// -----------------------------------------------------------------------

#[test]
fn skill_from_sheet() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["--seed", "9", "skill", path.to_str().unwrap(), "Space Transports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyra Voss rolls Space Transports skill"))
        .stdout(predicate::str::contains("6D"));
}

#[test]
fn attribute_from_sheet() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["skill", path.to_str().unwrap(), "mech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolls Mechanical attribute"));
}

#[test]
fn untrained_skill_uses_attribute() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["skill", path.to_str().unwrap(), "bargain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolls Bargain (untrained)"))
        .stdout(predicate::str::contains("3D+1"));
}

#[test]
fn untrained_penalty_house_rule() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["skill", path.to_str().unwrap(), "bargain", "--penalize-untrained"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2D+1"));
}

#[test]
fn unknown_skill_fails() {
    let (_dir, path) = sheet("kyra.json", SHEET_JSON);
    weg()
        .args(["skill", path.to_str().unwrap(), "underwater basket weaving"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no skill or attribute named"));
}

// -----------------------------------------------------------------------
// difficulties
// -----------------------------------------------------------------------

#[test]
fn difficulties_table() {
    weg()
        .arg("difficulties")
        .assert()
        .success()
        .stdout(predicate::str::contains("Very Difficult"))
        .stdout(predicate::str::contains("legendary"))
        .stdout(predicate::str::contains("30"));
}
