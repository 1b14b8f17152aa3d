//! Configuration resolution: defaults, then the TOML file named by
//! `RIFFLE_CONFIG`, then `RIFFLE_*` variables, then command-line flags.

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

const VARS: &[&str] = &[
    "RIFFLE_CONFIG",
    "RIFFLE_SEED",
    "RIFFLE_COPIES",
    "RIFFLE_RANKS",
    "RIFFLE_SUITS",
    "RIFFLE_PLAN",
    "RIFFLE_RANDOM_CARDS",
];

fn clear_env() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) };
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("riffle_cfg_")
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let argv: Vec<&str> = std::iter::once("riffle").chain(args.iter().copied()).collect();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = riffle_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn cfg_json() -> serde_json::Value {
    let (code, stdout, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 0, "stderr={}", stderr);
    serde_json::from_str(&stdout).unwrap()
}

#[test]
#[serial]
fn cfg_reports_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["copies"]["value"], 1);
    assert_eq!(json["copies"]["source"], "default");
    assert_eq!(json["seed"]["value"], serde_json::Value::Null);
    assert_eq!(json["plan"]["value"][0], "riffle");
}

#[test]
#[serial]
fn file_values_override_defaults() {
    clear_env();
    let file = write_config("seed = 7\ncopies = 2\nplan = [\"join\", \"riffle:3\"]\n");
    set_env("RIFFLE_CONFIG", file.path().to_str().unwrap());

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 7);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["copies"]["source"], "file");
    assert_eq!(json["plan"]["value"][1], "riffle:3");
    assert_eq!(json["suits"]["source"], "default");
    clear_env();
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let file = write_config("seed = 7\nranks = \"face\"\n");
    set_env("RIFFLE_CONFIG", file.path().to_str().unwrap());
    set_env("RIFFLE_SEED", "99");
    set_env("RIFFLE_PLAN", "pharo, riffle:6");

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 99);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["ranks"]["value"], "face");
    assert_eq!(json["ranks"]["source"], "file");
    assert_eq!(json["plan"]["value"][0], "pharo");
    assert_eq!(json["plan"]["value"][1], "riffle:6");
    clear_env();
}

#[test]
#[serial]
fn flags_override_env() {
    clear_env();
    set_env("RIFFLE_SEED", "5");
    set_env("RIFFLE_PLAN", "cut");

    let (code, stdout, _) = run_cli(&["shuffle", "--seed", "11", "--format", "json", "pharo"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["seed"], 11);
    assert_eq!(json["plan"][0], "pharo");
    clear_env();
}

#[test]
#[serial]
fn env_seed_makes_shuffle_reproducible() {
    clear_env();
    set_env("RIFFLE_SEED", "2024");
    let (_, first, _) = run_cli(&["shuffle", "--format", "short"]);
    let (_, second, _) = run_cli(&["shuffle", "--format", "short"]);
    assert_eq!(first, second);
    clear_env();
}

#[test]
#[serial]
fn env_rank_and_suit_sets_shape_the_deck() {
    clear_env();
    set_env("RIFFLE_RANKS", "royal");
    set_env("RIFFLE_SUITS", "red");
    let (code, stdout, _) = run_cli(&["shuffle", "--seed", "3", "--format", "json", "join"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["packets"][0].as_array().unwrap().len(), 10);
    clear_env();
}

#[test]
#[serial]
fn invalid_env_value_exits_with_error() {
    clear_env();
    set_env("RIFFLE_COPIES", "zero");
    let (code, stdout, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid copies"), "stderr={}", stderr);
    clear_env();
}

#[test]
#[serial]
fn unknown_set_in_file_is_rejected() {
    clear_env();
    let file = write_config("suits = \"tarot\"\n");
    set_env("RIFFLE_CONFIG", file.path().to_str().unwrap());
    let (code, _, stderr) = run_cli(&["shuffle", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Unknown suit set 'tarot'"), "stderr={}", stderr);
    clear_env();
}

#[test]
#[serial]
fn malformed_file_is_rejected() {
    clear_env();
    let file = write_config("copies = \"lots\"\n");
    set_env("RIFFLE_CONFIG", file.path().to_str().unwrap());
    let (code, _, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Configuration error"));
    clear_env();
}

#[test]
#[serial]
fn flag_steps_replace_invalid_env_plan() {
    clear_env();
    set_env("RIFFLE_PLAN", "overhand");

    let (code, stdout, stderr) = run_cli(&["shuffle", "--seed", "1", "--format", "short", "pharo"]);
    assert_eq!(code, 0, "stderr={}", stderr);
    assert_eq!(stdout.lines().count(), 1);

    let (code, _, stderr) = run_cli(&["shuffle", "--seed", "1"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("unknown shuffle step 'overhand'"), "stderr={}", stderr);
    clear_env();
}

#[test]
#[serial]
fn flag_copies_replace_zero_env_copies() {
    clear_env();
    set_env("RIFFLE_COPIES", "0");

    let (code, stdout, stderr) =
        run_cli(&["shuffle", "--copies", "2", "--format", "json", "join"]);
    assert_eq!(code, 0, "stderr={}", stderr);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["packets"][0].as_array().unwrap().len(), 104);

    // cfg has no flags to fall back on, so the bad value is still reported
    let (code, _, stderr) = run_cli(&["cfg"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("copies must be >=1"), "stderr={}", stderr);
    clear_env();
}

#[test]
#[serial]
fn env_random_cards_extends_the_deck() {
    clear_env();
    set_env("RIFFLE_RANDOM_CARDS", "10");

    let json = cfg_json();
    assert_eq!(json["random_cards"]["value"], 10);
    assert_eq!(json["random_cards"]["source"], "env");

    let (code, stdout, _) = run_cli(&["shuffle", "--seed", "4", "--format", "json", "join"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["packets"][0].as_array().unwrap().len(), 62);

    let (_, stdout, _) = run_cli(&[
        "shuffle", "--seed", "4", "--random-cards", "0", "--format", "json", "join",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["packets"][0].as_array().unwrap().len(), 52);
    clear_env();
}
