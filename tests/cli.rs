//! End-to-end runs of the `fern` binary against a temporary output
//! file, kept tiny so the suite stays fast.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_tiny_fern_to_a_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fern.ppm");

    Command::cargo_bin("fern")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8", "-i", "1"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("P3\n8 8\n255\n"));
    assert_eq!(contents.lines().count(), 3 + 64);
}

#[test]
fn gray_palette_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("fern.ppm");

    Command::cargo_bin("fern")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "4x4", "-i", "1", "-p", "gray"])
        .assert()
        .success();

    assert!(std::fs::read_to_string(&out).unwrap().starts_with("P3\n4 4\n255\n"));
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("fern")
        .unwrap()
        .args(&["-o", "unused.ppm", "-s", "8by8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_a_growth_factor_above_one() {
    Command::cargo_bin("fern")
        .unwrap()
        .args(&["-o", "unused.ppm", "-g", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Growth factor must be between 0 and 1"));
}

#[test]
fn rejects_an_unknown_palette() {
    Command::cargo_bin("fern")
        .unwrap()
        .args(&["-o", "unused.ppm", "-p", "sepia"])
        .assert()
        .failure();
}
