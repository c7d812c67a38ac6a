#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub fn run_nit_command(current_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("nit").expect("Failed to find nit binary");
    cmd.current_dir(current_dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_nit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(dir.join(".nit").join("HEAD"))
        .expect("Failed to read HEAD")
        .trim()
        .to_string()
}

pub fn read_staged_paths(dir: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(dir.join(".nit").join("index"))
        .expect("Failed to read index");
    serde_json::from_str(&content).expect("index is not a JSON array of paths")
}

pub fn read_commit_record(dir: &Path, hash: &str) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join(".nit").join("commits").join(hash))
        .expect("Failed to read commit object");
    serde_json::from_str(&content).expect("commit object is not valid JSON")
}
