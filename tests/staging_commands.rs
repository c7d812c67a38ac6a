use assert_fs::fixture::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;

mod common;

fn random_file(dir: &assert_fs::TempDir) -> String {
    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    dir.child(&file_name)
        .write_str(&file_content)
        .expect("Failed to write file");
    file_name
}

#[test]
fn init_creates_repository_layout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized empty repository in"));

    assert!(dir.child(".nit/commits").path().is_dir());
    assert_eq!(common::read_head(dir.path()), "");
    assert_eq!(common::read_staged_paths(dir.path()), Vec::<String>::new());

    Ok(())
}

#[test]
fn reinit_preserves_staged_paths_and_head() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    let file_name = random_file(&dir);
    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    common::run_nit_command(dir.path(), &["commit", "-m", "first"])
        .assert()
        .success();
    let head = common::read_head(dir.path());

    let other_file = random_file(&dir);
    common::run_nit_command(dir.path(), &["add", &other_file])
        .assert()
        .success();

    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    assert_eq!(common::read_head(dir.path()), head);
    assert_eq!(common::read_staged_paths(dir.path()), vec![other_file]);

    Ok(())
}

#[test]
fn add_stages_an_existing_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    let file_name = random_file(&dir);

    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Added {file_name} to the staging area"
        )));

    assert_eq!(common::read_staged_paths(dir.path()), vec![file_name]);

    Ok(())
}

#[test]
fn add_nonexistent_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    common::run_nit_command(dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt does not exist"));

    assert_eq!(common::read_staged_paths(dir.path()), Vec::<String>::new());

    Ok(())
}

#[test]
fn add_twice_keeps_a_single_occurrence() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    let file_name = random_file(&dir);

    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success();
    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{file_name} is already staged"
        )));

    assert_eq!(common::read_staged_paths(dir.path()), vec![file_name]);

    Ok(())
}

#[test]
fn add_before_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let file_name = random_file(&dir);

    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository not initialised"));

    Ok(())
}

#[test]
fn rm_unstages_a_staged_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    let file_name = random_file(&dir);
    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success();

    common::run_nit_command(dir.path(), &["rm", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Removed {file_name} from the staging area"
        )));

    assert_eq!(common::read_staged_paths(dir.path()), Vec::<String>::new());

    Ok(())
}

#[test]
fn rm_of_unstaged_file_is_reported_not_failed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    let staged = random_file(&dir);
    common::run_nit_command(dir.path(), &["add", &staged])
        .assert()
        .success();

    common::run_nit_command(dir.path(), &["rm", "never-staged.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("never-staged.txt was not staged"));

    assert_eq!(common::read_staged_paths(dir.path()), vec![staged]);

    Ok(())
}

#[test]
fn rm_before_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    common::run_nit_command(dir.path(), &["rm", "anything.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Repository not initialised"));

    Ok(())
}

#[test]
fn corrupted_index_is_reset_with_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    common::run_nit_command(dir.path(), &["init"])
        .assert()
        .success();

    std::fs::write(dir.child(".nit/index").path(), "{definitely not json")?;

    let file_name = random_file(&dir);
    common::run_nit_command(dir.path(), &["add", &file_name])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning: index was unreadable"));

    assert_eq!(common::read_staged_paths(dir.path()), vec![file_name]);

    Ok(())
}
