//! End-to-end tests for the readme binary.
//!
//! Only offline commands are exercised here; sync is covered with all
//! sources disabled so no network is touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const README_WITH_ALL_REGIONS: &str = r#"# Profile

<!-- blog starts -->
<!-- blog ends -->

<!-- douban starts -->
<!-- douban ends -->

<!-- til starts -->
<!-- til ends -->
"#;

const DISABLED_CONFIG: &str = r#"
[blog]
enabled = false

[douban]
enabled = false

[til]
enabled = false
"#;

fn readme_cmd() -> Command {
    Command::cargo_bin("readme").unwrap()
}

#[test]
fn test_help_lists_commands() {
    readme_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("regions"));
}

#[test]
fn test_regions_lists_line_spans() {
    let temp_dir = TempDir::new().unwrap();
    let readme = temp_dir.path().join("README.md");
    fs::write(&readme, README_WITH_ALL_REGIONS).unwrap();

    readme_cmd()
        .args(["regions", "--readme"])
        .arg(&readme)
        .assert()
        .success()
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("douban"))
        .stdout(predicate::str::contains("til"));
}

#[test]
fn test_regions_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let readme = temp_dir.path().join("README.md");
    fs::write(&readme, "# Nothing here\n").unwrap();

    readme_cmd()
        .args(["regions", "--readme"])
        .arg(&readme)
        .assert()
        .success()
        .stdout(predicate::str::contains("No regions found"));
}

#[test]
fn test_check_passes_when_all_regions_present() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), README_WITH_ALL_REGIONS).unwrap();

    readme_cmd()
        .current_dir(temp_dir.path())
        .arg("check")
        .assert()
        .success();
}

#[test]
fn test_check_fails_when_region_missing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("README.md"),
        "<!-- blog starts -->\n<!-- blog ends -->\n",
    )
    .unwrap();

    readme_cmd()
        .current_dir(temp_dir.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing"));
}

#[test]
fn test_sync_with_all_sources_disabled_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let readme = temp_dir.path().join("README.md");
    let config = temp_dir.path().join("readme-sync.toml");
    fs::write(&readme, README_WITH_ALL_REGIONS).unwrap();
    fs::write(&config, DISABLED_CONFIG).unwrap();

    readme_cmd()
        .args(["sync", "--config"])
        .arg(&config)
        .arg("--readme")
        .arg(&readme)
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"));

    assert_eq!(fs::read_to_string(&readme).unwrap(), README_WITH_ALL_REGIONS);
}

#[test]
fn test_missing_readme_is_an_error() {
    let temp_dir = TempDir::new().unwrap();

    readme_cmd()
        .current_dir(temp_dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("readme-sync.toml");
    fs::write(&config, "not = [valid").unwrap();

    readme_cmd()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
