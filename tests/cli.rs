use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cs_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cs").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("XDG_DATA_HOME")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("SJB_TOOLS_TEST")
        .env_remove("RUST_LOG");
    cmd
}

fn data_dir(home: &Path) -> PathBuf {
    home.join(".local/share/sjb/cheatsheet")
}

fn write_import(dir: &Path, name: &str, clues: &[&str]) -> PathBuf {
    let items: Vec<String> = clues
        .iter()
        .enumerate()
        .map(|(i, clue)| {
            format!(
                r#"{{"oid": {}, "clue": "{}", "answer": "answer {}", "primary": "shell"}}"#,
                i + 1,
                clue,
                i + 1
            )
        })
        .collect();
    let path = dir.join(name);
    fs::write(&path, format!(r#"{{"version": 1, "items": [{}]}}"#, items.join(","))).unwrap();
    path
}

#[test]
fn test_show_missing_list() {
    let temp = TempDir::new().unwrap();
    cs_cmd(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'cheatsheet' is empty."));
}

#[test]
fn test_path_prints_list_and_backup() {
    let temp = TempDir::new().unwrap();
    let dir = data_dir(temp.path());
    cs_cmd(temp.path())
        .args(["--list", "work", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.join("work.json").to_str().unwrap()))
        .stdout(predicate::str::contains(dir.join("work.backup").to_str().unwrap()));
}

#[test]
fn test_import_show_and_restore() {
    let temp = TempDir::new().unwrap();
    let first = write_import(temp.path(), "first.json", &["list files", "disk usage"]);
    let second = write_import(temp.path(), "second.json", &["list files", "disk usage", "uptime"]);

    cs_cmd(temp.path())
        .args(["-l", "work", "import"])
        .arg(&first)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 entries into 'work'."));
    assert!(!data_dir(temp.path()).join("work.backup").exists());

    cs_cmd(temp.path())
        .args(["-l", "work", "import"])
        .arg(&second)
        .assert()
        .success();
    assert!(data_dir(temp.path()).join("work.backup").is_file());

    cs_cmd(temp.path())
        .args(["-l", "work", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uptime"));

    cs_cmd(temp.path())
        .args(["-l", "work", "restore"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));

    cs_cmd(temp.path())
        .args(["-l", "work", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disk usage"))
        .stdout(predicate::str::contains("uptime").not());
}

#[test]
fn test_import_invalid_list_fails() {
    let temp = TempDir::new().unwrap();
    let bad = write_import(temp.path(), "bad.json", &[""]);
    cs_cmd(temp.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
    assert!(!data_dir(temp.path()).join("cheatsheet.json").exists());
}

#[test]
fn test_show_directory_in_place_of_list() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(data_dir(temp.path()).join("work.json")).unwrap();
    cs_cmd(temp.path())
        .args(["-l", "work", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong filetype"));
}

#[test]
fn test_lists_only_regular_json_files() {
    let temp = TempDir::new().unwrap();
    let dir = data_dir(temp.path());
    fs::create_dir_all(dir.join("baz.json")).unwrap();
    fs::write(dir.join("foo.json"), "{}").unwrap();
    fs::write(dir.join("bar.json"), "{}").unwrap();
    fs::write(dir.join("notes.txt"), "").unwrap();

    cs_cmd(temp.path())
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("bar"))
        .stdout(predicate::str::contains("foo"))
        .stdout(predicate::str::contains("baz").not())
        .stdout(predicate::str::contains("notes").not());
}

#[test]
fn test_lists_without_data_dir() {
    let temp = TempDir::new().unwrap();
    cs_cmd(temp.path())
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("No lists found."));
}

#[test]
fn test_config_default_list() {
    let temp = TempDir::new().unwrap();
    cs_cmd(temp.path())
        .args(["config", "default-list", "work"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join(".config/sjb/cheatsheet/config.json")
        .is_file());

    cs_cmd(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'work' is empty."));
}

#[test]
fn test_test_mode_uses_test_roots() {
    let temp = TempDir::new().unwrap();
    let test_data = temp.path().join("test-data");
    let import = write_import(temp.path(), "list.json", &["whoami"]);

    cs_cmd(temp.path())
        .env("SJB_TOOLS_TEST", "1")
        .env("TEST_XDG_DATA_HOME", &test_data)
        .env("TEST_XDG_CONFIG_HOME", temp.path().join("test-config"))
        .arg("import")
        .arg(&import)
        .assert()
        .success();

    assert!(test_data.join("sjb/cheatsheet/cheatsheet.json").is_file());
    assert!(!data_dir(temp.path()).exists());

    cs_cmd(temp.path())
        .env("SJB_TOOLS_TEST", "1")
        .env("XDG_CONFIG_HOME", temp.path().join("xdg-config"))
        .env("TEST_XDG_CONFIG_HOME", temp.path().join("test-config"))
        .args(["config", "default-list", "work"])
        .assert()
        .success();
    assert!(temp
        .path()
        .join("test-config/sjb/cheatsheet/config.json")
        .is_file());
    assert!(!temp.path().join("xdg-config").exists());
}

#[test]
fn test_empty_list_flag_uses_configured_default() {
    let temp = TempDir::new().unwrap();
    cs_cmd(temp.path())
        .args(["config", "default-list", "work"])
        .assert()
        .success();

    cs_cmd(temp.path())
        .args(["--list", "", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'work' is empty."));
}

#[test]
fn test_no_home_is_an_error() {
    let temp = TempDir::new().unwrap();
    cs_cmd(temp.path())
        .env_remove("HOME")
        .arg("lists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("environment variables"));
}
