use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

const SNIPPET: &str = "Copyright 2024 Acme\\nAll rights reserved";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("license-inserter").unwrap();
    cmd.env_remove("LICENSE_SNIPPET")
        .env_remove("LICENSE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_path_argument() {
    cmd().env("LICENSE_SNIPPET", SNIPPET).assert().failure();
}

#[test]
fn missing_snippet() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("LICENSE_SNIPPET"));
}

#[test]
fn missing_target() {
    let dir = TempDir::new().unwrap();
    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .code(1);
}

#[test]
fn invalid_license_url() {
    let dir = TempDir::new().unwrap();
    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .env("LICENSE_URL", "ftp://example.com/LICENSE")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("LICENSE_URL"));
}

#[test]
fn inserts_and_reports() {
    let dir = TempDir::new().unwrap();
    let main_go = dir.path().join("main.go");
    let gen_go = dir.path().join("gen.go");
    fs::write(&main_go, "package main\n").unwrap();
    fs::write(&gen_go, "// DO NOT EDIT\npackage main\n").unwrap();

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains(format!("[INSERTED]    {}", main_go.display())))
        .stdout(contains(format!("[DO NOT EDIT] {}", gen_go.display())))
        .stdout(contains("added: 1, already licensed: 0, do not edit: 1"));

    assert_eq!(
        fs::read_to_string(&main_go).unwrap(),
        "// Copyright 2024 Acme\n// All rights reserved\n\npackage main\n"
    );

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg(&main_go)
        .assert()
        .success()
        .stdout(contains(format!("[ALREADY]     {}", main_go.display())));
}

#[test]
fn json_summary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Dockerfile"), "FROM scratch\n").unwrap();

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg("--json")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("\"added\": 1"));
}

#[test]
fn downloads_license() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/LICENSE");
        then.status(200).body("MIT License...");
    });

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .env("LICENSE_URL", server.url("/LICENSE"))
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Downloading from"));

    mock.assert();
    assert_eq!(
        fs::read_to_string(dir.path().join("LICENSE")).unwrap(),
        "MIT License..."
    );
}

#[test]
fn license_url_ignored_for_single_file() {
    let dir = TempDir::new().unwrap();
    let main_go = dir.path().join("main.go");
    fs::write(&main_go, "package main\n").unwrap();

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .env("LICENSE_URL", "ftp://example.com/LICENSE")
        .arg(&main_go)
        .assert()
        .success()
        .stdout(contains("[INSERTED]"));

    assert!(fs::read_to_string(&main_go)
        .unwrap()
        .starts_with("// Copyright 2024 Acme\n"));
    assert!(!dir.path().join("LICENSE").exists());
}

#[cfg(unix)]
#[test]
fn keep_going_still_fails_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked.go");
    let open = dir.path().join("open.go");
    fs::write(&locked, "package locked\n").unwrap();
    fs::write(&open, "package open\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root 不受檔案權限限制，無法模擬讀取失敗
    if fs::read(&locked).is_ok() {
        eprintln!("skipping: permissions are not enforced for this user");
        return;
    }

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg("--keep-going")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(contains("failed: 1"));

    assert!(fs::read_to_string(&open)
        .unwrap()
        .starts_with("// Copyright 2024 Acme\n"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(fs::read_to_string(&locked).unwrap(), "package locked\n");
}

#[cfg(unix)]
#[test]
fn unreadable_file_aborts_without_keep_going() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let locked = dir.path().join("locked.go");
    fs::write(&locked, "package locked\n").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read(&locked).is_ok() {
        eprintln!("skipping: permissions are not enforced for this user");
        return;
    }

    cmd()
        .env("LICENSE_SNIPPET", SNIPPET)
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stdout(contains("added:").not());
}
