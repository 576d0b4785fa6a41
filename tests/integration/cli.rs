//! Argument handling, output tags, and exit codes of the binary.

use super::patch_command;
use claude_config_patcher::test_utils::ConfigFixture;
use predicates::prelude::*;

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: patch-claude-config <project_path> [server_name]"))
        .stdout(predicate::str::contains(
            "Example: patch-claude-config /home/owner/claude/target-repo",
        ));

    assert_eq!(fixture.read_raw().unwrap(), "{}");
}

#[test]
fn test_success_prints_info_and_success_tags() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture)
        .arg("/repo")
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO]"))
        .stdout(predicate::str::contains("Added tools to allowedTools: Read, Write, Edit"))
        .stdout(predicate::str::contains("Set enableAllProjectMcpServers to true for /repo"))
        .stdout(predicate::str::contains("Added local_server to enabledMcpjsonServers for /repo"))
        .stdout(predicate::str::contains("Added local_server definition to mcpServers for /repo"))
        .stdout(predicate::str::contains("[SUCCESS]"))
        .stdout(predicate::str::contains("for project /repo"))
        .stderr(predicate::str::contains("[ERROR]").not());
}

#[test]
fn test_missing_config_warns_with_exit_code_one() {
    let fixture = ConfigFixture::empty().unwrap();

    patch_command(&fixture)
        .arg("/repo")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARNING]"))
        .stdout(predicate::str::contains("Claude config not found at"))
        .stdout(predicate::str::contains("[SUCCESS]").not());

    assert!(!fixture.path().exists());
}

#[test]
fn test_invalid_json_errors_on_stderr() {
    let fixture = ConfigFixture::with_content("{\"projects\": {").unwrap();

    patch_command(&fixture)
        .arg("/repo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("Could not load"))
        .stdout(predicate::str::contains("[SUCCESS]").not());

    assert_eq!(fixture.read_raw().unwrap(), "{\"projects\": {");
}

#[test]
fn test_wrong_shape_errors_on_stderr() {
    let fixture = ConfigFixture::with_content("[1, 2, 3]").unwrap();

    patch_command(&fixture)
        .arg("/repo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("is not an object"));

    assert_eq!(fixture.read_raw().unwrap(), "[1, 2, 3]");
}

#[test]
fn test_quiet_success_is_silent() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture)
        .args(["--quiet", "/repo"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_version_flag() {
    let fixture = ConfigFixture::empty().unwrap();

    patch_command(&fixture)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_extra_positional_arguments_are_ignored() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture)
        .args(["/repo", "srv", "extra", "--another"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added srv to enabledMcpjsonServers for /repo"));

    let document = fixture.read_json().unwrap();
    assert!(document["projects"]["/repo"]["mcpServers"].get("srv").is_some());
    assert!(document["projects"]["/repo"]["mcpServers"].get("extra").is_none());
}

#[test]
fn test_unrecognised_option_fails_with_exit_code_one() {
    let fixture = ConfigFixture::with_content("{}").unwrap();

    patch_command(&fixture)
        .arg("-repo")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument"));

    assert_eq!(fixture.read_raw().unwrap(), "{}");
}

#[test]
fn test_help_flag_succeeds() {
    let fixture = ConfigFixture::empty().unwrap();

    patch_command(&fixture)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_PATH"));
}

#[cfg(unix)]
#[test]
fn test_failed_write_errors_on_stderr() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let fixture = ConfigFixture::with_content("{}").unwrap();
    fs::set_permissions(fixture.dir(), fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can still write into a read-only directory
    let marker = fixture.dir().join(".write-check");
    if fs::write(&marker, "").is_ok() {
        fs::remove_file(&marker).unwrap();
        fs::set_permissions(fixture.dir(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let assert = patch_command(&fixture).arg("/repo").assert();
    fs::set_permissions(fixture.dir(), fs::Permissions::from_mode(0o755)).unwrap();

    assert
        .code(1)
        .stdout(predicate::str::contains("Set enableAllProjectMcpServers to true for /repo"))
        .stdout(predicate::str::contains("[SUCCESS]").not())
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("Could not write"));

    assert_eq!(fixture.read_raw().unwrap(), "{}");
}
