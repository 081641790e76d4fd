//! CLI tests for the devflags binary.
//!
//! Spawns the real binary against a temp site config directory and checks
//! operation output plus the stable exit codes.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;

use devflags::exit_codes;
use devflags::io::codec;

const SAMPLE_CONFIG: &str = "MAYA_DEV: false\nNUKE_DEV: true\n";

fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join("devflags.yaml"), contents).expect("write config");
}

fn read_config(dir: &Path) -> BTreeMap<String, bool> {
    let raw = fs::read_to_string(dir.join("devflags.yaml")).expect("read config");
    codec::decode(&raw).expect("decode config")
}

fn devflags(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_devflags"));
    cmd.env("DEVFLAGS_CONFIG_DIR", dir);
    cmd
}

#[test]
fn unset_persists_and_get_reads_back_zero() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let status = devflags(temp.path())
        .args(["unset", "MAYA_DEV", "NUKE_DEV"])
        .status()
        .expect("devflags unset");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let flags = read_config(temp.path());
    assert!(!flags["MAYA_DEV"]);
    assert!(!flags["NUKE_DEV"]);

    let output = devflags(temp.path())
        .args(["get", "NUKE_DEV"])
        .output()
        .expect("devflags get");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "0\n");
}

#[test]
fn get_known_flag_prints_one() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let output = devflags(temp.path())
        .args(["get", "NUKE_DEV"])
        .output()
        .expect("devflags get");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn get_unknown_flag_exits_clean_with_diagnostic_only() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let output = devflags(temp.path())
        .args(["get", "KATANA_DEV"])
        .output()
        .expect("devflags get");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn set_unknown_flag_leaves_config_unchanged() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let status = devflags(temp.path())
        .args(["set", "KATANA_DEV"])
        .status()
        .expect("devflags set");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let flags = read_config(temp.path());
    assert!(!flags["MAYA_DEV"]);
    assert!(flags["NUKE_DEV"]);
}

#[test]
fn set_all_matches_explicit_name_list() {
    let via_all = tempfile::tempdir().expect("tempdir");
    write_config(via_all.path(), SAMPLE_CONFIG);
    let via_names = tempfile::tempdir().expect("tempdir");
    write_config(via_names.path(), SAMPLE_CONFIG);

    let status = devflags(via_all.path())
        .args(["set", "--all"])
        .status()
        .expect("devflags set --all");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let status = devflags(via_names.path())
        .args(["set", "MAYA_DEV", "NUKE_DEV"])
        .status()
        .expect("devflags set");
    assert_eq!(status.code(), Some(exit_codes::OK));

    assert_eq!(read_config(via_all.path()), read_config(via_names.path()));
}

#[test]
fn set_all_with_explicit_names_is_fatal_and_non_mutating() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let status = devflags(temp.path())
        .args(["set", "--all", "MAYA_DEV"])
        .status()
        .expect("devflags set");
    assert_eq!(status.code(), Some(exit_codes::CONFLICTING_MODIFIER));

    let raw = fs::read_to_string(temp.path().join("devflags.yaml")).expect("read config");
    assert_eq!(raw, SAMPLE_CONFIG);
}

#[test]
fn list_bash_emits_shell_tokens() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let output = devflags(temp.path())
        .args(["list", "--format", "bash"])
        .output()
        .expect("devflags list");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "MAYA_DEV=0 NUKE_DEV=1\n"
    );
}

#[test]
fn list_unsupported_format_is_fatal() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), SAMPLE_CONFIG);

    let status = devflags(temp.path())
        .args(["list", "--format", "python"])
        .status()
        .expect("devflags list");
    assert_eq!(status.code(), Some(exit_codes::UNSUPPORTED_FORMAT));
}

#[test]
fn missing_environment_variable_is_fatal() {
    let status = Command::new(env!("CARGO_BIN_EXE_devflags"))
        .env_remove("DEVFLAGS_CONFIG_DIR")
        .args(["list"])
        .status()
        .expect("devflags list");
    assert_eq!(status.code(), Some(exit_codes::ENVIRONMENT_MISSING));
}

#[test]
fn missing_config_file_is_unreadable() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = devflags(temp.path())
        .args(["get", "NUKE_DEV"])
        .status()
        .expect("devflags get");
    assert_eq!(status.code(), Some(exit_codes::CONFIG_UNREADABLE));
}

#[test]
fn malformed_config_is_a_distinct_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_config(temp.path(), "MAYA_DEV: sometimes\n");

    let status = devflags(temp.path())
        .args(["list"])
        .status()
        .expect("devflags list");
    assert_eq!(status.code(), Some(exit_codes::MALFORMED_CONFIG));
}
