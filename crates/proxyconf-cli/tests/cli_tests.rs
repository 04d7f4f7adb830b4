//! Integration tests for the proxyconf binary.
//!
//! These tests exercise the compiled binary using assert_cmd.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn proxyconf_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("proxyconf"));
    cmd.env_remove("PROXYCONF_TEMPLATES")
        .env_remove("PROXYCONF_OUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_output() {
    proxyconf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("--templates"));
}

#[test]
fn test_export_help_lists_formats() {
    proxyconf_cmd()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kubernetes"));
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_yaml_to_cli() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source.write_str("log:\n  level: DEBUG\n").unwrap();

    proxyconf_cmd()
        .args(["export", source.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("--log.level=debug\n");
}

#[test]
fn test_export_toml_to_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.toml");
    source.write_str("[log]\nlevel = \"debug\"\n").unwrap();

    proxyconf_cmd()
        .args(["export", source.path().to_str().unwrap(), "--to", "yaml"])
        .assert()
        .success()
        .stdout("log:\n  level: debug\n");
}

#[test]
fn test_export_explicit_source_format() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.conf");
    source.write_str("[log]\nlevel = \"info\"\n").unwrap();

    proxyconf_cmd()
        .args(["export", source.path().to_str().unwrap(), "--from", "toml"])
        .assert()
        .success()
        .stdout("--log.level=info\n");
}

#[test]
fn test_export_docker_compose() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source
        .write_str("entryPoints:\n  web:\n    address: \":8000\"\nproviders:\n  docker: {}\n")
        .unwrap();

    proxyconf_cmd()
        .arg("--templates")
        .arg(templates_dir())
        .args(["export", source.path().to_str().unwrap(), "-t", "docker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- \"--providers.docker\""))
        .stdout(predicate::str::contains("- \"8000:8000\""));
}

#[test]
fn test_export_to_output_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source.write_str("log:\n  level: debug\n").unwrap();
    let output = temp.child("traefik.toml");

    proxyconf_cmd()
        .args([
            "export",
            source.path().to_str().unwrap(),
            "-t",
            "toml",
            "-o",
            output.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    output.assert("[log]\nlevel = \"debug\"\n");
}

#[test]
fn test_export_unknown_format_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source.write_str("log:\n  level: debug\n").unwrap();

    proxyconf_cmd()
        .args(["export", source.path().to_str().unwrap(), "-t", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format: json"));
}

#[test]
fn test_export_missing_source_fails() {
    let temp = assert_fs::TempDir::new().unwrap();

    proxyconf_cmd()
        .args(["export", temp.path().join("missing.yml").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open source file"));
}

#[test]
fn test_export_bad_address_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source
        .write_str("entryPoints:\n  web:\n    address: \"8000\"\n")
        .unwrap();

    proxyconf_cmd()
        .arg("--templates")
        .arg(templates_dir())
        .args(["export", source.path().to_str().unwrap(), "-t", "k8s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry point web"));
}

#[test]
fn test_export_missing_template_fails() {
    let temp = assert_fs::TempDir::new().unwrap();
    let source = temp.child("traefik.yml");
    source.write_str("log:\n  level: debug\n").unwrap();

    proxyconf_cmd()
        .env("PROXYCONF_TEMPLATES", temp.path().join("nowhere"))
        .args(["export", source.path().to_str().unwrap(), "-t", "docker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read template"));
}

// ============================================================================
// Default
// ============================================================================

#[test]
fn test_default_file_provider_toml() {
    let output = proxyconf_cmd()
        .args(["default", "file"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("[entryPoints.web]\naddress = \":8000\"\n"));
    assert!(output.contains("[entryPoints.websecure]\naddress = \":8443\"\n"));
    assert!(output.contains("[providers.file]\ndirectory = \"conf\"\n"));
}

#[test]
fn test_default_docker_provider_cli() {
    proxyconf_cmd()
        .args(["default", "docker", "-t", "cli"])
        .assert()
        .success()
        .stdout(
            "--entrypoints.web.address=:8000 --entrypoints.websecure.address=:8443 --providers.docker\n",
        );
}

#[test]
fn test_default_unknown_provider_fails() {
    proxyconf_cmd()
        .args(["default", "consul"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("consul"));
}
