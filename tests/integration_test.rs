#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE: &str = "\
# Personal hosts
IdentityFile ~/.ssh/id_a

Host foo
  HostName foo.example.com
  Port 22

Host *
  Port 99
";

/// Command pinned to an empty settings file so a real ~/.sshcfg.toml
/// cannot leak into the test.
fn sshcfg_cmd(dir: &Path) -> assert_cmd::Command {
	let settings = dir.join("settings.toml");
	if !settings.exists() {
		fs::write(&settings, "").unwrap();
	}
	let mut cmd = assert_cmd::Command::cargo_bin("sshcfg").unwrap();
	cmd.env_remove("RUST_LOG")
		.arg("--settings")
		.arg(&settings)
		.current_dir(dir);
	cmd
}

fn write_sample(dir: &Path) -> PathBuf {
	let path = dir.join("config");
	fs::write(&path, SAMPLE).unwrap();
	path
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	sshcfg_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("without losing formatting"));
}

#[test]
fn test_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	sshcfg_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("sshcfg"));
}

#[test]
fn test_no_args_shows_help() {
	assert_cmd::Command::cargo_bin("sshcfg")
		.unwrap()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// read-only commands
// ============================================================================

#[test]
fn test_check_reports_round_trip() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.arg("check")
		.assert()
		.success()
		.stdout(predicate::str::contains("ok"))
		.stdout(predicate::str::contains("2 hosts"));
}

#[test]
fn test_hosts_lists_in_order() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.arg("hosts")
		.assert()
		.success()
		.stdout("foo\n*\n");
}

#[test]
fn test_find_prints_block_verbatim() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["find", "foo"])
		.assert()
		.success()
		.stdout("Host foo\n  HostName foo.example.com\n  Port 22\n\n");
}

#[test]
fn test_find_missing_host_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["find", "nope"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Host not found: nope"));
}

#[test]
fn test_show_resolves_settings() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["show", "foo"])
		.assert()
		.success()
		.stdout(
			"IdentityFile ~/.ssh/id_a\nHost foo\nHostName foo.example.com\nPort 22\n",
		);
}

#[test]
fn test_show_json() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	let output = sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["show", "foo", "--json"])
		.output()
		.unwrap();
	assert!(output.status.success());

	let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(json["Port"], "22");
	assert_eq!(json["IdentityFile"], serde_json::json!(["~/.ssh/id_a"]));
}

#[test]
fn test_show_wildcard_only_host_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["show", "bar"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Host not found: bar"));
}

// ============================================================================
// editing commands
// ============================================================================

#[test]
fn test_add_inserts_before_wildcard_and_writes_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["add", "Host=bar", "HostName=bar.example.com"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Updated"));

	let content = fs::read_to_string(&path).unwrap();
	assert_eq!(
		content,
		"# Personal hosts\nIdentityFile ~/.ssh/id_a\n\nHost foo\n  HostName foo.example.com\n  Port 22\n\nHost bar\n  HostName bar.example.com\n\nHost *\n  Port 99\n"
	);
}

#[test]
fn test_add_dry_run_leaves_file_untouched() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["add", "--dry-run", "Host=bar"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Host bar\n\nHost *"));

	assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_add_rejects_argument_without_equals() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["add", "Host"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_add_creates_missing_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("new_config");

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["add", "Host=foo", "User=me"])
		.assert()
		.success();

	assert_eq!(fs::read_to_string(&path).unwrap(), "Host foo\n  User me\n\n");
}

#[test]
fn test_remove_host() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["remove", "foo"])
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(&path).unwrap(),
		"# Personal hosts\nIdentityFile ~/.ssh/id_a\n\nHost *\n  Port 99\n"
	);
}

#[test]
fn test_remove_missing_host_is_noop() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());

	sshcfg_cmd(temp_dir.path())
		.arg("--file")
		.arg(&path)
		.args(["remove", "nope"])
		.assert()
		.success()
		.stderr(predicate::str::contains("nothing changed"));

	assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

// ============================================================================
// settings tests
// ============================================================================

#[test]
fn test_settings_config_path_and_backup() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = write_sample(temp_dir.path());
	let settings = temp_dir.path().join("settings.toml");
	fs::write(
		&settings,
		format!("config-path = {:?}\nbackup = true\n", path.display().to_string()),
	)
	.unwrap();

	sshcfg_cmd(temp_dir.path())
		.args(["remove", "foo"])
		.assert()
		.success();

	let backup = temp_dir.path().join("config.bak");
	assert_eq!(fs::read_to_string(backup).unwrap(), SAMPLE);
	assert!(!fs::read_to_string(&path).unwrap().contains("Host foo"));
}

#[test]
fn test_invalid_settings_file_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join("settings.toml"), "backup = \"maybe\"\n").unwrap();

	sshcfg_cmd(temp_dir.path())
		.arg("hosts")
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load settings"));
}
