use serde::Deserialize;
use std::path::PathBuf;

/// Settings for the `sshcfg` binary, read from `~/.sshcfg.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
	/// SSH config file to operate on when `--file` is not given.
	/// Falls back to `~/.ssh/config`.
	#[serde(default)]
	pub config_path: Option<PathBuf>,

	/// Copy the file to `<path>.bak` before writing an edit in place.
	#[serde(default)]
	pub backup: bool,

	/// Default tracing filter, used when `RUST_LOG` is unset.
	#[serde(default)]
	pub log_level: Option<String>,
}

/// Settings together with the file they came from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
	pub settings: Settings,

	/// `None` when no settings file existed and defaults are in use.
	pub path: Option<PathBuf>,
}
