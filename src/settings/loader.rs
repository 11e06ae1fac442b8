use crate::error::{Result, SshConfigError};
use crate::settings::types::{LoadedSettings, Settings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the settings file in the home directory.
pub const SETTINGS_FILE_NAME: &str = ".sshcfg.toml";

/// Parse a settings file from the given path.
pub fn parse_settings_file(path: &Path) -> Result<Settings> {
	let content =
		std::fs::read_to_string(path).map_err(|source| SshConfigError::SettingsReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_settings_str(&content, path)
}

/// Parse settings from a string (useful for testing).
pub fn parse_settings_str(content: &str, path: &Path) -> Result<Settings> {
	toml::from_str(content).map_err(|source| SshConfigError::SettingsParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Load settings from `explicit` if given, otherwise from
/// `~/.sshcfg.toml` when it exists.
///
/// An explicit path must exist; a missing default file yields defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings> {
	let (path, required) = match explicit {
		Some(path) => (path.to_path_buf(), true),
		None => (settings_path()?, false),
	};

	if !required && !path.exists() {
		debug!(path = %path.display(), "no settings file, using defaults");
		return Ok(LoadedSettings::default());
	}

	let settings = parse_settings_file(&path)?;
	debug!(path = %path.display(), ?settings, "loaded settings");
	Ok(LoadedSettings {
		settings,
		path: Some(path),
	})
}

/// Get the path to the user's settings file.
pub fn settings_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(SshConfigError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(SETTINGS_FILE_NAME))
}

/// Get the path to the user's ssh client config.
pub fn default_ssh_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(SshConfigError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(".ssh").join("config"))
}

/// The ssh config file to operate on: `--file`, then the settings file's
/// `config-path`, then `~/.ssh/config`.
pub fn resolve_config_path(explicit: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
	match explicit.or(settings.config_path.as_deref()) {
		Some(path) => Ok(path.to_path_buf()),
		None => default_ssh_config_path(),
	}
}
