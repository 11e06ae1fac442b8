use std::path::PathBuf;

/// Library-level structured errors for ssh-config-edit.
///
/// Parsing and serialization are total and never produce one of these.
/// The CLI binary wraps them with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum SshConfigError {
	#[error("Failed to read ssh config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write ssh config file: {path}")]
	ConfigWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read settings file: {path}")]
	SettingsReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings file: {path}")]
	SettingsParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid host pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid directive (expected KEY=VALUE): {input}")]
	InvalidDirective { input: String },

	#[error("Host not found: {host}")]
	HostNotFound { host: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using SshConfigError.
pub type Result<T> = std::result::Result<T, SshConfigError>;
