//! Settings for the `sshcfg` binary.
//!
//! This module handles:
//! - TOML settings file parsing
//! - Locating the settings file and the ssh config to operate on

pub mod loader;
pub mod types;

pub use loader::{
	default_ssh_config_path, load_settings, parse_settings_file, parse_settings_str,
	resolve_config_path, settings_path,
};
pub use types::{LoadedSettings, Settings};
