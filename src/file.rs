//! Reading and writing ssh config files for the `sshcfg` binary.
//!
//! The parser, serializer and resolver never touch the filesystem; these
//! helpers sit at the edge.

use crate::error::{Result, SshConfigError};
use crate::tree::SshConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read an ssh config file as text. A missing file reads as empty so the
/// first `add` can create it.
pub fn read_config_text(path: &Path) -> Result<String> {
	match std::fs::read_to_string(path) {
		Ok(text) => Ok(text),
		Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
			debug!(path = %path.display(), "ssh config does not exist, starting empty");
			Ok(String::new())
		}
		Err(source) => Err(SshConfigError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		}),
	}
}

/// Read and parse an ssh config file.
pub fn load_config(path: &Path) -> Result<SshConfig> {
	Ok(SshConfig::parse(&read_config_text(path)?))
}

/// Path of the backup copy written before an in-place edit.
pub fn backup_path(path: &Path) -> PathBuf {
	let mut name = path.as_os_str().to_owned();
	name.push(".bak");
	PathBuf::from(name)
}

/// Serialize `config` to `path`, optionally copying the previous file to
/// `<path>.bak` first.
pub fn save_config(path: &Path, config: &SshConfig, backup: bool) -> Result<()> {
	if backup && path.exists() {
		let target = backup_path(path);
		std::fs::copy(path, &target).map_err(|source| SshConfigError::ConfigWriteError {
			path: target.clone(),
			source,
		})?;
		debug!(backup = %target.display(), "wrote backup");
	}

	std::fs::write(path, config.to_string()).map_err(|source| {
		SshConfigError::ConfigWriteError {
			path: path.to_path_buf(),
			source,
		}
	})?;
	debug!(path = %path.display(), "wrote ssh config");
	Ok(())
}
