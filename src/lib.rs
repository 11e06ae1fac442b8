//! ssh-config-edit - formatting-preserving OpenSSH client config editing.
//!
//! This library provides:
//! - A lossless parser and serializer for `ssh_config` text
//! - Structural edits that follow the file's existing conventions
//! - Resolution of the effective settings for a host
//!
//! # Example
//!
//! ```
//! use ssh_config_edit::SshConfig;
//!
//! let text = "IdentityFile ~/.ssh/id_a\nHost foo\n  Port 22\nHost *\n  Port 99\n";
//! let mut config = SshConfig::parse(text);
//! assert_eq!(config.to_string(), text);
//!
//! let resolved = config.compute("foo").unwrap();
//! assert_eq!(resolved.get_str("Port"), Some("22"));
//!
//! config.add([("Host", "bar"), ("HostName", "bar.example.com")]);
//! assert_eq!(config.hosts().collect::<Vec<_>>(), ["foo", "bar", "*"]);
//! ```

pub mod error;
pub mod file;
pub mod parser;
pub mod resolve;
pub mod settings;
pub mod tree;

pub use error::{Result, SshConfigError};
pub use resolve::{ResolvedConfig, ResolvedValue, matches_pattern_list};
pub use tree::{Comment, Directive, Node, Section, SshConfig};
