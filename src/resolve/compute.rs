use crate::resolve::pattern::matches_pattern_list;
use crate::tree::{Directive, HOST, IDENTITY_FILE, MATCH, Node, SshConfig};
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A resolved setting: a single value, or the accumulated list for keys
/// like `IdentityFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
	Single(String),
	List(Vec<String>),
}

impl ResolvedValue {
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ResolvedValue::Single(value) => Some(value),
			ResolvedValue::List(_) => None,
		}
	}

	pub fn as_list(&self) -> Option<&[String]> {
		match self {
			ResolvedValue::Single(_) => None,
			ResolvedValue::List(values) => Some(values),
		}
	}

	/// Every value in order; a single value yields one item.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		let slice: &[String] = match self {
			ResolvedValue::Single(value) => std::slice::from_ref(value),
			ResolvedValue::List(values) => values,
		};
		slice.iter().map(String::as_str)
	}
}

/// Effective settings for one host, in first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
	values: IndexMap<String, ResolvedValue>,
}

impl ResolvedConfig {
	pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
		self.values.get(key)
	}

	/// Shorthand for a single-valued key.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(ResolvedValue::as_str)
	}

	pub fn identity_files(&self) -> &[String] {
		self.get(IDENTITY_FILE)
			.and_then(ResolvedValue::as_list)
			.unwrap_or_default()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Record `value` for `key`: `IdentityFile` accumulates, every other
	/// key keeps its first value.
	fn merge(&mut self, key: &str, value: &str) {
		if key.is_empty() {
			return;
		}
		if key == IDENTITY_FILE {
			match self
				.values
				.entry(key.to_string())
				.or_insert_with(|| ResolvedValue::List(Vec::new()))
			{
				ResolvedValue::List(values) => values.push(value.to_string()),
				ResolvedValue::Single(_) => {}
			}
			return;
		}
		if let Entry::Vacant(entry) = self.values.entry(key.to_string()) {
			entry.insert(ResolvedValue::Single(value.to_string()));
		}
	}

	fn merge_directive(&mut self, directive: &Directive) {
		self.merge(&directive.param, &directive.value);
	}
}

/// Renders as `ssh -G` style `key value` lines, one per value.
impl fmt::Display for ResolvedConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, value) in self.iter() {
			for v in value.values() {
				writeln!(f, "{key} {v}")?;
			}
		}
		Ok(())
	}
}

impl SshConfig {
	/// Compute the effective settings for `host`.
	///
	/// Root-level directives and every `Host` section whose pattern list
	/// matches are merged in document order. `Match` sections are not
	/// evaluated. Returns `None` unless some `Host` value equals `host`
	/// exactly.
	pub fn compute(&self, host: &str) -> Option<ResolvedConfig> {
		let mut resolved = ResolvedConfig::default();
		let mut found_exact_host = false;

		for directive in self.root.nodes.iter().filter_map(Node::as_directive) {
			match directive.param.as_str() {
				HOST => {
					if directive.value == host {
						found_exact_host = true;
					}
					if matches_pattern_list(&directive.value, host) {
						debug!(host, pattern = %directive.value, "host section matches");
						resolved.merge_directive(directive);
						for child in directive.children() {
							resolved.merge_directive(child);
						}
					}
				}
				MATCH => {
					debug!(criteria = %directive.value, "skipping match section");
				}
				_ => resolved.merge_directive(directive),
			}
		}

		if found_exact_host {
			debug!(host, keys = resolved.len(), "resolved host");
			Some(resolved)
		} else {
			debug!(host, "no host entry with this exact name");
			None
		}
	}
}
