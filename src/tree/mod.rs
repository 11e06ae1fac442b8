//! Formatting-preserving syntax tree for ssh client configuration.
//!
//! This module handles:
//! - The node model (comments and directives with their surrounding whitespace)
//! - Rendering a tree back to text
//! - Structural edits (`add`, `find`, `remove_host`)

pub mod edit;
pub mod render;

use crate::parser;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Directive key that opens a host-scoped section.
pub const HOST: &str = "Host";

/// Directive key that opens a match-scoped section.
pub const MATCH: &str = "Match";

/// Directive key whose values accumulate instead of first-write-wins.
pub const IDENTITY_FILE: &str = "IdentityFile";

/// Whether `param` opens a nested section.
pub fn is_section_key(param: &str) -> bool {
	param == HOST || param == MATCH
}

/// A single line of configuration: either a comment or a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Comment(Comment),
	Directive(Directive),
}

/// A `#` comment line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
	/// Horizontal whitespace preceding the comment marker.
	pub before: String,

	/// Line text after the `#` marker, untrimmed.
	pub content: String,

	/// Line breaks consumed after the comment.
	pub after: String,
}

/// A `Key Value` line, optionally owning a nested section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
	/// Horizontal whitespace preceding the key.
	pub before: String,

	/// The key token, e.g. `Host` or `Port`.
	pub param: String,

	/// Raw text between key and value (`" "`, `"="`, `" = "`, ...).
	pub separator: String,

	/// The value with surrounding whitespace and quotes removed.
	pub value: String,

	/// Whether the value was wrapped in double quotes in the source.
	pub quoted: bool,

	/// Line breaks consumed after the value.
	pub after: String,

	/// Nested section. Only `Host`/`Match` directives carry one.
	pub section: Option<Section>,
}

/// An ordered sequence of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
	pub nodes: Vec<Node>,
}

/// A parsed ssh config document. The root section has no owning node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfig {
	pub root: Section,
}

impl Node {
	/// Leading whitespace of this node.
	pub fn before(&self) -> &str {
		match self {
			Node::Comment(c) => &c.before,
			Node::Directive(d) => &d.before,
		}
	}

	/// Trailing line breaks of this node.
	pub fn after(&self) -> &str {
		match self {
			Node::Comment(c) => &c.after,
			Node::Directive(d) => &d.after,
		}
	}

	pub(crate) fn after_mut(&mut self) -> &mut String {
		match self {
			Node::Comment(c) => &mut c.after,
			Node::Directive(d) => &mut d.after,
		}
	}

	pub fn as_directive(&self) -> Option<&Directive> {
		match self {
			Node::Directive(d) => Some(d),
			Node::Comment(_) => None,
		}
	}

	pub fn as_directive_mut(&mut self) -> Option<&mut Directive> {
		match self {
			Node::Directive(d) => Some(d),
			Node::Comment(_) => None,
		}
	}
}

impl Directive {
	/// Create a directive the way `add` lays out new lines: single-space
	/// separator, newline terminated, no indentation.
	pub fn new(param: impl Into<String>, value: impl Into<String>) -> Self {
		Directive {
			param: param.into(),
			separator: " ".to_string(),
			value: value.into(),
			after: "\n".to_string(),
			..Default::default()
		}
	}

	/// Whether this directive opens a `Host`/`Match` section.
	pub fn is_section(&self) -> bool {
		is_section_key(&self.param)
	}

	pub fn section(&self) -> Option<&Section> {
		self.section.as_ref()
	}

	/// Directive children of the owned section, skipping comments.
	pub fn children(&self) -> impl Iterator<Item = &Directive> {
		self.section
			.iter()
			.flat_map(|section| section.nodes.iter())
			.filter_map(Node::as_directive)
	}
}

impl Section {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Last node in document order, descending into owned sections.
	pub(crate) fn last_node_mut(&mut self) -> Option<&mut Node> {
		let descend = matches!(
			self.nodes.last(),
			Some(Node::Directive(Directive { section: Some(s), .. })) if !s.is_empty()
		);
		match (descend, self.nodes.last_mut()?) {
			(
				true,
				Node::Directive(Directive {
					section: Some(section),
					..
				}),
			) => section.last_node_mut(),
			(_, last) => Some(last),
		}
	}
}

impl SshConfig {
	/// Parse config text. Never fails: malformed lines degrade to
	/// directives with empty fields.
	pub fn parse(text: &str) -> Self {
		parser::parse(text)
	}

	/// Root-level `Host` values in document order.
	pub fn hosts(&self) -> impl Iterator<Item = &str> {
		self.root
			.nodes
			.iter()
			.filter_map(Node::as_directive)
			.filter(|d| d.param == HOST)
			.map(|d| d.value.as_str())
	}
}

impl FromStr for SshConfig {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(SshConfig::parse(s))
	}
}

impl fmt::Display for SshConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render::stringify(self))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_is_section_key_is_case_sensitive() {
		assert!(is_section_key("Host"));
		assert!(is_section_key("Match"));
		assert!(!is_section_key("host"));
		assert!(!is_section_key("HostName"));
	}

	#[test]
	fn test_directive_new_layout() {
		let d = Directive::new("Port", "22");
		assert_eq!(d.before, "");
		assert_eq!(d.separator, " ");
		assert_eq!(d.after, "\n");
		assert!(!d.quoted);
		assert!(d.section.is_none());
	}

	#[test]
	fn test_hosts_lists_root_host_values() {
		let config = SshConfig::parse("Host a\n  Port 1\nMatch all\nHost b c\n");
		let hosts: Vec<_> = config.hosts().collect();
		assert_eq!(hosts, vec!["a", "b c"]);
	}

	#[test]
	fn test_children_skip_comments() {
		let config = SshConfig::parse("Host a\n  # note\n  Port 1\n");
		let host = config.root.nodes[0].as_directive().unwrap();
		let params: Vec<_> = host.children().map(|d| d.param.as_str()).collect();
		assert_eq!(params, vec!["Port"]);
	}

	#[test]
	fn test_last_node_mut_descends_into_sections() {
		let mut config = SshConfig::parse("Host a\n  Port 1\n  User me");
		let last = config.root.last_node_mut().unwrap();
		assert_eq!(last.as_directive().unwrap().param, "User");
	}

	#[test]
	fn test_last_node_mut_stops_at_empty_section() {
		let mut config = SshConfig::parse("Port 1\nHost a");
		let last = config.root.last_node_mut().unwrap();
		assert_eq!(last.as_directive().unwrap().value, "a");
	}

	#[test]
	fn test_last_node_mut_edits_nested_child_in_place() {
		let mut config = SshConfig::parse("# top\nHost a\n  Port 1\nHost b\n  User me");
		if let Some(last) = config.root.last_node_mut() {
			last.after_mut().push('\n');
		}
		assert_eq!(config.to_string(), "# top\nHost a\n  Port 1\nHost b\n  User me\n");
	}

	#[test]
	fn test_last_node_mut_on_empty_section() {
		assert!(Section::default().last_node_mut().is_none());
	}

	#[test]
	fn test_from_str_and_display() {
		let text = "Host a\n  Port 1\n";
		let config: SshConfig = text.parse().unwrap();
		assert_eq!(config.to_string(), text);
	}
}
