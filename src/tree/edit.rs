use crate::tree::{Directive, HOST, Node, Section, SshConfig, is_section_key};
use tracing::debug;

/// Indentation used for section children when the document has none yet.
pub const DEFAULT_INDENT: &str = "  ";

/// Where `add` is currently appending non-section directives.
#[derive(Debug, Clone, Copy)]
enum Target {
	Root,
	/// The section owned by the root node at this index.
	Section(usize),
}

impl SshConfig {
	/// Find the first root-level `Host` directive whose value equals `host`.
	///
	/// Only the root is scanned; the comparison is exact, so `"a b"` does not
	/// find `Host a`.
	pub fn find(&self, host: &str) -> Option<&Directive> {
		self.position_of_host(host)
			.and_then(|index| self.root.nodes[index].as_directive())
	}

	pub fn find_mut(&mut self, host: &str) -> Option<&mut Directive> {
		let index = self.position_of_host(host)?;
		self.root.nodes[index].as_directive_mut()
	}

	/// Remove the `Host` directive for `host` together with its section.
	///
	/// Returns whether anything was removed.
	pub fn remove_host(&mut self, host: &str) -> bool {
		match self.position_of_host(host) {
			Some(index) => {
				self.root.nodes.remove(index);
				debug!(host, index, "removed host section");
				true
			}
			None => {
				debug!(host, "host not present, nothing removed");
				false
			}
		}
	}

	/// Append directives for an ordered list of `(key, value)` pairs.
	///
	/// A `Host`/`Match` key opens a new section, inserted before the first
	/// root node whose value contains a wildcard so specific hosts keep
	/// preceding catch-alls. Other keys go into the most recently opened
	/// section (or the root if none was opened), indented like the existing
	/// document.
	pub fn add<I, K, V>(&mut self, pairs: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let mut pairs = pairs.into_iter().peekable();
		if pairs.peek().is_none() {
			return;
		}

		let indent = self.indentation();
		self.ensure_trailing_line_break();

		let mut target = Target::Root;
		for (key, value) in pairs {
			let mut directive = Directive::new(key, value);

			if is_section_key(&directive.param) {
				let index = self.wildcard_insert_position();
				debug!(
					param = %directive.param,
					value = %directive.value,
					index,
					"inserting section directive"
				);
				directive.section = Some(Section::default());
				self.root.nodes.insert(index, Node::Directive(directive));
				target = Target::Section(index);
			} else {
				directive.before = indent.clone();
				if let Some(section) = self.target_section(target) {
					section.nodes.push(Node::Directive(directive));
				}
			}
		}

		self.terminate_block(target);
	}

	fn position_of_host(&self, host: &str) -> Option<usize> {
		self.root.nodes.iter().position(|node| {
			node.as_directive()
				.is_some_and(|d| d.param == HOST && d.value == host)
		})
	}

	/// Indentation of the first indented child of any root section.
	fn indentation(&self) -> String {
		self.root
			.nodes
			.iter()
			.filter_map(Node::as_directive)
			.filter(|d| d.is_section())
			.filter_map(|d| d.section.as_ref())
			.flat_map(|section| section.nodes.iter())
			.map(Node::before)
			.find(|before| !before.is_empty())
			.unwrap_or(DEFAULT_INDENT)
			.to_string()
	}

	/// Index of the first root section directive whose value contains `*`
	/// or `?`, or the end of the root.
	///
	/// Plain root directives (`Include ~/.ssh/conf.d/*`) are skipped: a
	/// section inserted ahead of them would swallow them on the next parse.
	fn wildcard_insert_position(&self) -> usize {
		self.root
			.nodes
			.iter()
			.position(|node| {
				node.as_directive()
					.is_some_and(|d| d.is_section() && d.value.contains(['*', '?']))
			})
			.unwrap_or(self.root.nodes.len())
	}

	/// Unterminated last line would otherwise be joined with appended text.
	fn ensure_trailing_line_break(&mut self) {
		if let Some(last) = self.root.last_node_mut() {
			let after = last.after_mut();
			if !after.ends_with(['\r', '\n']) {
				after.push('\n');
			}
		}
	}

	fn target_section(&mut self, target: Target) -> Option<&mut Section> {
		match target {
			Target::Root => Some(&mut self.root),
			Target::Section(index) => self
				.root
				.nodes
				.get_mut(index)
				.and_then(Node::as_directive_mut)
				.and_then(|d| d.section.as_mut()),
		}
	}

	/// Leave a blank line after the freshly added block: the last node
	/// placed into the final target, or the section directive itself when
	/// it received no children.
	fn terminate_block(&mut self, target: Target) {
		let last = match target {
			Target::Root => self.root.nodes.last_mut(),
			Target::Section(index) => match self.root.nodes.get_mut(index) {
				Some(Node::Directive(Directive {
					section: Some(section),
					..
				})) if !section.is_empty() => section.nodes.last_mut(),
				owner => owner,
			},
		};
		if let Some(node) = last {
			node.after_mut().push('\n');
		}
	}
}
