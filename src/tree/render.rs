use crate::tree::{Comment, Directive, IDENTITY_FILE, Node, Section, SshConfig};

/// Render a tree back to config text.
///
/// For a tree obtained purely from parsing this reproduces the source
/// byte-for-byte.
pub fn stringify(config: &SshConfig) -> String {
	let mut out = String::new();
	render_section(&config.root, &mut out);
	out
}

/// Render every node of a section, pre-order, into `out`.
pub fn render_section(section: &Section, out: &mut String) {
	for node in &section.nodes {
		render_node(node, out);
	}
}

/// Render one node followed by its owned section, if any.
pub fn render_node(node: &Node, out: &mut String) {
	match node {
		Node::Comment(comment) => render_comment(comment, out),
		Node::Directive(directive) => render_directive(directive, out),
	}
}

fn render_comment(comment: &Comment, out: &mut String) {
	out.push_str(&comment.before);
	out.push('#');
	out.push_str(&comment.content);
	out.push_str(&comment.after);
}

fn render_directive(directive: &Directive, out: &mut String) {
	out.push_str(&directive.before);
	out.push_str(&directive.param);
	out.push_str(&directive.separator);
	if needs_quotes(directive) {
		out.push('"');
		out.push_str(&directive.value);
		out.push('"');
	} else {
		out.push_str(&directive.value);
	}
	out.push_str(&directive.after);

	if let Some(ref section) = directive.section {
		render_section(section, out);
	}
}

/// Quoted in source, or an `IdentityFile` path containing whitespace.
fn needs_quotes(directive: &Directive) -> bool {
	directive.quoted
		|| (directive.param == IDENTITY_FILE && directive.value.chars().any(char::is_whitespace))
}

impl Node {
	/// Render this node and its owned section as text.
	pub fn render(&self) -> String {
		let mut out = String::new();
		render_node(self, &mut out);
		out
	}
}

impl Directive {
	/// Render this directive and its owned section as text.
	pub fn render(&self) -> String {
		let mut out = String::new();
		render_directive(self, &mut out);
		out
	}
}
