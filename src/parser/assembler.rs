use crate::parser::cursor::Cursor;
use crate::tree::{Comment, Directive, Node, Section, SshConfig};
use tracing::{debug, trace};

/// Parse config text into a formatting-preserving tree.
///
/// Section directives (`Host`/`Match`) always land in the root and open a
/// new section; every other line goes into the most recently opened
/// section, or the root before the first one.
pub fn parse(text: &str) -> SshConfig {
	let mut cursor = Cursor::new(text);
	let mut root = Section::default();
	// Section directive whose children are still being collected.
	let mut open: Option<Directive> = None;

	while !cursor.is_eof() {
		let node = parse_line(&mut cursor);
		trace!(?node, "parsed line");

		match node {
			Node::Directive(mut directive) if directive.is_section() => {
				if let Some(previous) = open.take() {
					root.nodes.push(Node::Directive(previous));
				}
				directive.section = Some(Section::default());
				open = Some(directive);
			}
			node => match open.as_mut().and_then(|d| d.section.as_mut()) {
				Some(section) => section.nodes.push(node),
				None => root.nodes.push(node),
			},
		}
	}

	if let Some(last) = open {
		root.nodes.push(Node::Directive(last));
	}

	debug!(bytes = text.len(), root_nodes = root.len(), "parsed ssh config");
	SshConfig { root }
}

/// Parse exactly one comment or directive, including its leading
/// whitespace and trailing line breaks.
///
/// Whitespace trimmed off the end of a directive value is kept at the
/// front of `after` so the line renders back unchanged.
pub fn parse_line(cursor: &mut Cursor<'_>) -> Node {
	let before = cursor.spaces();

	let mut node = match cursor.comment_body() {
		Some(content) => Node::Comment(Comment {
			before,
			content,
			..Default::default()
		}),
		None => {
			let param = cursor.token();
			let separator = cursor.separator();
			let (raw, trailing) = cursor.raw_value();
			let (value, quoted) = unquote(raw);
			Node::Directive(Directive {
				before,
				param,
				separator,
				value,
				quoted,
				after: trailing,
				..Default::default()
			})
		}
	};

	node.after_mut().push_str(&cursor.line_breaks());
	node
}

/// Strip one pair of double quotes spanning the whole value.
fn unquote(value: String) -> (String, bool) {
	match value
		.strip_prefix('"')
		.and_then(|rest| rest.strip_suffix('"'))
	{
		Some(inner) => (inner.to_string(), true),
		None => (value, false),
	}
}
