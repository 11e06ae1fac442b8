use std::str::Chars;

/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';

/// Whitespace that does not end a line.
pub fn is_horizontal_space(c: char) -> bool {
	c.is_whitespace() && !is_line_break(c)
}

pub fn is_line_break(c: char) -> bool {
	c == '\r' || c == '\n'
}

/// Forward-only character reader holding one character of lookahead.
///
/// Every lexer primitive consumes from the current lookahead onward and
/// leaves the first unconsumed character as the new lookahead.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	chars: Chars<'a>,
	peek: Option<char>,
}

impl<'a> Cursor<'a> {
	pub fn new(input: &'a str) -> Self {
		let mut chars = input.chars();
		let peek = chars.next();
		Cursor { chars, peek }
	}

	/// The lookahead character, `None` at end of input.
	pub fn peek(&self) -> Option<char> {
		self.peek
	}

	pub fn is_eof(&self) -> bool {
		self.peek.is_none()
	}

	/// Move past the lookahead and return the new one.
	pub fn advance(&mut self) -> Option<char> {
		self.peek = self.chars.next();
		self.peek
	}

	/// Consume characters while `pred` holds, returning them.
	fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
		let mut taken = String::new();
		while let Some(c) = self.peek {
			if !pred(c) {
				break;
			}
			taken.push(c);
			self.advance();
		}
		taken
	}

	/// Maximal run of horizontal whitespace.
	pub fn spaces(&mut self) -> String {
		self.take_while(is_horizontal_space)
	}

	/// Maximal run of CR/LF characters.
	pub fn line_breaks(&mut self) -> String {
		self.take_while(is_line_break)
	}

	/// Key token: everything up to whitespace or `=`.
	pub fn token(&mut self) -> String {
		self.take_while(|c| c != '=' && !c.is_whitespace())
	}

	/// Spaces, an optional `=`, more spaces, kept verbatim.
	pub fn separator(&mut self) -> String {
		let mut separator = self.spaces();
		if self.peek == Some('=') {
			separator.push('=');
			self.advance();
			separator.push_str(&self.spaces());
		}
		separator
	}

	/// Rest of the line, split into the value trimmed of surrounding
	/// horizontal whitespace and the trailing whitespace that was cut off.
	pub fn raw_value(&mut self) -> (String, String) {
		let raw = self.take_while(|c| !is_line_break(c));
		let value = raw.trim_end_matches(is_horizontal_space);
		let trailing = raw[value.len()..].to_string();
		(value.trim_start_matches(is_horizontal_space).to_string(), trailing)
	}

	/// Rest of the line after the comment marker, untrimmed.
	///
	/// Returns `None` without consuming anything when the lookahead is not
	/// the comment marker.
	pub fn comment_body(&mut self) -> Option<String> {
		if self.peek != Some(COMMENT_MARKER) {
			return None;
		}
		self.advance();
		Some(self.take_while(|c| !is_line_break(c)))
	}
}
