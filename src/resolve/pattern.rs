use crate::error::{Result, SshConfigError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static SPLITTER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[,\s]+").expect("splitter regex is valid"));

/// One glob from a `Host` pattern list, compiled to an anchored regex.
#[derive(Debug, Clone)]
pub struct HostPattern {
	/// The glob as written, without the leading `!`.
	pub glob: String,

	/// Whether the glob was written with a leading `!`.
	pub negated: bool,

	regex: Regex,
}

impl HostPattern {
	/// Compile a single glob. `*` matches any run of characters, `?`
	/// exactly one; everything else is literal and case-sensitive.
	pub fn parse(pattern: &str) -> Result<Self> {
		let (negated, glob) = match pattern.strip_prefix('!') {
			Some(rest) => (true, rest),
			None => (false, pattern),
		};
		let source = glob_to_regex(glob);
		let regex = Regex::new(&source).map_err(|source| SshConfigError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		})?;

		Ok(HostPattern {
			glob: glob.to_string(),
			negated,
			regex,
		})
	}

	pub fn is_match(&self, host: &str) -> bool {
		self.regex.is_match(host)
	}
}

fn glob_to_regex(glob: &str) -> String {
	let mut source = String::with_capacity(glob.len() + 8);
	source.push_str("^(?:");
	for c in glob.chars() {
		match c {
			'*' => source.push_str(".*"),
			'?' => source.push('.'),
			c => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
		}
	}
	source.push_str(")$");
	source
}

/// A compiled `Host` value: comma/whitespace separated globs, negated
/// globs ordered ahead of the rest.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
	patterns: Vec<HostPattern>,
}

impl PatternList {
	pub fn parse(list: &str) -> Result<Self> {
		let mut patterns = SPLITTER
			.split(list)
			.filter(|p| !p.is_empty())
			.map(HostPattern::parse)
			.collect::<Result<Vec<_>>>()?;
		// Stable: relative order within each group is kept.
		patterns.sort_by_key(|p| !p.negated);
		Ok(PatternList { patterns })
	}

	pub fn patterns(&self) -> &[HostPattern] {
		&self.patterns
	}

	/// The first matching pattern decides: negated rejects, plain accepts.
	/// No match rejects.
	pub fn matches(&self, host: &str) -> bool {
		self.patterns
			.iter()
			.find(|p| p.is_match(host))
			.is_some_and(|p| !p.negated)
	}
}

/// Test `host` against a `Host` pattern list.
///
/// A list that fails to compile is logged and treated as non-matching.
pub fn matches_pattern_list(list: &str, host: &str) -> bool {
	match PatternList::parse(list) {
		Ok(patterns) => patterns.matches(host),
		Err(e) => {
			warn!(list, error = %e, "ignoring uncompilable host pattern");
			false
		}
	}
}
