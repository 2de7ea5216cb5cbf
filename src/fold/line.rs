use std::borrow::Cow;

/// Token that starts a trailing comment.
pub const COMMENT_MARKER: &str = "//";

/// Character that delimits a keyword literal.
pub const QUOTE: char = '\'';

/// Byte offsets of a literal's opening and closing quotes within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSpan {
	/// Offset of the opening quote.
	pub open: usize,

	/// Offset of the closing quote.
	pub close: usize,
}

impl LiteralSpan {
	/// The text strictly between the two quotes.
	pub fn text<'a>(&self, line: &'a str) -> &'a str {
		&line[self.open + QUOTE.len_utf8()..self.close]
	}
}

/// Find the first quoted literal on a line.
///
/// The opening quote must come before any comment marker. A literal with no
/// closing quote on the same line is not a literal.
pub fn find_literal(line: &str) -> Option<LiteralSpan> {
	let open = line.find(QUOTE)?;

	if let Some(comment) = line.find(COMMENT_MARKER)
		&& comment < open
	{
		return None;
	}

	let after_open = open + QUOTE.len_utf8();
	let close = after_open + line[after_open..].find(QUOTE)?;

	Some(LiteralSpan { open, close })
}

/// Expand literal text into a sequence of `[Xx]` bracket expressions.
///
/// The text is upper-cased as a whole first, so a character with a
/// multi-character upper-case form yields one expression per character.
pub fn expand_literal(text: &str) -> String {
	let upper = text.to_uppercase();
	let mut expanded = String::with_capacity(upper.len() * 4);

	for c in upper.chars() {
		expanded.push('[');
		expanded.push(c);
		expanded.extend(c.to_lowercase());
		expanded.push(']');
	}

	expanded
}

/// Rewrite a single line, expanding its literal if it has one.
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
	let Some(span) = find_literal(line) else {
		return Cow::Borrowed(line);
	};

	let mut rewritten = String::with_capacity(line.len() * 4);
	rewritten.push_str(&line[..span.open]);
	rewritten.push_str(&expand_literal(span.text(line)));
	rewritten.push_str(&line[span.close + QUOTE.len_utf8()..]);

	Cow::Owned(rewritten)
}
