/*!
# Slimmer: HTML.
*/

use crate::{
	pattern::{
		HTML_COMMENT,
		HTML_INTER_TAG,
		HTML_START_TAG,
		HTML_STYLE,
		TAG_ATTR_INDENT,
		TAG_QUOTE_CLOSE,
		TAG_WHITESPACE,
	},
	slim_css,
	sub,
};
use regex::Captures;
use std::collections::BTreeSet;



#[must_use]
/// # Slim HTML (or XHTML).
///
/// This slims any inline `<style>` blocks, strips single-line comments,
/// drops whitespace sandwiched between tags, and tidies up the whitespace
/// inside start tags.
///
/// Multi-line comments are left alone, as is whitespace inside text.
///
/// ## Examples
///
/// ```
/// assert_eq!(
///     slimmer::slim_html("<div  class=\"a\"  >\n  <b>Hi</b>\n</div>"),
///     "<div class=\"a\"><b>Hi</b></div>",
/// );
/// ```
pub fn slim_html(code: &str) -> String {
	// Inline styles.
	let html = HTML_STYLE.replace_all(code, |caps: &Captures<'_>| {
		let mut out = caps[1].to_owned();
		out.push_str(&slim_css(&caps[2]));
		out.push_str(&caps[3]);
		out
	}).into_owned();

	// Inter-tag whitespace and (one-line) comments.
	let html = sub(html, &HTML_INTER_TAG, "><");
	let mut html = sub(html, &HTML_COMMENT, "");

	// Start tags. Changes are applied to every copy of the tag, wherever it
	// appears in the document.
	let tags: BTreeSet<String> = HTML_START_TAG.find_iter(&html)
		.map(|m| m.as_str())
		.filter(|t| ! t.starts_with("<!") && ! t.contains("</"))
		.map(String::from)
		.collect();

	for tag in tags {
		let new = slim_tag(&tag);
		if new != tag { html = html.replace(&tag, &new); }
	}

	html.trim().to_owned()
}

/// # Slim Tag.
fn slim_tag(tag: &str) -> String {
	let tag = TAG_QUOTE_CLOSE.replace_all(tag, "$1>").into_owned();
	let tag = collapse_tag_whitespace(tag);
	sub(tag, &TAG_ATTR_INDENT, "$1 $2")
}

/// # Collapse Tag Whitespace.
///
/// Whitespace between two word characters, or between a digit and the
/// closing `>`, is collapsed to a single space. Everything else is left
/// as-was.
fn collapse_tag_whitespace(tag: String) -> String {
	let mut out = String::new();
	let mut last = 0;

	for m in TAG_WHITESPACE.find_iter(&tag) {
		if m.as_str() == " " { continue; }

		let before = tag[..m.start()].chars().next_back();
		let after = tag[m.end()..].chars().next();
		let collapse = match (before, after) {
			(Some(b), Some(a)) =>
				(is_word(b) && is_word(a)) ||
				(b.is_ascii_digit() && a == '>'),
			_ => false,
		};

		if collapse {
			out.push_str(&tag[last..m.start()]);
			out.push(' ');
			last = m.end();
		}
	}

	// Nothing changed.
	if last == 0 { tag }
	else {
		out.push_str(&tag[last..]);
		out
	}
}

/// # Is Word Character?
///
/// This matches the regex `\w` class.
fn is_word(c: char) -> bool { c == '_' || c.is_alphanumeric() }
