/*!
# Slimmer: CSS.
*/

use crate::{
	MultiReplacer,
	ReplaceFlags,
	pattern::{
		CSS_AFTER_CLOSE,
		CSS_AFTER_COLON,
		CSS_AFTER_COMMA,
		CSS_AFTER_OPEN,
		CSS_AFTER_SEMICOLON,
		CSS_BEFORE_CLOSE,
		CSS_BEFORE_END_TAG,
		CSS_BEFORE_OPEN,
		CSS_BEFORE_PUNCT,
		CSS_COMMENT,
		CSS_DECLARATIONS,
		CSS_RULE_END,
		CSS_WHITESPACE_RUN,
		HEX_COLOR,
	},
	sub,
};
use regex::Captures;
use std::{
	borrow::Cow,
	collections::BTreeMap,
};



#[must_use]
/// # Slim CSS.
///
/// Strip comments, collapse (and mostly remove) whitespace, and shorten
/// hex colors where possible.
///
/// This is purely lexical; malformed CSS is not detected, and things that
/// merely _look_ like comments (e.g. `/*` inside a string) will be treated
/// as such.
///
/// ## Examples
///
/// ```
/// assert_eq!(
///     slimmer::slim_css("a  {  color : #ffffff ;  }"),
///     "a{color:#fff;}",
/// );
/// ```
pub fn slim_css(code: &str) -> String {
	// Comments and long whitespace runs go first; everything after assumes
	// there is at most a single whitespace left between tokens.
	let css = sub(code.to_owned(), &CSS_COMMENT, "");
	let css = sub(css, &CSS_WHITESPACE_RUN, "");

	// Braces.
	let css = sub(css, &CSS_BEFORE_OPEN, "{");
	let css = sub(css, &CSS_AFTER_OPEN, "{");
	let css = sub(css, &CSS_BEFORE_CLOSE, "}");

	// Colons and semicolons.
	let css = sub(css, &CSS_AFTER_COLON, ":");
	let css = sub(css, &CSS_AFTER_SEMICOLON, ";");
	let css = sub(css, &CSS_DECLARATIONS, |caps: &Captures<'_>|
		CSS_BEFORE_PUNCT.replace_all(&caps[0], "$1").into_owned()
	);

	// Everything else.
	let css = sub(css, &CSS_AFTER_COMMA, ",");
	let css = sub(css, &CSS_BEFORE_END_TAG, "</");
	let css = sub(css, &CSS_AFTER_CLOSE, "}${1}");
	let css = sub(css, &CSS_RULE_END, ";}\n");

	simplify_hex_colors(&css).trim().to_owned()
}

#[must_use]
/// # Simplify Hex Colors.
///
/// Shorten every six-digit hex color whose channels are each a repeated
/// digit, e.g. `#ffcc00` to `#fc0`. Colors like `#a1b2c3` are left alone.
///
/// Digits are compared case-sensitively within each channel: `#FFffFF`
/// becomes `#FfF`, but `#FfFfFf` is left alone.
///
/// Eight-digit colors never qualify on their own, but the replacement is
/// literal, so if `#ffffff` also appears elsewhere, the first six digits of
/// `#ffffff80` will be shortened too (giving `#fff80`).
pub fn simplify_hex_colors(src: &str) -> Cow<'_, str> {
	let map: BTreeMap<&str, String> = HEX_COLOR.find_iter(src)
		.filter_map(|m| {
			let color = m.as_str();
			shorten_hex(color).map(|short| (color, short))
		})
		.collect();

	if map.is_empty() { Cow::Borrowed(src) }
	else {
		MultiReplacer::new(map, ReplaceFlags::NONE)
			.map_or(Cow::Borrowed(src), |rep| rep.replace(src))
	}
}

/// # Shorten Hex.
///
/// Return the three-digit equivalent of a `#RRGGBB` color, if any.
fn shorten_hex(color: &str) -> Option<String> {
	match color.as_bytes() {
		[b'#', r1, r2, g1, g2, b1, b2] if r1 == r2 && g1 == g2 && b1 == b2 =>
			Some(format!("#{}{}{}", char::from(*r1), char::from(*g1), char::from(*b1))),
		_ => None,
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Sample Stylesheet.
	const SAMPLE: &str = include_str!("../skel/test-assets/sample.css");

	#[test]
	fn t_shorten_hex() {
		for (raw, expected) in [
			("#ffffff", Some("#fff")),
			("#FFCC00", Some("#FC0")),
			("#112233", Some("#123")),
			("#a1b2c3", None),
			("#FFffFF", Some("#FfF")),
			("#FfFfFf", None),
			("#efefef", None),
			("#fff", None),
		] {
			assert_eq!(shorten_hex(raw).as_deref(), expected, "{raw:?}");
		}
	}

	#[test]
	fn t_simplify_hex_colors() {
		assert_eq!(
			simplify_hex_colors("a{color:#ffffff;border-color:#a1b2c3;background:#ffffff}"),
			"a{color:#fff;border-color:#a1b2c3;background:#fff}",
		);

		// Nothing to do.
		assert!(matches!(simplify_hex_colors("a{color:#a1b2c3}"), Cow::Borrowed(_)));

		// Eight-digit colors are not six-digit colors.
		assert_eq!(simplify_hex_colors("a{color:#ffffff80}"), "a{color:#ffffff80}");

		// Unless the six-digit prefix shows up by itself somewhere else.
		assert_eq!(
			simplify_hex_colors("a{color:#ffffff;b:#ffffff80}"),
			"a{color:#fff;b:#fff80}",
		);
	}

	#[test]
	fn t_slim_css() {
		for (raw, expected) in [
			("color:#ffffff;", "color:#fff;"),
			("color:#a1b2c3;", "color:#a1b2c3;"),
			("a{color:red;}/* note */", "a{color:red;}"),
			("a  {  color : red ;  }", "a{color:red;}"),
			("/* one */a{}/* two\n\nlines */b{}", "a{}b{}"),
			("a, b,  c { margin: 0 }", "a,b,c{margin:0}"),
			("a{x:y;}  .b{x:y;}", "a{x:y;}\n.b{x:y;}"),
			("a{x:y;}\n#b{x:y;}", "a{x:y;}\n#b{x:y;}"),
			("a :hover { color: blue }", "a :hover{color:blue}"),
			("a{x:y;}\n</style>", "a{x:y;}\n</style>"),
			("", ""),
			("   ", ""),
		] {
			assert_eq!(slim_css(raw), expected, "{raw:?}");
		}
	}

	#[test]
	fn t_slim_css_sample() {
		assert_eq!(
			slim_css(SAMPLE),
			"body{color:#FFF;font-family:Arial,sans-serif;}\nh1 ,h2{margin:0 auto;}\n\
			a:hover{color:#c00;border:1px solid #a1b2c3;}\n\
			@media screen{.box{padding:0;}\n}",
		);
	}

	#[test]
	fn t_idempotent() {
		for raw in [
			SAMPLE,
			"a  {  color : red ;  }",
			"a{x:y;}  .b{x:y;}",
			"p { margin: 0 }\n\n\ndiv{ }",
		] {
			let once = slim_css(raw);
			assert_eq!(slim_css(&once), once, "{raw:?}");
		}
	}
}
