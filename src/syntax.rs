/*!
# Slimmer: Syntax.
*/

use crate::{
	SlimError,
	slim_css,
	slim_html,
};
use std::{
	fmt,
	str::FromStr,
};



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Syntax.
///
/// The kinds of source code we know how to slim.
pub enum Syntax {
	/// # CSS.
	Css,

	/// # HTML.
	Html,

	/// # XHTML.
	///
	/// This is slimmed exactly like HTML.
	Xhtml,
}

impl AsRef<str> for Syntax {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for Syntax {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Syntax {
	type Err = SlimError;

	#[inline]
	fn from_str(src: &str) -> Result<Self, Self::Err> {
		Self::from_name(src).ok_or(SlimError::UnsupportedSyntax)
	}
}

impl Syntax {
	/// # All Syntaxes.
	pub const ALL: [Self; 3] = [Self::Css, Self::Html, Self::Xhtml];

	#[must_use]
	/// # From Name.
	///
	/// Names are matched case-insensitively, ignoring spaces and hyphens;
	/// "stylesheet" is accepted as an alias for "css".
	///
	/// Returns `None` if the name is not recognized.
	pub fn from_name(src: &str) -> Option<Self> {
		let name: String = src.trim()
			.chars()
			.filter(|c| ! matches!(c, ' ' | '-'))
			.flat_map(char::to_lowercase)
			.collect();

		match name.replace("stylesheet", "css").as_str() {
			"css" => Some(Self::Css),
			"html" => Some(Self::Html),
			"xhtml" => Some(Self::Xhtml),
			_ => None,
		}
	}

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Css => "css",
			Self::Html => "html",
			Self::Xhtml => "xhtml",
		}
	}

	#[must_use]
	/// # Slim.
	///
	/// Run `code` through the appropriate slimmer.
	pub fn slim(self, code: &str) -> String {
		match self {
			Self::Css => slim_css(code),
			Self::Html | Self::Xhtml => slim_html(code),
		}
	}
}



#[must_use]
#[inline]
/// # Normalize Syntax.
///
/// This is a convenience wrapper around [`Syntax::from_name`].
pub fn normalize_syntax(src: &str) -> Option<Syntax> { Syntax::from_name(src) }



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_from_name() {
		for (raw, expected) in [
			("css", Some(Syntax::Css)),
			("CSS", Some(Syntax::Css)),
			("stylesheet", Some(Syntax::Css)),
			("Style Sheet", Some(Syntax::Css)),
			("  style-sheet\t", Some(Syntax::Css)),
			("html", Some(Syntax::Html)),
			(" HT ML ", Some(Syntax::Html)),
			("XHTML", Some(Syntax::Xhtml)),
			("x-html", Some(Syntax::Xhtml)),
			("json", None),
			("", None),
			("stylesheets", None),
		] {
			assert_eq!(normalize_syntax(raw), expected, "{raw:?}");
		}
	}

	#[test]
	fn t_idempotent() {
		for s in Syntax::ALL {
			assert_eq!(normalize_syntax(s.as_str()), Some(s));
			assert_eq!(s.to_string().parse::<Syntax>(), Ok(s));
		}

		assert_eq!("json".parse::<Syntax>(), Err(SlimError::UnsupportedSyntax));
	}

	#[test]
	fn t_slim() {
		let code = "<style>a  {  color : red ;  }</style>\n\n<p  class=\"x\"  >hi</p>";
		for s in Syntax::ALL {
			let expected = match s {
				Syntax::Css => slim_css(code),
				Syntax::Html | Syntax::Xhtml => slim_html(code),
			};
			assert_eq!(s.slim(code), expected);
		}
	}
}
