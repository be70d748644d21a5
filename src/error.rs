/*!
# Slimmer: Errors
*/

use std::{
	error::Error,
	fmt,
};



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # Generic Error.
pub enum SlimError {
	/// # Malformed Replacement Definition.
	///
	/// A non-empty definition line was missing its delimiter.
	Definition,

	/// # Replacement Pattern Too Big.
	Pattern,

	/// # Unreadable Definition File.
	Read,

	/// # Unsupported Syntax.
	///
	/// The requested syntax was missing or not one of html, xhtml, or css.
	UnsupportedSyntax,
}

impl AsRef<str> for SlimError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for SlimError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for SlimError {}

impl SlimError {
	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Definition => "Replacement definitions must be delimited key/value pairs.",
			Self::Pattern => "The replacement pattern could not be compiled.",
			Self::Read => "Unable to read the replacement definitions.",
			Self::UnsupportedSyntax => "The syntax must be one of html, xhtml, or css.",
		}
	}
}
