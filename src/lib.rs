/*!
# `Slimmer`

`Slimmer` shrinks HTML, XHTML, and CSS source by stripping comments,
collapsing or removing redundant whitespace, and shortening verbose hex
colors.

Unlike DOM-based minifiers, `Slimmer` is purely _lexical_: it works through
a fixed series of pattern-based rewrites and never parses the document. That
keeps it fast and predictable (the same input always slims the same way),
but it also means there is no validation or error recovery. Malformed markup
goes in, (smaller) malformed markup comes out.



## Use

```
use slimmer::{Syntax, normalize_syntax, slim};

// Pick a syntax by name…
let syntax = normalize_syntax("Style Sheet");
assert_eq!(syntax, Some(Syntax::Css));

// …and slim away!
let css = slim("body {\n    color: #ffffff;\n}", syntax).unwrap();
assert_eq!(css, "body{color:#fff;}");

// Or go direct.
assert_eq!(
    slimmer::slim_html("<p  class=\"a\"  >Hi</p>\n\n<p>There</p>"),
    "<p class=\"a\">Hi</p><p>There</p>",
);
```



## Caution

* CSS whitespace runs of two or more characters are removed _entirely_, not collapsed to a single space. Well-formatted CSS won't notice, but something like `a  b` will become `ab`.
* Whitespace between tags is removed regardless of the element, including inside `<pre>` and `<textarea>`.
* HTML comments are only removed if they fit on a single line.
* Start tags are rewritten by value: identical tags are slimmed identically wherever they appear.
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(clippy::module_name_repetitions)]



mod css;
mod error;
pub mod filter;
mod html;
mod pattern;
mod replace;
mod syntax;

pub use css::{
	simplify_hex_colors,
	slim_css,
};
pub use error::SlimError;
pub use html::slim_html;
pub use replace::{
	MultiReplacer,
	ReplaceFlags,
};
pub use syntax::{
	normalize_syntax,
	Syntax,
};

use regex::{
	Regex,
	Replacer,
};
use std::borrow::Cow;



/// # Slim.
///
/// Run `code` through the slimmer matching `syntax`. (HTML and XHTML are
/// slimmed the same way.)
///
/// ## Errors
///
/// This will return an error if the syntax is `None`, i.e. was not
/// recognized by [`normalize_syntax`].
pub fn slim(code: &str, syntax: Option<Syntax>) -> Result<String, SlimError> {
	syntax.map(|s| s.slim(code)).ok_or(SlimError::UnsupportedSyntax)
}



/// # Substitute.
///
/// Run a global regex replacement on an owned string, reusing it if nothing
/// matched.
pub(crate) fn sub<R: Replacer>(src: String, re: &Regex, rep: R) -> String {
	let new = match re.replace_all(&src, rep) {
		Cow::Owned(new) => Some(new),
		Cow::Borrowed(_) => None,
	};
	new.unwrap_or(src)
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_slim() {
		let code = include_str!("../skel/test-assets/sample.html");
		for s in Syntax::ALL {
			let expected = match s {
				Syntax::Css => slim_css(code),
				Syntax::Html | Syntax::Xhtml => slim_html(code),
			};
			assert_eq!(slim(code, Some(s)), Ok(expected));
		}

		assert_eq!(slim(code, None), Err(SlimError::UnsupportedSyntax));
		assert_eq!(slim(code, normalize_syntax("json")), Err(SlimError::UnsupportedSyntax));
	}

	#[test]
	fn t_sub() {
		let re = Regex::new(r"\s+").expect("Bad regex.");
		assert_eq!(sub("a  b".to_owned(), &re, " "), "a b");
		assert_eq!(sub("ab".to_owned(), &re, " "), "ab");
	}
}
