/*!
# Slimmer: Patterns.

Every matcher the slimmers lean on is compiled once, on first use, and shared
(read-only) for the life of the process.
*/

use regex::Regex;
use std::sync::LazyLock;



/// # Compile Pattern.
///
/// All patterns are constant, so a failure here is a programming error.
macro_rules! pattern {
	( $($name:ident $re:literal,)+ ) => ($(
		pub(crate) static $name: LazyLock<Regex> = LazyLock::new(||
			Regex::new($re).expect(concat!("Invalid pattern: ", $re))
		);
	)+);
}

// CSS.
pattern! {
	CSS_COMMENT         r"(?s)/\*.*?\*/",
	CSS_WHITESPACE_RUN  r"\s\s+",
	CSS_BEFORE_OPEN     r"\s+\{",
	CSS_AFTER_OPEN      r"\{\s+",
	CSS_BEFORE_CLOSE    r"\s+\}",
	CSS_AFTER_COLON     r":\s+",
	CSS_AFTER_SEMICOLON r";\s+",
	CSS_AFTER_COMMA     r",\s",
	CSS_BEFORE_END_TAG  r"\s+</",
	CSS_AFTER_CLOSE     r"\}\s+([\w#])",
	CSS_RULE_END        r";\}\s*",
	CSS_DECLARATIONS    r"\{[^{}]*\}",
	CSS_BEFORE_PUNCT    r"\s+([:;])",
	HEX_COLOR           r"#[0-9A-Fa-f]{6}\b",
}

// HTML.
pattern! {
	HTML_STYLE          r"(?is)(<style\b[^>]*>)(.*?)(</style>)",
	HTML_INTER_TAG      r">\s+<",
	HTML_COMMENT        r"<!--.*?-->",
	HTML_START_TAG      r"(?s)<\w.*?>",
	TAG_QUOTE_CLOSE     r#"(["'])\s+>"#,
	TAG_WHITESPACE      r"\s+",
	TAG_ATTR_INDENT     r#"(["'])\s\s+([\w:.-]+=)"#,
}
