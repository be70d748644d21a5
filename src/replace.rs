/*!
# Slimmer: Multi-Pattern Replacement.
*/

use crate::SlimError;
use regex::{
	Captures,
	Regex,
	RegexBuilder,
};
use std::{
	borrow::Cow,
	collections::{
		BTreeMap,
		HashMap,
	},
	ops::BitOr,
	path::Path,
};



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Replacement Options.
///
/// Combine with `|`.
pub struct ReplaceFlags(u8);

macro_rules! flags {
	( $($nice:ident $k:ident $v:literal,)+ ) => (
		impl ReplaceFlags {
			$(
				/// # Flag.
				pub const $k: Self = Self($v);

				#[must_use]
				/// # Getter.
				pub const fn $nice(self) -> bool {
					$v == self.0 & $v
				}
			)+

			/// # No Flags.
			pub const NONE: Self = Self(0);
		}
	)
}

flags! {
	whole_words      WHOLE_WORDS      0b0001, // Match on word boundaries.
	case_insensitive CASE_INSENSITIVE 0b0010, // Ignore case when matching.
}

impl BitOr for ReplaceFlags {
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}



#[derive(Debug, Clone)]
/// # Multi-Pattern Replacer.
///
/// This replaces every occurrence of every key from a literal key/value map
/// in a single pass. Replacement text is never rescanned, so swaps like
/// `a => b, b => a` work as expected.
///
/// When more than one key could match at the same position, the key that
/// sorts first (lexicographically) wins.
///
/// ## Examples
///
/// ```
/// use slimmer::{MultiReplacer, ReplaceFlags};
///
/// let rep = MultiReplacer::new(
///     [("cat", "dog"), ("dog", "cat")],
///     ReplaceFlags::NONE,
/// ).unwrap();
/// assert_eq!(rep.replace("cat chases dog"), "dog chases cat");
/// ```
pub struct MultiReplacer {
	/// # Engine.
	engine: Engine,
}

#[derive(Debug, Clone)]
/// # Replacement Engine.
///
/// This is decided once, at construction.
enum Engine {
	/// # Char-to-Char Table.
	Chars(HashMap<char, char>),

	/// # Alternation.
	Pattern {
		/// # Compiled Keys.
		re: Regex,

		/// # Replacements.
		///
		/// Keys are lowercase when `fold` is true.
		map: HashMap<String, String>,

		/// # Case-Insensitive?
		fold: bool,
	},
}

impl MultiReplacer {
	/// # New (From Map).
	///
	/// Empty keys are ignored. If a key is repeated, the last value wins.
	///
	/// ## Errors
	///
	/// This will return an error if the combined pattern is too big for the
	/// regex engine.
	pub fn new<I, K, V>(pairs: I, flags: ReplaceFlags) -> Result<Self, SlimError>
	where
		I: IntoIterator<Item=(K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		let map: BTreeMap<String, String> = pairs.into_iter()
			.map(|(k, v)| (k.into(), v.into()))
			.filter(|(k, _)| ! k.is_empty())
			.collect();

		// Translation table?
		if
			map.is_empty() ||
			(! flags.whole_words() && map.iter().all(|(k, v)| is_char(k) && is_char(v)))
		{
			return Ok(Self { engine: Engine::Chars(char_table(&map, flags.case_insensitive())) });
		}

		// Alternation it is.
		let mut pattern = map.keys()
			.map(|k| regex::escape(k))
			.collect::<Vec<String>>()
			.join("|");
		if flags.whole_words() { pattern = format!(r"\b(?:{pattern})\b"); }

		let re = RegexBuilder::new(&pattern)
			.case_insensitive(flags.case_insensitive())
			.build()
			.map_err(|_| SlimError::Pattern)?;

		let fold = flags.case_insensitive();
		let map =
			if fold {
				let mut out = HashMap::with_capacity(map.len());
				for (k, v) in map {
					out.entry(k.to_lowercase()).or_insert(v);
				}
				out
			}
			else { map.into_iter().collect() };

		Ok(Self { engine: Engine::Pattern { re, map, fold } })
	}

	/// # New (From Definition).
	///
	/// Parse replacements from line-oriented text, each line holding a key
	/// and value separated by `delimiter`. Anything after a second delimiter
	/// is ignored, as are empty lines.
	///
	/// ## Errors
	///
	/// This will return an error if a line is missing its delimiter, or the
	/// pattern cannot be compiled.
	pub fn from_definition(src: &str, delimiter: char, flags: ReplaceFlags)
	-> Result<Self, SlimError> {
		let mut pairs = Vec::new();
		for line in src.lines() {
			let line = line.trim_end_matches(['\r', '\n']);
			if line.is_empty() { continue; }

			let (k, rest) = line.split_once(delimiter).ok_or(SlimError::Definition)?;
			let v = rest.split_once(delimiter).map_or(rest, |(v, _)| v);
			pairs.push((k, v));
		}

		Self::new(pairs, flags)
	}

	/// # New (From File).
	///
	/// Same as [`MultiReplacer::from_definition`], but reading the definition
	/// from a file.
	///
	/// ## Errors
	///
	/// This will return an error if the file cannot be read, or for any of
	/// the reasons `from_definition` might fail.
	pub fn from_file<P>(src: P, delimiter: char, flags: ReplaceFlags)
	-> Result<Self, SlimError>
	where P: AsRef<Path> {
		let raw = std::fs::read_to_string(src).map_err(|_| SlimError::Read)?;
		Self::from_definition(&raw, delimiter, flags)
	}

	#[must_use]
	/// # Number of Replacements.
	pub fn len(&self) -> usize {
		match &self.engine {
			Engine::Chars(table) => table.len(),
			Engine::Pattern { map, .. } => map.len(),
		}
	}

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.len() == 0 }

	#[must_use]
	/// # Replace!
	///
	/// Apply all replacements to `src`. If nothing matched, the original is
	/// returned as-is.
	pub fn replace<'a>(&self, src: &'a str) -> Cow<'a, str> {
		match &self.engine {
			Engine::Chars(table) =>
				if src.chars().any(|c| table.contains_key(&c)) {
					Cow::Owned(
						src.chars()
							.map(|c| table.get(&c).copied().unwrap_or(c))
							.collect()
					)
				}
				else { Cow::Borrowed(src) },
			Engine::Pattern { re, map, fold } => re.replace_all(src, |caps: &Captures<'_>| {
				let found = &caps[0];
				let to =
					if *fold { map.get(&found.to_lowercase()) }
					else { map.get(found) };
				to.map_or_else(|| found.to_owned(), String::clone)
			}),
		}
	}
}



/// # Is Single Char?
fn is_char(src: &str) -> bool {
	let mut chars = src.chars();
	chars.next().is_some() && chars.next().is_none()
}

/// # Build Char Table.
///
/// This assumes every key and value is a single char.
fn char_table(map: &BTreeMap<String, String>, fold: bool) -> HashMap<char, char> {
	let mut out = HashMap::with_capacity(map.len());
	for (k, v) in map {
		let (Some(k), Some(v)) = (k.chars().next(), v.chars().next()) else { continue; };
		out.entry(k).or_insert(v);

		// The first key (in sorted order) wins any case collisions.
		if fold {
			for alt in k.to_lowercase().chain(k.to_uppercase()) {
				out.entry(alt).or_insert(v);
			}
		}
	}
	out
}
