/*!
# Slimmer: CLI Helpers.
*/

use slimmer::{
	normalize_syntax,
	Syntax,
};
use std::{
	error::Error,
	ffi::OsString,
	fmt,
	fs::File,
	io::{
		BufRead,
		BufReader,
	},
	path::{
		Path,
		PathBuf,
	},
};



/// # Help Text.
const HELP: &str = concat!(r"
   ___ _ _
  / __| (_)_ __  _ __  ___ _ _
  \__ \ | | '  \| '  \/ -_) '_|   ", "\x1b[38;5;199mSlimmer\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r"
  |___/_|_|_|_|_|_|_|_\___|_|     Lexical HTML, XHTML,
                                  and CSS slimming.

USAGE:
    slimmer [FLAGS] [OPTIONS] <FILE> [SYNTAX] [OUTPUT]

FLAGS:
    -h, --help            Print help information and exit.
    -V, --version         Print program version and exit.

OPTIONS:
    -o, --output <FILE>   Write the slimmed code to this file instead of
                          printing it to STDOUT.
    -s, --syntax <NAME>   Treat the source as html, xhtml, or css. If
                          omitted, the syntax is guessed from the file
                          extension or DOCTYPE.

ARGS:
    <FILE>                The file to slim.
    [SYNTAX]              Same as -s/--syntax.
    [OUTPUT]              Same as -o/--output.
");

/// # Usage.
pub(super) const USAGE: &str = "Usage: slimmer [FLAGS] [OPTIONS] <FILE> [SYNTAX] [OUTPUT]";

/// # Maximum Lines to Sniff.
const GUESS_LINES: usize = 15;



#[derive(Debug, Copy, Clone, Eq, PartialEq)]
/// # CLI Error.
pub(super) enum CliError {
	/// # Too Many Arguments.
	Arguments,

	/// # Missing/Invalid Input File.
	NoFile,

	/// # Unreadable Input File.
	Read,

	/// # Unknown Syntax.
	Syntax,

	/// # Unable to Save Output.
	Write,

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl AsRef<str> for CliError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for CliError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for CliError {}

impl CliError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::Arguments => "Too many arguments.",
			Self::NoFile => "A valid input file is required.",
			Self::Read => "Unable to read the file.",
			Self::Syntax => "The syntax could not be determined; use html, xhtml, or css.",
			Self::Write => "Unable to save the output.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("Slimmer v", env!("CARGO_PKG_VERSION")),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Job.
///
/// What to slim, how, and where to put it.
pub(super) struct Job {
	/// # Source File.
	pub(super) src: PathBuf,

	/// # Syntax.
	///
	/// If `None`, it will need to be guessed.
	pub(super) syntax: Option<Syntax>,

	/// # Output File.
	pub(super) dst: Option<PathBuf>,
}

impl Job {
	/// # New.
	///
	/// Build a job from the trailing `<FILE> [SYNTAX] [OUTPUT]` arguments
	/// and any explicit `-s`/`-o` options, which take priority.
	///
	/// When only two trailing arguments are present, the second is taken to
	/// be the syntax if it looks like one, otherwise the output path.
	///
	/// ## Errors
	///
	/// This will return an error if there are too few or too many arguments,
	/// or the syntax is specified but unsupported.
	pub(super) fn new(args: Vec<OsString>, syntax: Option<&str>, dst: Option<PathBuf>)
	-> Result<Self, CliError> {
		let mut syntax = match syntax {
			Some(s) => Some(normalize_syntax(s).ok_or(CliError::Syntax)?),
			None => None,
		};
		let mut dst = dst;

		let mut args = args.into_iter();
		let src = args.next().map(PathBuf::from).ok_or(CliError::NoFile)?;
		match (args.next(), args.next(), args.next()) {
			(None, _, _) => {},
			(Some(a), None, _) => {
				if let Some(s) = a.to_str().and_then(normalize_syntax) {
					syntax.get_or_insert(s);
				}
				else { dst.get_or_insert_with(|| PathBuf::from(a)); }
			},
			(Some(a), Some(b), None) => {
				let s = a.to_str().and_then(normalize_syntax).ok_or(CliError::Syntax)?;
				syntax.get_or_insert(s);
				dst.get_or_insert_with(|| PathBuf::from(b));
			},
			(Some(_), Some(_), Some(_)) => return Err(CliError::Arguments),
		}

		Ok(Self { src, syntax, dst })
	}

	/// # Syntax.
	///
	/// Return the explicit syntax, or try to guess it.
	///
	/// ## Errors
	///
	/// This will return an error if the source is not a file, or the syntax
	/// cannot be determined.
	pub(super) fn syntax(&self) -> Result<Syntax, CliError> {
		if ! self.src.is_file() { return Err(CliError::NoFile); }
		self.syntax
			.or_else(|| guess_syntax(&self.src))
			.ok_or(CliError::Syntax)
	}
}



/// # Guess Syntax.
///
/// Files ending in `.css` are always CSS. Anything else is sniffed for a
/// DOCTYPE declaration within the first few lines.
pub(super) fn guess_syntax(src: &Path) -> Option<Syntax> {
	if src.extension().is_some_and(|e| e.eq_ignore_ascii_case("css")) {
		return Some(Syntax::Css);
	}

	let file = File::open(src).ok()?;
	let head: Vec<String> = BufReader::new(file)
		.lines()
		.take(GUESS_LINES)
		.map_while(Result::ok)
		.collect();

	guess_doctype(&head)
}

/// # Guess From DOCTYPE.
///
/// HTML 4.0x doctypes are HTML, XHTML 1.0 doctypes are XHTML, and the bare
/// HTML5 doctype is HTML too.
fn guess_doctype<S: AsRef<str>>(lines: &[S]) -> Option<Syntax> {
	let doctype = lines.iter()
		.map(|line| line.as_ref())
		.filter(|line| line.contains("!DOCTYPE"))
		.collect::<Vec<&str>>()
		.join("\n");

	if doctype.contains("HTML 4.0") { Some(Syntax::Html) }
	else if doctype.contains("XHTML 1.0") { Some(Syntax::Xhtml) }
	else if lines.iter().any(|line| line.as_ref().to_ascii_lowercase().contains("<!doctype html>")) {
		Some(Syntax::Html)
	}
	else { None }
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Test Asset.
	fn asset(name: &str) -> PathBuf {
		Path::new(env!("CARGO_MANIFEST_DIR")).join("skel/test-assets").join(name)
	}

	fn os(list: &[&str]) -> Vec<OsString> {
		list.iter().map(OsString::from).collect()
	}

	#[test]
	fn t_job() {
		// Just a file.
		assert_eq!(
			Job::new(os(&["a.html"]), None, None),
			Ok(Job { src: PathBuf::from("a.html"), syntax: None, dst: None }),
		);

		// File and syntax.
		assert_eq!(
			Job::new(os(&["a.html", "XHTML"]), None, None),
			Ok(Job { src: PathBuf::from("a.html"), syntax: Some(Syntax::Xhtml), dst: None }),
		);

		// File and output.
		assert_eq!(
			Job::new(os(&["a.html", "b.html"]), None, None),
			Ok(Job { src: PathBuf::from("a.html"), syntax: None, dst: Some(PathBuf::from("b.html")) }),
		);

		// All three.
		assert_eq!(
			Job::new(os(&["a.txt", "style sheet", "b.css"]), None, None),
			Ok(Job { src: PathBuf::from("a.txt"), syntax: Some(Syntax::Css), dst: Some(PathBuf::from("b.css")) }),
		);

		// Options win.
		assert_eq!(
			Job::new(os(&["a.html", "xhtml", "b.html"]), Some("html"), Some(PathBuf::from("c.html"))),
			Ok(Job { src: PathBuf::from("a.html"), syntax: Some(Syntax::Html), dst: Some(PathBuf::from("c.html")) }),
		);

		// Errors.
		assert_eq!(Job::new(Vec::new(), None, None), Err(CliError::NoFile));
		assert_eq!(Job::new(os(&["a", "json", "b"]), None, None), Err(CliError::Syntax));
		assert_eq!(Job::new(os(&["a"]), Some("json"), None), Err(CliError::Syntax));
		assert_eq!(Job::new(os(&["a", "b", "c", "d"]), None, None), Err(CliError::Arguments));
	}

	#[test]
	fn t_job_syntax() {
		let job = Job::new(vec![asset("sample.css").into_os_string()], None, None)
			.expect("Job failed.");
		assert_eq!(job.syntax(), Ok(Syntax::Css));

		// Explicit syntax beats guessing.
		let job = Job::new(vec![asset("sample.css").into_os_string()], Some("html"), None)
			.expect("Job failed.");
		assert_eq!(job.syntax(), Ok(Syntax::Html));

		// Missing files are no good.
		let job = Job::new(vec![asset("missing.html").into_os_string()], Some("html"), None)
			.expect("Job failed.");
		assert_eq!(job.syntax(), Err(CliError::NoFile));

		// Nor are unguessable ones.
		let job = Job::new(vec![asset("plain.txt").into_os_string()], None, None)
			.expect("Job failed.");
		assert_eq!(job.syntax(), Err(CliError::Syntax));
	}

	#[test]
	fn t_guess_syntax() {
		assert_eq!(guess_syntax(&asset("sample.css")), Some(Syntax::Css));
		assert_eq!(guess_syntax(&asset("sample.html")), Some(Syntax::Html));
		assert_eq!(guess_syntax(&asset("legacy.htm")), Some(Syntax::Html));
		assert_eq!(guess_syntax(&asset("strict.xhtml")), Some(Syntax::Xhtml));
		assert_eq!(guess_syntax(&asset("plain.txt")), None);
		assert_eq!(guess_syntax(&asset("missing.html")), None);

		// The extension check doesn't care about case, or existence.
		assert_eq!(guess_syntax(Path::new("/nowhere/STYLE.CSS")), Some(Syntax::Css));
	}

	#[test]
	fn t_guess_doctype() {
		// Only the first few lines count.
		let mut lines = vec![""; GUESS_LINES];
		lines.push("<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\">");
		assert_eq!(guess_doctype(&lines[..GUESS_LINES]), None);
		assert_eq!(guess_doctype(&lines), Some(Syntax::Html));

		// The version needs to be in a DOCTYPE line.
		assert_eq!(guess_doctype(&["<p>XHTML 1.0</p>"]), None);
	}
}
