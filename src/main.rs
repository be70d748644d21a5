/*!
# `Slimmer`

`Slimmer` is a small command-line wrapper around the `slimmer` library. Point
it at an HTML, XHTML, or CSS file and it will print a slimmed copy of the code
to STDOUT, or save it to a separate file.

If the syntax is not specified, it is guessed: files ending in `.css` are
treated as CSS; anything else is checked for an HTML 4.0x, XHTML 1.0, or
HTML5 DOCTYPE within its first fifteen lines.



## Use

```bash
# Slim a stylesheet to STDOUT.
slimmer /path/to/style.css

# Slim a document, saving the result elsewhere.
slimmer /path/to/index.html -o /path/to/index.min.html

# Positional syntax and output paths work too.
slimmer /path/to/template.tpl xhtml /path/to/template.min.tpl

# For a full list of options, run help:
slimmer -h
```
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



mod cli;

use argyle::Argument;
use cli::{
	CliError,
	Job,
	USAGE,
};
use dactyl::{
	NiceElapsed,
	NiceU64,
	traits::SaturatingFrom,
};
use fyi_msg::Msg;
use std::{
	ffi::OsString,
	path::PathBuf,
	process::ExitCode,
	time::Instant,
};



/// # Main.
fn main() -> ExitCode {
	match main__() {
		Ok(()) => ExitCode::SUCCESS,
		Err(e @ (CliError::PrintHelp | CliError::PrintVersion)) => {
			println!("{e}");
			ExitCode::SUCCESS
		},
		Err(e) => {
			Msg::error(e.as_str()).with_newline(true).eprint();
			eprintln!("{USAGE}");
			ExitCode::FAILURE
		},
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), CliError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut syntax: Option<String> = None;
	let mut dst: Option<PathBuf> = None;
	let mut rest: Vec<OsString> = Vec::new();
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(CliError::PrintHelp),
			Argument::Key("-V" | "--version") => return Err(CliError::PrintVersion),

			Argument::KeyWithValue("-o" | "--output", s) => { dst.replace(PathBuf::from(s)); },
			Argument::KeyWithValue("-s" | "--syntax", s) => { syntax.replace(s); },

			Argument::Other(s) => { rest.push(s.into()); },
			Argument::InvalidUtf8(s) => { rest.push(s); },

			// Nothing else is expected.
			_ => {},
		}
	}

	let job = Job::new(rest, syntax.as_deref(), dst)?;
	let kind = job.syntax()?;

	// Slim it!
	let raw = std::fs::read_to_string(&job.src).map_err(|_| CliError::Read)?;
	let now = Instant::now();
	let out = kind.slim(&raw);

	// Save it, or print it.
	if let Some(dst) = job.dst {
		write_atomic::write_file(&dst, out.as_bytes()).map_err(|_| CliError::Write)?;

		let before = u64::saturating_from(raw.len());
		let after = u64::saturating_from(out.len());
		Msg::success(format!(
			"Slimmed {} ({kind}) in {}: {} \u{2192} {} bytes.",
			job.src.display(),
			NiceElapsed::from(now),
			NiceU64::from(before),
			NiceU64::from(after),
		))
			.with_newline(true)
			.print();
	}
	else { println!("{out}"); }

	Ok(())
}
