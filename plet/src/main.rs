/*!
# Plet

Optimal-parse Pletter v0.5 compression for MSX assets.
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
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

mod error;
mod opts;

use dactyl::{
	NiceElapsed,
	NiceU64,
};
use error::PletError;
use fyi_msg::Msg;
use opts::Settings;
use std::{
	ffi::OsString,
	time::Instant,
};



argyle::argue! {
	Help    "-h" "--help",
	Length  "-l" "--length",
	Version "-V" "--version",

	@options
	Input   "-i" "--input",
	Output  "-o" "--output",
}



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (PletError::PrintHelp | PletError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => {
			Msg::error(e.to_string()).eprint();
			std::process::exit(1);
		},
	}
}

#[inline]
/// # Actual Main.
///
/// Parse the arguments, read the input, compress it, and write it back out.
fn main__() -> Result<(), PletError> {
	let settings = parse_args(Argument::args_os())?;
	let now = Instant::now();

	let raw = settings.read()?;
	let packed = pletter::pack(&raw, settings.save_length())?;
	settings.write(packed.as_slice())?;

	// Summarize, but only if STDOUT isn't busy with the data.
	if let Some(path) = settings.output() {
		Msg::crunched(format!(
			"{}: {} \u{2192} {} bytes (class {}) in {}.",
			path.display(),
			NiceU64::from(raw.len()),
			NiceU64::from(packed.len()),
			packed.class(),
			NiceElapsed::from(now),
		)).eprint();
	}

	Ok(())
}

/// # Parse Arguments.
fn parse_args<I: Iterator<Item=OsString>>(args: ArgumentIter<I>)
-> Result<Settings, PletError> {
	let mut settings = Settings::default();
	for arg in args {
		match arg {
			Argument::Help => return Err(PletError::PrintHelp),
			Argument::Length => { settings.set_save_length(); },
			Argument::Version => return Err(PletError::PrintVersion),

			Argument::Input(s) => settings.set_input(s)?,
			Argument::Output(s) => settings.set_output(s)?,

			Argument::Other(s) => return Err(PletError::InvalidCli(s)),
			Argument::OtherOs(s) => return Err(PletError::InvalidCli(
				s.to_string_lossy().into_owned()
			)),
		}
	}

	Ok(settings)
}
