/*!
# Plet: Errors
*/

use pletter::PletterError;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
   .--------.
   | ,-.,-. |   Plet v", env!("CARGO_PKG_VERSION"), r"
   | `-'`-' |   Optimal-parse Pletter v0.5
   |  ____  |   compression for MSX assets.
   `--------'

USAGE:
    plet [FLAGS] [OPTIONS]

FLAGS:
    -h, --help            Print help information and exit.
    -l, --length          Store the original length (as a two-byte header) in
                          the output.
    -V, --version         Print version information and exit.

OPTIONS:
    -i, --input <FILE>    Read the data to compress from this file, or STDIN
                          if '-'. [default: -]
    -o, --output <FILE>   Write the compressed data to this file, or STDOUT if
                          '-'. [default: -]

Inputs must be between 1 and 65,535 bytes.
");



#[derive(Debug, Clone, Eq, PartialEq)]
/// # General/Deal-Breaking Errors.
pub(super) enum PletError {
	/// # Compression Passthrough.
	Compress(PletterError),

	/// # Duplicate Input.
	Input2,

	/// # Invalid CLI Arg.
	InvalidCli(String),

	/// # Duplicate Output.
	Output2,

	/// # Read Error.
	Read,

	/// # Write Error.
	Write,

	/// # Print Help (Not an Error).
	PrintHelp,

	/// # Print Version (Not an Error).
	PrintVersion,
}

impl Error for PletError {}

impl fmt::Display for PletError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let prefix = self.as_str();
		match self {
			Self::Compress(e) => fmt::Display::fmt(e, f),
			Self::InvalidCli(s) => write!(f, "{prefix} {s}"),
			_ => f.write_str(prefix),
		}
	}
}

impl From<PletterError> for PletError {
	#[inline]
	fn from(err: PletterError) -> Self { Self::Compress(err) }
}

impl PletError {
	#[must_use]
	/// # As Str.
	pub(super) const fn as_str(&self) -> &'static str {
		match self {
			Self::Compress(e) => e.as_str(),
			Self::Input2 => "The -i/--input option can only be set once.",
			Self::InvalidCli(_) => "Invalid/unknown argument:",
			Self::Output2 => "The -o/--output option can only be set once.",
			Self::Read => "Unable to read the input.",
			Self::Write => "Unable to write the output.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("Plet v", env!("CARGO_PKG_VERSION")),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		assert_eq!(
			PletError::InvalidCli("--foo".to_owned()).to_string(),
			"Invalid/unknown argument: --foo",
		);
		assert_eq!(
			PletError::from(PletterError::Empty).to_string(),
			PletterError::Empty.as_str(),
		);
		assert!(PletError::PrintHelp.to_string().contains("--length"));
		assert!(PletError::PrintVersion.to_string().ends_with(env!("CARGO_PKG_VERSION")));
	}
}
