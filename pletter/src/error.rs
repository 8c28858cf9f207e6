/*!
# Pletter: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Compression Error.
pub enum PletterError {
	/// # Empty Input.
	///
	/// The format always stores the first byte verbatim, so there has to be
	/// one.
	Empty,

	/// # Internal Encoding Error.
	///
	/// The planner and emitter disagreed about something. This shouldn't ever
	/// happen in practice, but if it does, the output would be garbage.
	Encoding(EncodingError),

	/// # Input Too Big.
	///
	/// See [`MAX_INPUT_SIZE`](crate::MAX_INPUT_SIZE).
	TooBig,
}

impl AsRef<str> for PletterError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for PletterError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Encoding(e) => fmt::Display::fmt(e, f),
			_ => f.write_str(self.as_str()),
		}
	}
}

impl std::error::Error for PletterError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		if let Self::Encoding(e) = self { Some(e) }
		else { None }
	}
}

impl From<EncodingError> for PletterError {
	#[inline]
	fn from(err: EncodingError) -> Self { Self::Encoding(err) }
}

impl PletterError {
	#[must_use]
	/// # As Str.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Empty => "The input is empty.",
			Self::Encoding(_) => "Pletter bug!",
			Self::TooBig => "The input is too big; pletter is limited to 65,535 bytes.",
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Encoding Error.
///
/// This struct is used for logical failings (bugs) in the planning/emitting
/// logic, i.e. a copy offset that doesn't fit its block class.
///
/// When compiled with `debug-assertions = true`, the offending source file and
/// line number are recorded to aid investigation.
///
/// The macro `pletter_bug!` is used internally to populate the appropriate
/// details or not.
#[non_exhaustive]
pub struct EncodingError {
	#[cfg(debug_assertions)] file: &'static str,
	#[cfg(debug_assertions)] line: u32,
}

impl EncodingError {
	#[cfg(debug_assertions)]
	/// # New Error.
	pub(crate) const fn new(file: &'static str, line: u32) -> Self {
		Self { file, line }
	}
}

impl fmt::Display for EncodingError {
	#[cfg(debug_assertions)]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!(
			"Pletter BUG!!! Sanity check failed at {}:{}",
			self.file,
			self.line,
		))
	}

	#[cfg(not(debug_assertions))]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("pletter bug")
	}
}

impl std::error::Error for EncodingError {}



#[cfg(debug_assertions)]
/// # Error Macro.
///
/// Initialize a new error with the appropriate environmental argument(s)
/// according to `debug-assertions`.
macro_rules! pletter_bug {
	() => (
		$crate::PletterError::Encoding($crate::error::EncodingError::new(file!(), line!()))
	);
}

#[cfg(not(debug_assertions))]
/// # Error Macro.
///
/// Initialize a new error with the appropriate environmental argument(s)
/// according to `debug-assertions`.
macro_rules! pletter_bug {
	() => (
		$crate::PletterError::Encoding($crate::error::EncodingError {})
	);
}

/// # Expose it to the rest of the crate.
pub(crate) use pletter_bug;
