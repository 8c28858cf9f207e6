/*!
# Pletter

An optimal-parse compressor for the Pletter v0.5 format, a bit-packed LZ77
variant popular for 8-bit (MSX) software.

Every position of the input is searched for its best match at each of seven
distance tiers, then six complete encodings are planned, back to front, with
dynamic programming, one for each tier a stream can use. The cheapest one
wins.

## Examples

```
let raw = b"Hello, Hello, Hello, Hello!";
let packed = pletter::compress(raw, true).unwrap();
assert!(packed.len() < raw.len());

// The stored length comes first.
assert_eq!(packed[..2], [27, 0]);
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
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![allow(
	clippy::module_name_repetitions,
	clippy::redundant_pub_crate,
)]

mod bits;
mod class;
mod emit;
mod error;
mod meta;
mod plan;
mod varcost;

#[cfg(test)] mod unpack;

use bits::BitWriter;
pub use class::BlockClass;
use emit::emit;
pub use error::{
	EncodingError,
	PletterError,
};
use error::pletter_bug;
use meta::Metadata;
use plan::{
	best_plan,
	Mode,
	Plan,
};



/// # Maximum Input Size.
///
/// The stored length, copy lengths, and the reference decoder's registers are
/// all sixteen bits wide.
pub const MAX_INPUT_SIZE: usize = u16::MAX as usize;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Packed Data.
///
/// This is returned by [`pack`], and holds the compressed stream along with a
/// few details about how it was made.
pub struct Packed {
	/// # Compressed Data.
	data: Vec<u8>,

	/// # Block Class.
	class: BlockClass,

	/// # Cost.
	cost: u32,
}

impl AsRef<[u8]> for Packed {
	#[inline]
	fn as_ref(&self) -> &[u8] { self.as_slice() }
}

impl From<Packed> for Vec<u8> {
	#[inline]
	fn from(src: Packed) -> Self { src.data }
}

impl Packed {
	#[must_use]
	/// # As Slice.
	pub fn as_slice(&self) -> &[u8] { self.data.as_slice() }

	#[must_use]
	/// # Block Class.
	///
	/// The distance tier the stream was encoded with.
	pub const fn class(&self) -> BlockClass { self.class }

	#[must_use]
	/// # Cost.
	///
	/// The planned size of the encoded input in bits, i.e. every tag,
	/// payload, length, and extension bit, but not the header, length prefix,
	/// terminator, or padding.
	pub const fn cost(&self) -> u32 { self.cost }

	#[must_use]
	/// # Is Empty?
	///
	/// Streams are never empty; this is only here for consistency.
	pub fn is_empty(&self) -> bool { self.data.is_empty() }

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.data.len() }
}



/// # Compress.
///
/// Compress `src`, optionally prefixing the result with its original length
/// (as a little-endian `u16`).
///
/// ## Errors
///
/// An error is returned if `src` is empty or bigger than [`MAX_INPUT_SIZE`].
pub fn compress(src: &[u8], save_length: bool) -> Result<Vec<u8>, PletterError> {
	pack(src, save_length).map(Vec::from)
}

/// # Pack.
///
/// Same as [`compress`], but the result includes the chosen block class and
/// planned cost along with the data.
///
/// ## Errors
///
/// An error is returned if `src` is empty or bigger than [`MAX_INPUT_SIZE`].
pub fn pack(src: &[u8], save_length: bool) -> Result<Packed, PletterError> {
	if src.is_empty() { return Err(PletterError::Empty); }
	if MAX_INPUT_SIZE < src.len() { return Err(PletterError::TooBig); }

	let meta = Metadata::new(src);
	let plan = best_plan(&meta);
	let data = emit(src, &meta, &plan, save_length)?;

	Ok(Packed {
		data,
		class: plan.class(),
		cost: plan.total(),
	})
}
