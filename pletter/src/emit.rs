/*!
# Pletter: Emitter.

This module replays a plan through the bit writer to produce the final stream.
*/

use std::num::NonZeroU16;
use super::{
	BitWriter,
	BlockClass,
	Metadata,
	Mode,
	Plan,
	PletterError,
	pletter_bug,
};



/// # Terminator Length.
///
/// The stream ends with a "copy" whose length is too big for the decoder to
/// hold. It bails as soon as it notices.
const TERMINATOR_BITS: usize = 34;



/// # Emit.
///
/// Encode `src` according to `plan`, optionally prefixed with its length.
///
/// ## Errors
///
/// An error is returned if the plan contains anything that can't actually be
/// encoded. That would be a bug.
pub(crate) fn emit(src: &[u8], meta: &Metadata, plan: &Plan, save_length: bool)
-> Result<Vec<u8>, PletterError> {
	// Header.
	let Some((&first, _)) = src.split_first() else { return Err(PletterError::Empty); };
	let mut w = BitWriter::with_capacity(src.len() + src.len().div_ceil(8) + 8);
	if save_length {
		let len = u16::try_from(src.len()).map_err(|_| PletterError::TooBig)?;
		for b in len.to_le_bytes() { w.add_data(b); }
	}
	w.add3(plan.class().indicator());
	w.add_data(first);

	// The body.
	let before = w.written();
	tokens(&mut w, src, meta, plan)?;
	if usize::try_from(plan.entry(1).cost).ok() != Some(w.written() - before) {
		return Err(pletter_bug!());
	}

	// Footer.
	for _ in 0..TERMINATOR_BITS { w.add_bit(true); }
	Ok(w.finish())
}

/// # Write Tokens.
///
/// Write a literal or copy for every planned step after the first byte.
fn tokens(w: &mut BitWriter, src: &[u8], meta: &Metadata, plan: &Plan)
-> Result<(), PletterError> {
	let class = plan.class();
	let mut i = 1;
	while let Some(&byte) = src.get(i) {
		let entry = plan.entry(i);
		match entry.mode {
			Mode::Literal => {
				w.add_bit(false);
				w.add_data(byte);
				i += 1;
				continue;
			},
			Mode::ShortCopy => {
				w.add_bit(true);
				w.add_var(copy_len(entry.len)?);
				w.add_data(short_offset(meta[i].best_dist(BlockClass::C0))?);
			},
			Mode::LongCopy => {
				w.add_bit(true);
				w.add_var(copy_len(entry.len)?);

				let offset = long_offset(meta[i].best_dist(class), class)?;
				w.add_data(0b1000_0000 | (offset & 0b0111_1111) as u8);
				for shift in (7..7 + u32::from(class.extra_bits())).rev() {
					w.add_bit(0 != (offset >> shift) & 1);
				}
			},
		}

		i += usize::from(entry.len);
	}

	Ok(())
}

/// # Copy Length.
///
/// Copies store their length minus one, and need to be at least two bytes.
fn copy_len(len: u16) -> Result<NonZeroU16, PletterError> {
	if len < 2 { Err(pletter_bug!()) }
	else { NonZeroU16::new(len - 1).ok_or(pletter_bug!()) }
}

/// # Short Copy Offset.
///
/// Short copies store their distance minus one in a byte with the high bit
/// unset.
fn short_offset(dist: usize) -> Result<u8, PletterError> {
	dist.checked_sub(1)
		.and_then(|d| u8::try_from(d).ok())
		.filter(|d| *d < 0b1000_0000)
		.ok_or(pletter_bug!())
}

/// # Long Copy Offset.
///
/// Long copies store their distance minus 129: the low seven bits in a byte
/// with the high bit set, the rest as class-dependent extension bits.
fn long_offset(dist: usize, class: BlockClass) -> Result<usize, PletterError> {
	let offset = dist.checked_sub(BlockClass::C0.max_distance() + 1).ok_or(pletter_bug!())?;
	if offset >> (7 + class.extra_bits()) == 0 { Ok(offset) }
	else { Err(pletter_bug!()) }
}
