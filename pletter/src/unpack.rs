/*!
# Pletter: Unpacker (Testing).

A straightforward decoder, modelled on the Z80 reference unpacker, used to
verify the compressor's output.
*/

use super::BlockClass;



#[derive(Debug)]
/// # Bit Reader.
struct BitReader<'a> {
	/// # Source.
	src: &'a [u8],

	/// # Position.
	pos: usize,

	/// # Current Event.
	event: u8,

	/// # Bits Left in Event.
	left: u8,
}

impl<'a> BitReader<'a> {
	/// # New.
	const fn new(src: &'a [u8], pos: usize) -> Self {
		Self { src, pos, event: 0, left: 0 }
	}

	/// # Next Byte.
	fn byte(&mut self) -> Option<u8> {
		let out = self.src.get(self.pos).copied()?;
		self.pos += 1;
		Some(out)
	}

	/// # Next Bit.
	///
	/// A new event byte is pulled from the stream whenever the last one runs
	/// dry.
	fn bit(&mut self) -> Option<bool> {
		if self.left == 0 {
			self.event = self.byte()?;
			self.left = 8;
		}
		let out = 0 != self.event & 0b1000_0000;
		self.event <<= 1;
		self.left -= 1;
		Some(out)
	}

	/// # Next Bit (as Number).
	fn bit_usize(&mut self) -> Option<usize> { self.bit().map(usize::from) }
}



/// # Unpack.
///
/// Decode a stream, returning the original data and the stored length, if
/// any. `None` is returned if the stream is broken.
pub(crate) fn unpack(src: &[u8], has_length: bool) -> Option<(Vec<u8>, Option<u16>)> {
	let mut r = BitReader::new(src, 0);
	let stored =
		if has_length { Some(u16::from_le_bytes([r.byte()?, r.byte()?])) }
		else { None };

	// The class.
	let mut indicator = 0;
	for _ in 0..3 { indicator = (indicator << 1) | u8::from(r.bit()?); }
	let class = BlockClass::from_indicator(indicator)?;

	// The first byte.
	let mut out = vec![r.byte()?];

	loop {
		// Literal.
		if ! r.bit()? {
			out.push(r.byte()?);
			continue;
		}

		// The length starts from an implied one. Anything past sixteen bits
		// is the terminator.
		let mut len: usize = 1;
		while r.bit()? {
			len = (len << 1) | r.bit_usize()?;
			if usize::from(u16::MAX) < len { return Some((out, stored)); }
		}
		len += 1;

		// The offset.
		let byte = usize::from(r.byte()?);
		let dist =
			if byte < 128 { byte + 1 }
			else {
				let mut high = 0;
				for _ in 0..class.extra_bits() { high = (high << 1) | r.bit_usize()?; }
				(high << 7 | (byte & 127)) + 129
			};

		// Copy it, byte by byte; matches may overlap.
		let start = out.len().checked_sub(dist)?;
		for k in start..start + len { out.push(out[k]); }
	}
}
