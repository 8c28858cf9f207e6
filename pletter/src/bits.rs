/*!
# Pletter: Bit Writer.

Pletter streams interleave single-bit decisions with whole payload bytes. The
decisions are packed eight at a time into "event" bytes, each of which sits in
the stream just ahead of the payload bytes written while it was filling up.
*/

use std::num::NonZeroU16;



#[derive(Debug)]
/// # Pending Event Slot.
///
/// A placeholder byte in the output buffer for an event whose bits are not
/// yet known.
///
/// It is claimed by the first bit of an event and consumed when the event is
/// committed.
struct PendingEventSlot {
	/// # Buffer Index.
	buffer_index: usize,
}

impl PendingEventSlot {
	/// # Claim.
	///
	/// Reserve the next byte of `buf`.
	fn claim(buf: &mut Vec<u8>) -> Self {
		let buffer_index = buf.len();
		buf.push(0);
		Self { buffer_index }
	}

	/// # Commit.
	///
	/// Write the finished event into its reserved place.
	fn commit(self, buf: &mut [u8], event: u8) {
		buf[self.buffer_index] = event;
	}
}



#[derive(Debug, Default)]
/// # Bit Writer.
pub(crate) struct BitWriter {
	/// # Output.
	buf: Vec<u8>,

	/// # Event Accumulator.
	event: u8,

	/// # Bits in the Accumulator.
	///
	/// This is always `0..8`; full events are committed immediately.
	used: u8,

	/// # Reserved Event Slot.
	///
	/// This is `Some` whenever `used` is non-zero.
	slot: Option<PendingEventSlot>,

	/// # Bits Written.
	///
	/// Every event bit and every payload bit (eight per byte), excluding
	/// padding.
	written: usize,
}

impl BitWriter {
	/// # With Capacity.
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
			..Self::default()
		}
	}

	/// # Bits Written.
	pub(crate) const fn written(&self) -> usize { self.written }

	/// # Finish.
	///
	/// Flush any partial event and return the output.
	pub(crate) fn finish(mut self) -> Vec<u8> {
		self.flush();
		self.buf
	}
}

impl BitWriter {
	/// # Add Bit.
	pub(crate) fn add_bit(&mut self, bit: bool) {
		if self.used == 0 {
			self.slot = Some(PendingEventSlot::claim(&mut self.buf));
		}

		self.event = (self.event << 1) | u8::from(bit);
		self.used += 1;
		self.written += 1;

		if self.used == 8 { self.commit(); }
	}

	/// # Add Three Bits.
	///
	/// Add the lowest three bits of `v`, most significant first.
	pub(crate) fn add3(&mut self, v: u8) {
		self.add_bit(0 != v & 0b100);
		self.add_bit(0 != v & 0b010);
		self.add_bit(0 != v & 0b001);
	}

	/// # Add Variable-Length Value.
	///
	/// Every bit below the highest set one is written, high to low, preceded
	/// by a `1` "keep going" bit. A final `0` ends the value.
	///
	/// The decoder starts from an implicit `1`, so the highest bit itself is
	/// never written.
	pub(crate) fn add_var(&mut self, v: NonZeroU16) {
		let v = v.get();
		for shift in (0..v.ilog2()).rev() {
			self.add_bit(true);
			self.add_bit(0 != (v >> shift) & 1);
		}
		self.add_bit(false);
	}

	/// # Add Data.
	///
	/// Append a payload byte directly to the output.
	pub(crate) fn add_data(&mut self, byte: u8) {
		self.buf.push(byte);
		self.written += 8;
	}

	/// # Flush.
	///
	/// Pad a partial event with `1` bits and commit it.
	pub(crate) fn flush(&mut self) {
		if self.used != 0 {
			while self.used != 8 {
				self.event = (self.event << 1) | 1;
				self.used += 1;
			}
			self.commit();
		}
	}

	/// # Commit Event.
	fn commit(&mut self) {
		if let Some(slot) = self.slot.take() {
			slot.commit(&mut self.buf, self.event);
		}
		self.event = 0;
		self.used = 0;
	}
}
