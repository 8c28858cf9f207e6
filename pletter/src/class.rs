/*!
# Pletter: Block Classes.
*/

use std::fmt;



#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Block Class.
///
/// Each class represents a maximum backward-reference distance, and with it,
/// the number of extra offset bits long copies have to carry around.
///
/// `C0` is special: it is the class used by _short_ copies, which are always
/// available regardless of the stream's class. Streams are encoded with one of
/// `C1..=C6`, whichever turns out smallest.
pub enum BlockClass {
	/// # Up to 128 Bytes Back (Short Copies).
	C0 = 0,

	/// # Up to 256 Bytes Back.
	C1 = 1,

	/// # Up to 640 Bytes Back.
	C2 = 2,

	/// # Up to 1,152 Bytes Back.
	C3 = 3,

	/// # Up to 2,176 Bytes Back.
	C4 = 4,

	/// # Up to 4,224 Bytes Back.
	C5 = 5,

	/// # Up to 8,320 Bytes Back.
	C6 = 6,
}

impl fmt::Display for BlockClass {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		<u8 as fmt::Display>::fmt(&self.as_u8(), f)
	}
}

impl BlockClass {
	/// # All Classes.
	pub(crate) const ALL: [Self; 7] = [
		Self::C0, Self::C1, Self::C2, Self::C3, Self::C4, Self::C5, Self::C6,
	];

	/// # Stream Classes.
	///
	/// These are the classes a stream can actually be encoded with.
	pub(crate) const PLANNED: [Self; 6] = [
		Self::C1, Self::C2, Self::C3, Self::C4, Self::C5, Self::C6,
	];

	/// # Number of Classes.
	pub(crate) const LEN: usize = 7;
}

impl BlockClass {
	#[must_use]
	/// # As `u8`.
	pub const fn as_u8(self) -> u8 { self as u8 }

	#[must_use]
	/// # As Index.
	pub(crate) const fn as_usize(self) -> usize { self as usize }

	#[must_use]
	/// # From Header Indicator.
	///
	/// Return the class corresponding to the three-bit value stored at the
	/// start of a stream, if valid.
	pub const fn from_indicator(v: u8) -> Option<Self> {
		match v {
			0 => Some(Self::C1),
			1 => Some(Self::C2),
			2 => Some(Self::C3),
			3 => Some(Self::C4),
			4 => Some(Self::C5),
			5 => Some(Self::C6),
			_ => None,
		}
	}

	#[must_use]
	/// # Header Indicator.
	///
	/// The three-bit value identifying the class in the stream header. `C0`
	/// can't head a stream; it shares `C1`'s value.
	pub const fn indicator(self) -> u8 { (self as u8).saturating_sub(1) }

	#[must_use]
	/// # Maximum Distance.
	///
	/// This is the furthest back a copy of this class may reach.
	pub const fn max_distance(self) -> usize {
		match self {
			Self::C0 => 128,
			Self::C1 => 128 + 128,
			Self::C2 => 512 + 128,
			Self::C3 => 1024 + 128,
			Self::C4 => 2048 + 128,
			Self::C5 => 4096 + 128,
			Self::C6 => 8192 + 128,
		}
	}

	#[must_use]
	/// # Extension Bits.
	///
	/// The number of extra offset bits a long copy of this class carries in
	/// the event stream, on top of the seven stored in its offset byte.
	pub const fn extra_bits(self) -> u8 {
		match self {
			Self::C0 | Self::C1 => 0,
			_ => self as u8,
		}
	}

	#[cfg(test)]
	#[must_use]
	/// # Previous Class.
	pub(crate) const fn previous(self) -> Option<Self> {
		match self {
			Self::C0 => None,
			Self::C1 => Some(Self::C0),
			Self::C2 => Some(Self::C1),
			Self::C3 => Some(Self::C2),
			Self::C4 => Some(Self::C3),
			Self::C5 => Some(Self::C4),
			Self::C6 => Some(Self::C5),
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_distances() {
		// Long copies store distance - 129 in 7 + extra bits, so the largest
		// offset each class can represent must land exactly on its maximum.
		for class in BlockClass::PLANNED {
			let bits = 7 + u32::from(class.extra_bits());
			assert_eq!(
				(1_usize << bits) + 128,
				class.max_distance(),
				"Class {class} has the wrong maximum distance.",
			);
		}

		// Short copies store distance - 1 in seven bits.
		assert_eq!(BlockClass::C0.max_distance(), 1 << 7);

		// Distances should grow with the class.
		for pair in BlockClass::ALL.windows(2) {
			assert!(pair[0].max_distance() < pair[1].max_distance());
		}
	}

	#[test]
	fn t_indicator() {
		for class in BlockClass::PLANNED {
			assert!(class.indicator() < 6);
			assert_eq!(BlockClass::from_indicator(class.indicator()), Some(class));
		}
		assert_eq!(BlockClass::from_indicator(6), None);
		assert_eq!(BlockClass::from_indicator(7), None);
	}

	#[test]
	fn t_previous() {
		assert_eq!(BlockClass::C0.previous(), None);
		for (k, class) in BlockClass::ALL.into_iter().enumerate() {
			assert_eq!(class.as_usize(), k);
			if let Some(prev) = class.previous() {
				assert_eq!(prev.as_usize() + 1, k);
			}
		}
		assert_eq!(BlockClass::ALL.len(), BlockClass::LEN);
	}
}
