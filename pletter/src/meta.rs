/*!
# Pletter: Match Metadata.

This module finds, for every input position, the longest match available to
each block class.
*/

use std::ops::Index;
use super::BlockClass;



/// # No Previous Occurrence.
///
/// Inputs are capped at `u16::MAX` bytes, so the last valid index is one less
/// than this.
const NO_PREV: u16 = u16::MAX;

/// # Number of Two-Byte Contexts.
const CONTEXTS: usize = 65_536;



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Position Metadata.
pub(crate) struct PositionMetadata {
	/// # Best Match Lengths (by Class).
	len: [u16; BlockClass::LEN],

	/// # Best Match Distances (by Class).
	dist: [u16; BlockClass::LEN],
}

impl PositionMetadata {
	#[inline]
	/// # Best Length.
	///
	/// Zero if there is no match at all.
	pub(crate) const fn best_len(&self, class: BlockClass) -> usize {
		self.len[class.as_usize()] as usize
	}

	#[inline]
	/// # Best Distance.
	///
	/// Zero if there is no match at all.
	pub(crate) const fn best_dist(&self, class: BlockClass) -> usize {
		self.dist[class.as_usize()] as usize
	}
}



#[derive(Debug)]
/// # Match Metadata.
///
/// This holds the `PositionMetadata` for every byte of the input.
pub(crate) struct Metadata {
	/// # Positions.
	positions: Vec<PositionMetadata>,
}

impl Index<usize> for Metadata {
	type Output = PositionMetadata;

	#[inline]
	fn index(&self, idx: usize) -> &Self::Output { &self.positions[idx] }
}

impl Metadata {
	#[expect(clippy::cast_possible_truncation, reason = "Inputs are capped at u16::MAX.")]
	/// # New.
	///
	/// Crunch the numbers for `src`.
	///
	/// The caller is responsible for keeping `src` to at most `u16::MAX` bytes.
	pub(crate) fn new(src: &[u8]) -> Self {
		debug_assert!(src.len() <= usize::from(NO_PREV));

		let prev = chains(src);
		let runs = runs(src);
		let mut positions = Vec::with_capacity(src.len());

		for i in 0..src.len() {
			let mut pos = PositionMetadata::default();

			// Each class picks up where the last left off, starting after its
			// best candidate. Everything nearer was already checked.
			let mut len: u16 = 0;
			let mut dist: u16 = 0;
			for class in BlockClass::ALL {
				let limit = class.max_distance();
				let mut next = prev[i - usize::from(dist)];

				while next != NO_PREV {
					let p = usize::from(next);
					if limit < i - p { break; }

					let l = match_len(src, &runs, i, p);
					if usize::from(len) < l {
						len = l as u16;
						dist = (i - p) as u16;
					}

					next = prev[p];
				}

				pos.len[class.as_usize()] = len;
				pos.dist[class.as_usize()] = dist;
			}

			positions.push(pos);
		}

		Self { positions }
	}

	/// # Length.
	pub(crate) fn len(&self) -> usize { self.positions.len() }
}



/// # Build Chains.
///
/// Return a "previous occurrence" index for each position, linking it to the
/// nearest earlier position sharing the same two-byte context.
///
/// The last position has no second byte; it is paired with a zero.
fn chains(src: &[u8]) -> Vec<u16> {
	let mut last = vec![NO_PREV; CONTEXTS];
	let mut prev = Vec::with_capacity(src.len());

	for (i, pair) in (0..=NO_PREV).zip(src.iter().copied().zip(
		src.iter().copied().skip(1).chain(std::iter::once(0))
	)) {
		let key = usize::from(u16::from_le_bytes([pair.0, pair.1]));
		prev.push(std::mem::replace(&mut last[key], i));
	}

	prev
}

/// # Run Lengths.
///
/// Count the repetitions of each byte going forward, back to front.
fn runs(src: &[u8]) -> Vec<u16> {
	let mut out = vec![1_u16; src.len()];
	for i in (1..src.len()).rev() {
		if src[i - 1] == src[i] { out[i - 1] = out[i] + 1; }
	}
	out
}

/// # Match Length.
///
/// Return how many bytes starting at `i` match those starting at `p`, which
/// comes earlier. The match may overlap `i`; it just can't run past the end of
/// the input.
///
/// When both sides are inside a run of the same byte, the shorter run can be
/// skipped over all at once.
fn match_len(src: &[u8], runs: &[u16], i: usize, p: usize) -> usize {
	let mut l = 0;
	while i + l < src.len() && src[p + l] == src[i + l] {
		let run = runs[i + l];
		if 1 < run { l += usize::from(u16::min(run, runs[p + l])); }
		else { l += 1; }
	}
	l
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Brute-Force Best Matches.
	///
	/// Check every earlier position sharing the same two-byte context, nearest
	/// first, keeping the first of the longest for each class.
	fn brute(src: &[u8], i: usize) -> [(usize, usize); BlockClass::LEN] {
		let mut out = [(0, 0); BlockClass::LEN];
		let b1 = src.get(i + 1).copied().unwrap_or(0);
		for p in (0..i).rev() {
			if src[p] != src[i] || src[p + 1] != b1 { continue; }

			let l = src[i..].iter().zip(&src[p..]).take_while(|(a, b)| a == b).count();
			for class in BlockClass::ALL {
				let best = &mut out[class.as_usize()];
				if i - p <= class.max_distance() && best.0 < l { *best = (l, i - p); }
			}
		}
		out
	}

	/// # Cheap Noise.
	fn noise(len: usize, mut seed: u32, mask: u8) -> Vec<u8> {
		(0..len).map(|_| {
			seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
			(seed >> 16) as u8 & mask
		}).collect()
	}

	#[test]
	fn t_runs() {
		assert_eq!(runs(b""), Vec::<u16>::new());
		assert_eq!(runs(b"a"), [1]);
		assert_eq!(runs(b"aaabccd"), [3, 2, 1, 1, 2, 1, 1]);
	}

	#[test]
	fn t_chains() {
		let src = b"abab\0ab";
		let prev = chains(src);
		assert_eq!(prev, [NO_PREV, NO_PREV, 0, NO_PREV, NO_PREV, 2, 3]);

		// The final "b" is paired with an implied zero, so links back to the
		// one followed by a real zero.
		let prev = chains(b"b\0xb");
		assert_eq!(prev, [NO_PREV, NO_PREV, NO_PREV, 0]);
	}

	#[test]
	fn t_match_len() {
		let src = b"aaaaaaaab";
		let table = runs(src);
		assert_eq!(match_len(src, &table, 1, 0), 7);
		assert_eq!(match_len(src, &table, 7, 6), 1);

		let src = b"xaaay_xaaaay";
		let table = runs(src);
		assert_eq!(match_len(src, &table, 6, 0), 4);
	}

	#[test]
	fn t_metadata() {
		for src in [
			noise(1500, 1, 3),
			noise(1200, 2, 1),
			[noise(300, 3, 255), vec![0; 200], noise(300, 3, 255)].concat(),
			b"Mississippi, Mississippi, Mississippi!".to_vec(),
		] {
			let meta = Metadata::new(&src);
			assert_eq!(meta.len(), src.len());
			let table = runs(&src);

			for i in 0..src.len() {
				let pos = meta[i];

				// Runs are right.
				let run = src[i..].iter().take_while(|&&b| b == src[i]).count();
				assert_eq!(usize::from(table[i]), run);

				let expected = brute(&src, i);
				for class in BlockClass::ALL {
					// The chained search should find the same thing as a
					// brute-force one.
					let (len, dist) = expected[class.as_usize()];
					assert_eq!(pos.best_len(class), len, "Length mismatch at {i}, class {class}.");
					assert_eq!(pos.best_dist(class), dist, "Distance mismatch at {i}, class {class}.");

					// And stay within bounds.
					assert!(pos.best_dist(class) <= class.max_distance());
					assert!(i + pos.best_len(class) <= src.len());

					// Bigger classes are never worse.
					if let Some(prev) = class.previous() {
						assert!(pos.best_len(prev) <= pos.best_len(class));
					}
				}
			}
		}
	}

	#[test]
	fn t_single() {
		let meta = Metadata::new(b"z");
		assert_eq!(meta.len(), 1);
		assert_eq!(runs(b"z"), [1]);
		for class in BlockClass::ALL {
			assert_eq!(meta[0].best_len(class), 0);
			assert_eq!(meta[0].best_dist(class), 0);
		}
	}
}
