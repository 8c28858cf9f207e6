/*!
# Pletter: Planning.

This module works out the cheapest way to encode the input for a given block
class, and which class is cheapest overall.
*/

use std::thread;
use super::{
	BlockClass,
	Metadata,
	varcost::match_cost,
};



/// # Parallel Threshold.
///
/// Inputs at least this big have their six plans worked out in parallel.
/// Smaller ones aren't worth the thread overhead.
const PARALLEL_THRESHOLD: usize = 16 * 1024;

/// # Literal Cost.
///
/// A literal is a `0` tag bit and a raw byte.
const LITERAL_COST: u32 = 1 + 8;

/// # Copy Base Cost.
///
/// A copy is a `1` tag bit and a raw offset byte, plus length and extension
/// bits.
const COPY_COST: u32 = 1 + 8;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Encoding Mode.
pub(crate) enum Mode {
	/// # Literal.
	Literal,

	/// # Short Copy.
	///
	/// A copy within `BlockClass::C0` distance.
	ShortCopy,

	/// # Long Copy.
	///
	/// A copy using the stream's own block class distance.
	LongCopy,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Cost Entry.
pub(crate) struct CostEntry {
	/// # Bits Needed for the Rest of the Input.
	pub(crate) cost: u32,

	/// # Mode.
	pub(crate) mode: Mode,

	/// # Match Length.
	///
	/// This is only meaningful for copies.
	pub(crate) len: u16,
}

impl CostEntry {
	/// # End of Input.
	///
	/// Nothing left costs nothing.
	const END: Self = Self {
		cost: 0,
		mode: Mode::Literal,
		len: 0,
	};
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Plan.
///
/// The optimal (cheapest) parse for one block class.
pub(crate) struct Plan {
	/// # Block Class.
	class: BlockClass,

	/// # Entries.
	///
	/// One per input position, plus a sentinel at the end.
	entries: Vec<CostEntry>,
}

impl Plan {
	#[expect(clippy::cast_possible_truncation, reason = "Match lengths are capped at u16::MAX.")]
	/// # New.
	///
	/// Work backwards through the input, choosing the cheapest encoding at
	/// each position given the (already-known) cost of everything after.
	///
	/// Ties go to literals, then short copies, then long ones. Lengths are
	/// tried longest-first, so the longest of equally-cheap copies wins.
	pub(crate) fn new(meta: &Metadata, class: BlockClass) -> Self {
		debug_assert!(class != BlockClass::C0, "C0 cannot be planned.");

		let len = meta.len();
		let long_cost = COPY_COST + u32::from(class.extra_bits());
		let mut entries = vec![CostEntry::END; len + 1];

		for i in (0..len).rev() {
			let mut best = CostEntry {
				cost: LITERAL_COST + entries[i + 1].cost,
				mode: Mode::Literal,
				len: 0,
			};

			for (mode, base, max) in [
				(Mode::ShortCopy, COPY_COST, meta[i].best_len(BlockClass::C0)),
				(Mode::LongCopy, long_cost, meta[i].best_len(class)),
			] {
				for j in (2..=max).rev() {
					let cost = base + match_cost(j) + entries[i + j].cost;
					if cost < best.cost {
						best = CostEntry { cost, mode, len: j as u16 };
					}
				}
			}

			entries[i] = best;
		}

		Self { class, entries }
	}

	#[inline]
	/// # Block Class.
	pub(crate) const fn class(&self) -> BlockClass { self.class }

	#[inline]
	/// # Total Cost.
	///
	/// Return the cost in bits of the whole input.
	pub(crate) fn total(&self) -> u32 { self.entries[0].cost }

	#[inline]
	/// # Entry.
	pub(crate) fn entry(&self, idx: usize) -> CostEntry { self.entries[idx] }
}



/// # Best Plan.
///
/// Plan each stream class and return the cheapest, preferring the lowest
/// class in case of a tie.
pub(crate) fn best_plan(meta: &Metadata) -> Plan {
	let plans: Vec<Plan> =
		if meta.len() < PARALLEL_THRESHOLD {
			BlockClass::PLANNED.into_iter().map(|c| Plan::new(meta, c)).collect()
		}
		else {
			thread::scope(|s| {
				let workers = BlockClass::PLANNED.map(|c| s.spawn(move || Plan::new(meta, c)));
				workers.into_iter()
					.map(|w| w.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
					.collect()
			})
		};

	plans.into_iter()
		.reduce(|best, next| if next.total() < best.total() { next } else { best })
		.unwrap_or_else(|| Plan::new(meta, BlockClass::C1))
}
