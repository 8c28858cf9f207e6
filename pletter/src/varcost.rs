/*!
# Pletter: Var-Cost.

The table itself is generated by `build.rs`.
*/

include!(concat!(env!("OUT_DIR"), "/varcost.rs"));



#[inline]
/// # Var Cost.
///
/// Return the number of bits needed to encode a match of length `len`, i.e.
/// the variable-length value `len - 1`.
///
/// Matches are always at least two bytes, and never more than the input
/// allows.
pub(crate) const fn match_cost(len: usize) -> u32 { VAR_COST[len - 1] as u32 }
