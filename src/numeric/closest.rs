//! Sorted-array nearest-neighbor search.
//!
//! Implemented as a binary search for the insertion point followed by a
//! single neighbor comparison. A naive recursive halve-and-compare can end
//! up preferring the higher-indexed neighbor on an exact tie once the
//! recursion nests more than one level deep; this guarantees the
//! lower-index tie-break across the whole array instead.

use crate::error::ClosestSearchError;

/// Find the entry in a non-empty ascending-sorted `array` closest to `target`.
///
/// Returns the index and value minimizing `|array[i] - target|`, with ties
/// broken toward the lower index. Fails with [`ClosestSearchError::EmptyArray`]
/// if `array` is empty.
pub fn closest_sorted_array_search(
	array: &[f64],
	target: f64,
) -> Result<(usize, f64), ClosestSearchError> {
	if array.is_empty() {
		return Err(ClosestSearchError::EmptyArray);
	}
	if array.len() == 1 {
		return Ok((0, array[0]));
	}

	// first index whose value is >= target
	let at_or_after = array.partition_point(|&v| v < target);

	if at_or_after == 0 {
		return Ok((0, array[0]));
	}
	if at_or_after == array.len() {
		let last = array.len() - 1;
		return Ok((last, array[last]));
	}

	let (lo, hi) = (at_or_after - 1, at_or_after);
	let (lo_val, hi_val) = (array[lo], array[hi]);
	if (target - lo_val).abs() <= (hi_val - target).abs() {
		Ok((lo, lo_val))
	} else {
		Ok((hi, hi_val))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn basic_search() {
		let a: Vec<f64> = (1..=10).map(|x| x as f64).collect();
		assert_eq!(closest_sorted_array_search(&a, 3.3).unwrap(), (2, 3.0));
	}

	#[test]
	fn singleton() {
		let a = [1.0];
		assert_eq!(closest_sorted_array_search(&a, 5.0).unwrap(), (0, 1.0));
	}

	#[test]
	fn empty_fails() {
		assert_eq!(
			closest_sorted_array_search(&[], 1.0).unwrap_err(),
			ClosestSearchError::EmptyArray
		);
	}

	#[test]
	fn ties_break_low() {
		let a = [1.0, 2.0, 3.0, 4.0];
		// 2.5 is equidistant from 2.0 (index 1) and 3.0 (index 2)
		assert_eq!(closest_sorted_array_search(&a, 2.5).unwrap(), (1, 2.0));
	}

	#[test]
	fn exact_hit() {
		let a: Vec<f64> = (0..100).map(|x| x as f64 * 0.5).collect();
		assert_eq!(closest_sorted_array_search(&a, 12.5).unwrap(), (25, 12.5));
	}

	#[test]
	fn out_of_range_clamps_to_ends() {
		let a = [10.0, 20.0, 30.0];
		assert_eq!(closest_sorted_array_search(&a, -5.0).unwrap(), (0, 10.0));
		assert_eq!(closest_sorted_array_search(&a, 500.0).unwrap(), (2, 30.0));
	}
}
