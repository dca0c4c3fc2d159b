//! Highlight movement for the selection menu.

/// Computes the next highlighted index for a move of `move_amount`.
///
/// An out-of-range `base_index` (or `None`) starts from just outside the list
/// in the direction of travel, so the first `down` lands on the first item and
/// the first `up` on the last. Disabled items are skipped in the direction of
/// travel; with `circular` set the scan restarts once from the opposite end.
/// When every candidate is disabled the base index is kept, or `None` if the
/// base was not a valid index. An empty list always yields `None`.
pub fn next_wrapping_index(
	move_amount: isize,
	base_index: Option<usize>,
	item_count: usize,
	is_disabled: impl Fn(usize) -> bool,
	circular: bool,
) -> Option<usize> {
	if item_count == 0 {
		return None;
	}

	let last = item_count as isize - 1;
	let base = match base_index {
		Some(index) if index < item_count => index as isize,
		_ if move_amount > 0 => -1,
		_ => last + 1,
	};

	let mut next = base + move_amount;
	if next < 0 {
		next = if circular { last } else { 0 };
	} else if next > last {
		next = if circular { 0 } else { last };
	}

	next_enabled_index(move_amount, next as usize, item_count, &is_disabled, circular)
		.or_else(|| (0..item_count as isize).contains(&base).then_some(base as usize))
}

/// Returns `index` when enabled, else the nearest enabled index onward in the
/// direction of `move_amount`.
fn next_enabled_index(
	move_amount: isize,
	index: usize,
	item_count: usize,
	is_disabled: &impl Fn(usize) -> bool,
	circular: bool,
) -> Option<usize> {
	if !is_disabled(index) {
		return Some(index);
	}

	let onward = if move_amount > 0 {
		(index + 1..item_count).find(|&i| !is_disabled(i))
	} else {
		(0..index).rev().find(|&i| !is_disabled(i))
	};

	onward.or_else(|| {
		if !circular {
			return None;
		}
		if move_amount > 0 {
			next_enabled_index(1, 0, item_count, is_disabled, false)
		} else {
			next_enabled_index(-1, item_count - 1, item_count, is_disabled, false)
		}
	})
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn disabled_at(mask: &[bool]) -> impl Fn(usize) -> bool + '_ {
		move |i| mask[i]
	}

	#[test]
	fn empty_list_has_no_index() {
		assert_eq!(next_wrapping_index(1, Some(0), 0, |_| false, true), None);
	}

	#[test]
	fn up_from_first_wraps_to_last() {
		assert_eq!(next_wrapping_index(-1, Some(0), 2, |_| false, true), Some(1));
	}

	#[test]
	fn down_from_last_wraps_to_first() {
		assert_eq!(next_wrapping_index(1, Some(2), 3, |_| false, true), Some(0));
	}

	#[test]
	fn without_wrapping_ends_clamp() {
		assert_eq!(next_wrapping_index(1, Some(2), 3, |_| false, false), Some(2));
		assert_eq!(next_wrapping_index(-1, Some(0), 3, |_| false, false), Some(0));
	}

	#[test]
	fn unset_base_enters_from_the_edge() {
		assert_eq!(next_wrapping_index(1, None, 3, |_| false, true), Some(0));
		assert_eq!(next_wrapping_index(-1, None, 3, |_| false, true), Some(2));
		assert_eq!(next_wrapping_index(1, Some(7), 3, |_| false, true), Some(0));
	}

	#[test]
	fn down_skips_disabled_items() {
		let mask = [true, false, true, false];
		assert_eq!(next_wrapping_index(1, Some(1), 4, disabled_at(&mask), true), Some(3));
	}

	#[test]
	fn disabled_tail_wraps_to_first_enabled() {
		let mask = [true, false, true, true];
		assert_eq!(next_wrapping_index(1, Some(1), 4, disabled_at(&mask), true), Some(1));
		let mask = [false, true, false, true];
		assert_eq!(next_wrapping_index(1, Some(2), 4, disabled_at(&mask), true), Some(0));
	}

	#[test]
	fn up_skips_disabled_and_wraps() {
		let mask = [true, false, true, false];
		assert_eq!(next_wrapping_index(-1, Some(1), 4, disabled_at(&mask), true), Some(3));
	}

	#[test]
	fn all_disabled_keeps_base() {
		let mask = [true, true, true];
		assert_eq!(next_wrapping_index(1, Some(1), 3, disabled_at(&mask), true), Some(1));
		assert_eq!(next_wrapping_index(1, None, 3, disabled_at(&mask), true), None);
	}

	proptest! {
		#[test]
		fn full_cycle_returns_to_start(count in 1usize..20, start in 0usize..20) {
			let start = start % count;
			let mut index = Some(start);
			for _ in 0..count {
				index = next_wrapping_index(1, index, count, |_| false, true);
			}
			prop_assert_eq!(index, Some(start));
			for _ in 0..count {
				index = next_wrapping_index(-1, index, count, |_| false, true);
			}
			prop_assert_eq!(index, Some(start));
		}

		#[test]
		fn never_lands_on_disabled(mask in proptest::collection::vec(any::<bool>(), 1..12), start in 0usize..12, down in any::<bool>()) {
			let count = mask.len();
			let start = start % count;
			let step = if down { 1 } else { -1 };
			let next = next_wrapping_index(step, Some(start), count, disabled_at(&mask), true);
			match next {
				Some(index) if index != start => prop_assert!(!mask[index]),
				Some(_) => {}
				None => prop_assert!(false, "valid base must never yield None"),
			}
			if mask.iter().any(|disabled| !disabled) {
				prop_assert!(!mask[next.unwrap()]);
			}
		}
	}
}
