use std::cmp::Ordering;

/// A position in a [`RopeDocument`], measured in characters (not bytes).
///
/// Hosts with richer coordinates (block path plus offset) supply their own
/// point type through [`TextModel::Point`].
///
/// [`RopeDocument`]: crate::RopeDocument
/// [`TextModel::Point`]: crate::TextModel::Point
pub type CharIdx = usize;

/// A text range defined by anchor and focus points.
///
/// The anchor is the fixed end, the focus moves while a selection is dragged.
/// A range whose ends are equal is collapsed, which is what a caret looks
/// like to the autocomplete core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<P = CharIdx> {
	/// The fixed end of the range.
	pub anchor: P,
	/// The moving end of the range.
	pub focus: P,
}

impl<P: Copy + Ord> Range<P> {
	/// Creates a new range from anchor to focus.
	pub fn new(anchor: P, focus: P) -> Self {
		Self { anchor, focus }
	}

	/// Creates a collapsed range (caret) at the given point.
	pub fn point(pos: P) -> Self {
		Self::new(pos, pos)
	}

	/// Returns the earlier and later ends, in document order.
	#[inline]
	pub fn edges(&self) -> (P, P) {
		match self.anchor.cmp(&self.focus) {
			Ordering::Greater => (self.focus, self.anchor),
			_ => (self.anchor, self.focus),
		}
	}

	/// Returns the earlier end.
	#[inline]
	pub fn start(&self) -> P {
		self.edges().0
	}

	/// Returns the later end.
	#[inline]
	pub fn end(&self) -> P {
		self.edges().1
	}

	/// Returns true if anchor equals focus.
	#[inline]
	pub fn is_collapsed(&self) -> bool {
		self.anchor == self.focus
	}

	/// Returns true if `pos` lies within the range, both ends inclusive.
	pub fn contains_point(&self, pos: P) -> bool {
		let (start, end) = self.edges();
		start <= pos && pos <= end
	}

	/// Returns true if `inner` lies entirely within this range.
	pub fn contains_range(&self, inner: &Range<P>) -> bool {
		let (outer_start, outer_end) = self.edges();
		let (inner_start, inner_end) = inner.edges();
		outer_start <= inner_start && outer_end >= inner_end
	}
}

impl Range<CharIdx> {
	/// Returns the length of the range in characters.
	#[inline]
	pub fn len(&self) -> usize {
		self.end() - self.start()
	}

	/// Returns true if the range covers no characters.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.is_collapsed()
	}

	/// Clamps both ends to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			focus: self.focus.min(max_char),
		}
	}
}

impl Default for Range<CharIdx> {
	fn default() -> Self {
		Self::point(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_basics() {
		let r = Range::new(5, 10);
		assert_eq!(r.start(), 5);
		assert_eq!(r.end(), 10);
		assert_eq!(r.len(), 5);
		assert!(!r.is_collapsed());
	}

	#[test]
	fn test_range_backward() {
		let r = Range::new(10, 5);
		assert_eq!(r.edges(), (5, 10));
		assert_eq!(r.len(), 5);
	}

	#[test]
	fn test_range_point() {
		let r = Range::point(5);
		assert!(r.is_collapsed());
		assert_eq!(r.anchor, 5);
		assert_eq!(r.focus, 5);
	}

	#[test]
	fn test_contains_point_is_inclusive() {
		let r = Range::new(10, 5);
		assert!(!r.contains_point(4));
		assert!(r.contains_point(5));
		assert!(r.contains_point(10));
		assert!(!r.contains_point(11));
	}

	#[test]
	fn test_contains_range() {
		let outer = Range::new(2, 12);
		assert!(outer.contains_range(&Range::new(2, 12)));
		assert!(outer.contains_range(&Range::new(8, 3)));
		assert!(!outer.contains_range(&Range::new(1, 5)));
		assert!(!outer.contains_range(&Range::new(5, 13)));
	}

	#[test]
	fn test_edges_order_tuple_points() {
		let r: Range<(usize, usize)> = Range::new((2, 0), (0, 7));
		assert_eq!(r.edges(), ((0, 7), (2, 0)));
		assert!(r.contains_point((1, 40)));
	}

	#[test]
	fn test_clamp() {
		assert_eq!(Range::new(4, 20).clamp(8), Range::new(4, 8));
	}
}
