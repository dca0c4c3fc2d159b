//! Read-only helpers over the host text model.

use caret_primitives::{Range, TextModel, Unit};
pub use caret_primitives::selection::{caret, is_collapsed};
pub use regex::escape as escape_pattern;

/// Returns the text covered by `range`, or `""` when there is no range.
pub fn text_in_range<M: TextModel>(model: &M, range: Option<&Range<M::Point>>) -> String {
	range.map(|range| model.text(range)).unwrap_or_default()
}

/// Returns the caret when the host selection is collapsed.
pub fn collapsed_cursor<M: TextModel>(model: &M) -> Option<M::Point> {
	caret(model.selection().as_ref())
}

/// Returns whether the character after `point` is whitespace or missing.
pub fn is_point_at_word_end<M: TextModel>(model: &M, point: M::Point) -> bool {
	let Some(after) = model.after(point, Unit::Character, 1) else {
		return true;
	};
	let next = model.text(&model.range(point, after));
	next.chars().next().is_none_or(char::is_whitespace)
}

/// Returns whether `inner` lies within `outer`, edges inclusive.
pub fn is_range_contained<P: Copy + Ord>(outer: &Range<P>, inner: &Range<P>) -> bool {
	outer.contains_range(inner)
}

/// Returns whether `point` is the first position of its line.
pub fn is_point_at_line_start<M: TextModel>(model: &M, point: M::Point) -> bool {
	model.line_start_before(point) == Some(point)
}
