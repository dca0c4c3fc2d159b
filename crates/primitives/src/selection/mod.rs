//! Host selection helpers.
//!
//! A host reports its selection as an optional range: `None` when the
//! document has no focus, a collapsed range for a caret, and anything else
//! for a drag selection.

use crate::range::Range;

/// Returns true iff the selection is present and both ends are equal.
pub fn is_collapsed<P: Copy + Ord>(selection: Option<&Range<P>>) -> bool {
	selection.is_some_and(Range::is_collapsed)
}

/// Returns the caret point when the selection is collapsed.
///
/// Drag selections and missing selections yield `None`; autocomplete never
/// runs for either.
pub fn caret<P: Copy + Ord>(selection: Option<&Range<P>>) -> Option<P> {
	selection.filter(|range| range.is_collapsed()).map(Range::start)
}

#[cfg(test)]
mod tests;
