//! The host text model seen by the autocomplete core.
//!
//! The core never owns a buffer. Everything it knows about the document is
//! read through [`TextModel`], and the only write it ever issues goes through
//! [`Editable::replace`] when a completion is committed.

use std::fmt::Debug;

use crate::range::Range;

/// Granularity for stepping a point through the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
	/// One user-perceived character (grapheme cluster).
	#[default]
	Character,
	/// One line.
	Line,
}

/// Read access to a host document.
pub trait TextModel {
	/// Opaque, totally ordered document position.
	type Point: Copy + Ord + Debug;

	/// Steps `distance` units backward from `point`.
	///
	/// Returns `None` when the document start is passed before the full
	/// distance is covered.
	fn before(&self, point: Self::Point, unit: Unit, distance: usize) -> Option<Self::Point>;

	/// Steps `distance` units forward from `point`.
	///
	/// Returns `None` when the document end is passed before the full
	/// distance is covered.
	fn after(&self, point: Self::Point, unit: Unit, distance: usize) -> Option<Self::Point>;

	/// Builds a range between two points.
	fn range(&self, anchor: Self::Point, focus: Self::Point) -> Range<Self::Point> {
		Range::new(anchor, focus)
	}

	/// Returns the plain text covered by `range`.
	fn text(&self, range: &Range<Self::Point>) -> String;

	/// Returns the start of the line containing `point`.
	fn line_start_before(&self, point: Self::Point) -> Option<Self::Point>;

	/// Returns the host's current selection.
	fn selection(&self) -> Option<Range<Self::Point>>;
}

/// A [`TextModel`] that accepts the single commit-time mutation.
pub trait Editable: TextModel {
	/// Replaces the text covered by `range` with `text`.
	fn replace(&mut self, range: &Range<Self::Point>, text: &str);
}
