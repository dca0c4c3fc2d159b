//! Rope-backed reference host.
//!
//! [`RopeDocument`] implements [`TextModel`] and [`Editable`] over a
//! [`ropey::Rope`] with a single optional selection. Character steps move by
//! grapheme cluster; line steps move between line starts.

use ropey::Rope;
use thiserror::Error;

use crate::graphemes::{next_grapheme_boundary, prev_grapheme_boundary};
use crate::model::{Editable, TextModel, Unit};
use crate::range::{CharIdx, Range};

/// Errors raised when a caller hands the document an invalid position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
	#[error("position {pos} is out of bounds for a document of {len} chars")]
	OutOfBounds { pos: CharIdx, len: usize },
}

/// A plain-text document with one selection.
#[derive(Debug, Clone, Default)]
pub struct RopeDocument {
	rope: Rope,
	selection: Option<Range>,
}

impl RopeDocument {
	/// Creates an unfocused document.
	pub fn new(text: &str) -> Self {
		Self {
			rope: Rope::from_str(text),
			selection: None,
		}
	}

	/// Creates a document with the caret after the last character.
	pub fn with_caret_at_end(text: &str) -> Self {
		let mut doc = Self::new(text);
		doc.selection = Some(Range::point(doc.len_chars()));
		doc
	}

	pub fn rope(&self) -> &Rope {
		&self.rope
	}

	pub fn len_chars(&self) -> usize {
		self.rope.len_chars()
	}

	/// Replaces the selection, validating both ends.
	pub fn set_selection(&mut self, selection: Option<Range>) -> Result<(), DocumentError> {
		if let Some(range) = selection {
			self.check(range.anchor)?;
			self.check(range.focus)?;
		}
		self.selection = selection;
		Ok(())
	}

	/// Collapses the selection to a caret at `pos`.
	pub fn set_caret(&mut self, pos: CharIdx) -> Result<(), DocumentError> {
		self.set_selection(Some(Range::point(pos)))
	}

	/// Types `text` over the current selection, as a keystroke would.
	///
	/// Without a selection the text is appended and the caret placed after it.
	pub fn type_text(&mut self, text: &str) {
		let range = self.selection.unwrap_or_else(|| Range::point(self.len_chars()));
		self.replace(&range, text);
	}

	fn check(&self, pos: CharIdx) -> Result<(), DocumentError> {
		let len = self.len_chars();
		if pos > len {
			return Err(DocumentError::OutOfBounds { pos, len });
		}
		Ok(())
	}

	fn line_start(&self, pos: CharIdx) -> CharIdx {
		let pos = pos.min(self.len_chars());
		self.rope.line_to_char(self.rope.char_to_line(pos))
	}
}

impl TextModel for RopeDocument {
	type Point = CharIdx;

	fn before(&self, point: CharIdx, unit: Unit, distance: usize) -> Option<CharIdx> {
		let slice = self.rope.slice(..);
		let mut pos = point.min(self.len_chars());
		for _ in 0..distance {
			if pos == 0 {
				return None;
			}
			pos = match unit {
				Unit::Character => prev_grapheme_boundary(slice, pos),
				Unit::Line => {
					let start = self.line_start(pos);
					if start < pos {
						start
					} else {
						self.line_start(pos - 1)
					}
				}
			};
		}
		Some(pos)
	}

	fn after(&self, point: CharIdx, unit: Unit, distance: usize) -> Option<CharIdx> {
		let slice = self.rope.slice(..);
		let len = self.len_chars();
		let mut pos = point.min(len);
		for _ in 0..distance {
			if pos >= len {
				return None;
			}
			pos = match unit {
				Unit::Character => next_grapheme_boundary(slice, pos),
				Unit::Line => {
					let line = self.rope.char_to_line(pos);
					if line + 1 >= self.rope.len_lines() {
						return None;
					}
					self.rope.line_to_char(line + 1)
				}
			};
		}
		Some(pos)
	}

	fn text(&self, range: &Range) -> String {
		let range = range.clamp(self.len_chars());
		self.rope.slice(range.start()..range.end()).to_string()
	}

	fn line_start_before(&self, point: CharIdx) -> Option<CharIdx> {
		Some(self.line_start(point))
	}

	fn selection(&self) -> Option<Range> {
		self.selection
	}
}

impl Editable for RopeDocument {
	fn replace(&mut self, range: &Range, text: &str) {
		let range = range.clamp(self.len_chars());
		let start = range.start();
		self.rope.remove(start..range.end());
		self.rope.insert(start, text);
		self.selection = Some(Range::point(start + text.chars().count()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn character_steps_stop_at_document_edges() {
		let doc = RopeDocument::new("ab");
		assert_eq!(doc.before(2, Unit::Character, 1), Some(1));
		assert_eq!(doc.before(2, Unit::Character, 2), Some(0));
		assert_eq!(doc.before(2, Unit::Character, 3), None);
		assert_eq!(doc.after(0, Unit::Character, 2), Some(2));
		assert_eq!(doc.after(2, Unit::Character, 1), None);
	}

	#[test]
	fn character_steps_cross_graphemes_whole() {
		let doc = RopeDocument::new("ae\u{301}b");
		assert_eq!(doc.before(3, Unit::Character, 1), Some(1));
		assert_eq!(doc.after(1, Unit::Character, 1), Some(3));
	}

	#[test]
	fn line_steps_move_between_line_starts() {
		let doc = RopeDocument::new("one\ntwo\nthree");
		assert_eq!(doc.before(6, Unit::Line, 1), Some(4));
		assert_eq!(doc.before(4, Unit::Line, 1), Some(0));
		assert_eq!(doc.before(0, Unit::Line, 1), None);
		assert_eq!(doc.after(1, Unit::Line, 1), Some(4));
		assert_eq!(doc.after(9, Unit::Line, 1), None);
	}

	#[test]
	fn line_start_before_includes_current_line() {
		let doc = RopeDocument::new("one\ntwo");
		assert_eq!(doc.line_start_before(6), Some(4));
		assert_eq!(doc.line_start_before(4), Some(4));
		assert_eq!(doc.line_start_before(2), Some(0));
	}

	#[test]
	fn text_is_ordered_and_clamped() {
		let doc = RopeDocument::new("hello");
		assert_eq!(doc.text(&Range::new(4, 1)), "ell");
		assert_eq!(doc.text(&Range::new(3, 99)), "lo");
	}

	#[test]
	fn replace_moves_caret_after_insertion() {
		let mut doc = RopeDocument::with_caret_at_end("hi /wo");
		doc.replace(&Range::new(3, 6), "world");
		assert_eq!(doc.rope().to_string(), "hi world");
		assert_eq!(doc.selection(), Some(Range::point(8)));
	}

	#[test]
	fn type_text_overwrites_selection() {
		let mut doc = RopeDocument::new("abc");
		doc.set_selection(Some(Range::new(1, 2))).unwrap();
		doc.type_text("XY");
		assert_eq!(doc.rope().to_string(), "aXYc");
		assert_eq!(doc.selection(), Some(Range::point(3)));
	}

	#[test]
	fn set_selection_rejects_out_of_bounds() {
		let mut doc = RopeDocument::new("abc");
		assert_eq!(doc.set_caret(4), Err(DocumentError::OutOfBounds { pos: 4, len: 3 }));
		assert_eq!(doc.selection(), None);
	}
}
