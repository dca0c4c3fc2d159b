//! Grapheme cluster stepping over rope slices.
//!
//! Boundaries are found with [`GraphemeCursor`] fed chunk by chunk, so a
//! cluster spanning two rope chunks is still stepped over whole.

use ropey::RopeSlice;
use unicode_segmentation::{GraphemeCursor, GraphemeIncomplete, UnicodeSegmentation};

use crate::range::CharIdx;

/// Returns the char index of the next grapheme cluster boundary after `char_idx`.
///
/// At or past the end, returns `text.len_chars()`.
pub fn next_grapheme_boundary(text: RopeSlice, char_idx: CharIdx) -> CharIdx {
	let len = text.len_chars();
	if char_idx >= len {
		return len;
	}

	let byte_idx = text.char_to_byte(char_idx);
	let (mut chunk, mut chunk_start, _, _) = text.chunk_at_byte(byte_idx);
	let mut cursor = GraphemeCursor::new(byte_idx, text.len_bytes(), true);
	loop {
		match cursor.next_boundary(chunk, chunk_start) {
			Ok(Some(next)) => return text.byte_to_char(next),
			Ok(None) => return len,
			Err(GraphemeIncomplete::NextChunk) => {
				chunk_start += chunk.len();
				chunk = text.chunk_at_byte(chunk_start).0;
			}
			Err(GraphemeIncomplete::PreContext(n)) => {
				let (context, context_start, _, _) = text.chunk_at_byte(n - 1);
				cursor.provide_context(context, context_start);
			}
			Err(_) => return len,
		}
	}
}

/// Returns the char index of the previous grapheme cluster boundary before `char_idx`.
///
/// At the start, returns 0.
pub fn prev_grapheme_boundary(text: RopeSlice, char_idx: CharIdx) -> CharIdx {
	if char_idx == 0 {
		return 0;
	}

	let byte_idx = text.char_to_byte(char_idx.min(text.len_chars()));
	let (mut chunk, mut chunk_start, _, _) = text.chunk_at_byte(byte_idx);
	let mut cursor = GraphemeCursor::new(byte_idx, text.len_bytes(), true);
	loop {
		match cursor.prev_boundary(chunk, chunk_start) {
			Ok(Some(prev)) => return text.byte_to_char(prev),
			Ok(None) => return 0,
			Err(GraphemeIncomplete::PrevChunk) => {
				let (prev_chunk, prev_start, _, _) = text.chunk_at_byte(chunk_start - 1);
				chunk = prev_chunk;
				chunk_start = prev_start;
			}
			Err(GraphemeIncomplete::PreContext(n)) => {
				let (context, context_start, _, _) = text.chunk_at_byte(n - 1);
				cursor.provide_context(context, context_start);
			}
			Err(_) => return 0,
		}
	}
}

/// Number of grapheme clusters in `s`.
///
/// This is the unit [`Unit::Character`](crate::Unit::Character) steps by, so
/// offsets measured in a string can be replayed as document steps.
pub fn grapheme_len(s: &str) -> usize {
	s.graphemes(true).count()
}

#[cfg(test)]
mod tests;
