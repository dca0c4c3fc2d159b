//! Multi-window search anchored at word boundaries.
//!
//! Each boundary found between the line start and the caret opens a search
//! window running from just after the boundary to the caret. With
//! `^|\s` over `find the fo` the windows are `fo`, `the fo` and
//! `find the fo`. Windows share one suggestion budget, so compound phrases
//! and single words can both contribute candidates.

use caret_primitives::graphemes::grapheme_len;
use caret_primitives::{Range, TextModel, Unit};
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Error, Result, compile};
use crate::item::ComboboxItem;
use crate::search::{SearchOptions, SearchProvider};
use crate::suggest::{Autocomplete, Suggestions};
use crate::text::{collapsed_cursor, text_in_range};

/// Limits for one boundary scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryLimits {
	/// Number of boundaries kept, counted back from the caret.
	pub max_boundaries: usize,
	/// Search the widest window first instead of the narrowest.
	pub farthest_first: bool,
	/// Total items accumulated across all windows.
	pub max_suggestions: usize,
}

/// A boundary occurrence in the text before the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
	/// Offset of the match in the line, in characters.
	pub index: usize,
	/// The matched boundary text.
	pub text: String,
}

impl Boundary {
	/// Character offset just past the boundary, where its search window starts.
	pub fn window_offset(&self) -> usize {
		self.index + grapheme_len(&self.text)
	}
}

/// Returns every match of `boundary` in `text`, in order.
///
/// Empty matches are recorded too; iteration moves past them instead of
/// matching the same position forever.
pub fn find_boundaries(text: &str, boundary: &Regex) -> Vec<Boundary> {
	boundary
		.find_iter(text)
		.map(|m| Boundary {
			index: grapheme_len(&text[..m.start()]),
			text: m.as_str().to_string(),
		})
		.collect()
}

/// Result of a boundary scan with at least one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryMatch<P, D = ()> {
	/// Window of the first boundary searched.
	pub target_range: Range<P>,
	pub items: Vec<ComboboxItem<P, D>>,
}

/// Scans the caret's line for boundaries and searches each window.
///
/// Keeps the last `max_boundaries` boundaries, orders them per
/// `farthest_first`, and calls `search` once per window with the remaining
/// budget and the window as `target_range`. Stops as soon as the budget is
/// spent. Returns `None` when no window produced an item.
pub fn find_boundary_matches<M, D, S>(
	model: &M,
	cursor: M::Point,
	boundary: &Regex,
	limits: BoundaryLimits,
	search: &mut S,
) -> Option<BoundaryMatch<M::Point, D>>
where
	M: TextModel,
	S: SearchProvider<M::Point, D> + ?Sized,
{
	let line_start = model.line_start_before(cursor).unwrap_or(cursor);
	let before_text = text_in_range(model, Some(&model.range(line_start, cursor)));

	let mut boundaries = find_boundaries(&before_text, boundary);
	let keep_from = boundaries.len().saturating_sub(limits.max_boundaries);
	boundaries.drain(..keep_from);
	if !limits.farthest_first {
		boundaries.reverse();
	}
	trace!(line = %before_text, boundaries = boundaries.len(), "boundary scan");

	let mut items: Vec<ComboboxItem<M::Point, D>> = Vec::new();
	let mut target_range = None;
	for found in &boundaries {
		let remaining = limits.max_suggestions.saturating_sub(items.len());
		if remaining == 0 {
			break;
		}

		let offset = found.window_offset();
		let search_start = if offset == 0 {
			Some(line_start)
		} else {
			model.after(line_start, Unit::Character, offset)
		};
		let Some(search_start) = search_start else {
			continue;
		};

		let window = model.range(search_start, cursor);
		let query = model.text(&window);
		if target_range.is_none() {
			target_range = Some(window);
		}

		let mut found_items = search.search(
			&query,
			remaining,
			SearchOptions {
				target_range: Some(window),
			},
		);
		found_items.truncate(remaining);
		trace!(query = %query, items = found_items.len(), "boundary window searched");
		items.extend(found_items);
	}

	let target_range = target_range?;
	if items.is_empty() {
		return None;
	}
	debug!(range = ?target_range, items = items.len(), "boundary matched");
	Some(BoundaryMatch { target_range, items })
}

/// Searches word-boundary windows on every text change.
#[derive(Debug, Clone)]
pub struct BoundarySearch<S> {
	boundary: Regex,
	limits: BoundaryLimits,
	search: S,
}

impl<S> BoundarySearch<S> {
	/// Compiles `pattern`; at least one boundary must be kept.
	pub fn new(pattern: &str, limits: BoundaryLimits, search: S) -> Result<Self> {
		if limits.max_boundaries == 0 {
			return Err(Error::InvalidConfig("max_boundaries must be at least 1".into()));
		}
		Ok(Self {
			boundary: compile(pattern)?,
			limits,
			search,
		})
	}

	pub fn limits(&self) -> BoundaryLimits {
		self.limits
	}
}

impl<M, D, S> Autocomplete<M, D> for BoundarySearch<S>
where
	M: TextModel,
	S: SearchProvider<M::Point, D>,
{
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		let cursor = collapsed_cursor(model)?;
		let found = find_boundary_matches(model, cursor, &self.boundary, self.limits, &mut self.search)?;
		Some(Suggestions {
			target_range: found.target_range,
			items: found.items,
		})
	}
}
