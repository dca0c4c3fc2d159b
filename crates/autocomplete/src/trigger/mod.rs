//! Single-word search after a trigger string, e.g. `/command`.
//!
//! The search text is the whitespace-delimited run ending at the caret, so
//! `/foo bar` never matches: multi-word triggers are not supported.

use caret_primitives::{Range, TextModel, Unit};
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::{SearchOptions, SearchProvider};
use crate::suggest::{Autocomplete, Suggestions};
use crate::text::collapsed_cursor;

/// A run of text starting with the trigger and ending at the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch<P> {
	/// Range covering the trigger and the text after it.
	pub range: Range<P>,
	/// The run without its leading character.
	pub text_after_trigger: String,
}

/// Finds the non-whitespace run ending at `at` and checks it starts with `trigger`.
///
/// The run extends backward until the previous character is whitespace, a
/// line break, or the document start. Returns `None` for an empty run or a
/// run that does not begin with `trigger`.
pub fn find_trigger_match<M: TextModel>(model: &M, at: M::Point, trigger: &str) -> Option<TriggerMatch<M::Point>> {
	let mut start = at;
	while let Some(prev) = model.before(start, Unit::Character, 1) {
		let ch = model.text(&model.range(prev, start));
		if ch.trim().is_empty() {
			break;
		}
		start = prev;
	}

	if start == at {
		return None;
	}

	let range = model.range(start, at);
	let text = model.text(&range);
	if !text.starts_with(trigger) {
		return None;
	}

	let mut chars = text.chars();
	chars.next();
	Some(TriggerMatch {
		range,
		text_after_trigger: chars.as_str().to_string(),
	})
}

/// Searches the text after a trigger on every text change.
#[derive(Debug, Clone)]
pub struct TriggerSearch<S> {
	trigger: String,
	max_suggestions: usize,
	search: S,
}

impl<S> TriggerSearch<S> {
	/// Creates the algorithm; the trigger must not be empty.
	pub fn new(trigger: impl Into<String>, max_suggestions: usize, search: S) -> Result<Self> {
		let trigger = trigger.into();
		if trigger.is_empty() {
			return Err(Error::InvalidConfig("trigger must not be empty".into()));
		}
		Ok(Self {
			trigger,
			max_suggestions,
			search,
		})
	}

	pub fn trigger(&self) -> &str {
		&self.trigger
	}
}

impl<M, D, S> Autocomplete<M, D> for TriggerSearch<S>
where
	M: TextModel,
	S: SearchProvider<M::Point, D>,
{
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		let cursor = collapsed_cursor(model)?;
		let found = find_trigger_match(model, cursor, &self.trigger)?;
		let mut items = self
			.search
			.search(&found.text_after_trigger, self.max_suggestions, SearchOptions::default());
		items.truncate(self.max_suggestions);
		debug!(range = ?found.range, query = %found.text_after_trigger, items = items.len(), "trigger matched");
		if items.is_empty() {
			return None;
		}
		Some(Suggestions {
			target_range: found.range,
			items,
		})
	}
}
