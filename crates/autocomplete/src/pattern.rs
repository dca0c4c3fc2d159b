//! Trigger followed by a caller pattern, anchored at the caret.
//!
//! Unlike [`find_trigger_match`](crate::find_trigger_match) the text after
//! the trigger is described by a regex, so `@[\w ]*` can span spaces. The
//! trigger must start the line or follow whitespace.

use caret_primitives::graphemes::grapheme_len;
use caret_primitives::{Range, TextModel, Unit};
use regex::Regex;
use tracing::debug;

use crate::error::{Result, compile};
use crate::search::{SearchOptions, SearchProvider};
use crate::suggest::{Autocomplete, Suggestions};
use crate::text::{collapsed_cursor, escape_pattern, text_in_range};

/// Text matched by a [`TriggerPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<P> {
	/// Range covering the trigger and the captured text, ending at the caret.
	pub range: Range<P>,
	/// Text captured by the caller pattern.
	pub captured: String,
}

/// A compiled `(?:^|\s)<trigger>(<pattern>)$` matcher.
#[derive(Debug, Clone)]
pub struct TriggerPattern {
	trigger: String,
	regex: Regex,
}

impl TriggerPattern {
	pub fn new(trigger: &str, pattern: &str) -> Result<Self> {
		let source = format!(r"(?:^|\s){}({pattern})$", escape_pattern(trigger));
		Ok(Self {
			trigger: trigger.to_string(),
			regex: compile(&source)?,
		})
	}

	/// Matches the text between the start of the caret's line and `at`.
	pub fn find<M: TextModel>(&self, model: &M, at: M::Point) -> Option<PatternMatch<M::Point>> {
		let line_start = model.line_start_before(at);
		let before = line_start.map(|start| model.range(start, at));
		let before_text = text_in_range(model, before.as_ref());
		if before_text.is_empty() {
			return None;
		}

		let captured = self.regex.captures(&before_text)?.get(1)?.as_str().to_string();
		let distance = grapheme_len(&captured) + grapheme_len(&self.trigger);
		let start = model.before(at, Unit::Character, distance)?;
		Some(PatternMatch {
			range: model.range(start, at),
			captured,
		})
	}
}

/// One-shot form of [`TriggerPattern::find`].
pub fn match_trigger_and_pattern<M: TextModel>(
	model: &M,
	at: M::Point,
	trigger: &str,
	pattern: &str,
) -> Result<Option<PatternMatch<M::Point>>> {
	Ok(TriggerPattern::new(trigger, pattern)?.find(model, at))
}

/// Searches the captured text of a [`TriggerPattern`] on every text change.
#[derive(Debug, Clone)]
pub struct PatternSearch<S> {
	pattern: TriggerPattern,
	max_suggestions: usize,
	search: S,
}

impl<S> PatternSearch<S> {
	pub fn new(trigger: &str, pattern: &str, max_suggestions: usize, search: S) -> Result<Self> {
		Ok(Self {
			pattern: TriggerPattern::new(trigger, pattern)?,
			max_suggestions,
			search,
		})
	}
}

impl<M, D, S> Autocomplete<M, D> for PatternSearch<S>
where
	M: TextModel,
	S: SearchProvider<M::Point, D>,
{
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		let cursor = collapsed_cursor(model)?;
		let found = self.pattern.find(model, cursor)?;
		let mut items = self.search.search(&found.captured, self.max_suggestions, SearchOptions::default());
		items.truncate(self.max_suggestions);
		debug!(range = ?found.range, query = %found.captured, items = items.len(), "pattern matched");
		if items.is_empty() {
			return None;
		}
		Some(Suggestions {
			target_range: found.range,
			items,
		})
	}
}

#[cfg(test)]
mod tests {
	use caret_primitives::RopeDocument;

	use super::*;
	use crate::error::Error;
	use crate::search::PrefixSearch;

	#[test]
	fn captures_multi_word_mentions() {
		let doc = RopeDocument::with_caret_at_end("ping @Ada Lo");
		let found = match_trigger_and_pattern(&doc, 12, "@", r"[\w ]*").unwrap().unwrap();
		assert_eq!(found.captured, "Ada Lo");
		assert_eq!(found.range, Range::new(5, 12));
	}

	#[test]
	fn trigger_must_follow_whitespace_or_line_start() {
		let pattern = TriggerPattern::new("@", r"\w*").unwrap();
		let doc = RopeDocument::with_caret_at_end("mail@host");
		assert_eq!(pattern.find(&doc, 9), None);

		let doc = RopeDocument::with_caret_at_end("x\n@ho");
		assert_eq!(pattern.find(&doc, 5).unwrap().range, Range::new(2, 5));
	}

	#[test]
	fn escapes_trigger_metacharacters() {
		let pattern = TriggerPattern::new("$", r"\w*").unwrap();
		let doc = RopeDocument::with_caret_at_end("cost $us");
		assert_eq!(pattern.find(&doc, 8).unwrap().captured, "us");
	}

	#[test]
	fn empty_line_never_matches() {
		let pattern = TriggerPattern::new("@", r"\w*").unwrap();
		let doc = RopeDocument::with_caret_at_end("abc\n");
		assert_eq!(pattern.find(&doc, 4), None);
	}

	#[test]
	fn invalid_pattern_is_reported() {
		let err = TriggerPattern::new("@", "(").unwrap_err();
		assert!(matches!(err, Error::InvalidPattern { .. }));
	}

	#[test]
	fn pattern_search_opens_over_capture() {
		let mut algo = PatternSearch::new("#", r"[a-z]*", 5, PrefixSearch::new(["rust", "ruby"])).unwrap();
		let doc = RopeDocument::with_caret_at_end("tags #ru");
		let found = algo.suggest(&doc).unwrap();
		assert_eq!(found.target_range, Range::new(5, 8));
		assert_eq!(found.items.len(), 2);
	}

	#[test]
	fn pattern_search_needs_a_caret() {
		let mut algo = PatternSearch::new("#", r"[a-z]*", 5, PrefixSearch::new(["rust", "ruby"])).unwrap();
		let mut doc = RopeDocument::new("tags #ru");
		assert_eq!(algo.suggest(&doc), None);

		doc.set_selection(Some(Range::new(5, 8))).unwrap();
		assert_eq!(algo.suggest(&doc), None);

		doc.set_caret(8).unwrap();
		assert!(algo.suggest(&doc).is_some());
	}
}
