//! Search providers feeding candidates to the matchers.

use caret_primitives::Range;

use crate::item::ComboboxItem;

/// Extra context handed to a search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions<P> {
	/// Range the candidates would replace, when the matcher computes one per
	/// search window. Trigger searches leave it unset and rely on the menu's
	/// target range.
	pub target_range: Option<Range<P>>,
}

impl<P> Default for SearchOptions<P> {
	fn default() -> Self {
		Self { target_range: None }
	}
}

/// Capability contract for candidate providers.
///
/// Providers should return at most `max_suggestions` items; matchers
/// truncate anything beyond the budget.
pub trait SearchProvider<P, D = ()> {
	/// Returns candidates for `query`.
	fn search(&mut self, query: &str, max_suggestions: usize, options: SearchOptions<P>) -> Vec<ComboboxItem<P, D>>;
}

impl<P, D, S: SearchProvider<P, D> + ?Sized> SearchProvider<P, D> for &mut S {
	fn search(&mut self, query: &str, max_suggestions: usize, options: SearchOptions<P>) -> Vec<ComboboxItem<P, D>> {
		(**self).search(query, max_suggestions, options)
	}
}

/// Closure-backed provider adapter.
pub struct FnSearch<F> {
	f: F,
}

impl<F> FnSearch<F> {
	pub fn new(f: F) -> Self {
		Self { f }
	}
}

impl<P, D, F> SearchProvider<P, D> for FnSearch<F>
where
	F: FnMut(&str, usize, SearchOptions<P>) -> Vec<ComboboxItem<P, D>>,
{
	fn search(&mut self, query: &str, max_suggestions: usize, options: SearchOptions<P>) -> Vec<ComboboxItem<P, D>> {
		(self.f)(query, max_suggestions, options)
	}
}

/// Fixed word list matched by case-insensitive prefix.
///
/// Every returned item carries the search window from [`SearchOptions`] as
/// its own target range.
#[derive(Debug, Clone, Default)]
pub struct PrefixSearch {
	words: Vec<String>,
}

impl PrefixSearch {
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			words: words.into_iter().map(Into::into).collect(),
		}
	}
}

impl<P: Copy> SearchProvider<P> for PrefixSearch {
	fn search(&mut self, query: &str, max_suggestions: usize, options: SearchOptions<P>) -> Vec<ComboboxItem<P>> {
		let query = query.to_lowercase();
		self.words
			.iter()
			.filter(|word| word.to_lowercase().starts_with(&query))
			.take(max_suggestions)
			.map(|word| ComboboxItem::new(word.as_str(), word.as_str()).with_target_range(options.target_range))
			.collect()
	}
}
