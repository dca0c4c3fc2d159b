//! The on-change contract shared by all matchers.

use caret_primitives::{Range, TextModel};

use crate::item::ComboboxItem;

/// Candidates for an open menu together with the range they replace.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions<P, D = ()> {
	pub target_range: Range<P>,
	pub items: Vec<ComboboxItem<P, D>>,
}

/// An autocomplete algorithm run on every text change.
///
/// `None` closes the menu. Implementations read the host but never mutate
/// it, and keep no state between calls beyond their configuration.
pub trait Autocomplete<M: TextModel, D = ()> {
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>>;
}

impl<M: TextModel, D, A: Autocomplete<M, D> + ?Sized> Autocomplete<M, D> for &mut A {
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		(**self).suggest(model)
	}
}

impl<M: TextModel, D, A: Autocomplete<M, D> + ?Sized> Autocomplete<M, D> for Box<A> {
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		(**self).suggest(model)
	}
}
