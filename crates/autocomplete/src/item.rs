//! Candidate entries shown in the selection menu.

use caret_primitives::{CharIdx, Range};
use serde::Deserialize;

/// Role of an entry in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
	/// A selectable completion.
	#[default]
	Normal,
	/// A visual separator.
	Divider,
	/// A group heading.
	Header,
}

/// A single completion candidate.
///
/// `key` must be unique within one candidate list. When `target_range` is
/// set it replaces the menu's target range for this item's commit, which is
/// how boundary searches commit over their own window.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboboxItem<P = CharIdx, D = ()> {
	/// Opaque identifier, unique within one candidate list.
	pub key: String,
	/// Label to render; also the text inserted by [`ReplaceWithText`].
	///
	/// [`ReplaceWithText`]: crate::ReplaceWithText
	pub text: String,
	pub item_type: ItemType,
	/// Disabled items are skipped by keyboard navigation and never committed.
	pub disabled: bool,
	/// Per-item override of the range replaced on commit.
	pub target_range: Option<Range<P>>,
	/// Caller payload, untouched by the core.
	pub data: D,
}

impl<P> ComboboxItem<P, ()> {
	/// Creates an enabled normal item without payload.
	pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			text: text.into(),
			item_type: ItemType::Normal,
			disabled: false,
			target_range: None,
			data: (),
		}
	}
}

impl<P, D> ComboboxItem<P, D> {
	/// Attaches a payload, replacing any existing one.
	pub fn with_data<E>(self, data: E) -> ComboboxItem<P, E> {
		ComboboxItem {
			key: self.key,
			text: self.text,
			item_type: self.item_type,
			disabled: self.disabled,
			target_range: self.target_range,
			data,
		}
	}

	pub fn with_type(mut self, item_type: ItemType) -> Self {
		self.item_type = item_type;
		self
	}

	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn with_target_range(mut self, target_range: Option<Range<P>>) -> Self {
		self.target_range = target_range;
		self
	}
}
