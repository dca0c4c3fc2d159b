//! Selection menu state machine.
//!
//! The menu is closed while it has no target range and open otherwise. Every
//! transition goes through a named method: [`MenuState::open`] on a match,
//! [`MenuState::move_highlight`] on arrow keys, [`MenuState::take_commit`] /
//! [`MenuState::take_commit_at`] on selection and [`MenuState::close`] on
//! cancel. Committing always closes, whether or not a commit was produced.

use caret_primitives::{CharIdx, Range};
use serde::Deserialize;
use tracing::trace;

use crate::item::ComboboxItem;
use crate::navigation::next_wrapping_index;

/// Navigation and viewport settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuOptions {
	/// Wrap past either end of the list.
	pub circular_navigation: bool,
	/// Rows shown at once; the highlight is kept inside this window.
	pub max_visible: usize,
}

impl MenuOptions {
	pub const DEFAULT_MAX_VISIBLE: usize = 10;
}

impl Default for MenuOptions {
	fn default() -> Self {
		Self {
			circular_navigation: true,
			max_visible: Self::DEFAULT_MAX_VISIBLE,
		}
	}
}

/// An item chosen for insertion, with the range it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Commit<P, D = ()> {
	pub item: ComboboxItem<P, D>,
	/// The item's own target range if it has one, else the menu's.
	pub target_range: Range<P>,
}

/// State for the selection menu.
#[derive(Debug, Clone)]
pub struct MenuState<P = CharIdx, D = ()> {
	items: Vec<ComboboxItem<P, D>>,
	item_index: usize,
	target_range: Option<Range<P>>,
	scroll_offset: usize,
	options: MenuOptions,
}

impl<P, D> Default for MenuState<P, D> {
	fn default() -> Self {
		Self::new(MenuOptions::default())
	}
}

impl<P, D> MenuState<P, D> {
	/// Creates a closed menu. A `max_visible` of zero is raised to one row.
	pub fn new(options: MenuOptions) -> Self {
		Self {
			items: Vec::new(),
			item_index: 0,
			target_range: None,
			scroll_offset: 0,
			options: MenuOptions {
				max_visible: options.max_visible.max(1),
				..options
			},
		}
	}
}

impl<P: Copy, D> MenuState<P, D> {
	pub fn options(&self) -> MenuOptions {
		self.options
	}

	pub fn is_open(&self) -> bool {
		self.target_range.is_some()
	}

	pub fn items(&self) -> &[ComboboxItem<P, D>] {
		&self.items
	}

	pub fn item_index(&self) -> usize {
		self.item_index
	}

	pub fn target_range(&self) -> Option<&Range<P>> {
		self.target_range.as_ref()
	}

	/// The highlighted item while open.
	pub fn highlighted(&self) -> Option<&ComboboxItem<P, D>> {
		if !self.is_open() {
			return None;
		}
		self.items.get(self.item_index)
	}

	pub fn scroll_offset(&self) -> usize {
		self.scroll_offset
	}

	/// Returns the range of visible item indices (start..end).
	pub fn visible_range(&self) -> std::ops::Range<usize> {
		let end = (self.scroll_offset + self.options.max_visible).min(self.items.len());
		self.scroll_offset.min(end)..end
	}

	/// Opens the menu, replacing any previous candidates.
	///
	/// The highlight starts on the first enabled item, or index 0 when every
	/// item is disabled.
	pub fn open(&mut self, target_range: Range<P>, items: Vec<ComboboxItem<P, D>>) {
		self.item_index = items.iter().position(|item| !item.disabled).unwrap_or(0);
		self.items = items;
		self.target_range = Some(target_range);
		self.scroll_offset = 0;
		self.ensure_highlight_visible();
		trace!(items = self.items.len(), index = self.item_index, "menu opened");
	}

	/// Closes the menu and drops its candidates.
	pub fn close(&mut self) {
		if self.is_open() {
			trace!("menu closed");
		}
		self.items.clear();
		self.item_index = 0;
		self.target_range = None;
		self.scroll_offset = 0;
	}

	/// Moves the highlight by `delta`, skipping disabled items.
	///
	/// Returns the new index. A closed menu or a list with nothing to land on
	/// leaves the index unchanged.
	pub fn move_highlight(&mut self, delta: isize) -> usize {
		if !self.is_open() {
			return self.item_index;
		}
		let items = &self.items;
		let next = next_wrapping_index(
			delta,
			Some(self.item_index),
			items.len(),
			|i| items[i].disabled,
			self.options.circular_navigation,
		);
		if let Some(next) = next {
			self.item_index = next;
			self.ensure_highlight_visible();
		}
		trace!(delta, index = self.item_index, "menu highlight moved");
		self.item_index
	}

	/// Highlights `index` directly, as a pointer hover does.
	///
	/// Returns false for out-of-range or disabled items.
	pub fn highlight(&mut self, index: usize) -> bool {
		match self.items.get(index) {
			Some(item) if self.is_open() && !item.disabled => {
				self.item_index = index;
				self.ensure_highlight_visible();
				true
			}
			_ => false,
		}
	}

	/// Commits the highlighted item and closes the menu.
	///
	/// Returns `None`, still closing, when there is no target range or no
	/// enabled highlighted item.
	pub fn take_commit(&mut self) -> Option<Commit<P, D>> {
		self.take_commit_at(self.item_index)
	}

	/// Commits the item at `index` (pointer selection) and closes the menu.
	///
	/// Rows scrolled out of [`Self::visible_range`] cannot be committed.
	pub fn take_commit_at(&mut self, index: usize) -> Option<Commit<P, D>> {
		let visible = self.visible_range().contains(&index);
		let target_range = self.target_range.take();
		let items = std::mem::take(&mut self.items);
		self.close();

		let target_range = target_range.filter(|_| visible)?;
		let item = items.into_iter().nth(index).filter(|item| !item.disabled)?;
		let target_range = item.target_range.unwrap_or(target_range);
		Some(Commit { item, target_range })
	}

	fn ensure_highlight_visible(&mut self) {
		let max_visible = self.options.max_visible;
		if self.item_index < self.scroll_offset {
			self.scroll_offset = self.item_index;
		}
		let visible_end = self.scroll_offset + max_visible;
		if self.item_index >= visible_end {
			self.scroll_offset = self.item_index + 1 - max_visible;
		}
	}
}
