//! Data-only view model for the menu container.
//!
//! Frontends draw [`MenuView`] rows; they never read [`MenuState`] directly.

use caret_primitives::Position;

use crate::item::{ComboboxItem, ItemType};
use crate::menu::MenuState;

/// Capability turning an item into whatever the frontend draws.
pub trait RenderItem<P, D = ()> {
	type Output;

	fn render(&self, item: &ComboboxItem<P, D>) -> Self::Output;
}

/// Renders the item's label.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelRenderer;

impl<P, D> RenderItem<P, D> for LabelRenderer {
	type Output = String;

	fn render(&self, item: &ComboboxItem<P, D>) -> String {
		item.text.clone()
	}
}

/// One visible row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow<O> {
	/// Index into the full candidate list, as passed to
	/// [`AutocompleteExtension::select_item`](crate::AutocompleteExtension::select_item).
	pub index: usize,
	pub key: String,
	pub content: O,
	pub highlighted: bool,
	pub item_type: ItemType,
	pub disabled: bool,
}

/// The rows to draw and where to draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView<O> {
	/// `None` when positioning was skipped; the frontend picks a fallback.
	pub position: Option<Position>,
	pub rows: Vec<MenuRow<O>>,
}

impl<O> MenuView<O> {
	/// Builds the visible rows of an open menu.
	pub fn build<P, D, R>(menu: &MenuState<P, D>, renderer: &R, position: Option<Position>) -> Option<Self>
	where
		P: Copy,
		R: RenderItem<P, D, Output = O> + ?Sized,
	{
		if !menu.is_open() {
			return None;
		}

		let visible = menu.visible_range();
		let highlighted = menu.item_index();
		let rows = menu.items()[visible.clone()]
			.iter()
			.zip(visible)
			.map(|(item, index)| MenuRow {
				index,
				key: item.key.clone(),
				content: renderer.render(item),
				highlighted: index == highlighted,
				item_type: item.item_type,
				disabled: item.disabled,
			})
			.collect();

		Some(Self { position, rows })
	}
}
