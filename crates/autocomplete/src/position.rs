//! Screen placement for the selection menu.
//!
//! The menu is anchored below the top-left corner of the target range's
//! on-screen box, shifted into document coordinates by the host's scroll
//! offset.

use caret_primitives::{Position, Range, Rect};
use serde::Deserialize;

/// Host capability resolving a text range to its on-screen box.
pub trait RangeRect<P> {
	/// Returns `None` when the range is not currently laid out.
	fn rect_for_range(&self, range: &Range<P>) -> Option<Rect>;
}

impl<P, F> RangeRect<P> for F
where
	F: Fn(&Range<P>) -> Option<Rect>,
{
	fn rect_for_range(&self, range: &Range<P>) -> Option<Rect> {
		self(range)
	}
}

/// Offset of the menu from the range's top-left corner, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placement {
	pub offset_x: i32,
	pub offset_y: i32,
}

impl Default for Placement {
	fn default() -> Self {
		Self { offset_x: 0, offset_y: 1 }
	}
}

/// Computes where the menu's top-left corner goes.
///
/// Returns `None` while the menu has no target range or the host cannot
/// resolve one; positioning is then skipped and menu state is unaffected.
pub fn menu_position<P, H>(host: &H, target_range: Option<&Range<P>>, scroll: Position, placement: Placement) -> Option<Position>
where
	H: RangeRect<P> + ?Sized,
{
	let rect = host.rect_for_range(target_range?)?;
	let anchor = rect.top_left();
	Some(anchor.offset(
		i32::from(scroll.x) + placement.offset_x,
		i32::from(scroll.y) + placement.offset_y,
	))
}
