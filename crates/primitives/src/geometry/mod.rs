//! Screen geometry in host cell coordinates.
//!
//! Origin is the top-left corner; x grows right, y grows down.

/// A screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
	pub x: u16,
	pub y: u16,
}

impl Position {
	pub const fn new(x: u16, y: u16) -> Self {
		Self { x, y }
	}

	/// Shifts the position, saturating at the coordinate bounds.
	pub fn offset(self, dx: i32, dy: i32) -> Self {
		Self {
			x: saturating_shift(self.x, dx),
			y: saturating_shift(self.y, dy),
		}
	}
}

/// A screen rectangle, such as the box a host draws a text range in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	pub x: u16,
	pub y: u16,
	pub width: u16,
	pub height: u16,
}

impl Rect {
	/// Creates a rectangle, clamping the size so the far edges fit in `u16`.
	pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
		Self {
			x,
			y,
			width: width.min(u16::MAX - x),
			height: height.min(u16::MAX - y),
		}
	}

	pub fn top_left(&self) -> Position {
		Position::new(self.x, self.y)
	}
}

fn saturating_shift(v: u16, delta: i32) -> u16 {
	(i32::from(v) + delta).clamp(0, i32::from(u16::MAX)) as u16
}
