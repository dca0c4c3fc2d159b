//! Key events delivered by the host editor.

mod modifiers;

pub use modifiers::Modifiers;

/// Physical or logical key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Up,
	Down,
	Left,
	Right,
	Tab,
	Enter,
	Esc,
	Backspace,
	Home,
	End,
	PageUp,
	PageDown,
}

/// A key press: code plus held modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates a key with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates a plain character key.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c))
	}

	/// Returns a copy with the given modifiers.
	pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}

	/// Returns true if this is `code` pressed without any modifier.
	///
	/// `Shift+Down` is not `down`; bare hotkeys never match chorded presses.
	pub fn is_bare(&self, code: KeyCode) -> bool {
		self.code == code && self.modifiers.is_empty()
	}
}

impl From<KeyCode> for Key {
	fn from(code: KeyCode) -> Self {
		Self::new(code)
	}
}

/// A key press in flight through the host's handler chain.
///
/// Handlers that consume the press call [`prevent_default`] so the host
/// skips its own behavior (moving the caret, inserting a newline).
///
/// [`prevent_default`]: Self::prevent_default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
	key: Key,
	default_prevented: bool,
}

impl KeyEvent {
	pub fn new(key: impl Into<Key>) -> Self {
		Self {
			key: key.into(),
			default_prevented: false,
		}
	}

	pub fn key(&self) -> Key {
		self.key
	}

	/// Suppresses the host's default handling of this press.
	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented
	}
}
