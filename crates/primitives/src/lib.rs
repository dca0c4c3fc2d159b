//! Host-facing primitives for the autocomplete core: ranges, selections, the
//! text model contract, key events, screen geometry, and a rope-backed
//! reference document.

/// Rope-backed reference host document.
pub mod document;
/// Screen geometry used for menu placement.
pub mod geometry;
/// Grapheme cluster boundary detection.
pub mod graphemes;
/// Key events delivered by the host.
pub mod key;
/// Host text model contract.
pub mod model;
/// Text range type generic over the host point.
pub mod range;
/// Selection helpers.
pub mod selection;

pub use document::{DocumentError, RopeDocument};
pub use geometry::{Position, Rect};
pub use key::{Key, KeyCode, KeyEvent, Modifiers};
pub use model::{Editable, TextModel, Unit};
pub use range::{CharIdx, Range};
pub use ropey::Rope;
