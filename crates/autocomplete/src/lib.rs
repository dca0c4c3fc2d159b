//! Inline autocomplete for text editors.
//!
//! A matcher ([`TriggerSearch`], [`PatternSearch`] or [`BoundarySearch`])
//! runs on every text change and decides whether the caret sits in a
//! completable run. Its candidates open a keyboard-driven [`MenuState`]
//! owned by an [`AutocompleteExtension`], which commits the chosen item
//! through a [`CommitHandler`]. Hosts expose their document through
//! [`caret_primitives::TextModel`].

/// Word-boundary search windows.
pub mod boundary;
/// TOML configuration.
pub mod config;
mod error;
/// Host hooks and commit handlers.
pub mod extension;
/// Menu candidates.
pub mod item;
/// Selection menu state machine.
pub mod menu;
/// Wrapping index arithmetic for menu navigation.
pub mod navigation;
/// Trigger plus regex matching.
pub mod pattern;
/// Menu placement.
pub mod position;
/// Container view model.
pub mod render;
/// Candidate providers.
pub mod search;
/// The matcher contract.
pub mod suggest;
/// Text-model queries shared by the matchers.
pub mod text;
/// Single-word trigger search.
pub mod trigger;

pub use boundary::{BoundaryLimits, BoundaryMatch, BoundarySearch, find_boundary_matches};
pub use config::{AutocompleteConfig, Matcher, MatcherConfig};
pub use error::{Error, Result};
pub use extension::{AutocompleteExtension, CommitHandler, FnCommit, ReplaceWithText};
pub use item::{ComboboxItem, ItemType};
pub use menu::{Commit, MenuOptions, MenuState};
pub use navigation::next_wrapping_index;
pub use pattern::{PatternMatch, PatternSearch, TriggerPattern, match_trigger_and_pattern};
pub use position::{Placement, RangeRect, menu_position};
pub use render::{LabelRenderer, MenuRow, MenuView, RenderItem};
pub use search::{FnSearch, PrefixSearch, SearchOptions, SearchProvider};
pub use suggest::{Autocomplete, Suggestions};
pub use trigger::{TriggerMatch, TriggerSearch, find_trigger_match};
