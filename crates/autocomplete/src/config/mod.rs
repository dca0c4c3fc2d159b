//! TOML configuration for the autocomplete extension.
//!
//! ```toml
//! circular_navigation = true
//! max_visible = 10
//!
//! [placement]
//! offset_y = 1
//!
//! [matcher]
//! kind = "boundary"
//! pattern = '^|\s'
//! max_boundaries = 2
//! max_suggestions = 10
//! ```

use std::path::Path;

use caret_primitives::TextModel;
use serde::Deserialize;
use tracing::debug;

use crate::boundary::{BoundaryLimits, BoundarySearch};
use crate::error::{Error, Result};
use crate::menu::MenuOptions;
use crate::pattern::PatternSearch;
use crate::position::Placement;
use crate::search::SearchProvider;
use crate::suggest::{Autocomplete, Suggestions};
use crate::trigger::TriggerSearch;

/// Top-level autocomplete settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutocompleteConfig {
	/// Wrap past either end of the menu.
	pub circular_navigation: bool,
	/// Rows shown at once.
	pub max_visible: usize,
	pub placement: Placement,
	pub matcher: MatcherConfig,
}

impl Default for AutocompleteConfig {
	fn default() -> Self {
		let menu = MenuOptions::default();
		Self {
			circular_navigation: menu.circular_navigation,
			max_visible: menu.max_visible,
			placement: Placement::default(),
			matcher: MatcherConfig::default(),
		}
	}
}

impl AutocompleteConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
			path: path.to_path_buf(),
			source,
		})?;
		let config = Self::from_toml_str(&source)?;
		debug!(path = %path.display(), matcher = config.matcher.kind(), "loaded autocomplete config");
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.max_visible == 0 {
			return Err(Error::InvalidConfig("max_visible must be at least 1".into()));
		}
		self.matcher.validate()
	}

	pub fn menu_options(&self) -> MenuOptions {
		MenuOptions {
			circular_navigation: self.circular_navigation,
			max_visible: self.max_visible,
		}
	}
}

/// Which matcher runs on text changes, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum MatcherConfig {
	/// Single word after a trigger string.
	Trigger {
		#[serde(default = "default_trigger")]
		trigger: String,
		#[serde(default = "default_max_suggestions")]
		max_suggestions: usize,
	},
	/// Trigger followed by text matching `pattern`.
	Pattern {
		#[serde(default = "default_trigger")]
		trigger: String,
		pattern: String,
		#[serde(default = "default_max_suggestions")]
		max_suggestions: usize,
	},
	/// Windows starting after each of the last `max_boundaries` boundaries.
	Boundary {
		#[serde(default = "default_boundary_pattern")]
		pattern: String,
		#[serde(default = "default_max_boundaries")]
		max_boundaries: usize,
		#[serde(default)]
		farthest_first: bool,
		#[serde(default = "default_max_suggestions")]
		max_suggestions: usize,
	},
}

fn default_trigger() -> String {
	"/".to_string()
}

fn default_boundary_pattern() -> String {
	r"^|\s".to_string()
}

fn default_max_boundaries() -> usize {
	2
}

fn default_max_suggestions() -> usize {
	10
}

impl Default for MatcherConfig {
	fn default() -> Self {
		Self::Trigger {
			trigger: default_trigger(),
			max_suggestions: default_max_suggestions(),
		}
	}
}

impl MatcherConfig {
	/// The `kind` tag, for logging.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Trigger { .. } => "trigger",
			Self::Pattern { .. } => "pattern",
			Self::Boundary { .. } => "boundary",
		}
	}

	pub fn max_suggestions(&self) -> usize {
		match self {
			Self::Trigger { max_suggestions, .. } | Self::Pattern { max_suggestions, .. } | Self::Boundary { max_suggestions, .. } => {
				*max_suggestions
			}
		}
	}

	/// Checks budgets and triggers. Patterns are checked by [`Self::build`].
	pub fn validate(&self) -> Result<()> {
		if self.max_suggestions() == 0 {
			return Err(Error::InvalidConfig("max_suggestions must be at least 1".into()));
		}
		match self {
			Self::Trigger { trigger, .. } | Self::Pattern { trigger, .. } if trigger.is_empty() => {
				Err(Error::InvalidConfig("trigger must not be empty".into()))
			}
			Self::Boundary { max_boundaries: 0, .. } => Err(Error::InvalidConfig("max_boundaries must be at least 1".into())),
			_ => Ok(()),
		}
	}

	/// Builds the configured matcher around `search`.
	pub fn build<S>(&self, search: S) -> Result<Matcher<S>> {
		self.validate()?;
		let matcher = match self {
			Self::Trigger { trigger, max_suggestions } => Matcher::Trigger(TriggerSearch::new(trigger.as_str(), *max_suggestions, search)?),
			Self::Pattern {
				trigger,
				pattern,
				max_suggestions,
			} => Matcher::Pattern(PatternSearch::new(trigger, pattern, *max_suggestions, search)?),
			Self::Boundary {
				pattern,
				max_boundaries,
				farthest_first,
				max_suggestions,
			} => Matcher::Boundary(BoundarySearch::new(
				pattern,
				BoundaryLimits {
					max_boundaries: *max_boundaries,
					farthest_first: *farthest_first,
					max_suggestions: *max_suggestions,
				},
				search,
			)?),
		};
		Ok(matcher)
	}
}

/// A matcher chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum Matcher<S> {
	Trigger(TriggerSearch<S>),
	Pattern(PatternSearch<S>),
	Boundary(BoundarySearch<S>),
}

impl<M, D, S> Autocomplete<M, D> for Matcher<S>
where
	M: TextModel,
	S: SearchProvider<M::Point, D>,
{
	fn suggest(&mut self, model: &M) -> Option<Suggestions<M::Point, D>> {
		match self {
			Self::Trigger(matcher) => matcher.suggest(model),
			Self::Pattern(matcher) => matcher.suggest(model),
			Self::Boundary(matcher) => matcher.suggest(model),
		}
	}
}
