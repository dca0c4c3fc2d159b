use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building matchers or loading configuration.
///
/// Nothing at event time produces an error: a text change that does not
/// match closes the menu and a stale commit is skipped.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid pattern '{pattern}': {source}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},
	#[error("failed to read {}: {source}", path.display())]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse autocomplete config: {0}")]
	ConfigParse(#[from] toml::de::Error),
	#[error("invalid autocomplete config: {0}")]
	InvalidConfig(String),
}

/// Result type for matcher construction and configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Compiles `pattern`, tagging failures with the offending source text.
pub(crate) fn compile(pattern: &str) -> Result<regex::Regex> {
	regex::Regex::new(pattern).map_err(|source| Error::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}
