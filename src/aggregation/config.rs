//! Aggregator configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading an aggregator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this shape.
    #[error("invalid aggregator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The wildcard selector token is blank.
    #[error("wildcard selector must not be empty")]
    EmptyWildcard,
}

/// Configuration for list aggregation.
///
/// # Examples
///
/// ```
/// use teamboard::aggregation::config::AggregatorConfig;
///
/// let config = AggregatorConfig::default();
/// assert_eq!(config.wildcard, "all");
///
/// let rupees = AggregatorConfig::rupees_only();
/// assert_eq!(rupees.currency_symbols, vec!["₹".to_owned()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregatorConfig {
    /// Selector token meaning "no restriction" for team, status, and
    /// priority criteria. Compared case-insensitively.
    pub wildcard: String,
    /// Currency prefixes stripped before parsing costs, tried in order.
    pub currency_symbols: Vec<String>,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            wildcard: "all".to_owned(),
            currency_symbols: ["₹", "Rs.", "Rs", "INR", "$"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl AggregatorConfig {
    /// Accepts only the rupee sign as a currency prefix.
    #[must_use]
    pub fn rupees_only() -> Self {
        Self {
            currency_symbols: vec!["₹".to_owned()],
            ..Default::default()
        }
    }

    /// Loads a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or the
    /// wildcard is blank.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        if config.wildcard.trim().is_empty() {
            return Err(ConfigError::EmptyWildcard);
        }
        Ok(config)
    }
}
