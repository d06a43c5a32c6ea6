//! Configuration system for TeamForge.
//!
//! Load engine configuration from TOML or YAML to tune scoring and search
//! budgets without code changes. Every field has a default, so an empty
//! document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use teamforge_config::{AffinityStrategyType, EngineConfig};
//!
//! let config = EngineConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [affinity]
//!     strategy = "utilitarian"
//!     jitter = false
//!
//!     [role_balance]
//!     move_budget = 80
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.affinity.strategy, AffinityStrategyType::Utilitarian);
//! assert_eq!(config.role_balance.move_budget, 80);
//! assert_eq!(config.role_balance_with_rating.move_budget, 10);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use teamforge_config::EngineConfig;
//!
//! let config = EngineConfig::load("teamforge.toml").unwrap_or_default();
//! assert_eq!(config.epsilon, 1e-5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Random seed for reproducible suggestions.
    pub random_seed: Option<u64>,

    /// Floor keeping logarithms finite.
    pub epsilon: f64,

    /// Affinity matcher settings.
    pub affinity: AffinityConfig,

    /// Role balance matcher settings.
    pub role_balance: LocalSearchConfig,

    /// Rated role balance matcher settings.
    pub role_balance_with_rating: LocalSearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            epsilon: 1e-5,
            affinity: AffinityConfig::default(),
            role_balance: LocalSearchConfig::with_budget(50),
            role_balance_with_rating: LocalSearchConfig::with_budget(10),
        }
    }
}

impl EngineConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "epsilon must be a positive number, got {}",
                self.epsilon
            )));
        }
        for (name, search) in [
            ("role_balance", &self.role_balance),
            ("role_balance_with_rating", &self.role_balance_with_rating),
        ] {
            if search.move_budget == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name}.move_budget must be at least 1"
                )));
            }
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the logarithm floor.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the affinity strategy.
    pub fn with_affinity_strategy(mut self, strategy: AffinityStrategyType) -> Self {
        self.affinity.strategy = strategy;
        self
    }

    /// Enables or disables jitter for every matcher.
    pub fn with_jitter(mut self, enabled: bool) -> Self {
        self.affinity.jitter = enabled;
        self.role_balance.jitter = enabled;
        self.role_balance_with_rating.jitter = enabled;
        self
    }
}

/// Affinity strategy types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AffinityStrategyType {
    /// Sum of log happiness.
    #[default]
    Fair,

    /// Sum of happiness.
    Utilitarian,
}

/// Affinity matcher configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AffinityConfig {
    /// How team happiness totals combine.
    pub strategy: AffinityStrategyType,

    /// Whether to add tie-breaking noise to scores.
    pub jitter: bool,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            strategy: AffinityStrategyType::Fair,
            jitter: true,
        }
    }
}

/// Local search configuration for the role matchers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LocalSearchConfig {
    /// Maximum node expansions per run.
    pub move_budget: u64,

    /// Whether to add tie-breaking noise to scores.
    pub jitter: bool,
}

impl LocalSearchConfig {
    /// Creates a config with the given budget and jitter off.
    pub fn with_budget(move_budget: u64) -> Self {
        Self {
            move_budget,
            jitter: false,
        }
    }
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self::with_budget(50)
    }
}
