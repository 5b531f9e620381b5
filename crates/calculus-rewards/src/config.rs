//! Calculator configuration

use crate::calculator::Calculator;
use crate::constants::DEFAULT_REWARD;
use calculus_core::{CalculusError, Result, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Delegate reward parameters, loadable from TOML
///
/// ```toml
/// voting_pool = 1000000000
/// profit_share = 10
/// # optional
/// reward = 200000000
/// division_precision = 20
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Total stake voting for the delegate (arktoshi)
    pub voting_pool: i64,

    /// Percent of the block reward shared with voters
    pub profit_share: i64,

    /// Forging reward per block (arktoshi)
    #[serde(default = "default_reward")]
    pub reward: i64,

    /// Fractional digits kept when dividing by the pool
    #[serde(default = "default_division_precision")]
    pub division_precision: u32,
}

fn default_reward() -> i64 {
    DEFAULT_REWARD
}

fn default_division_precision() -> u32 {
    DEFAULT_PRECISION
}

impl CalculatorConfig {
    /// Configuration with default reward and precision
    pub fn new(voting_pool: i64, profit_share: i64) -> Self {
        Self {
            voting_pool,
            profit_share,
            reward: default_reward(),
            division_precision: default_division_precision(),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CalculusError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CalculusError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    /// Render as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CalculusError::Config(e.to_string()))
    }

    /// Build the calculator described by this configuration
    pub fn into_calculator(self) -> Calculator {
        Calculator::from_config(&self)
    }
}

impl From<&Calculator> for CalculatorConfig {
    fn from(calculator: &Calculator) -> Self {
        Self {
            voting_pool: calculator.voting_pool(),
            profit_share: calculator.profit_share(),
            reward: calculator.reward(),
            division_precision: calculator.division_precision(),
        }
    }
}
