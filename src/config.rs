use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Money, UInt};

/// Run configuration, read from `manila.toml`. Every field has a default
/// so a partial file (or none at all) works.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of games to play in one run.
    pub epochs: UInt,
    pub starting_money: Money,
    /// Shaped-reward scale for the learning agent. 0 disables the bias.
    pub factor: f32,
    pub epsilon: f32,
    pub eps_step: f32,
    pub alpha: f32,
    pub gamma: f32,
    /// Per-agent RNG seed; omit for OS entropy.
    pub seed: Option<u64>,
    pub qtable_path: String,
    /// Load an existing table from `qtable_path` before playing, to resume
    /// training or evaluate a trained agent.
    pub resume: bool,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            epochs: 5000,
            starting_money: 30,
            factor: 0.0,
            epsilon: 0.95,
            eps_step: 0.01,
            alpha: 0.02,
            gamma: 0.9,
            seed: None,
            qtable_path: "qtable.json".to_owned(),
            resume: false,
            verbose: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file is invalid: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization_toml() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("epochs = 10\nfactor = 1.0\n").unwrap();
        assert_eq!(config.epochs, 10);
        assert_eq!(config.factor, 1.0);
        assert_eq!(config.starting_money, Config::default().starting_money);
    }

    #[test]
    fn test_read_from_file() {
        Config::load("./manila.toml").expect("Failed to read the file");
    }
}
