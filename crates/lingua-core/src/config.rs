//! Configuration System
//!
//! Construction parameters for a simulation run. Parameters are validated
//! once at simulator construction and are immutable afterward. A TOML tuning
//! file can override the defaults without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SimError};

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "lingua.toml";

/// Parameters of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of agents in the population
    pub population_size: usize,
    /// Per-entry probability of vocabulary/grammar mutation each generation
    pub mutation_rate: f32,
    /// Communications per generation, as a fraction of the population size
    pub communication_frequency: f32,
    /// Probability that a received message is corrupted in transit
    pub error_rate: f32,
    /// Seed for the run's random number generator
    pub seed: u64,
    /// Received messages retained per agent; `None` keeps the full log
    pub history_limit: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.1,
            communication_frequency: 0.5,
            error_rate: 0.1,
            seed: 42,
            history_limit: Some(100),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| SimError::ConfigParse(e.to_string()))
    }

    /// Load configuration from the default path, or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_TUNING_PATH, e);
            Self::default()
        })
    }

    /// Check the construction contract: a positive population and all three
    /// rates inside [0, 1]. A rejected configuration never reaches the
    /// communication step, where a zero-size population would make the
    /// receiver-excluding-sender draw invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(SimError::InvalidConfig(
                "population_size must be positive".into(),
            ));
        }
        for (name, value) in [
            ("mutation_rate", self.mutation_rate),
            ("communication_frequency", self.communication_frequency),
            ("error_rate", self.error_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
