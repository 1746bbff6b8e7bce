//! Bot configuration with documented constants
//!
//! Values can be loaded from a TOML file and overridden from the command line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{BotError, Result};

/// Default BFS depth at which an enemy counts as a nearby threat
pub const DEFAULT_THREAT_HORIZON: u32 = 4;

/// Configuration for the decision core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Maximum search depth (in 8-neighbour steps) for the threat search
    ///
    /// A pac moves one cell per turn, two while speed is active, so 4
    /// covers roughly two boosted turns of enemy approach.
    pub threat_horizon: u32,

    /// Seed for the wander RNG. `None` picks a random seed at startup.
    pub seed: Option<u64>,

    /// Append the decision intent to MOVE commands as a display message
    pub annotate_commands: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            threat_horizon: DEFAULT_THREAT_HORIZON,
            seed: None,
            annotate_commands: false,
        }
    }
}

impl BotConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.threat_horizon == 0 {
            return Err(BotError::InvalidConfig(
                "threat_horizon must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Load and validate a config from a TOML file
pub fn load_config(path: &Path) -> Result<BotConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate a config from TOML text
pub fn parse_config(contents: &str) -> Result<BotConfig> {
    let config: BotConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
