//! Demo settings, optionally loaded from a JSON file.

use std::error::Error;
use std::fmt;
use std::fs;
use std::str::FromStr;

use scene2d::SceneConfig;
use serde::{Deserialize, Serialize};

/// Which level layout to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Player drops onto a platform and stays there.
    #[default]
    Platform,
    /// Player drops into lava and keeps getting sent back to spawn.
    Lava,
    /// Player runs along a ledge collecting gems until a wall stops it.
    Gems,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Platform, Scenario::Lava, Scenario::Gems];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Platform => "platform",
            Scenario::Lava => "lava",
            Scenario::Gems => "gems",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown scenario: {}. Available: platform, lava, gems", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub scenario: Scenario,
    /// Seconds per tick.
    pub dt: f64,
    pub steps: usize,
    /// Downward acceleration applied to the player.
    pub gravity: f64,
    /// Log the player pose every this many ticks (0 disables).
    pub log_every: usize,
    pub scene: SceneConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scenario: Scenario::default(),
            dt: 1.0 / 60.0,
            steps: 600,
            gravity: 400.0,
            log_every: 60,
            scene: SceneConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}
