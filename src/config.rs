use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::BalanceMode;

pub const MIN_PLAYERS: u8 = 3;
pub const MAX_PLAYERS: u8 = 4;

const SEED_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SEED_LENGTH: usize = 8;

/// Everything that determines a generated board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub seed: String,
    pub balance_mode: BalanceMode,
    pub num_players: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("share token is not valid base64: {0}")]
    InvalidToken(#[from] base64::DecodeError),
    #[error("share token does not hold a map config: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("unsupported player count {0}, expected 3 or 4")]
    UnsupportedPlayerCount(u8),
    #[error("unknown balance mode '{0}', expected resources, numbers or both")]
    UnknownBalanceMode(String),
}

impl MapConfig {
    /// Fresh random seed with the standard mode and player count. Differs on
    /// every call.
    pub fn random() -> Self {
        Self {
            seed: random_seed(),
            balance_mode: BalanceMode::Both,
            num_players: MAX_PLAYERS,
        }
    }

    pub fn new(
        seed: impl Into<String>,
        balance_mode: BalanceMode,
        num_players: u8,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            seed: seed.into(),
            balance_mode,
            num_players,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(ConfigError::UnsupportedPlayerCount(self.num_players));
        }
        Ok(())
    }

    /// Compact reversible token: base64 of the JSON form.
    pub fn encode(&self) -> String {
        let json = serde_json::to_string(self).expect("map config serializes to JSON");
        BASE64.encode(json)
    }

    pub fn decode(token: &str) -> Result<Self, ConfigError> {
        let bytes = BASE64.decode(token.trim())?;
        let config: MapConfig = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }
}

pub fn parse_balance_mode(value: &str) -> Result<BalanceMode, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::UnknownBalanceMode(value.to_string()))
}

/// Fresh 8-character base-36 seed.
pub fn random_seed() -> String {
    let mut rng = rand::thread_rng();
    (0..SEED_LENGTH)
        .map(|_| SEED_ALPHABET[rng.gen_range(0..SEED_ALPHABET.len())] as char)
        .collect()
}

/// Simulated annealing schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingSchedule {
    pub iterations: usize,
    pub initial_temperature: f64,
    /// Temperature multiplier applied after every iteration.
    pub cooling_rate: f64,
    /// Chance of a resource swap (versus a number swap) in `Both` mode.
    pub resource_swap_probability: f64,
}

impl AnnealingSchedule {
    pub const STANDARD: AnnealingSchedule = AnnealingSchedule {
        iterations: 500,
        initial_temperature: 1000.0,
        cooling_rate: 0.95,
        resource_swap_probability: 0.5,
    };
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyWeights {
    /// Per pair of neighboring hexes with the same resource.
    pub same_resource_adjacency: f64,
    /// Per pair of neighboring 6/8 tokens.
    pub high_number_adjacency: f64,
    pub pip_variance: f64,
}

impl EnergyWeights {
    pub const STANDARD: EnergyWeights = EnergyWeights {
        same_resource_adjacency: 100.0,
        high_number_adjacency: 150.0,
        pip_variance: 10.0,
    };
}

impl Default for EnergyWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementWeights {
    /// Per resource type at a vertex the player does not own yet.
    pub diversity_bonus: u32,
    /// Times the player's scarcest owned resource count.
    pub coverage_bonus_multiplier: u32,
    /// Per hex beyond a road that yields a resource the player lacks.
    pub road_diversity_bonus: u32,
}

impl PlacementWeights {
    pub const STANDARD: PlacementWeights = PlacementWeights {
        diversity_bonus: 10,
        coverage_bonus_multiplier: 5,
        road_diversity_bonus: 5,
    };
}

impl Default for PlacementWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
