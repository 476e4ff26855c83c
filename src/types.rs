use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Resource {
    Wood,
    Wheat,
    Sheep,
    Brick,
    Ore,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Wheat,
        Resource::Sheep,
        Resource::Brick,
        Resource::Ore,
    ];

    pub fn letter(self) -> char {
        match self {
            Resource::Wood => 'W',
            Resource::Wheat => 'G',
            Resource::Sheep => 'S',
            Resource::Brick => 'B',
            Resource::Ore => 'O',
        }
    }
}

/// Which perturbation the optimizer prefers. The energy function is the same
/// in every mode.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BalanceMode {
    Resources,
    Numbers,
    #[default]
    Both,
}

/// Tile resources for the standard board, `None` is the desert.
pub const RESOURCE_DISTRIBUTION: [Option<Resource>; 19] = [
    Some(Resource::Wood),
    Some(Resource::Wood),
    Some(Resource::Wood),
    Some(Resource::Wood),
    Some(Resource::Wheat),
    Some(Resource::Wheat),
    Some(Resource::Wheat),
    Some(Resource::Wheat),
    Some(Resource::Sheep),
    Some(Resource::Sheep),
    Some(Resource::Sheep),
    Some(Resource::Sheep),
    Some(Resource::Brick),
    Some(Resource::Brick),
    Some(Resource::Brick),
    Some(Resource::Ore),
    Some(Resource::Ore),
    Some(Resource::Ore),
    None,
];

pub const NUMBER_TOKENS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

pub const HIGH_NUMBERS: [u8; 2] = [6, 8];

/// Probability dots printed on a number token.
pub const fn pips(number: Option<u8>) -> u8 {
    match number {
        Some(6) | Some(8) => 5,
        Some(5) | Some(9) => 4,
        Some(4) | Some(10) => 3,
        Some(3) | Some(11) => 2,
        Some(2) | Some(12) => 1,
        _ => 0,
    }
}

pub fn is_high_number(number: Option<u8>) -> bool {
    number.is_some_and(|n| HIGH_NUMBERS.contains(&n))
}
