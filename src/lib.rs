#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod board;
pub mod cli;
pub mod config;
pub mod coords;
pub mod generation;
pub mod placement;
pub mod rng;
pub mod types;

pub use board::{Board, BoardTopology, Edge, EdgeId, Hex, Vertex, VertexId};
pub use config::{ConfigError, MapConfig};
pub use coords::HexCoord;
pub use generation::{calculate_energy, generate_map};
pub use placement::{Placement, calculate_placements};
pub use rng::SeededRng;
pub use types::{BalanceMode, Resource};
