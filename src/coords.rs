use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Neighbor directions for flat-top hexes with y growing downwards, in
/// `AXIAL_DIRECTIONS` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    SouthEast,
    South,
    SouthWest,
    NorthWest,
    North,
    NorthEast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Third cube component, implied by `q + r + s == 0`.
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    pub fn add(self, other: HexCoord) -> Self {
        HexCoord::new(self.q + other.q, self.r + other.r)
    }

    pub fn neighbor(self, direction: Direction) -> Self {
        let (_, offset) = AXIAL_DIRECTIONS[direction as usize];
        self.add(offset)
    }

    pub fn distance(self, other: HexCoord) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        dq.max(dr).max(ds)
    }
}

pub const AXIAL_DIRECTIONS: [(Direction, HexCoord); 6] = [
    (Direction::SouthEast, HexCoord::new(1, 0)),
    (Direction::South, HexCoord::new(0, 1)),
    (Direction::SouthWest, HexCoord::new(-1, 1)),
    (Direction::NorthWest, HexCoord::new(-1, 0)),
    (Direction::North, HexCoord::new(0, -1)),
    (Direction::NorthEast, HexCoord::new(1, -1)),
];

/// Standard 19-hex board, rows of 3-4-5-4-3. Index order is the board order
/// used by every per-hex array in the crate.
pub const HEX_COORDS: [HexCoord; 19] = [
    // Row 0
    HexCoord::new(0, -2),
    HexCoord::new(1, -2),
    HexCoord::new(2, -2),
    // Row 1
    HexCoord::new(-1, -1),
    HexCoord::new(0, -1),
    HexCoord::new(1, -1),
    HexCoord::new(2, -1),
    // Row 2
    HexCoord::new(-2, 0),
    HexCoord::new(-1, 0),
    HexCoord::new(0, 0),
    HexCoord::new(1, 0),
    HexCoord::new(2, 0),
    // Row 3
    HexCoord::new(-2, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(0, 1),
    HexCoord::new(1, 1),
    // Row 4
    HexCoord::new(-2, 2),
    HexCoord::new(-1, 2),
    HexCoord::new(0, 2),
];

/// Number of hexes in each catalogue row.
pub const ROW_LENGTHS: [usize; 5] = [3, 4, 5, 4, 3];

pub static COORD_TO_INDEX: Lazy<HashMap<HexCoord, usize>> = Lazy::new(|| {
    HEX_COORDS
        .iter()
        .enumerate()
        .map(|(idx, coord)| (*coord, idx))
        .collect()
});

pub fn hex_index(coord: HexCoord) -> Option<usize> {
    COORD_TO_INDEX.get(&coord).copied()
}

/// All six axial neighbors, whether or not they are on the board.
pub fn neighbor_coords(coord: HexCoord) -> [HexCoord; 6] {
    AXIAL_DIRECTIONS.map(|(direction, _)| coord.neighbor(direction))
}

/// Center of a flat-top hex.
pub fn axial_to_pixel(coord: HexCoord, size: f64) -> (f64, f64) {
    let sqrt3 = 3f64.sqrt();
    let x = size * (1.5 * coord.q as f64);
    let y = size * (sqrt3 / 2.0 * coord.q as f64 + sqrt3 * coord.r as f64);
    (x, y)
}

/// Corner `i` sits at `60° * i`, counter-clockwise from angle zero.
pub fn hex_corners(cx: f64, cy: f64, size: f64) -> [(f64, f64); 6] {
    std::array::from_fn(|i| {
        let angle = (60.0 * i as f64).to_radians();
        (cx + size * angle.cos(), cy + size * angle.sin())
    })
}
