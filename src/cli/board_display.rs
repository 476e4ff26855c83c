use itertools::Itertools;
use serde::Serialize;

use crate::board::{Board, Hex};
use crate::config::MapConfig;
use crate::coords::ROW_LENGTHS;
use crate::generation::scorer::{count_high_number_adjacencies, count_same_resource_adjacencies};
use crate::placement::Placement;
use crate::types::Resource;

const CELL_WIDTH: usize = 6;

pub fn display_board(board: &Board, placements: &[Placement]) {
    println!("\n{}", "=".repeat(60));
    println!("BOARD:");
    println!("{}", "=".repeat(60));
    println!("{}", render_board_to_string(board));

    if !placements.is_empty() {
        println!("\nINITIAL PLACEMENTS:");
        println!("{}", render_placements_to_string(board, placements));
    }

    println!("\nLEGEND:");
    println!("  Resources: W=Wood, G=Wheat, S=Sheep, B=Brick, O=Ore, D=Desert");
    println!("  Numbers marked * are 6 or 8");
}

fn hex_cell(hex: &Hex) -> String {
    let letter = hex.resource.map(Resource::letter).unwrap_or('D');
    match hex.number {
        Some(n @ (6 | 8)) => format!("{letter}{n:>2}*"),
        Some(n) => format!("{letter}{n:>2} "),
        None => format!("{letter} --"),
    }
}

/// Rows of 3-4-5-4-3 hexes, each row centred under the widest one.
pub fn render_board_to_string(board: &Board) -> String {
    let widest = ROW_LENGTHS.iter().copied().max().unwrap_or(0);
    let mut hexes = board.hexes.iter();
    ROW_LENGTHS
        .iter()
        .map(|&len| {
            let indent = " ".repeat((widest - len) * CELL_WIDTH / 2);
            let cells = hexes
                .by_ref()
                .take(len)
                .map(|hex| format!("[{:^w$}]", hex_cell(hex), w = CELL_WIDTH - 2))
                .join("");
            format!("{indent}{cells}")
        })
        .join("\n")
}

pub fn render_placements_to_string(board: &Board, placements: &[Placement]) -> String {
    let mut lines = vec![format!(
        "{:<8} {:<6} {:<26} {:<10} {}",
        "Player", "Round", "Settlement", "Road", "Collects"
    )];
    for placement in placements {
        let collects = board
            .producing_hexes(placement.settlement)
            .map(|hex| hex_cell(hex).trim_end_matches('*').replace(' ', ""))
            .join(" ");
        lines.push(format!(
            "{:<8} {:<6} {:<26} {:<10} {}",
            format!("P{}", placement.player),
            placement.round,
            board.vertex(placement.settlement).label(),
            format!("{}-{}", placement.road.0, placement.road.1),
            collects
        ));
    }
    lines.join("\n")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementView {
    pub player: u8,
    pub round: u8,
    pub settlement: String,
    pub road: [String; 2],
    pub resources: Vec<Resource>,
    pub pips: u32,
}

/// Everything a renderer needs, in one serializable value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardReport<'a> {
    pub config: &'a MapConfig,
    pub share_token: String,
    pub energy: f64,
    pub same_resource_adjacencies: usize,
    pub high_number_adjacencies: usize,
    pub hexes: &'a [Hex],
    pub placements: Vec<PlacementView>,
}

impl<'a> BoardReport<'a> {
    pub fn new(
        config: &'a MapConfig,
        board: &'a Board,
        energy: f64,
        placements: &[Placement],
    ) -> Self {
        let placements = placements
            .iter()
            .map(|p| {
                let [a, b] = board.edge(p.road).vertices();
                PlacementView {
                    player: p.player,
                    round: p.round,
                    settlement: board.vertex(p.settlement).label(),
                    road: [board.vertex(a).label(), board.vertex(b).label()],
                    resources: board.vertex_resources(p.settlement).collect(),
                    pips: board.vertex_pips(p.settlement),
                }
            })
            .collect();

        Self {
            config,
            share_token: config.encode(),
            energy,
            same_resource_adjacencies: count_same_resource_adjacencies(board),
            high_number_adjacencies: count_high_number_adjacencies(board),
            hexes: &board.hexes,
            placements,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
