use crate::board::Board;
use crate::config::EnergyWeights;
use crate::types::{BalanceMode, is_high_number};

/// The six outer corners of the standard layout.
pub const CORNER_HEXES: [usize; 6] = [0, 2, 7, 11, 16, 18];
pub const CENTER_HEX: usize = 9;

pub fn edge_hexes(hex_count: usize) -> Vec<usize> {
    (0..hex_count)
        .filter(|idx| *idx != CENTER_HEX && !CORNER_HEXES.contains(idx))
        .collect()
}

pub fn count_same_resource_adjacencies(board: &Board) -> usize {
    board
        .topology()
        .neighbor_pairs()
        .filter(|&(i, j)| {
            let a = board.hexes[i].resource;
            a.is_some() && a == board.hexes[j].resource
        })
        .count()
}

pub fn count_high_number_adjacencies(board: &Board) -> usize {
    board
        .topology()
        .neighbor_pairs()
        .filter(|&(i, j)| {
            is_high_number(board.hexes[i].number) && is_high_number(board.hexes[j].number)
        })
        .count()
}

/// Population variance of the mean pips of the corner, edge and center regions.
pub fn calculate_pip_variance(board: &Board) -> f64 {
    let edges = edge_hexes(board.hexes.len());
    let regions: [&[usize]; 3] = [&CORNER_HEXES, &edges, &[CENTER_HEX]];

    let means: Vec<f64> = regions
        .iter()
        .map(|indices| {
            if indices.is_empty() {
                return 0.0;
            }
            let total: u32 = indices.iter().map(|&idx| board.hexes[idx].pips as u32).sum();
            total as f64 / indices.len() as f64
        })
        .collect();

    let mean = means.iter().sum::<f64>() / means.len() as f64;
    means.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / means.len() as f64
}

/// Weighted badness of a board, lower is better. Every term is scored in
/// every mode; `_mode` only steers the optimizer's moves.
pub fn calculate_energy(board: &Board, _mode: BalanceMode) -> f64 {
    energy_with_weights(board, &EnergyWeights::STANDARD)
}

pub fn energy_with_weights(board: &Board, weights: &EnergyWeights) -> f64 {
    count_same_resource_adjacencies(board) as f64 * weights.same_resource_adjacency
        + count_high_number_adjacencies(board) as f64 * weights.high_number_adjacency
        + calculate_pip_variance(board) * weights.pip_variance
}
