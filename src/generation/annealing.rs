use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::board::{Board, BoardTopology};
use crate::config::{AnnealingSchedule, MapConfig};
use crate::generation::placer::{place_numbers, place_resources};
use crate::generation::scorer::calculate_energy;
use crate::rng::SeededRng;
use crate::types::{BalanceMode, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    SwapResources(usize, usize),
    SwapNumbers(usize, usize),
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub board: Board,
    pub initial_energy: f64,
    pub best_energy: f64,
    pub accepted_moves: usize,
    pub improvements: usize,
    pub final_temperature: f64,
}

/// Balanced board for a config. Pure function of the config.
pub fn generate_map(config: &MapConfig) -> Board {
    generate_map_with_report(config).board
}

pub fn generate_map_with_report(config: &MapConfig) -> GenerationReport {
    Annealer::new(BoardTopology::standard(), AnnealingSchedule::STANDARD).run(config)
}

/// Simulated annealing over resource and number assignments.
///
/// The topology is fixed for the whole run; every proposal only builds a new
/// content layer on top of it.
#[derive(Debug, Clone)]
pub struct Annealer {
    topology: Arc<BoardTopology>,
    schedule: AnnealingSchedule,
}

impl Annealer {
    pub fn new(topology: Arc<BoardTopology>, schedule: AnnealingSchedule) -> Self {
        Self { topology, schedule }
    }

    pub fn run(&self, config: &MapConfig) -> GenerationReport {
        let mut rng = SeededRng::new(&config.seed);
        let mode = config.balance_mode;

        let mut resources = place_resources(&mut rng);
        let mut numbers = place_numbers(&resources, &mut rng);

        let mut best_board = self.board(&resources, &numbers);
        let initial_energy = calculate_energy(&best_board, mode);
        let mut best_energy = initial_energy;
        let mut current_energy = initial_energy;

        let mut temperature = self.schedule.initial_temperature;
        let mut accepted_moves = 0;
        let mut improvements = 0;

        for iteration in 0..self.schedule.iterations {
            let proposal = self.propose(mode, &resources, &numbers, &mut rng);
            apply(proposal, &mut resources, &mut numbers);

            let candidate = self.board(&resources, &numbers);
            let candidate_energy = calculate_energy(&candidate, mode);
            let delta = candidate_energy - current_energy;

            // Short-circuits so an improving move does not consume a draw.
            if delta < 0.0 || rng.next_f64() < (-delta / temperature).exp() {
                accepted_moves += 1;
                current_energy = candidate_energy;
                if current_energy < best_energy {
                    improvements += 1;
                    best_energy = current_energy;
                    best_board = candidate;
                    debug!(iteration, energy = best_energy, temperature, "new best board");
                }
            } else {
                // Swaps are their own inverse.
                apply(proposal, &mut resources, &mut numbers);
                trace!(iteration, ?proposal, delta, "rejected move");
            }

            temperature *= self.schedule.cooling_rate;
        }

        info!(
            seed = %config.seed,
            mode = %mode,
            initial_energy,
            best_energy,
            accepted_moves,
            "generated board"
        );

        GenerationReport {
            board: best_board,
            initial_energy,
            best_energy,
            accepted_moves,
            improvements,
            final_temperature: temperature,
        }
    }

    fn board(&self, resources: &[Option<Resource>], numbers: &[Option<u8>]) -> Board {
        Board::with_topology(Arc::clone(&self.topology), resources, numbers)
    }

    fn propose(
        &self,
        mode: BalanceMode,
        resources: &[Option<Resource>],
        numbers: &[Option<u8>],
        rng: &mut SeededRng,
    ) -> Move {
        let swap_resources = match mode {
            BalanceMode::Resources => true,
            BalanceMode::Numbers => false,
            BalanceMode::Both => rng.next_f64() < self.schedule.resource_swap_probability,
        };

        if swap_resources {
            let (a, b) = pick_distinct_pair(resources, rng);
            Move::SwapResources(a, b)
        } else {
            let (a, b) = pick_distinct_pair(numbers, rng);
            Move::SwapNumbers(a, b)
        }
    }
}

fn apply(proposal: Move, resources: &mut [Option<Resource>], numbers: &mut [Option<u8>]) {
    match proposal {
        Move::SwapResources(a, b) => resources.swap(a, b),
        Move::SwapNumbers(a, b) => numbers.swap(a, b),
    }
}

/// Two filled slots holding different values, drawn uniformly. The first
/// index is fixed and the second is redrawn until it differs.
fn pick_distinct_pair<T: PartialEq>(slots: &[Option<T>], rng: &mut SeededRng) -> (usize, usize) {
    let filled: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter_map(|(idx, slot)| slot.as_ref().map(|_| idx))
        .collect();
    assert!(
        filled.iter().any(|&idx| slots[idx] != slots[filled[0]]),
        "no two distinct values to swap"
    );

    let last = filled.len() - 1;
    let a = filled[rng.next_int(0, last)];
    let mut b = a;
    while b == a || slots[a] == slots[b] {
        b = filled[rng.next_int(0, last)];
    }
    (a, b)
}
