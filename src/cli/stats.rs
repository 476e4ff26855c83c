use std::collections::BTreeMap;
use std::time::Duration;

use crate::generation::GenerationReport;
use crate::generation::scorer::{count_high_number_adjacencies, count_same_resource_adjacencies};

#[derive(Debug, Clone)]
pub struct SweepStats {
    pub boards: u32,
    pub total_energy: f64,
    pub min_energy: f64,
    pub max_energy: f64,
    pub total_initial_energy: f64,
    pub total_accepted_moves: u64,
    /// Boards with no same-resource and no 6/8 neighbors.
    pub clean_boards: u32,
    pub desert_positions: BTreeMap<usize, u32>,
    pub total_duration: Duration,
}

impl Default for SweepStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepStats {
    pub fn new() -> Self {
        Self {
            boards: 0,
            total_energy: 0.0,
            min_energy: f64::INFINITY,
            max_energy: f64::NEG_INFINITY,
            total_initial_energy: 0.0,
            total_accepted_moves: 0,
            clean_boards: 0,
            desert_positions: BTreeMap::new(),
            total_duration: Duration::ZERO,
        }
    }

    pub fn record(&mut self, report: &GenerationReport, duration: Duration) {
        self.boards += 1;
        self.total_energy += report.best_energy;
        self.min_energy = self.min_energy.min(report.best_energy);
        self.max_energy = self.max_energy.max(report.best_energy);
        self.total_initial_energy += report.initial_energy;
        self.total_accepted_moves += report.accepted_moves as u64;
        self.total_duration += duration;

        if count_same_resource_adjacencies(&report.board) == 0
            && count_high_number_adjacencies(&report.board) == 0
        {
            self.clean_boards += 1;
        }
        if let Some(idx) = report.board.desert_index() {
            *self.desert_positions.entry(idx).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: &SweepStats) {
        self.boards += other.boards;
        self.total_energy += other.total_energy;
        self.min_energy = self.min_energy.min(other.min_energy);
        self.max_energy = self.max_energy.max(other.max_energy);
        self.total_initial_energy += other.total_initial_energy;
        self.total_accepted_moves += other.total_accepted_moves;
        self.clean_boards += other.clean_boards;
        for (idx, count) in &other.desert_positions {
            *self.desert_positions.entry(*idx).or_insert(0) += count;
        }
        self.total_duration += other.total_duration;
    }

    pub fn get_avg_energy(&self) -> f64 {
        if self.boards == 0 {
            return 0.0;
        }
        self.total_energy / self.boards as f64
    }

    pub fn get_avg_initial_energy(&self) -> f64 {
        if self.boards == 0 {
            return 0.0;
        }
        self.total_initial_energy / self.boards as f64
    }

    pub fn get_avg_accepted_moves(&self) -> f64 {
        if self.boards == 0 {
            return 0.0;
        }
        self.total_accepted_moves as f64 / self.boards as f64
    }

    pub fn get_avg_duration(&self) -> Duration {
        if self.boards == 0 {
            return Duration::ZERO;
        }
        self.total_duration / self.boards
    }
}
