pub mod annealing;
pub mod placer;
pub mod scorer;

pub use annealing::{Annealer, GenerationReport, Move, generate_map, generate_map_with_report};
pub use placer::{place_numbers, place_resources};
pub use scorer::{
    calculate_energy, calculate_pip_variance, count_high_number_adjacencies,
    count_same_resource_adjacencies,
};
