pub mod board_display;
pub mod stats;

pub use board_display::{
    BoardReport, PlacementView, display_board, render_board_to_string, render_placements_to_string,
};
pub use stats::SweepStats;

use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG`, `warn` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
