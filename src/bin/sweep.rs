use std::sync::Arc;
use std::thread;
use std::time::Instant;

use catan_mapgen::cli::{SweepStats, init_tracing};
use catan_mapgen::config::{MapConfig, parse_balance_mode};
use catan_mapgen::generation::generate_map_with_report;
use catan_mapgen::types::BalanceMode;
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(name = "mapgen-sweep")]
#[command(about = "Generate many boards and summarize how balanced they come out")]
struct Args {
    /// Number of boards to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    num: u32,

    /// Base seed; board i uses "<seed>-<i>"
    #[arg(long, default_value = "sweep")]
    seed: String,

    /// Balance mode: resources, numbers, or both
    #[arg(long, default_value = "both")]
    mode: String,

    /// Number of worker threads
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Silence per-board output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let mode = parse_balance_mode(&args.mode).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    if args.workers == 0 {
        eprintln!("Error: --workers must be at least 1");
        std::process::exit(1);
    }

    let stats = if args.workers > 1 {
        run_parallel(&args, mode)
    } else {
        run_sequential(&args, mode)
    };

    print_summary(&stats, &args);
}

fn board_config(base: &str, idx: usize, mode: BalanceMode) -> MapConfig {
    MapConfig {
        seed: format!("{base}-{idx}"),
        balance_mode: mode,
        num_players: 4,
    }
}

fn run_sequential(args: &Args, mode: BalanceMode) -> SweepStats {
    let mut stats = SweepStats::new();
    for idx in 0..args.num as usize {
        let config = board_config(&args.seed, idx, mode);
        let start = Instant::now();
        let report = generate_map_with_report(&config);
        let duration = start.elapsed();
        stats.record(&report, duration);

        if !args.quiet {
            println!(
                "Board {:>5}: seed={:<16} energy={:>8.2} start={:>8.2} accepted={:>3} duration={:?}",
                idx + 1,
                config.seed,
                report.best_energy,
                report.initial_energy,
                report.accepted_moves,
                duration
            );
        }
    }
    stats
}

fn run_parallel(args: &Args, mode: BalanceMode) -> SweepStats {
    let args = Arc::new(args.clone());
    let total = args.num as usize;
    let per_worker = total / args.workers;
    let remainder = total % args.workers;

    let handles: Vec<_> = (0..args.workers)
        .map(|worker_id| {
            let args = Arc::clone(&args);
            let count = per_worker + usize::from(worker_id < remainder);
            let start_idx = worker_id * per_worker + worker_id.min(remainder);

            thread::spawn(move || {
                let mut local = SweepStats::new();
                for idx in start_idx..start_idx + count {
                    let config = board_config(&args.seed, idx, mode);
                    let start = Instant::now();
                    let report = generate_map_with_report(&config);
                    local.record(&report, start.elapsed());
                }
                local
            })
        })
        .collect();

    let mut stats = SweepStats::new();
    for handle in handles {
        match handle.join() {
            Ok(local) => stats.merge(&local),
            Err(_) => {
                eprintln!("Error: a worker thread panicked");
                std::process::exit(1);
            }
        }
    }
    stats
}

fn print_summary(stats: &SweepStats, args: &Args) {
    println!("\n{}", "=".repeat(60));
    println!("SWEEP SUMMARY");
    println!("{}", "=".repeat(60));

    println!("  Boards: {}", stats.boards);
    println!("  Mode: {}", args.mode);
    if stats.boards == 0 {
        return;
    }
    println!("  Avg Energy: {:.2}", stats.get_avg_energy());
    println!("  Min / Max Energy: {:.2} / {:.2}", stats.min_energy, stats.max_energy);
    println!("  Avg Start Energy: {:.2}", stats.get_avg_initial_energy());
    println!("  Avg Accepted Moves: {:.1}", stats.get_avg_accepted_moves());
    println!(
        "  Clean Boards: {} ({:.1}%)",
        stats.clean_boards,
        stats.clean_boards as f64 / stats.boards as f64 * 100.0
    );
    println!("  Avg Duration: {:.2?}", stats.get_avg_duration());

    println!("\nDesert position counts:");
    for (idx, count) in &stats.desert_positions {
        println!("  hex {idx:>2}: {count}");
    }
}
