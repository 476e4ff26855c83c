use catan_mapgen::cli::{BoardReport, display_board, init_tracing};
use catan_mapgen::config::{MapConfig, parse_balance_mode, random_seed};
use catan_mapgen::generation::generate_map_with_report;
use catan_mapgen::placement::calculate_placements;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "mapgen")]
#[command(about = "Generate a balanced Catan board and suggest initial placements")]
struct Args {
    /// Seed text; a random 8-character seed when omitted
    #[arg(long)]
    seed: Option<String>,

    /// Balance mode: resources, numbers, or both
    #[arg(long, default_value = "both")]
    mode: String,

    /// Number of players (3 or 4)
    #[arg(short = 'p', long, default_value_t = 4)]
    players: u8,

    /// Regenerate from a share token instead of seed/mode/players
    #[arg(long, conflicts_with_all = ["seed", "mode", "players"])]
    share: Option<String>,

    /// Skip the initial placement suggestions
    #[arg(long)]
    no_placements: bool,

    /// Print a JSON report instead of the text board
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let report = generate_map_with_report(&config);
    let placements = if args.no_placements {
        Vec::new()
    } else {
        calculate_placements(&report.board, config.num_players)
    };

    if args.json {
        let json = BoardReport::new(&config, &report.board, report.best_energy, &placements)
            .to_json()
            .unwrap_or_else(|err| {
                eprintln!("Error: failed to serialize report: {err}");
                std::process::exit(1);
            });
        println!("{json}");
        return;
    }

    println!(
        "Seed: {}  Mode: {}  Players: {}",
        config.seed, config.balance_mode, config.num_players
    );
    println!(
        "Energy: {:.2} (start {:.2}, {} moves accepted)",
        report.best_energy, report.initial_energy, report.accepted_moves
    );
    display_board(&report.board, &placements);
    println!("\nShare token: {}", config.encode());
}

fn resolve_config(args: &Args) -> Result<MapConfig, catan_mapgen::ConfigError> {
    if let Some(token) = &args.share {
        return MapConfig::decode(token);
    }
    let mode = parse_balance_mode(&args.mode)?;
    let seed = args.seed.clone().unwrap_or_else(random_seed);
    MapConfig::new(seed, mode, args.players)
}
