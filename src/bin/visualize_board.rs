use catan_mapgen::board::{Board, Vertex};
use catan_mapgen::cli::init_tracing;
use catan_mapgen::config::{MapConfig, parse_balance_mode, random_seed};
use catan_mapgen::coords::{axial_to_pixel, hex_corners};
use catan_mapgen::generation::generate_map;
use catan_mapgen::placement::{Placement, calculate_placements};
use catan_mapgen::types::Resource;
use clap::Parser;
use plotters::prelude::*;

const DESERT_COLOR: RGBColor = RGBColor(0xD7, 0xCC, 0xC8);
const TOKEN_COLOR: RGBColor = RGBColor(0xFF, 0xF8, 0xE1);
const HIGH_NUMBER_COLOR: RGBColor = RGBColor(0xC6, 0x28, 0x28);
const PLAYER_COLORS: [RGBColor; 4] = [
    RGBColor(0xE5, 0x39, 0x35), // Red
    RGBColor(0x1E, 0x88, 0xE5), // Blue
    RGBColor(0xFB, 0x8C, 0x00), // Orange
    RGBColor(0xF5, 0xF5, 0xF5), // White
];

#[derive(Debug, Parser)]
#[command(name = "visualize_board")]
#[command(about = "Render a generated board and its initial placements to PNG")]
struct Args {
    #[arg(long)]
    seed: Option<String>,

    #[arg(long, default_value = "both")]
    mode: String,

    #[arg(short = 'p', long, default_value_t = 4)]
    players: u8,

    /// Render from a share token instead of seed/mode/players
    #[arg(long, conflicts_with_all = ["seed", "mode", "players"])]
    share: Option<String>,

    /// Output PNG path
    #[arg(short = 'o', long, default_value = "catan_board.png")]
    output: String,

    /// Hex radius in pixels
    #[arg(long, default_value_t = 56.0)]
    size: f64,

    /// Leave out settlements and roads
    #[arg(long)]
    no_placements: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.share {
        Some(token) => MapConfig::decode(token)?,
        None => MapConfig::new(
            args.seed.clone().unwrap_or_else(random_seed),
            parse_balance_mode(&args.mode)?,
            args.players,
        )?,
    };

    let board = generate_map(&config);
    let placements = if args.no_placements {
        Vec::new()
    } else {
        calculate_placements(&board, config.num_players)
    };

    render_board(&board, &placements, &args.output, args.size)?;
    println!("Wrote {} (share token {})", args.output, config.encode());
    Ok(())
}

fn render_board(
    board: &Board,
    placements: &[Placement],
    filename: &str,
    hex_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let corners: Vec<(f64, f64)> = board
        .hexes
        .iter()
        .flat_map(|hex| {
            let (cx, cy) = axial_to_pixel(hex.coord, hex_size);
            hex_corners(cx, cy, hex_size)
        })
        .collect();

    let (min_x, max_x, min_y, max_y) = bounds(&corners)?;
    let padding = hex_size * 0.75;
    let width = ((max_x - min_x) + 2.0 * padding).ceil() as u32;
    let height = ((max_y - min_y) + 2.0 * padding).ceil() as u32;

    let root = BitMapBackend::new(filename, (width, height)).into_drawing_area();
    root.fill(&RGBColor(0x4F, 0xA3, 0xD1))?;

    let to_canvas = |(x, y): (f64, f64)| -> (i32, i32) {
        (
            (x - min_x + padding).round() as i32,
            (y - min_y + padding).round() as i32,
        )
    };

    for hex in &board.hexes {
        let (cx, cy) = axial_to_pixel(hex.coord, hex_size);
        let outline: Vec<(i32, i32)> = hex_corners(cx, cy, hex_size)
            .into_iter()
            .map(to_canvas)
            .collect();
        let fill = hex.resource.map(resource_color).unwrap_or(DESERT_COLOR);
        root.draw(&Polygon::new(outline.clone(), ShapeStyle::from(&fill).filled()))?;

        let mut closed = outline;
        closed.push(closed[0]);
        root.draw(&PathElement::new(closed, ShapeStyle::from(&BLACK).stroke_width(2)))?;

        if let Some(number) = hex.number {
            let center = to_canvas((cx, cy));
            let radius = (hex_size * 0.3) as i32;
            root.draw(&Circle::new(center, radius, ShapeStyle::from(&TOKEN_COLOR).filled()))?;
            let color = if hex.pips == 5 { HIGH_NUMBER_COLOR } else { BLACK };
            let label = number.to_string();
            let font_size = (hex_size * 0.32) as i32;
            let offset = (label.len() as i32 * font_size) / 4;
            root.draw(&Text::new(
                label,
                (center.0 - offset, center.1 - font_size / 2),
                ("sans-serif", font_size as f64).into_font().color(&color),
            ))?;
        }
    }

    for placement in placements {
        let color = PLAYER_COLORS[(placement.player as usize - 1) % PLAYER_COLORS.len()];
        let [a, b] = board.edge(placement.road).vertices();
        let road = vec![
            to_canvas(vertex_position(board.vertex(a), hex_size)),
            to_canvas(vertex_position(board.vertex(b), hex_size)),
        ];
        root.draw(&PathElement::new(road, ShapeStyle::from(&color).stroke_width(6)))?;
    }

    for placement in placements {
        let color = PLAYER_COLORS[(placement.player as usize - 1) % PLAYER_COLORS.len()];
        let center = to_canvas(vertex_position(board.vertex(placement.settlement), hex_size));
        let radius = (hex_size * 0.16).max(5.0) as i32;
        root.draw(&Circle::new(center, radius + 2, ShapeStyle::from(&BLACK).filled()))?;
        root.draw(&Circle::new(center, radius, ShapeStyle::from(&color).filled()))?;
        root.draw(&Text::new(
            placement.round.to_string(),
            (center.0 - radius / 3, center.1 - radius / 2),
            ("sans-serif", radius as f64).into_font().color(&BLACK),
        ))?;
    }

    root.present()?;
    Ok(())
}

fn vertex_position(vertex: &Vertex, hex_size: f64) -> (f64, f64) {
    vertex.key.to_point(hex_size)
}

fn resource_color(resource: Resource) -> RGBColor {
    match resource {
        Resource::Wood => RGBColor(0x22, 0x8B, 0x22),
        Resource::Wheat => RGBColor(0xFF, 0xD7, 0x00),
        Resource::Sheep => RGBColor(0x90, 0xEE, 0x90),
        Resource::Brick => RGBColor(0xE6, 0x4A, 0x19),
        Resource::Ore => RGBColor(0x60, 0x7D, 0x8B),
    }
}

fn bounds(points: &[(f64, f64)]) -> Result<(f64, f64, f64, f64), &'static str> {
    if points.is_empty() {
        return Err("no points");
    }
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in points {
        min_x = min_x.min(*x);
        max_x = max_x.max(*x);
        min_y = min_y.min(*y);
        max_y = max_y.max(*y);
    }
    Ok((min_x, max_x, min_y, max_y))
}
