use std::collections::HashSet;

use catan_mapgen::board::CornerKey;
use catan_mapgen::generation::generate_map_with_report;
use catan_mapgen::types::{NUMBER_TOKENS, RESOURCE_DISTRIBUTION};
use catan_mapgen::{
    BalanceMode, Board, BoardTopology, MapConfig, Placement, Resource, calculate_energy,
    calculate_placements, generate_map,
};
use itertools::Itertools;

/// Share token of `abc123` in balance mode `both` with 4 players.
const ABC123_TOKEN: &str = "eyJzZWVkIjoiYWJjMTIzIiwiYmFsYW5jZU1vZGUiOiJib3RoIiwibnVtUGxheWVycyI6NH0=";

fn config(seed: &str, mode: BalanceMode, players: u8) -> MapConfig {
    MapConfig::new(seed, mode, players).unwrap()
}

fn sorted_resources(board: &Board) -> Vec<Option<Resource>> {
    board.resources().into_iter().sorted().collect()
}

/// Settlement and far road end of each pick, as corner keys.
fn placement_keys(board: &Board, placements: &[Placement]) -> Vec<((i64, i64), (i64, i64))> {
    placements
        .iter()
        .map(|p| {
            let far = board.edge(p.road).other(p.settlement).unwrap();
            let CornerKey { x, y } = board.vertex(p.settlement).key;
            let CornerKey { x: fx, y: fy } = board.vertex(far).key;
            ((x, y), (fx, fy))
        })
        .collect()
}

#[test]
fn same_config_gives_same_board() {
    let cfg = config("abc123", BalanceMode::Both, 4);
    assert_eq!(generate_map(&cfg), generate_map(&cfg));
}

#[test]
fn abc123_board_is_pinned() {
    use Resource::*;

    let cfg = config("abc123", BalanceMode::Both, 4);
    assert_eq!(cfg.encode(), ABC123_TOKEN);
    assert_eq!(MapConfig::decode(ABC123_TOKEN).unwrap(), cfg);

    let report = generate_map_with_report(&cfg);
    let board = &report.board;

    assert_eq!(
        board.resources(),
        vec![
            Some(Wood),
            Some(Wheat),
            Some(Brick),
            Some(Ore),
            Some(Brick),
            Some(Wood),
            Some(Sheep),
            Some(Sheep),
            Some(Wheat),
            None,
            Some(Ore),
            Some(Wood),
            Some(Ore),
            Some(Sheep),
            Some(Wood),
            Some(Sheep),
            Some(Wheat),
            Some(Brick),
            Some(Wheat),
        ]
    );
    assert_eq!(
        board.numbers(),
        vec![
            Some(3),
            Some(12),
            Some(6),
            Some(4),
            Some(10),
            Some(9),
            Some(5),
            Some(2),
            Some(8),
            None,
            Some(6),
            Some(11),
            Some(11),
            Some(10),
            Some(3),
            Some(9),
            Some(4),
            Some(8),
            Some(5),
        ]
    );
    assert!((report.best_energy - 22.268518518518515).abs() < 1e-12);

    assert_eq!(
        placement_keys(board, &calculate_placements(board, 4)),
        vec![
            ((2500, -866), (2000, 0)),
            ((-1000, -1732), (-2000, -1732)),
            ((2500, 866), (2000, 0)),
            ((1000, 1732), (500, 2598)),
            ((-2000, 1732), (-1000, 1732)),
            ((-500, 2598), (500, 2598)),
            ((2500, 2598), (2000, 1732)),
            ((-2000, 0), (-1000, 0)),
        ]
    );
    assert_eq!(
        placement_keys(board, &calculate_placements(board, 3)),
        vec![
            ((2500, -866), (2000, 0)),
            ((-1000, -1732), (-2000, -1732)),
            ((2500, 866), (2000, 0)),
            ((-2000, 1732), (-1000, 1732)),
            ((1000, 1732), (2000, 1732)),
            ((-2000, 0), (-1000, 0)),
        ]
    );
}

#[test]
fn different_seeds_give_different_boards() {
    let a = generate_map(&config("alpha", BalanceMode::Both, 4));
    let b = generate_map(&config("beta", BalanceMode::Both, 4));
    assert_ne!(a.resources(), b.resources());
}

#[test]
fn generated_boards_keep_tile_and_token_multisets() {
    let expected_resources: Vec<_> = RESOURCE_DISTRIBUTION.iter().copied().sorted().collect();
    let expected_numbers: Vec<_> = NUMBER_TOKENS.iter().copied().sorted().collect();

    for (i, mode) in [BalanceMode::Resources, BalanceMode::Numbers, BalanceMode::Both]
        .into_iter()
        .enumerate()
    {
        let board = generate_map(&config(&format!("multiset-{i}"), mode, 4));
        assert_eq!(sorted_resources(&board), expected_resources);

        let numbers: Vec<u8> = board.numbers().into_iter().flatten().sorted().collect();
        assert_eq!(numbers, expected_numbers);

        let desert = board.desert_index().unwrap();
        assert_eq!(board.hexes.iter().filter(|h| h.is_desert()).count(), 1);
        assert_eq!(board.hexes[desert].number, None);
        assert_eq!(board.hexes[desert].pips, 0);
    }
}

#[test]
fn annealing_never_ends_worse_than_it_started() {
    for seed in ["s1", "s2", "s3", "s4", "s5"] {
        let report = generate_map_with_report(&config(seed, BalanceMode::Both, 4));
        assert!(report.best_energy >= 0.0);
        assert!(report.best_energy <= report.initial_energy);
        assert_eq!(
            calculate_energy(&report.board, BalanceMode::Both),
            report.best_energy
        );
    }
}

#[test]
fn share_token_regenerates_the_same_board() {
    let cfg = config("share-me", BalanceMode::Numbers, 3);
    let token = cfg.encode();
    let decoded = MapConfig::decode(&token).unwrap();
    assert_eq!(decoded, cfg);
    assert_eq!(generate_map(&decoded), generate_map(&cfg));
}

#[test]
fn standard_topology_shape() {
    let topology = BoardTopology::standard();
    assert_eq!(topology.hex_count(), 19);
    assert_eq!(topology.vertices().len(), 54);
    assert_eq!(topology.edges().len(), 72);
    assert_eq!(topology.neighbor_pairs().count(), 42);
}

#[test]
fn placements_follow_the_snake_draft() {
    for players in [3u8, 4] {
        let board = generate_map(&config("draft", BalanceMode::Both, players));
        let placements = calculate_placements(&board, players);
        assert_eq!(placements.len(), 2 * players as usize);

        let seats: Vec<(u8, u8)> = placements.iter().map(|p| (p.player, p.round)).collect();
        let expected: Vec<(u8, u8)> = (1..=players)
            .map(|p| (p, 1))
            .chain((1..=players).rev().map(|p| (p, 2)))
            .collect();
        assert_eq!(seats, expected);
    }
}

#[test]
fn placements_are_legal() {
    for seed in ["legal-1", "legal-2", "legal-3"] {
        let board = generate_map(&config(seed, BalanceMode::Both, 4));
        let placements = calculate_placements(&board, 4);

        let settlements: HashSet<_> = placements.iter().map(|p| p.settlement).collect();
        assert_eq!(settlements.len(), placements.len());

        for p in &placements {
            let vertex = board.vertex(p.settlement);
            for neighbor in &vertex.adjacent_vertices {
                assert!(
                    !settlements.contains(neighbor),
                    "settlement {} next to {}",
                    vertex.label(),
                    board.vertex(*neighbor).label()
                );
            }
            assert!(board.edge(p.road).touches(p.settlement));
        }

        let roads: HashSet<_> = placements.iter().map(|p| p.road).collect();
        assert_eq!(roads.len(), placements.len());
    }
}

#[test]
fn placements_are_deterministic() {
    let board = generate_map(&config("repeat", BalanceMode::Both, 3));
    assert_eq!(calculate_placements(&board, 3), calculate_placements(&board, 3));
}
