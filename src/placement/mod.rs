use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::{Board, EdgeId, VertexId};
use crate::config::{MAX_PLAYERS, MIN_PLAYERS, PlacementWeights};

pub mod scorer;

pub use scorer::{OwnedResources, score_road, score_vertex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub settlement: VertexId,
    pub road: EdgeId,
    /// 1-based seat.
    pub player: u8,
    /// 1 or 2.
    pub round: u8,
}

/// Seat order of the initial placement: 1..=N, then N..=1.
pub fn draft_order(num_players: u8) -> impl Iterator<Item = (u8, u8)> {
    (1..=num_players)
        .map(|p| (p, 1))
        .chain((1..=num_players).rev().map(|p| (p, 2)))
}

/// Greedy snake draft of two settlements and two roads per player.
pub fn calculate_placements(board: &Board, num_players: u8) -> Vec<Placement> {
    assert!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players),
        "placements support 3 or 4 players, got {num_players}"
    );

    let mut draft = Draft::new(board, PlacementWeights::STANDARD, num_players);
    draft_order(num_players)
        .filter_map(|(player, round)| draft.pick(player, round))
        .collect()
}

/// Blocked vertices, claimed roads and per-player holdings of one draft.
#[derive(Debug, Clone)]
pub struct Draft<'a> {
    board: &'a Board,
    weights: PlacementWeights,
    blocked: HashSet<VertexId>,
    claimed_roads: HashSet<EdgeId>,
    owned: Vec<OwnedResources>,
}

impl<'a> Draft<'a> {
    pub fn new(board: &'a Board, weights: PlacementWeights, num_players: u8) -> Self {
        Self {
            board,
            weights,
            blocked: HashSet::new(),
            claimed_roads: HashSet::new(),
            owned: vec![OwnedResources::new(); num_players as usize],
        }
    }

    pub fn owned(&self, player: u8) -> &OwnedResources {
        &self.owned[player as usize - 1]
    }

    pub fn is_available(&self, vertex: VertexId) -> bool {
        !self.blocked.contains(&vertex)
    }

    /// Place the next settlement and road for `player`. `None` once the board
    /// has no legal spot left.
    pub fn pick(&mut self, player: u8, round: u8) -> Option<Placement> {
        let seat = player as usize - 1;
        let settlement = self.best_vertex(&self.owned[seat])?;

        self.owned[seat].extend(self.board.vertex_resources(settlement));
        let road = self.pick_road(settlement, &self.owned[seat]);

        self.block(settlement);
        self.claimed_roads.insert(road);

        trace!(player, round, settlement, ?road, "draft pick");
        Some(Placement {
            settlement,
            road,
            player,
            round,
        })
    }

    /// Highest scoring open vertex; ties go to the lowest id.
    fn best_vertex(&self, owned: &OwnedResources) -> Option<VertexId> {
        let mut best: Option<(VertexId, u32)> = None;
        for vertex in self.board.vertices() {
            if !self.is_available(vertex.id) {
                continue;
            }
            let score = score_vertex(self.board, vertex.id, owned, &self.weights);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((vertex.id, score));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Best unclaimed incident edge, or the first incident edge when all are taken.
    fn pick_road(&self, settlement: VertexId, owned: &OwnedResources) -> EdgeId {
        let incident = &self.board.vertex(settlement).adjacent_edges;
        let mut best: Option<(EdgeId, u32)> = None;
        for &edge in incident {
            if self.claimed_roads.contains(&edge) {
                continue;
            }
            let score = score_road(self.board, settlement, edge, owned, &self.weights);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((edge, score));
            }
        }
        best.map(|(edge, _)| edge).unwrap_or(incident[0])
    }

    fn block(&mut self, settlement: VertexId) {
        self.blocked.insert(settlement);
        self.blocked
            .extend(self.board.vertex(settlement).adjacent_vertices.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::generation::generate_map;
    use crate::types::{BalanceMode, Resource};

    fn board(seed: &str) -> Board {
        generate_map(&MapConfig::new(seed, BalanceMode::Both, 4).unwrap())
    }

    #[test]
    fn snake_order() {
        let order: Vec<(u8, u8)> = draft_order(3).collect();
        assert_eq!(order, vec![(1, 1), (2, 1), (3, 1), (3, 2), (2, 2), (1, 2)]);
    }

    #[test]
    fn counts_per_player_count() {
        let board = board("counts");
        assert_eq!(calculate_placements(&board, 4).len(), 8);
        assert_eq!(calculate_placements(&board, 3).len(), 6);
    }

    #[test]
    fn settlements_respect_distance_rule() {
        let board = board("distance");
        let placements = calculate_placements(&board, 4);
        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                assert_ne!(a.settlement, b.settlement);
                assert!(
                    !board
                        .vertex(a.settlement)
                        .adjacent_vertices
                        .contains(&b.settlement)
                );
                assert_ne!(a.road, b.road);
            }
        }
    }

    #[test]
    fn roads_touch_their_settlement() {
        let board = board("roads");
        for placement in calculate_placements(&board, 4) {
            assert!(board.edge(placement.road).touches(placement.settlement));
        }
    }

    #[test]
    fn first_pick_is_the_global_best() {
        let board = board("greedy");
        let placements = calculate_placements(&board, 4);
        let fresh = OwnedResources::new();
        let best = board
            .vertices()
            .iter()
            .map(|v| score_vertex(&board, v.id, &fresh, &PlacementWeights::STANDARD))
            .max()
            .unwrap();
        let first = &placements[0];
        assert_eq!(
            score_vertex(&board, first.settlement, &fresh, &PlacementWeights::STANDARD),
            best
        );
        // Earliest vertex wins ties.
        let earliest = board
            .vertices()
            .iter()
            .find(|v| score_vertex(&board, v.id, &fresh, &PlacementWeights::STANDARD) == best)
            .unwrap();
        assert_eq!(first.settlement, earliest.id);
    }

    #[test]
    fn tagging_matches_draft_order() {
        let board = board("tags");
        let placements = calculate_placements(&board, 4);
        let tags: Vec<(u8, u8)> = placements.iter().map(|p| (p.player, p.round)).collect();
        assert_eq!(tags, draft_order(4).collect::<Vec<_>>());
    }

    #[test]
    fn road_falls_back_when_all_edges_claimed() {
        let board = board("fallback");
        let mut draft = Draft::new(&board, PlacementWeights::STANDARD, 3);
        let vertex = board.vertices()[0].id;
        for edge in &board.vertex(vertex).adjacent_edges {
            draft.claimed_roads.insert(*edge);
        }
        let owned = OwnedResources::new();
        assert_eq!(
            draft.pick_road(vertex, &owned),
            board.vertex(vertex).adjacent_edges[0]
        );
    }

    /// First edge holding the top score.
    fn first_max(scored: &[(EdgeId, u32)]) -> EdgeId {
        scored
            .iter()
            .fold(None, |best: Option<(EdgeId, u32)>, &(edge, score)| {
                if best.is_none_or(|(_, top)| score > top) {
                    Some((edge, score))
                } else {
                    best
                }
            })
            .map(|(edge, _)| edge)
            .unwrap()
    }

    #[test]
    fn road_skips_a_claimed_best_edge() {
        let board = board("claimed");
        let mut owned = OwnedResources::new();
        owned.add(Resource::Wood);
        for vertex in board.vertices() {
            let scored: Vec<(EdgeId, u32)> = vertex
                .adjacent_edges
                .iter()
                .map(|&edge| {
                    let score =
                        score_road(&board, vertex.id, edge, &owned, &PlacementWeights::STANDARD);
                    (edge, score)
                })
                .collect();

            let mut draft = Draft::new(&board, PlacementWeights::STANDARD, 4);
            let top = draft.pick_road(vertex.id, &owned);
            assert_eq!(top, first_max(&scored));

            draft.claimed_roads.insert(top);
            let rest: Vec<(EdgeId, u32)> =
                scored.iter().copied().filter(|(edge, _)| *edge != top).collect();
            let next = draft.pick_road(vertex.id, &owned);
            assert_ne!(next, top);
            assert_eq!(next, first_max(&rest));
        }
    }

    #[test]
    fn holdings_accumulate_over_both_rounds() {
        let board = board("holdings");
        let mut draft = Draft::new(&board, PlacementWeights::STANDARD, 3);
        let first = draft.pick(1, 1).unwrap();
        let after_first = draft.owned(1).total();
        assert_eq!(after_first as usize, board.vertex_resources(first.settlement).count());
        let second = draft.pick(1, 2).unwrap();
        assert_eq!(
            draft.owned(1).total() as usize,
            after_first as usize + board.vertex_resources(second.settlement).count()
        );
        assert!(!draft.is_available(first.settlement));
    }

    #[test]
    #[should_panic(expected = "3 or 4 players")]
    fn rejects_two_players() {
        let board = board("two");
        let _ = calculate_placements(&board, 2);
    }
}
