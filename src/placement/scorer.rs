use std::collections::BTreeMap;

use crate::board::{Board, EdgeId, VertexId};
use crate::config::PlacementWeights;
use crate::types::Resource;

/// Resources a player already collects, with multiplicity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedResources {
    counts: BTreeMap<Resource, u32>,
}

impl OwnedResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resource: Resource) {
        *self.counts.entry(resource).or_insert(0) += 1;
    }

    pub fn extend(&mut self, resources: impl IntoIterator<Item = Resource>) {
        for resource in resources {
            self.add(resource);
        }
    }

    pub fn owns(&self, resource: Resource) -> bool {
        self.counts.contains_key(&resource)
    }

    pub fn count(&self, resource: Resource) -> u32 {
        self.counts.get(&resource).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, u32)> + '_ {
        self.counts.iter().map(|(r, c)| (*r, *c))
    }
}

/// Pips around the vertex, plus a bonus per new resource type, plus a bonus
/// scaled by the player's scarcest resource once this vertex's types are
/// counted (at zero when not yet owned).
pub fn score_vertex(
    board: &Board,
    vertex: VertexId,
    owned: &OwnedResources,
    weights: &PlacementWeights,
) -> u32 {
    let pip_total = board.vertex_pips(vertex);

    let mut types: Vec<Resource> = board.vertex_resources(vertex).collect();
    types.sort_unstable();
    types.dedup();

    let diversity_bonus = types.iter().filter(|r| !owned.owns(**r)).count() as u32
        * weights.diversity_bonus;

    let min_count = owned
        .iter()
        .map(|(_, count)| count)
        .chain(types.iter().filter(|r| !owned.owns(**r)).map(|_| 0))
        .min()
        .unwrap_or(0);
    let coverage_bonus = weights.coverage_bonus_multiplier * min_count;

    pip_total + diversity_bonus + coverage_bonus
}

/// Value of extending a road from `from` along `edge`: production at the far
/// end, with a bonus for every hex there yielding something new.
pub fn score_road(
    board: &Board,
    from: VertexId,
    edge: EdgeId,
    owned: &OwnedResources,
    weights: &PlacementWeights,
) -> u32 {
    let far = board
        .edge(edge)
        .other(from)
        .unwrap_or_else(|| panic!("edge {edge:?} does not touch vertex {from}"));

    board
        .producing_hexes(far)
        .map(|hex| {
            let bonus = match hex.resource {
                Some(resource) if !owned.owns(resource) => weights.road_diversity_bonus,
                _ => 0,
            };
            hex.pips as u32 + bonus
        })
        .sum()
}
