use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::coords::HexCoord;
use crate::types::{Resource, pips};

pub mod topology;

pub use topology::{BoardTopology, CornerKey, Edge, EdgeId, Vertex, VertexId, edge_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub coord: HexCoord,
    /// `None` is the desert.
    pub resource: Option<Resource>,
    pub number: Option<u8>,
    pub pips: u8,
}

impl Hex {
    pub fn new(coord: HexCoord, resource: Option<Resource>, number: Option<u8>) -> Self {
        Self {
            coord,
            resource,
            number,
            pips: pips(number),
        }
    }

    pub fn is_desert(&self) -> bool {
        self.resource.is_none()
    }
}

/// Resource and number content laid over a shared topology. Never mutated
/// after construction; a different assignment is a different board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub hexes: Vec<Hex>,
    topology: Arc<BoardTopology>,
}

impl Board {
    /// Board over the standard layout. `resources[i]` and `numbers[i]` belong
    /// to hex `i` of the catalogue.
    pub fn new(resources: &[Option<Resource>], numbers: &[Option<u8>]) -> Self {
        Self::with_topology(BoardTopology::standard(), resources, numbers)
    }

    pub fn with_topology(
        topology: Arc<BoardTopology>,
        resources: &[Option<Resource>],
        numbers: &[Option<u8>],
    ) -> Self {
        assert_eq!(
            resources.len(),
            topology.hex_count(),
            "one resource per hex"
        );
        assert_eq!(numbers.len(), topology.hex_count(), "one number slot per hex");

        let hexes = topology
            .coords()
            .iter()
            .zip(resources.iter().zip(numbers.iter()))
            .map(|(coord, (resource, number))| Hex::new(*coord, *resource, *number))
            .collect();

        Self { hexes, topology }
    }

    pub fn topology(&self) -> &BoardTopology {
        &self.topology
    }

    pub fn shared_topology(&self) -> Arc<BoardTopology> {
        Arc::clone(&self.topology)
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.topology.vertices()
    }

    pub fn edges(&self) -> &[Edge] {
        self.topology.edges()
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.topology.vertex(id)
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        self.topology.edge(id)
    }

    pub fn resources(&self) -> Vec<Option<Resource>> {
        self.hexes.iter().map(|hex| hex.resource).collect()
    }

    pub fn numbers(&self) -> Vec<Option<u8>> {
        self.hexes.iter().map(|hex| hex.number).collect()
    }

    pub fn desert_index(&self) -> Option<usize> {
        self.hexes.iter().position(Hex::is_desert)
    }

    /// Producing hexes around a vertex, desert skipped.
    pub fn producing_hexes(&self, id: VertexId) -> impl Iterator<Item = &Hex> + '_ {
        self.vertex(id)
            .adjacent_hexes
            .iter()
            .map(|&idx| &self.hexes[idx])
            .filter(|hex| !hex.is_desert())
    }

    pub fn vertex_resources(&self, id: VertexId) -> impl Iterator<Item = Resource> + '_ {
        self.producing_hexes(id).filter_map(|hex| hex.resource)
    }

    pub fn vertex_pips(&self, id: VertexId) -> u32 {
        self.producing_hexes(id).map(|hex| hex.pips as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NUMBER_TOKENS, RESOURCE_DISTRIBUTION};

    fn sorted_board() -> Board {
        let resources = RESOURCE_DISTRIBUTION.to_vec();
        let mut tokens = NUMBER_TOKENS.iter().copied();
        let numbers: Vec<Option<u8>> = resources
            .iter()
            .map(|r| r.and_then(|_| tokens.next()))
            .collect();
        Board::new(&resources, &numbers)
    }

    #[test]
    fn hexes_follow_catalogue_order() {
        let board = sorted_board();
        assert_eq!(board.hexes.len(), 19);
        assert_eq!(board.hexes[9].coord, HexCoord::new(0, 0));
        assert_eq!(board.desert_index(), Some(18));
        assert_eq!(board.hexes[18].number, None);
        assert_eq!(board.hexes[18].pips, 0);
        assert_eq!(board.hexes[0].number, Some(2));
        assert_eq!(board.hexes[0].pips, 1);
    }

    #[test]
    fn boards_share_one_topology() {
        let a = sorted_board();
        let b = sorted_board();
        assert!(Arc::ptr_eq(&a.shared_topology(), &b.shared_topology()));
        assert_eq!(a, b);
    }

    #[test]
    fn vertex_production_skips_desert() {
        let board = sorted_board();
        let desert = board.desert_index().unwrap();
        let corner = board.topology().hex_vertices(desert)[0];
        let expected: u32 = board
            .vertex(corner)
            .adjacent_hexes
            .iter()
            .filter(|&&idx| idx != desert)
            .map(|&idx| board.hexes[idx].pips as u32)
            .sum();
        assert_eq!(board.vertex_pips(corner), expected);
        assert!(board.vertex_resources(corner).count() < board.vertex(corner).adjacent_hexes.len());
    }

    #[test]
    #[should_panic(expected = "one resource per hex")]
    fn rejects_short_assignments() {
        let _ = Board::new(&[None], &[None]);
    }
}
