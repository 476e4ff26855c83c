use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::coords::{HEX_COORDS, HexCoord, axial_to_pixel, hex_corners, neighbor_coords};

pub type VertexId = u16;
/// Sorted pair of vertex ids.
pub type EdgeId = (VertexId, VertexId);

/// Corner coordinates are keyed at unit hex size, scaled by this factor and
/// rounded, i.e. three decimal places.
const CORNER_PRECISION: f64 = 1000.0;

/// Rounded corner position. Equal keys are the same physical point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CornerKey {
    pub x: i64,
    pub y: i64,
}

impl CornerKey {
    fn from_point((x, y): (f64, f64)) -> Self {
        Self {
            x: (x * CORNER_PRECISION).round() as i64,
            y: (y * CORNER_PRECISION).round() as i64,
        }
    }

    /// Corner position for hexes of radius `scale`.
    pub fn to_point(self, scale: f64) -> (f64, f64) {
        (
            self.x as f64 / CORNER_PRECISION * scale,
            self.y as f64 / CORNER_PRECISION * scale,
        )
    }
}

impl fmt::Display for CornerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub key: CornerKey,
    pub adjacent_hexes: SmallVec<[usize; 3]>,
    pub adjacent_vertices: SmallVec<[VertexId; 3]>,
    pub adjacent_edges: SmallVec<[EdgeId; 3]>,
}

impl Vertex {
    /// Stable textual id: the sorted adjacent hex indices followed by the
    /// rounded corner key, e.g. `v_4_8_9@-500,-866`.
    pub fn label(&self) -> String {
        format!(
            "v_{}@{}",
            self.adjacent_hexes.iter().join("_"),
            self.key
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
}

impl Edge {
    pub fn new(a: VertexId, b: VertexId) -> Self {
        Self {
            id: edge_id(a, b),
        }
    }

    pub fn vertices(&self) -> [VertexId; 2] {
        [self.id.0, self.id.1]
    }

    pub fn touches(&self, vertex: VertexId) -> bool {
        self.id.0 == vertex || self.id.1 == vertex
    }

    /// The endpoint that is not `vertex`, if `vertex` is an endpoint at all.
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.id.0 == vertex {
            Some(self.id.1)
        } else if self.id.1 == vertex {
            Some(self.id.0)
        } else {
            None
        }
    }
}

pub fn edge_id(a: VertexId, b: VertexId) -> EdgeId {
    if a < b { (a, b) } else { (b, a) }
}

/// Vertex and edge graph for a fixed hex layout. Depends only on geometry, so
/// one instance is shared by every board built on the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTopology {
    coords: Vec<HexCoord>,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    edge_index: HashMap<EdgeId, usize>,
    hex_vertices: Vec<[VertexId; 6]>,
    hex_neighbors: Vec<SmallVec<[usize; 6]>>,
}

static STANDARD_TOPOLOGY: Lazy<Arc<BoardTopology>> =
    Lazy::new(|| Arc::new(BoardTopology::build(&HEX_COORDS)));

impl BoardTopology {
    /// Shared graph of the standard 19-hex board.
    pub fn standard() -> Arc<BoardTopology> {
        Arc::clone(&STANDARD_TOPOLOGY)
    }

    pub fn build(coords: &[HexCoord]) -> Self {
        let mut vertices: Vec<Vertex> = Vec::new();
        let mut vertex_by_key: HashMap<CornerKey, VertexId> = HashMap::new();
        let mut hex_vertices: Vec<[VertexId; 6]> = Vec::with_capacity(coords.len());

        for (hex_idx, coord) in coords.iter().enumerate() {
            let keys = corner_keys(*coord);
            let mut corners = [0; 6];
            for (corner, key) in keys.into_iter().enumerate() {
                let id = *vertex_by_key.entry(key).or_insert_with(|| {
                    let id = VertexId::try_from(vertices.len()).expect("vertex id overflow");
                    vertices.push(Vertex {
                        id,
                        key,
                        adjacent_hexes: SmallVec::new(),
                        adjacent_vertices: SmallVec::new(),
                        adjacent_edges: SmallVec::new(),
                    });
                    id
                });
                let vertex = &mut vertices[id as usize];
                if !vertex.adjacent_hexes.contains(&hex_idx) {
                    vertex.adjacent_hexes.push(hex_idx);
                }
                corners[corner] = id;
            }
            hex_vertices.push(corners);
        }

        // Hexes are visited in index order, so these are already sorted.
        debug_assert!(
            vertices
                .iter()
                .all(|v| v.adjacent_hexes.windows(2).all(|w| w[0] < w[1]))
        );

        let mut edges: Vec<Edge> = Vec::new();
        let mut edge_index: HashMap<EdgeId, usize> = HashMap::new();
        for corners in &hex_vertices {
            for i in 0..6 {
                let a = corners[i];
                let b = corners[(i + 1) % 6];
                let edge = Edge::new(a, b);
                if edge_index.contains_key(&edge.id) {
                    continue;
                }
                edge_index.insert(edge.id, edges.len());
                edges.push(edge);

                link(&mut vertices[a as usize], b, edge.id);
                link(&mut vertices[b as usize], a, edge.id);
            }
        }

        let index_of: HashMap<HexCoord, usize> = coords
            .iter()
            .enumerate()
            .map(|(idx, coord)| (*coord, idx))
            .collect();
        let hex_neighbors = coords
            .iter()
            .map(|coord| {
                neighbor_coords(*coord)
                    .iter()
                    .filter_map(|neighbor| index_of.get(neighbor).copied())
                    .collect()
            })
            .collect();

        Self {
            coords: coords.to_vec(),
            vertices,
            edges,
            edge_index,
            hex_vertices,
            hex_neighbors,
        }
    }

    pub fn coords(&self) -> &[HexCoord] {
        &self.coords
    }

    pub fn hex_count(&self) -> usize {
        self.coords.len()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        self.vertices
            .get(id as usize)
            .unwrap_or_else(|| panic!("vertex {id} missing from topology"))
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        let idx = self
            .edge_index
            .get(&id)
            .unwrap_or_else(|| panic!("edge {id:?} missing from topology"));
        &self.edges[*idx]
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edge_index.contains_key(&id)
    }

    /// Corner vertices of a hex, in corner order.
    pub fn hex_vertices(&self, hex_idx: usize) -> &[VertexId; 6] {
        &self.hex_vertices[hex_idx]
    }

    /// On-board hexes sharing a side with `hex_idx`.
    pub fn hex_neighbors(&self, hex_idx: usize) -> &[usize] {
        &self.hex_neighbors[hex_idx]
    }

    /// Every unordered pair of neighboring hexes, each reported once as `(i, j)` with `i < j`.
    pub fn neighbor_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.hex_neighbors
            .iter()
            .enumerate()
            .flat_map(|(i, neighbors)| neighbors.iter().filter(move |&&j| j > i).map(move |&j| (i, j)))
    }
}

fn link(vertex: &mut Vertex, other: VertexId, edge: EdgeId) {
    if !vertex.adjacent_vertices.contains(&other) {
        vertex.adjacent_vertices.push(other);
    }
    if !vertex.adjacent_edges.contains(&edge) {
        vertex.adjacent_edges.push(edge);
    }
}

fn corner_keys(coord: HexCoord) -> [CornerKey; 6] {
    let (cx, cy) = axial_to_pixel(coord, 1.0);
    hex_corners(cx, cy, 1.0).map(CornerKey::from_point)
}
