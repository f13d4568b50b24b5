use num_traits::One;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::Debug;

use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A node position on the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// A directed road network embedded in a 2-D grid.
///
/// Vertices are dense indices into the node table. A coordinate index maps a
/// grid position to its vertex; when the node table holds duplicate
/// coordinates, the first-inserted node wins and later duplicates stay
/// addressable by index only.
///
/// The network is immutable once built: callers supply the whole graph up
/// front and validation happens at construction, so every stored edge index
/// is known to be in range.
#[derive(Debug, Clone)]
pub struct RoadNetwork<W = u32>
where
    W: Copy + Debug,
{
    nodes: Vec<Point>,
    edges: Vec<Vec<(usize, W)>>,
    coord_index: HashMap<Point, usize>,
}

impl<W> RoadNetwork<W>
where
    W: Copy + Debug,
{
    /// Builds a unit-weight network from a node table and per-node neighbor
    /// index lists.
    ///
    /// `neighbors[i]` holds the vertices reachable from node `i` by one
    /// directed edge of weight one. The neighbor table must be exactly as
    /// long as the node table and every index must be in range; anything
    /// else is a hard error, never an out-of-bounds access.
    pub fn from_parts(nodes: Vec<Point>, neighbors: Vec<Vec<usize>>) -> Result<Self>
    where
        W: One,
    {
        let count = nodes.len();
        if neighbors.len() != count {
            return Err(Error::NeighborCountMismatch {
                expected: count,
                got: neighbors.len(),
            });
        }

        let mut edges = Vec::with_capacity(count);
        for (node, list) in neighbors.into_iter().enumerate() {
            let mut out = Vec::with_capacity(list.len());
            for index in list {
                if index >= count {
                    return Err(Error::NeighborOutOfRange { node, index, count });
                }
                out.push((index, W::one()));
            }
            edges.push(out);
        }

        Ok(Self::build(nodes, edges))
    }

    /// Builds a network with caller-supplied edge weights.
    ///
    /// Same validation as [`RoadNetwork::from_parts`]; `neighbors[i]` lists
    /// (target, weight) pairs.
    pub fn from_weighted_parts(nodes: Vec<Point>, neighbors: Vec<Vec<(usize, W)>>) -> Result<Self> {
        let count = nodes.len();
        if neighbors.len() != count {
            return Err(Error::NeighborCountMismatch {
                expected: count,
                got: neighbors.len(),
            });
        }

        for (node, list) in neighbors.iter().enumerate() {
            for &(index, _) in list {
                if index >= count {
                    return Err(Error::NeighborOutOfRange { node, index, count });
                }
            }
        }

        Ok(Self::build(nodes, neighbors))
    }

    fn build(nodes: Vec<Point>, edges: Vec<Vec<(usize, W)>>) -> Self {
        let mut coord_index = HashMap::with_capacity(nodes.len());
        for (i, &point) in nodes.iter().enumerate() {
            // First node at a coordinate wins; duplicates keep their index
            // but are not addressable by coordinate.
            coord_index.entry(point).or_insert(i);
        }

        RoadNetwork {
            nodes,
            edges,
            coord_index,
        }
    }

    /// Resolves a grid position to its vertex index
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.coord_index.get(&point).copied()
    }

    /// Returns the coordinates of a vertex
    pub fn node(&self, vertex: usize) -> Option<Point> {
        self.nodes.get(vertex).copied()
    }

    /// The full node table, in insertion order
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Returns true if a road node exists at the given grid position
    pub fn is_road(&self, point: Point) -> bool {
        self.coord_index.contains_key(&point)
    }

    /// Returns an iterator over the neighbor vertices of a vertex
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|&(target, _)| target)
    }

    /// Coordinate bounding box of the node table as (min, max), or `None`
    /// for an empty network
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let first = *self.nodes.first()?;
        let mut min = first;
        let mut max = first;
        for &p in &self.nodes {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Returns true if `end` can be reached from `start` along directed
    /// edges. Both positions must be road nodes.
    pub fn path_exists(&self, start: Point, end: Point) -> bool {
        let (Some(source), Some(target)) = (self.index_of(start), self.index_of(end)) else {
            return false;
        };
        self.dfs_from(source).contains(&target)
    }

    /// Collects every grid position reachable from `start`, itself included.
    /// Returns an empty set when `start` is not a road node.
    pub fn reachable_from(&self, start: Point) -> HashSet<Point> {
        match self.index_of(start) {
            Some(source) => self
                .dfs_from(source)
                .into_iter()
                .map(|v| self.nodes[v])
                .collect(),
            None => HashSet::new(),
        }
    }

    fn dfs_from(&self, source: usize) -> HashSet<usize> {
        let mut visited = HashSet::new();
        let mut stack = vec![source];
        while let Some(vertex) = stack.pop() {
            if visited.insert(vertex) {
                for &(target, _) in &self.edges[vertex] {
                    if !visited.contains(&target) {
                        stack.push(target);
                    }
                }
            }
        }
        visited
    }
}

impl<W> Graph<W> for RoadNetwork<W>
where
    W: Copy + Debug,
{
    fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.iter().map(|out| out.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.edges.get(vertex) {
            Some(out) => Box::new(out.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.nodes.len()
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges
            .get(from)
            .is_some_and(|out| out.iter().any(|&(target, _)| target == to))
    }
}
