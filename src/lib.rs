//! Gridroute - point-to-point shortest-path routing over road networks
//! embedded in a 2-D grid.
//!
//! A road network is supplied wholesale per call site: a table of node
//! coordinates plus a per-node list of neighbor indices, every edge carrying
//! an implicit unit weight. Routes are answered with a uniform-cost search
//! that terminates as soon as the target is settled.
//!
//! Absence of a route (or of an endpoint in the node table) is a normal
//! outcome reported as an empty path; only a malformed network - a neighbor
//! table of the wrong length or an index outside the node table - is an
//! error.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
pub mod parse;
pub mod render;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, PointToPointSearch, SearchResult};
/// Re-export main types for convenient use
pub use graph::network::{Point, RoadNetwork};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("neighbor table has {got} entries for {expected} nodes")]
    NeighborCountMismatch { expected: usize, got: usize },

    #[error("node {node} lists out-of-range neighbor index {index} (node count {count})")]
    NeighborOutOfRange {
        node: usize,
        index: usize,
        count: usize,
    },

    #[error("map grid is empty")]
    EmptyGrid,

    #[error("ragged map grid: row {row} has {got} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("malformed cell at row {row}, column {col}: {reason}")]
    MalformedCell {
        row: usize,
        col: usize,
        reason: String,
    },

    #[error("cell ({x},{y}) references neighbor ({nx},{ny}) outside the {rows}x{cols} grid")]
    NeighborOutsideGrid {
        x: i32,
        y: i32,
        nx: i32,
        ny: i32,
        rows: usize,
        cols: usize,
    },

    #[error("signal grid is {got_rows}x{got_cols}, map grid is {rows}x{cols}")]
    SignalGridMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// One-shot routing over a network supplied as raw parts.
///
/// Builds a unit-weight [`RoadNetwork`] from `nodes` and `neighbors` and
/// returns one shortest route from `start` to `end`, endpoints included.
/// An empty vector means `start` or `end` is not in the node table, or no
/// route exists; a malformed neighbor table is an [`Error`].
pub fn find_path(
    nodes: Vec<Point>,
    neighbors: Vec<Vec<usize>>,
    start: Point,
    end: Point,
) -> Result<Vec<Point>> {
    let network = RoadNetwork::<u32>::from_parts(nodes, neighbors)?;
    Ok(Dijkstra::new().shortest_route(&network, start, end))
}
