use std::fmt::Debug;

use crate::graph::Graph;

/// Working set produced by one search call.
///
/// Distances and predecessors are tables parallel to the graph's node
/// table; `None` stands for an infinite tentative distance. The whole
/// struct is built fresh per call and discarded with it - nothing persists
/// between searches.
#[derive(Debug, Clone)]
pub struct SearchResult<W>
where
    W: Copy + Debug,
{
    /// Tentative distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex on the best known path
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex of the search
    pub source: usize,

    /// Target vertex the search aimed for
    pub target: usize,

    /// Whether the target was settled before the frontier drained
    pub reached: bool,
}

/// Trait for single-source, single-target shortest-path searches
pub trait PointToPointSearch<W, G>
where
    W: Copy + Debug,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Runs the search from `source` until `target` is settled or the
    /// frontier drains. Out-of-range endpoints yield an unreached result
    /// rather than an error.
    fn search(&self, graph: &G, source: usize, target: usize) -> SearchResult<W>;

    /// Reconstructs the vertex path of a search by walking predecessor
    /// links back from the target, then reversing. `None` when the target
    /// was not reached.
    fn vertex_path(&self, result: &SearchResult<W>) -> Option<Vec<usize>> {
        if !result.reached {
            return None;
        }

        // Predecessor links form a tree rooted at the source: a link is
        // only ever written alongside a strictly smaller distance.
        let mut path = vec![result.target];
        let mut current = result.target;
        while current != result.source {
            current = result.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}
