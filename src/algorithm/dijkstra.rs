use log::debug;
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::Add;

use crate::algorithm::{PointToPointSearch, SearchResult};
use crate::data_structures::FrontierQueue;
use crate::graph::network::{Point, RoadNetwork};
use crate::graph::Graph;

/// Uniform-cost search specialized to a single target.
///
/// Classic Dijkstra over non-negative weights with lazy deletion: relaxing
/// an edge pushes a fresh frontier entry instead of reordering the old one,
/// and entries that no longer match the distance table are skipped when
/// popped. The search stops as soon as the target is popped, so on a
/// unit-weight network it settles exactly the vertices closer than the
/// target plus the target itself.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Finds one shortest route between two grid positions of a road
    /// network, endpoints included.
    ///
    /// Returns an empty vector when either endpoint has no node in the
    /// network or when no route exists - both are normal outcomes, not
    /// errors. Among equal-length routes the result is deterministic:
    /// frontier ties pop the lower vertex index first.
    pub fn shortest_route<W>(&self, network: &RoadNetwork<W>, start: Point, end: Point) -> Vec<Point>
    where
        W: Copy + Ord + Debug + Zero + Add<Output = W>,
    {
        let (Some(source), Some(target)) = (network.index_of(start), network.index_of(end)) else {
            debug!("route {start} -> {end}: endpoint not on the network");
            return Vec::new();
        };

        let result = self.search(network, source, target);
        match <Dijkstra as PointToPointSearch<W, RoadNetwork<W>>>::vertex_path(self, &result) {
            Some(vertices) => {
                debug!("route {start} -> {end}: {} steps", vertices.len() - 1);
                vertices
                    .into_iter()
                    .map(|v| network.nodes()[v])
                    .collect()
            }
            None => {
                debug!("route {start} -> {end}: no path");
                Vec::new()
            }
        }
    }
}

impl<W, G> PointToPointSearch<W, G> for Dijkstra
where
    W: Copy + Ord + Debug + Zero + Add<Output = W>,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn search(&self, graph: &G, source: usize, target: usize) -> SearchResult<W> {
        let n = graph.vertex_count();

        // Per-call search state: distance = infinity, predecessor = none.
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        if source >= n || target >= n {
            return SearchResult {
                distances,
                predecessors,
                source,
                target,
                reached: false,
            };
        }

        distances[source] = Some(W::zero());
        let mut frontier = FrontierQueue::new();
        frontier.push(source, W::zero());

        while let Some((u, dist_u)) = frontier.pop() {
            // Stale entry: a shorter path to u was settled after this was
            // pushed.
            if let Some(best) = distances[u] {
                if best < dist_u {
                    continue;
                }
            }

            if u == target {
                return SearchResult {
                    distances,
                    predecessors,
                    source,
                    target,
                    reached: true,
                };
            }

            // Relax all outgoing edges.
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = dist_u + weight;
                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    frontier.push(v, candidate);
                }
            }
        }

        SearchResult {
            distances,
            predecessors,
            source,
            target,
            reached: false,
        }
    }
}
