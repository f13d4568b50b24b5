use std::collections::VecDeque;

use gridroute::graph::generators::{obstacle_grid, street_grid};
use gridroute::graph::Graph;
use gridroute::{find_path, Dijkstra, Error, Point, PointToPointSearch, RoadNetwork};
use ordered_float::OrderedFloat;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

// The three-node one-way chain: (0,0) -> (1,0) -> (1,1)
fn chain_network() -> RoadNetwork<u32> {
    RoadNetwork::from_parts(
        vec![p(0, 0), p(1, 0), p(1, 1)],
        vec![vec![1], vec![2], vec![]],
    )
    .unwrap()
}

// Breadth-first reference distance in edges, for cross-checking the search
fn bfs_distance(network: &RoadNetwork<u32>, start: Point, end: Point) -> Option<usize> {
    let source = network.index_of(start)?;
    let target = network.index_of(end)?;

    let mut dist = vec![None; network.vertex_count()];
    dist[source] = Some(0usize);
    let mut queue = VecDeque::from([source]);
    while let Some(u) = queue.pop_front() {
        for v in network.neighbors(u) {
            if dist[v].is_none() {
                dist[v] = Some(dist[u].unwrap() + 1);
                queue.push_back(v);
            }
        }
    }
    dist[target]
}

#[test]
fn directed_chain_routes_forward() {
    let network = chain_network();
    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(1, 1));
    assert_eq!(route, vec![p(0, 0), p(1, 0), p(1, 1)]);
}

#[test]
fn no_route_against_one_way_edges() {
    let network = chain_network();
    let route = Dijkstra::new().shortest_route(&network, p(1, 1), p(0, 0));
    assert!(route.is_empty(), "reverse edges were never declared");
}

#[test]
fn single_node_start_equals_end() {
    let network = RoadNetwork::<u32>::from_parts(vec![p(0, 0)], vec![vec![]]).unwrap();
    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(0, 0));
    assert_eq!(route, vec![p(0, 0)]);
}

#[test]
fn start_equals_end_on_larger_network() {
    let network = street_grid(5, 5);
    let route = Dijkstra::new().shortest_route(&network, p(3, 3), p(3, 3));
    assert_eq!(route, vec![p(3, 3)]);
}

#[test]
fn absent_endpoints_return_empty() {
    let network = chain_network();
    let dijkstra = Dijkstra::new();
    assert!(dijkstra.shortest_route(&network, p(9, 9), p(1, 1)).is_empty());
    assert!(dijkstra.shortest_route(&network, p(0, 0), p(9, 9)).is_empty());
}

#[test]
fn empty_network_routes_nowhere() {
    let route = find_path(vec![], vec![], p(0, 0), p(1, 1)).unwrap();
    assert!(route.is_empty());
}

#[test]
fn route_starts_and_ends_at_the_endpoints() {
    let network = street_grid(6, 6);
    let route = Dijkstra::new().shortest_route(&network, p(1, 1), p(6, 6));

    assert_eq!(route.first(), Some(&p(1, 1)));
    assert_eq!(route.last(), Some(&p(6, 6)));
    // Manhattan distance on a full 4-neighbor grid.
    assert_eq!(route.len() - 1, 10);
}

#[test]
fn route_only_uses_declared_edges() {
    let network = street_grid(6, 6);
    let route = Dijkstra::new().shortest_route(&network, p(1, 1), p(6, 6));

    for pair in route.windows(2) {
        let from = network.index_of(pair[0]).unwrap();
        let to = network.index_of(pair[1]).unwrap();
        assert!(network.has_edge(from, to), "{} -> {} is not an edge", pair[0], pair[1]);
    }
}

#[test]
fn matches_breadth_first_reference() {
    let network = obstacle_grid(8, 8, 0.25);
    let Some(&start) = network.nodes().first() else {
        return;
    };

    let dijkstra = Dijkstra::new();
    for &end in network.nodes() {
        let route = dijkstra.shortest_route(&network, start, end);
        match bfs_distance(&network, start, end) {
            Some(distance) => {
                assert!(!route.is_empty(), "{start} -> {end} should be reachable");
                assert_eq!(route.len() - 1, distance, "{start} -> {end}");
                assert_eq!(route.first(), Some(&start));
                assert_eq!(route.last(), Some(&end));
            }
            None => assert!(route.is_empty(), "{start} -> {end} should be unreachable"),
        }
    }
}

#[test]
fn identical_inputs_give_identical_routes() {
    let network = obstacle_grid(10, 10, 0.2);
    let dijkstra = Dijkstra::new();
    let nodes = network.nodes().to_vec();

    for &end in nodes.iter().take(20) {
        let first = dijkstra.shortest_route(&network, nodes[0], end);
        let second = dijkstra.shortest_route(&network, nodes[0], end);
        assert_eq!(first, second);
    }
}

#[test]
fn ties_break_toward_the_lower_vertex_index() {
    // Diamond with two equal-length routes; the neighbor list deliberately
    // offers the higher-index branch first.
    let network = RoadNetwork::<u32>::from_parts(
        vec![p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
        vec![vec![2, 1], vec![3], vec![3], vec![]],
    )
    .unwrap();

    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(1, 1));
    assert_eq!(route, vec![p(0, 0), p(1, 0), p(1, 1)]);
}

#[test]
fn disconnected_clusters_return_empty() {
    let network = RoadNetwork::<u32>::from_parts(
        vec![p(0, 0), p(0, 1), p(5, 5), p(5, 6)],
        vec![vec![1], vec![0], vec![3], vec![2]],
    )
    .unwrap();

    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(5, 5));
    assert!(route.is_empty());
}

#[test]
fn out_of_range_neighbor_index_is_rejected() {
    let result = RoadNetwork::<u32>::from_parts(vec![p(0, 0), p(1, 0)], vec![vec![1], vec![7]]);
    assert!(matches!(
        result,
        Err(Error::NeighborOutOfRange {
            node: 1,
            index: 7,
            count: 2
        })
    ));
}

#[test]
fn neighbor_table_length_mismatch_is_rejected() {
    let result = RoadNetwork::<u32>::from_parts(vec![p(0, 0), p(1, 0)], vec![vec![1]]);
    assert!(matches!(
        result,
        Err(Error::NeighborCountMismatch {
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn find_path_surfaces_malformed_input() {
    let result = find_path(vec![p(0, 0)], vec![vec![3]], p(0, 0), p(0, 0));
    assert!(matches!(result, Err(Error::NeighborOutOfRange { .. })));
}

#[test]
fn duplicate_coordinates_resolve_to_the_first_node() {
    // Two nodes share (5,5); only the first has an edge onward. Lookups
    // must resolve through the first-inserted node.
    let network = RoadNetwork::<u32>::from_parts(
        vec![p(5, 5), p(5, 5), p(6, 5)],
        vec![vec![2], vec![], vec![]],
    )
    .unwrap();

    assert_eq!(network.index_of(p(5, 5)), Some(0));
    let route = Dijkstra::new().shortest_route(&network, p(5, 5), p(6, 5));
    assert_eq!(route, vec![p(5, 5), p(6, 5)]);
}

#[test]
fn search_with_out_of_range_vertices_is_soft() {
    let network = chain_network();
    let result = Dijkstra::new().search(&network, 99, 0);
    assert!(!result.reached);
    assert!(<Dijkstra as PointToPointSearch<u32, RoadNetwork<u32>>>::vertex_path(&Dijkstra::new(), &result).is_none());
}

#[test]
fn weighted_edges_route_by_total_weight() {
    // Direct edge costs 5, the detour 1 + 1; the detour must win.
    let network = RoadNetwork::from_weighted_parts(
        vec![p(0, 0), p(1, 0), p(2, 0)],
        vec![vec![(2, 5u32), (1, 1)], vec![(2, 1)], vec![]],
    )
    .unwrap();

    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(2, 0));
    assert_eq!(route, vec![p(0, 0), p(1, 0), p(2, 0)]);
}

#[test]
fn float_weights_drop_in() {
    let network = RoadNetwork::from_weighted_parts(
        vec![p(0, 0), p(1, 0), p(2, 0)],
        vec![
            vec![(2, OrderedFloat(5.0)), (1, OrderedFloat(1.5))],
            vec![(2, OrderedFloat(1.5))],
            vec![],
        ],
    )
    .unwrap();

    let route = Dijkstra::new().shortest_route(&network, p(0, 0), p(2, 0));
    assert_eq!(route, vec![p(0, 0), p(1, 0), p(2, 0)]);
}
