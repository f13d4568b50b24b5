use std::collections::HashSet;

use gridroute::graph::generators::{city_grid, obstacle_grid, street_grid};
use gridroute::graph::Graph;
use gridroute::parse::{parse_map, parse_map_with_signals};
use gridroute::render::render_within;
use gridroute::{Dijkstra, Error, Point};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

// 2x3 grid: (1,1) -> (1,2) -> {(1,3), (2,2)}, (2,2) -> (1,2).
// (1,3) is referenced but its own cell is 0.
const MAP: &str = "\"(1,2)\",\"(1,3),(2,2)\",0\n0,\"(1,2)\",0\n";

#[test]
fn parses_nodes_and_edges() {
    let map = parse_map(MAP).unwrap();
    assert_eq!((map.rows, map.cols), (2, 3));
    assert_eq!(map.network.vertex_count(), 4);
    assert_eq!(map.network.edge_count(), 4);
}

#[test]
fn nodes_appear_in_first_mention_order() {
    let map = parse_map(MAP).unwrap();
    assert_eq!(
        map.network.nodes(),
        &[p(1, 1), p(1, 2), p(1, 3), p(2, 2)]
    );
}

#[test]
fn referenced_blank_cell_becomes_a_dead_end() {
    let map = parse_map(MAP).unwrap();
    assert!(map.network.is_road(p(1, 3)));

    let vertex = map.network.index_of(p(1, 3)).unwrap();
    assert_eq!(map.network.neighbors(vertex).count(), 0);
}

#[test]
fn routes_across_a_parsed_map() {
    let map = parse_map(MAP).unwrap();
    let route = Dijkstra::new().shortest_route(&map.network, p(1, 1), p(1, 3));
    assert_eq!(route, vec![p(1, 1), p(1, 2), p(1, 3)]);
}

#[test]
fn signal_grid_annotates_nodes() {
    let signals = "0,2,0\n0,0,0\n";
    let map = parse_map_with_signals(MAP, Some(signals)).unwrap();

    assert_eq!(map.signal_phase(p(1, 2)), Some(1));
    assert_eq!(map.signal_phase(p(1, 1)), None);
    assert_eq!(map.signal_phase(p(2, 2)), None);
    // Not a road node at all.
    assert_eq!(map.signal_phase(p(2, 1)), None);
}

#[test]
fn signal_grid_shape_must_match() {
    let result = parse_map_with_signals(MAP, Some("0,0\n0,0\n"));
    assert!(matches!(result, Err(Error::SignalGridMismatch { .. })));
}

#[test]
fn bad_signal_value_is_rejected() {
    let result = parse_map_with_signals(MAP, Some("0,abc,0\n0,0,0\n"));
    assert!(matches!(result, Err(Error::MalformedCell { .. })));
}

#[test]
fn garbage_cell_is_rejected() {
    let result = parse_map("x,0\n");
    assert!(matches!(
        result,
        Err(Error::MalformedCell { row: 0, col: 0, .. })
    ));
}

#[test]
fn unterminated_coordinate_is_rejected() {
    let result = parse_map("\"(1,2\",0\n");
    assert!(matches!(result, Err(Error::MalformedCell { .. })));
}

#[test]
fn ragged_grid_is_rejected() {
    let result = parse_map("0,0\n0\n");
    assert!(matches!(
        result,
        Err(Error::RaggedGrid {
            row: 1,
            got: 1,
            expected: 2
        })
    ));
}

#[test]
fn empty_grid_is_rejected() {
    assert!(matches!(parse_map(""), Err(Error::EmptyGrid)));
    assert!(matches!(parse_map("\n\n"), Err(Error::EmptyGrid)));
}

#[test]
fn neighbor_outside_the_grid_is_rejected() {
    let result = parse_map("\"(9,9)\"\n");
    assert!(matches!(
        result,
        Err(Error::NeighborOutsideGrid {
            nx: 9,
            ny: 9,
            ..
        })
    ));
}

#[test]
fn reachability_follows_edge_direction() {
    let map = parse_map(MAP).unwrap();
    let network = &map.network;

    assert!(network.path_exists(p(1, 1), p(2, 2)));
    assert!(!network.path_exists(p(1, 3), p(1, 1)));

    let reachable = network.reachable_from(p(2, 2));
    let expected: HashSet<Point> = [p(2, 2), p(1, 2), p(1, 3)].into_iter().collect();
    assert_eq!(reachable, expected);
}

#[test]
fn renders_route_markers_over_the_grid() {
    let map = parse_map(MAP).unwrap();
    let route = Dijkstra::new().shortest_route(&map.network, p(1, 1), p(1, 3));

    let rendered = render_within(
        &map.network,
        &route,
        p(1, 1),
        p(map.rows as i32, map.cols as i32),
    );
    assert_eq!(rendered, "[S] [P] [G] \n[X] [_] [X] \n");
}

#[test]
fn renders_plain_grid_for_an_empty_route() {
    let map = parse_map(MAP).unwrap();
    let rendered = render_within(
        &map.network,
        &[],
        p(1, 1),
        p(map.rows as i32, map.cols as i32),
    );
    assert_eq!(rendered, "[_] [_] [_] \n[X] [_] [X] \n");
}

#[test]
fn street_grid_is_fully_connected() {
    let network = street_grid(3, 4);
    assert_eq!(network.vertex_count(), 12);
    // 2 * (rows * (cols-1) + cols * (rows-1)) directed edges.
    assert_eq!(network.edge_count(), 34);

    let route = Dijkstra::new().shortest_route(&network, p(1, 1), p(3, 4));
    assert_eq!(route.len() - 1, 5);
}

#[test]
fn city_grid_connects_its_intersections() {
    let (network, intersections) = city_grid(40, 6);
    assert!(!intersections.is_empty());

    let dijkstra = Dijkstra::new();
    let first = intersections[0];
    for &intersection in &intersections {
        assert!(network.is_road(intersection));
        let route = dijkstra.shortest_route(&network, first, intersection);
        assert!(!route.is_empty(), "no route to intersection {intersection}");
    }
}

#[test]
fn obstacle_grid_extremes() {
    let full = obstacle_grid(5, 5, 0.0);
    assert_eq!(full.vertex_count(), 25);
    let route = Dijkstra::new().shortest_route(&full, p(1, 1), p(5, 5));
    assert_eq!(route.len() - 1, 8);

    let blocked = obstacle_grid(5, 5, 1.0);
    assert_eq!(blocked.vertex_count(), 0);
    assert!(Dijkstra::new()
        .shortest_route(&blocked, p(1, 1), p(5, 5))
        .is_empty());
}
