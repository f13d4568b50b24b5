//! ASCII rendering of road networks and routes for terminal debugging.
//!
//! Cells render as `[_] ` (road), `[X] ` (blocked), `[P] ` (route),
//! `[S] `/`[G] ` (route endpoints). The x coordinate runs down the rows.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::network::{Point, RoadNetwork};

/// Renders the walkable cells of a network over its coordinate bounds
pub fn render_network<W>(network: &RoadNetwork<W>) -> String
where
    W: Copy + Debug,
{
    match network.bounds() {
        Some((min, max)) => render_within(network, &[], min, max),
        None => String::new(),
    }
}

/// Renders a route over the network's coordinate bounds.
///
/// An empty route renders the plain network.
pub fn render_route<W>(network: &RoadNetwork<W>, route: &[Point]) -> String
where
    W: Copy + Debug,
{
    match network.bounds() {
        Some((min, max)) => render_within(network, route, min, max),
        None => String::new(),
    }
}

/// Renders a route over an explicit cell range, both corners included.
///
/// Useful when the map's full extent is known (a parsed grid) and should
/// show even where the outermost cells are blocked.
pub fn render_within<W>(network: &RoadNetwork<W>, route: &[Point], min: Point, max: Point) -> String
where
    W: Copy + Debug,
{
    let mut markers: HashMap<Point, &str> = route.iter().map(|&p| (p, "[P] ")).collect();
    if route.len() >= 2 {
        markers.insert(route[0], "[S] ");
        markers.insert(route[route.len() - 1], "[G] ");
    }

    let mut out = String::new();
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            let point = Point::new(x, y);
            let cell = markers.get(&point).copied().unwrap_or(if network.is_road(point) {
                "[_] "
            } else {
                "[X] "
            });
            out.push_str(cell);
        }
        out.push('\n');
    }
    out
}
