//! Road-network generators for tests, benchmarks and demos.

use rand::prelude::*;
use std::collections::HashMap;

use crate::graph::network::{Point, RoadNetwork};

/// Generates a fully connected street grid of `rows` x `cols` cells.
///
/// Cells use 1-based map coordinates with x running down the rows; every
/// cell is connected to its 4-neighbors in both directions.
pub fn street_grid(rows: i32, cols: i32) -> RoadNetwork<u32> {
    assert!(rows > 0 && cols > 0, "grid dimensions must be positive");

    let mut nodes = Vec::with_capacity((rows * cols) as usize);
    for x in 1..=rows {
        for y in 1..=cols {
            nodes.push(Point::new(x, y));
        }
    }

    let index = |x: i32, y: i32| ((x - 1) * cols + (y - 1)) as usize;
    let mut neighbors = Vec::with_capacity(nodes.len());
    for x in 1..=rows {
        for y in 1..=cols {
            let mut out = Vec::with_capacity(4);
            for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let (nx, ny) = (x + dx, y + dy);
                if nx >= 1 && ny >= 1 && nx <= rows && ny <= cols {
                    out.push(index(nx, ny));
                }
            }
            neighbors.push(out);
        }
    }

    RoadNetwork::from_parts(nodes, neighbors).expect("grid adjacency is in range")
}

/// Generates a city-style network: arterial roads every `spacing` cells,
/// joined at two-way intersections, on a `size` x `size` grid.
///
/// Only cells on a road are materialized, so the resulting network is
/// sparse. Returns the network together with the intersection positions
/// (the cells a signal would sit on).
pub fn city_grid(size: i32, spacing: i32) -> (RoadNetwork<u32>, Vec<Point>) {
    assert!(spacing > 0, "spacing must be positive");
    assert!(size > 2 * spacing, "size must exceed twice the spacing");

    let mut connections: HashMap<Point, Vec<Point>> = HashMap::new();
    let mut order: Vec<Point> = Vec::new();
    let mut intersections = Vec::new();

    let mut connect_one_way = |order: &mut Vec<Point>, from: Point, to: Point| {
        for p in [from, to] {
            if !connections.contains_key(&p) {
                connections.insert(p, Vec::new());
                order.push(p);
            }
        }
        let out = connections.get_mut(&from).expect("from was just inserted");
        if !out.contains(&to) {
            out.push(to);
        }
    };

    let mut arterials = Vec::new();
    let mut coord = spacing;
    while coord < size - spacing {
        arterials.push(coord);
        coord += spacing;
    }

    // Intersections, connected to their four adjacent cells both ways.
    for &x in &arterials {
        for &y in &arterials {
            let center = Point::new(x, y);
            intersections.push(center);
            for (dx, dy) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
                let next = Point::new(x + dx, y + dy);
                if next.x > 0 && next.x < size && next.y > 0 && next.y < size {
                    connect_one_way(&mut order, center, next);
                    connect_one_way(&mut order, next, center);
                }
            }
        }
    }

    // Two-way road segments between adjacent intersections, cell by cell.
    for &x in &arterials {
        for &y in &arterials {
            if y + spacing < size {
                for step in 0..spacing {
                    let a = Point::new(x, y + step);
                    let b = Point::new(x, y + step + 1);
                    connect_one_way(&mut order, a, b);
                    connect_one_way(&mut order, b, a);
                }
            }
            if x + spacing < size {
                for step in 0..spacing {
                    let a = Point::new(x + step, y);
                    let b = Point::new(x + step + 1, y);
                    connect_one_way(&mut order, a, b);
                    connect_one_way(&mut order, b, a);
                }
            }
        }
    }

    let index: HashMap<Point, usize> = order.iter().enumerate().map(|(i, &p)| (p, i)).collect();
    let neighbors = order
        .iter()
        .map(|p| connections[p].iter().map(|to| index[to]).collect())
        .collect();

    let network = RoadNetwork::from_parts(order, neighbors).expect("city adjacency is in range");
    (network, intersections)
}

/// Generates a street grid with cells knocked out at random.
///
/// Each cell survives with probability `1 - obstacle_ratio`; edges exist
/// only between surviving 4-neighbors, in both directions. Useful for
/// exercising searches on disconnected networks.
pub fn obstacle_grid(rows: i32, cols: i32, obstacle_ratio: f64) -> RoadNetwork<u32> {
    assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
    assert!(
        (0.0..=1.0).contains(&obstacle_ratio),
        "obstacle_ratio must be in [0, 1]"
    );

    let mut rng = rand::thread_rng();
    let mut open = Vec::new();
    let mut index = HashMap::new();
    for x in 1..=rows {
        for y in 1..=cols {
            if !rng.gen_bool(obstacle_ratio) {
                let point = Point::new(x, y);
                index.insert(point, open.len());
                open.push(point);
            }
        }
    }

    let neighbors = open
        .iter()
        .map(|p| {
            [(0, -1), (1, 0), (0, 1), (-1, 0)]
                .iter()
                .filter_map(|&(dx, dy)| index.get(&Point::new(p.x + dx, p.y + dy)).copied())
                .collect()
        })
        .collect();

    RoadNetwork::from_parts(open, neighbors).expect("obstacle adjacency is in range")
}
