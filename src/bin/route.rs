//! Loads a map grid from disk, routes between two positions and prints the
//! result over the grid.
//!
//! Usage: route <map.csv> [signals.csv] <start_x> <start_y> <end_x> <end_y>

use std::env;
use std::fs;
use std::process;

use gridroute::graph::network::Point;
use gridroute::parse::parse_map_with_signals;
use gridroute::render::render_within;
use gridroute::Dijkstra;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let (map_path, signal_path, coords) = match args.len() {
        6 => (&args[1], None, &args[2..6]),
        7 => (&args[1], Some(&args[2]), &args[3..7]),
        _ => {
            eprintln!("usage: route <map.csv> [signals.csv] <start_x> <start_y> <end_x> <end_y>");
            process::exit(2);
        }
    };

    let mut parsed = [0i32; 4];
    for (slot, raw) in parsed.iter_mut().zip(coords) {
        *slot = raw.parse()?;
    }
    let start = Point::new(parsed[0], parsed[1]);
    let end = Point::new(parsed[2], parsed[3]);

    let map_text = fs::read_to_string(map_path)?;
    let signal_text = match signal_path {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let map = parse_map_with_signals(&map_text, signal_text.as_deref())?;
    println!(
        "loaded {}x{} map: {} nodes",
        map.rows,
        map.cols,
        map.network.nodes().len()
    );

    let route = Dijkstra::new().shortest_route(&map.network, start, end);
    if route.is_empty() {
        println!("no route found between {start} and {end}");
        process::exit(1);
    }

    let min = Point::new(1, 1);
    let max = Point::new(map.rows as i32, map.cols as i32);
    print!("{}", render_within(&map.network, &route, min, max));
    println!("{} steps from {start} to {end}", route.len() - 1);

    Ok(())
}
