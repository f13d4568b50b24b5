//! Parser for the grid map format.
//!
//! A map is a rectangular CSV grid. A cell holding `0` (or nothing) is not
//! a road; any other cell lists the grid positions reachable from it as a
//! quoted coordinate list, e.g. `"(2,3),(3,3)"`. Coordinates are 1-based
//! with x running down the rows: the cell at 0-based row r, column c is the
//! position (r+1, c+1).
//!
//! A second grid of identical shape may mark signalized cells: `0` for
//! none, a positive number for a signal whose phase is the number minus
//! one.
//!
//! A coordinate referenced as a neighbor becomes a node even when its own
//! cell is `0`; such nodes have no outgoing edges. References outside the
//! grid, ragged rows and unparsable cells are hard errors.

use log::debug;
use std::collections::HashMap;

use crate::graph::network::{Point, RoadNetwork};
use crate::graph::Graph;
use crate::{Error, Result};

/// A road network parsed from map text, with its signal annotations
#[derive(Debug, Clone)]
pub struct ParsedMap {
    /// The road network described by the map grid
    pub network: RoadNetwork<u32>,
    /// Signal phase per node, aligned with the network's node table
    pub signals: Vec<Option<u8>>,
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
}

impl ParsedMap {
    /// Signal phase of the node at a grid position, if the position is a
    /// signalized road node
    pub fn signal_phase(&self, point: Point) -> Option<u8> {
        self.network
            .index_of(point)
            .and_then(|vertex| self.signals[vertex])
    }
}

/// Parses a map grid without signal annotations
pub fn parse_map(map_text: &str) -> Result<ParsedMap> {
    parse_map_with_signals(map_text, None)
}

/// Parses a map grid and an optional signal grid of the same shape
pub fn parse_map_with_signals(map_text: &str, signal_text: Option<&str>) -> Result<ParsedMap> {
    let grid = read_grid(map_text)?;
    let rows = grid.len();
    let cols = grid[0].len();

    let signal_grid = match signal_text {
        Some(text) => {
            let signal_cells = read_grid(text)?;
            if signal_cells.len() != rows || signal_cells[0].len() != cols {
                return Err(Error::SignalGridMismatch {
                    rows,
                    cols,
                    got_rows: signal_cells.len(),
                    got_cols: signal_cells[0].len(),
                });
            }
            Some(parse_signal_grid(&signal_cells)?)
        }
        None => None,
    };

    // Nodes appear in first-mention order, row-major, referenced neighbors
    // included - exactly the order the cells introduce them.
    let mut nodes: Vec<Point> = Vec::new();
    let mut adjacency: Vec<Vec<usize>> = Vec::new();
    let mut index: HashMap<Point, usize> = HashMap::new();

    let mut intern = |nodes: &mut Vec<Point>, adjacency: &mut Vec<Vec<usize>>, point: Point| {
        *index.entry(point).or_insert_with(|| {
            nodes.push(point);
            adjacency.push(Vec::new());
            nodes.len() - 1
        })
    };

    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if is_blank(cell) {
                continue;
            }
            let point = Point::new(r as i32 + 1, c as i32 + 1);
            let current = intern(&mut nodes, &mut adjacency, point);

            for neighbor in parse_cell(cell, r, c)? {
                let in_grid = neighbor.x >= 1
                    && neighbor.y >= 1
                    && neighbor.x as usize <= rows
                    && neighbor.y as usize <= cols;
                if !in_grid {
                    return Err(Error::NeighborOutsideGrid {
                        x: point.x,
                        y: point.y,
                        nx: neighbor.x,
                        ny: neighbor.y,
                        rows,
                        cols,
                    });
                }
                let target = intern(&mut nodes, &mut adjacency, neighbor);
                adjacency[current].push(target);
            }
        }
    }

    let signals = match signal_grid {
        Some(phases) => nodes
            .iter()
            .map(|p| phases[p.x as usize - 1][p.y as usize - 1])
            .collect(),
        None => vec![None; nodes.len()],
    };

    let network = RoadNetwork::from_parts(nodes, adjacency)?;
    debug!(
        "parsed {rows}x{cols} map: {} nodes, {} edges",
        network.vertex_count(),
        network.edge_count()
    );

    Ok(ParsedMap {
        network,
        signals,
        rows,
        cols,
    })
}

/// Splits map text into a rectangular grid of cleaned cell strings
fn read_grid(text: &str) -> Result<Vec<Vec<String>>> {
    let mut grid: Vec<Vec<String>> = Vec::new();
    for line in text.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        grid.push(split_row(line));
    }
    if grid.is_empty() {
        return Err(Error::EmptyGrid);
    }

    let cols = grid[0].len();
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols {
            return Err(Error::RaggedGrid {
                row,
                got: cells.len(),
                expected: cols,
            });
        }
    }
    Ok(grid)
}

/// Splits one CSV row on commas outside double quotes, stripping the
/// quotes themselves
fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells.iter_mut().for_each(|c| *c = c.trim().to_string());
    cells
}

fn is_blank(cell: &str) -> bool {
    cell.is_empty() || cell == "0"
}

/// Parses a road cell's neighbor list, e.g. `(2,3),(3,3)`
fn parse_cell(cell: &str, row: usize, col: usize) -> Result<Vec<Point>> {
    let malformed = |reason: &str| Error::MalformedCell {
        row,
        col,
        reason: reason.to_string(),
    };

    let mut coords = Vec::new();
    let mut rest = cell.trim();
    while !rest.is_empty() {
        rest = rest.trim_start_matches(|ch: char| ch == ',' || ch.is_whitespace());
        if rest.is_empty() {
            break;
        }
        if !rest.starts_with('(') {
            return Err(malformed("expected '(' before coordinate pair"));
        }
        let close = rest
            .find(')')
            .ok_or_else(|| malformed("unterminated coordinate pair"))?;

        let body = &rest[1..close];
        let mut parts = body.split(',').map(str::trim);
        let x = parts
            .next()
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| malformed("coordinate is not an integer pair"))?;
        let y = parts
            .next()
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| malformed("coordinate is not an integer pair"))?;
        if parts.next().is_some() {
            return Err(malformed("coordinate pair has more than two components"));
        }

        coords.push(Point::new(x, y));
        rest = &rest[close + 1..];
    }
    Ok(coords)
}

/// Parses the signal grid into per-cell phases (`0` cell means none)
fn parse_signal_grid(cells: &[Vec<String>]) -> Result<Vec<Vec<Option<u8>>>> {
    cells
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(|(col, cell)| {
                    if is_blank(cell) {
                        return Ok(None);
                    }
                    match cell.parse::<u8>() {
                        Ok(value) if value >= 1 => Ok(Some(value - 1)),
                        _ => Err(Error::MalformedCell {
                            row,
                            col,
                            reason: format!("signal value '{cell}' is not a positive number"),
                        }),
                    }
                })
                .collect()
        })
        .collect()
}
