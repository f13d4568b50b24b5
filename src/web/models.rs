use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::graph::network::RoadNetwork;

/// A single step of a computed route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathNode {
    pub x: i32,
    pub y: i32,
}

/// Route query between two grid positions
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

/// Route query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    /// The route from start to end inclusive; empty when none exists
    pub path: Vec<PathNode>,
    pub found: bool,
    /// Number of edges on the route
    pub edge_count: usize,
    pub execution_time_ms: f64,
}

/// Map upload payload: either a CSV grid (with optional signal grid) or
/// explicit node/neighbor arrays
#[derive(Debug, Deserialize)]
pub struct MapUpload {
    #[serde(default)]
    pub grid: Option<String>,
    #[serde(default)]
    pub signal_grid: Option<String>,
    #[serde(default)]
    pub nodes: Option<Vec<(i32, i32)>>,
    #[serde(default)]
    pub neighbors: Option<Vec<Vec<usize>>>,
}

/// Summary returned after a map upload
#[derive(Debug, Clone, Serialize)]
pub struct MapSummary {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// One road cell of a map payload
#[derive(Debug, Clone, Serialize)]
pub struct RoadCell {
    pub x: i32,
    pub y: i32,
    /// Whether the cell has outgoing edges
    pub has_exits: bool,
}

/// Full map payload
#[derive(Debug, Clone, Serialize)]
pub struct MapData {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub roads: Vec<RoadCell>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// An uploaded map held in server state
#[derive(Debug, Clone)]
pub struct MapSession {
    pub id: Uuid,
    pub network: RoadNetwork<u32>,
    pub created_at: DateTime<Utc>,
}

impl MapSession {
    pub fn new(network: RoadNetwork<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            network,
            created_at: Utc::now(),
        }
    }
}
