use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::network::{Point, RoadNetwork};
use crate::graph::Graph;
use crate::parse::parse_map_with_signals;
use crate::web::models::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub maps: Arc<Mutex<HashMap<Uuid, MapSession>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            maps: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/maps", post(create_map).get(list_maps))
        .route("/api/maps/:map_id", get(get_map))
        .route("/api/maps/:map_id/find-path", post(find_path))
        .route("/api/health", get(health_check))
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: &str, message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
        }),
    )
}

fn map_not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "map_not_found".to_string(),
            message: "Map not found".to_string(),
        }),
    )
}

/// Upload a map as a CSV grid or as explicit node/neighbor arrays
pub async fn create_map(
    State(state): State<AppState>,
    Json(upload): Json<MapUpload>,
) -> Result<Json<MapSummary>, ApiError> {
    let network = match upload {
        MapUpload {
            grid: Some(grid),
            signal_grid,
            ..
        } => parse_map_with_signals(&grid, signal_grid.as_deref())
            .map_err(|e| bad_request("invalid_map_grid", e.to_string()))?
            .network,
        MapUpload {
            nodes: Some(nodes),
            neighbors: Some(neighbors),
            ..
        } => {
            let nodes = nodes.into_iter().map(Point::from).collect();
            RoadNetwork::from_parts(nodes, neighbors)
                .map_err(|e| bad_request("invalid_map_arrays", e.to_string()))?
        }
        _ => {
            return Err(bad_request(
                "invalid_map_upload",
                "Provide either 'grid' or both 'nodes' and 'neighbors'".to_string(),
            ));
        }
    };

    let session = MapSession::new(network);
    let summary = MapSummary {
        id: session.id,
        node_count: session.network.vertex_count(),
        edge_count: session.network.edge_count(),
        created_at: session.created_at,
    };

    {
        let mut maps = state.maps.lock().unwrap();
        maps.insert(session.id, session);
    }

    Ok(Json(summary))
}

/// List the ids of all uploaded maps
pub async fn list_maps(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let maps = state.maps.lock().unwrap();
    let ids: Vec<Uuid> = maps.keys().cloned().collect();
    Ok(Json(ids))
}

/// Get the road cells of an uploaded map
pub async fn get_map(
    State(state): State<AppState>,
    Path(map_id): Path<Uuid>,
) -> Result<Json<MapData>, ApiError> {
    let maps = state.maps.lock().unwrap();
    let session = maps.get(&map_id).ok_or_else(map_not_found)?;

    let network = &session.network;
    let roads = network
        .nodes()
        .iter()
        .enumerate()
        .map(|(vertex, point)| RoadCell {
            x: point.x,
            y: point.y,
            has_exits: network.neighbors(vertex).next().is_some(),
        })
        .collect();

    Ok(Json(MapData {
        id: session.id,
        node_count: network.vertex_count(),
        edge_count: network.edge_count(),
        roads,
    }))
}

/// Compute a route on an uploaded map.
///
/// Missing endpoints and unreachable targets are normal outcomes: the
/// response carries an empty path and `found = false`.
pub async fn find_path(
    State(state): State<AppState>,
    Path(map_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let network = {
        let maps = state.maps.lock().unwrap();
        maps.get(&map_id).ok_or_else(map_not_found)?.network.clone()
    };

    let start = Point::new(request.start_x, request.start_y);
    let end = Point::new(request.end_x, request.end_y);

    let start_time = Instant::now();
    let route = Dijkstra::new().shortest_route(&network, start, end);
    let execution_time = start_time.elapsed();

    let found = !route.is_empty();
    let edge_count = route.len().saturating_sub(1);
    let path = route
        .into_iter()
        .map(|p| PathNode { x: p.x, y: p.y })
        .collect();

    Ok(Json(PathResponse {
        execution_id: Uuid::new_v4(),
        path,
        found,
        edge_count,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}
