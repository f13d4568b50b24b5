use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
        }
    }
}

/// Start the web server on the given port with default configuration
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = AppState::new();

    let mut app = Router::new()
        .merge(create_router())
        .nest_service("/", ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("gridroute server listening on http://{addr}");
    info!("serving static files from {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
