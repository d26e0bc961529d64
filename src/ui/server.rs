//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    handler::{
        http::{ai_status, ai_talk, find_match, health_check, list_rooms, register_user, set_mood},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Build the application router over the given state.
///
/// Split out from [`run_server`] so integration tests can serve it on an
/// ephemeral port.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket endpoint
        .route("/ws/{room_id}/{participant_id}", get(websocket_handler))
        // HTTP endpoints
        .route("/health", get(health_check))
        .route("/ai/status", get(ai_status))
        .route("/ai/talk", post(ai_talk))
        .route("/register_user", post(register_user))
        .route("/mood", post(set_mood))
        .route("/match/find", post(find_match))
        .route("/rooms", get(list_rooms))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the matchmaking server until Ctrl+C.
///
/// # Arguments
///
/// * `host` - The host address to bind to (e.g., "127.0.0.1")
/// * `port` - The port number to bind to (e.g., 8080)
pub async fn run_server(
    state: Arc<AppState>,
    host: String,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = app(state);

    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!(
        "Mood-match server listening on {}",
        listener.local_addr()?
    );
    tracing::info!("Chat endpoint: ws://{}/ws/{{room_id}}/{{participant_id}}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
