use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, teams};
use super::state::AppState;

/// Builds the HTTP router with all routes and layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::get_all_teams))
        .route("/api/teams/:id", get(teams::get_team).delete(teams::delete_team))
        .route("/api/teams/:id/roster", put(teams::update_team))
        .route("/api/teams/:id/players", post(teams::add_player))
        .route("/api/teams/:id/players/:name", delete(teams::delete_player))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
