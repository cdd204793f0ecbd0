use rosterkeep_api::api::{build_router, AppState};
use rosterkeep_api::config::AppConfig;
use rosterkeep_api::infrastructure::repositories::BTreeStore;
use rosterkeep_api::services::TeamService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration (.env + environment)
    let config = AppConfig::from_env().expect("Invalid configuration");

    tracing::info!(
        max_record_bytes = ?config.store_limits.max_record_bytes,
        max_total_bytes = ?config.store_limits.max_total_bytes,
        "Initializing team store"
    );
    let store = BTreeStore::with_limits(config.store_limits);
    let state = AppState::new(TeamService::new(store), config.jwt_secret.as_str());

    let app = build_router(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
