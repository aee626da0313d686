use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use salon::config::AppConfig;
use salon::handlers;
use salon::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(business_name = %config.business_name, "loaded configuration");

    let state = Arc::new(AppState::new(config.clone()));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::booking::booking_page))
        .route("/api/services", get(handlers::booking::get_services))
        .route("/api/columns", get(handlers::booking::get_columns))
        .route(
            "/api/appointments",
            get(handlers::booking::list_appointments).post(handlers::booking::book_appointment),
        )
        .route(
            "/api/appointments/:id",
            get(handlers::booking::get_appointment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
