//! HTTP surface handing the dashboard response to the UI

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};
use tower_http::cors::{Any, CorsLayer};

use crate::{dashboard::WindDashboard, models::WeatherResponse};

/// Build the API router.
pub fn router(dashboard: Arc<WindDashboard>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/winds", get(get_winds))
        .layer(cors)
        .with_state(dashboard)
}

/// The single endpoint the UI needs. Pipeline failures never surface as
/// error statuses; they are explained inside the response body.
async fn get_winds(State(dashboard): State<Arc<WindDashboard>>) -> Json<WeatherResponse> {
    Json(dashboard.weather_response().await)
}

/// Bind and serve the API.
pub async fn run(dashboard: Arc<WindDashboard>, port: u16) -> anyhow::Result<()> {
    let app = router(dashboard);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Dashboard API running at http://localhost:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}
