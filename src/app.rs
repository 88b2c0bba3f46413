use std::path::Path;

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState, static_dir: impl AsRef<Path>) -> Router {
  Router::new()
    .nest("/api", contact_routes().merge(health_routes()))
    .fallback_service(ServeDir::new(static_dir))
    .layer(CorsLayer::permissive())
    .with_state(state)
}

fn health_routes() -> Router<SharedAppState> {
  Router::new().route("/health", get(health_handler))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub message: String,
}

pub async fn health_handler() -> Json<HealthResponse> {
  Json(HealthResponse {
    status: "OK".to_string(),
    message: "Server is running".to_string(),
  })
}
