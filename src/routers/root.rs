use axum::{Json, Router, extract::State, routing::get};

use crate::error::ApiError;
use crate::models::HealthResponse;
use crate::state::AppState;

pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check_route))
        .route("/api/health", get(health_check_route))
}

pub async fn health_check_route(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.root.health_check())
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
