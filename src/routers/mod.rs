pub mod root;
pub mod song;

use axum::{Router, middleware::from_fn};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors;
use crate::state::AppState;

pub use root::{health_check_route, method_not_allowed, root_routes, route_not_found};
pub use song::song_routes;

/// Full route table with fallbacks and middleware applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(root_routes())
        .merge(song_routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(cors)),
        )
        .with_state(state)
}
