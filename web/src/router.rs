use crate::controller::{endpoint_controller, health_check_controller};
use axum::routing::get;
use axum::Router;
use service::AppState;

pub fn init_router(app_state: AppState) -> Router {
    define_routes(app_state)
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(endpoint_routes(app_state))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

// Static paths win over captures in axum, so /health is never shadowed by
// the /:name capture below.
fn endpoint_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/:name", get(endpoint_controller::single_shot))
        .route("/:name/stream", get(endpoint_controller::stream))
        .with_state(app_state)
}
