use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/integration.json", get(handlers::integration_manifest))
        .route("/tick", post(handlers::tick))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
