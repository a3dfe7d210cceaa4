//! HTTP router construction.
//!
//! Assembles routes and middleware into a single `Router`. Model routes
//! live under the `/1/models` prefix; update shares the POST verb with
//! create, addressed by id.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::SharedState;
use crate::{api, middleware};

pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(api::health::root))
        .route(
            "/1/models",
            get(api::models::list).post(api::models::create),
        )
        .route(
            "/1/models/{id}",
            get(api::models::get)
                .post(api::models::update)
                .delete(api::models::delete),
        )
        .layer(axum::middleware::from_fn(middleware::time_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
