//! Asset API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/assets", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/scan/{code}", get(handler::scan_lookup))
        .route("/{id}", get(handler::get_by_id).patch(handler::update))
}
