//! Invoice API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/invoices", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/generate", post(handler::generate))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/send", post(handler::send))
}
