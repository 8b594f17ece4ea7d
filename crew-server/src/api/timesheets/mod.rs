//! Timesheet API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/timesheets", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/active/{employee_id}", get(handler::get_active))
        .route("/clock-in", post(handler::clock_in))
        .route("/clock-out", post(handler::clock_out))
        .route("/{id}", get(handler::get_by_id).patch(handler::update))
        .route("/{id}/approve", post(handler::approve))
        .route("/{id}/reject", post(handler::reject))
}
