//! Cafe API module

mod handler;

use axum::{Router, routing::get, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cafes", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::register))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/approval", put(handler::set_approval))
        .route("/{id}/active", put(handler::set_active))
}
