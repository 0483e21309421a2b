//! Menu Item API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let per_cafe = Router::new().nest(
        "/api/cafes/{id}/menu-items",
        Router::new().route("/", get(handler::list).post(handler::create)),
    );

    let per_item = Router::new().nest(
        "/api/menu-items",
        Router::new().route("/{id}/availability", put(handler::set_availability)),
    );

    per_cafe.merge(per_item)
}
