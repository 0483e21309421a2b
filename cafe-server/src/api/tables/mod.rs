//! Cafe Table API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    // Same parameter name as the cafes router: matchit requires one name
    // per position
    let per_cafe = Router::new().nest(
        "/api/cafes/{id}/tables",
        Router::new().route("/", get(handler::list).post(handler::create_bulk)),
    );

    let per_table = Router::new().nest(
        "/api/tables",
        Router::new()
            .route("/{id}", get(handler::get_by_id).delete(handler::delete))
            .route("/{id}/status", put(handler::set_status))
            .route("/{id}/qr", post(handler::regenerate_qr)),
    );

    per_cafe.merge(per_table)
}
