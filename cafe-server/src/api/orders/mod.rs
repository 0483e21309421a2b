//! Order API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let orders = Router::new().nest(
        "/api/orders",
        Router::new()
            .route("/", post(handler::create))
            .route("/number/{order_number}", get(handler::get_by_number))
            .route("/{id}/status", put(handler::transition_status))
            .route("/{id}/payment", put(handler::set_payment_status)),
    );

    let per_cafe = Router::new().route("/api/cafes/{id}/orders", get(handler::list_by_cafe));

    orders.merge(per_cafe)
}
