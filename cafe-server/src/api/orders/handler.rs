//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::ApiResponse;
use shared::order::{
    CreateOrderRequest, OrderFilters, OrderSnapshot, OrderStatus, PaymentMethod,
    PaymentStatusUpdate, TransitionRequest,
};
use shared::request::{PaginatedResponse, Pagination};

use crate::core::ServerState;
use crate::services::order_service;
use crate::utils::AppResult;

/// POST /api/orders - create an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<ApiResponse<OrderSnapshot>> {
    let snapshot = order_service::create_order(state.pool(), &payload).await?;
    Ok(ApiResponse::success(snapshot))
}

/// GET /api/orders/number/:order_number - anonymous lookup
///
/// The order number is the only anonymous read path; ids are not exposed
/// for enumeration.
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(order_number): Path<String>,
) -> AppResult<ApiResponse<OrderSnapshot>> {
    let snapshot = order_service::get_by_order_number(state.pool(), &order_number).await?;
    Ok(ApiResponse::success(snapshot))
}

/// PUT /api/orders/:id/status - request a status transition
pub async fn transition_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TransitionRequest>,
) -> AppResult<ApiResponse<OrderSnapshot>> {
    let snapshot = order_service::transition_status(state.pool(), id, &payload).await?;
    Ok(ApiResponse::success(snapshot))
}

/// PUT /api/orders/:id/payment - record a payment status change
pub async fn set_payment_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentStatusUpdate>,
) -> AppResult<ApiResponse<OrderSnapshot>> {
    let snapshot =
        order_service::set_payment_status(state.pool(), id, payload.payment_status).await?;
    Ok(ApiResponse::success(snapshot))
}

/// Query parameters for the staff console listing
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// GET /api/cafes/:cafe_id/orders - filtered, paginated listing
pub async fn list_by_cafe(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
    Query(query): Query<ListOrdersQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<OrderSnapshot>>> {
    let filters = OrderFilters {
        status: query.status,
        payment_method: query.payment_method,
        from: query.from,
        to: query.to,
    };
    let mut pagination = Pagination::default();
    if let Some(page) = query.page {
        pagination.page = page;
    }
    if let Some(per_page) = query.per_page {
        pagination.per_page = per_page;
    }
    let pagination = pagination.clamped();

    let (orders, total) =
        crate::db::repository::order::list_by_cafe(state.pool(), cafe_id, &filters, pagination)
            .await?;
    Ok(ApiResponse::success(PaginatedResponse::new(
        orders, total, pagination,
    )))
}
