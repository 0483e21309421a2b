//! Cafe Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;
use shared::error::ErrorCode;
use shared::models::{BulkTableCreate, CafeTable, TableStatusUpdate};

use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe, table};
use crate::utils::{AppError, AppResult};

/// Upper bound on a single bulk creation batch
const MAX_BULK_COUNT: u32 = 200;

/// POST /api/cafes/:cafe_id/tables - bulk create tables
///
/// Creates `count` tables numbered start_number..start_number+count-1,
/// all-or-nothing. QR payloads are generated locally; image rendering is
/// requested per table and may individually fail without aborting.
pub async fn create_bulk(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
    Json(payload): Json<BulkTableCreate>,
) -> AppResult<ApiResponse<Vec<CafeTable>>> {
    if payload.count < 1 || payload.count > MAX_BULK_COUNT {
        return Err(AppError::validation(format!(
            "count must be between 1 and {MAX_BULK_COUNT}"
        )));
    }
    if payload.start_number < 1 {
        return Err(AppError::validation("start_number must be at least 1"));
    }
    if payload.capacity < 1 {
        return Err(AppError::validation("capacity must be at least 1"));
    }

    // The cafe must exist before we mint QR URLs for it
    match cafe::get_by_id(state.pool(), cafe_id).await {
        Ok(_) => {}
        Err(RepoError::NotFound) => return Err(AppError::not_found("Cafe")),
        Err(e) => return Err(e.into()),
    }

    let mut new_tables = Vec::with_capacity(payload.count as usize);
    for offset in 0..payload.count as i64 {
        let table_number = payload.start_number + offset;
        let qr_payload = state.qr.payload(cafe_id, table_number);
        let qr_image = state.qr.render_image(&qr_payload).await;
        new_tables.push(table::NewTable {
            cafe_id,
            table_number,
            capacity: payload.capacity,
            location: payload.location.clone(),
            qr_payload,
            qr_image,
        });
    }

    match table::create_batch(state.pool(), &new_tables).await {
        Ok(created) => {
            tracing::info!(cafe_id, count = created.len(), "Tables created");
            Ok(ApiResponse::success(created))
        }
        Err(RepoError::Duplicate(what)) => {
            Err(AppError::with_message(ErrorCode::TableNumberTaken, format!("{what} already exists")))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /api/cafes/:cafe_id/tables - list a cafe's tables
pub async fn list(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
) -> AppResult<ApiResponse<Vec<CafeTable>>> {
    let tables = table::list_by_cafe(state.pool(), cafe_id).await?;
    Ok(ApiResponse::success(tables))
}

/// GET /api/tables/:id - fetch a single table
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<CafeTable>> {
    match table::get_by_id(state.pool(), id).await {
        Ok(t) => Ok(ApiResponse::success(t)),
        Err(RepoError::NotFound) => Err(AppError::not_found("Table")),
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/tables/:id/status - advisory seating status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<ApiResponse<CafeTable>> {
    match table::update_status(state.pool(), id, payload.status).await {
        Ok(t) => Ok(ApiResponse::success(t)),
        Err(RepoError::NotFound) => Err(AppError::not_found("Table")),
        Err(e) => Err(e.into()),
    }
}

/// POST /api/tables/:id/qr - re-render the QR image
///
/// The payload (and with it the table_number binding) never changes; only
/// the rendered image is refreshed.
pub async fn regenerate_qr(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<CafeTable>> {
    let existing = match table::get_by_id(state.pool(), id).await {
        Ok(t) => t,
        Err(RepoError::NotFound) => return Err(AppError::not_found("Table")),
        Err(e) => return Err(e.into()),
    };

    let qr_image = state.qr.render_image(&existing.qr_payload).await;
    let updated = table::update_qr_image(state.pool(), id, qr_image.as_deref()).await?;
    Ok(ApiResponse::success(updated))
}

/// DELETE /api/tables/:id - hard delete
///
/// Historical orders keep their numeric table_number.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    match table::delete(state.pool(), id).await {
        Ok(()) => Ok(ApiResponse::ok()),
        Err(RepoError::NotFound) => Err(AppError::not_found("Table")),
        Err(e) => Err(e.into()),
    }
}
