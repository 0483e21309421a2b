//! Cafe API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;
use shared::models::{Cafe, CafeActiveUpdate, CafeApprovalUpdate, CafeCreate};

use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::utils::{AppError, AppResult};

/// POST /api/cafes - register a cafe (starts pending approval)
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<CafeCreate>,
) -> AppResult<ApiResponse<Cafe>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Cafe name must not be empty"));
    }
    if payload.tax_rate < 0.0 || payload.service_charge < 0.0 {
        return Err(AppError::validation("Rates must not be negative"));
    }

    let created = cafe::create(state.pool(), &payload).await?;
    tracing::info!(cafe_id = created.id, name = %created.name, "Cafe registered");
    Ok(ApiResponse::success(created))
}

/// GET /api/cafes - list all cafes
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Cafe>>> {
    let cafes = cafe::list(state.pool()).await?;
    Ok(ApiResponse::success(cafes))
}

/// GET /api/cafes/:id - fetch a single cafe
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Cafe>> {
    match cafe::get_by_id(state.pool(), id).await {
        Ok(cafe) => Ok(ApiResponse::success(cafe)),
        Err(RepoError::NotFound) => Err(AppError::not_found("Cafe")),
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/cafes/:id/approval - administrator approval decision
pub async fn set_approval(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CafeApprovalUpdate>,
) -> AppResult<ApiResponse<Cafe>> {
    match cafe::set_approval(state.pool(), id, payload.approval).await {
        Ok(updated) => {
            tracing::info!(cafe_id = id, approval = %updated.approval.as_str(), "Cafe approval updated");
            Ok(ApiResponse::success(updated))
        }
        Err(RepoError::NotFound) => Err(AppError::not_found("Cafe")),
        Err(e) => Err(e.into()),
    }
}

/// PUT /api/cafes/:id/active - soft-(de)activate
pub async fn set_active(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CafeActiveUpdate>,
) -> AppResult<ApiResponse<Cafe>> {
    match cafe::set_active(state.pool(), id, payload.is_active).await {
        Ok(updated) => Ok(ApiResponse::success(updated)),
        Err(RepoError::NotFound) => Err(AppError::not_found("Cafe")),
        Err(e) => Err(e.into()),
    }
}
