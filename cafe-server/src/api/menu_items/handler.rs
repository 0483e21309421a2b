//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::ApiResponse;
use shared::models::{MenuItem, MenuItemAvailabilityUpdate, MenuItemCreate};

use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe, menu_item};
use crate::utils::{AppError, AppResult};

/// POST /api/cafes/:cafe_id/menu-items - add a menu item
pub async fn create(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<ApiResponse<MenuItem>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::validation("Name must not be empty"));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::validation("Price must be a non-negative number"));
    }

    match cafe::get_by_id(state.pool(), cafe_id).await {
        Ok(_) => {}
        Err(RepoError::NotFound) => return Err(AppError::not_found("Cafe")),
        Err(e) => return Err(e.into()),
    }

    let created = menu_item::create(state.pool(), cafe_id, &payload).await?;
    Ok(ApiResponse::success(created))
}

/// GET /api/cafes/:cafe_id/menu-items - list a cafe's menu
pub async fn list(
    State(state): State<ServerState>,
    Path(cafe_id): Path<i64>,
) -> AppResult<ApiResponse<Vec<MenuItem>>> {
    let items = menu_item::list_by_cafe(state.pool(), cafe_id).await?;
    Ok(ApiResponse::success(items))
}

/// PUT /api/menu-items/:id/availability - toggle availability
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemAvailabilityUpdate>,
) -> AppResult<ApiResponse<MenuItem>> {
    match menu_item::set_availability(state.pool(), id, payload.is_available).await {
        Ok(item) => Ok(ApiResponse::success(item)),
        Err(RepoError::NotFound) => Err(AppError::not_found("Menu item")),
        Err(e) => Err(e.into()),
    }
}
