//! Menu item repository

use shared::models::{MenuItem, MenuItemCreate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

const COLUMNS: &str = "id, cafe_id, name, price, is_available, category";

pub async fn create(pool: &SqlitePool, cafe_id: i64, payload: &MenuItemCreate) -> RepoResult<MenuItem> {
    let id = sqlx::query(
        "INSERT INTO menu_item (cafe_id, name, price, category) VALUES (?, ?, ?, ?)",
    )
    .bind(cafe_id)
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.category)
    .execute(pool)
    .await?
    .last_insert_rowid();

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<MenuItem> {
    sqlx::query_as::<_, MenuItem>(&format!("SELECT {COLUMNS} FROM menu_item WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(RepoError::NotFound)
}

pub async fn list_by_cafe(pool: &SqlitePool, cafe_id: i64) -> RepoResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(&format!(
        "SELECT {COLUMNS} FROM menu_item WHERE cafe_id = ? ORDER BY id"
    ))
    .bind(cafe_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

/// Load the referenced menu items in one query, preserving nothing about
/// order; callers index the result by id
pub async fn get_many(pool: &SqlitePool, ids: &[i64]) -> RepoResult<Vec<MenuItem>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT {COLUMNS} FROM menu_item WHERE id IN ({placeholders})");
    let mut query = sqlx::query_as::<_, MenuItem>(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let items = query.fetch_all(pool).await?;
    Ok(items)
}

pub async fn set_availability(
    pool: &SqlitePool,
    id: i64,
    is_available: bool,
) -> RepoResult<MenuItem> {
    let result = sqlx::query("UPDATE menu_item SET is_available = ? WHERE id = ?")
        .bind(is_available)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    get_by_id(pool, id).await
}
