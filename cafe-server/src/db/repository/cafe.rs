//! Cafe repository

use shared::models::{ApprovalState, Cafe, CafeCreate};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

pub async fn create(pool: &SqlitePool, payload: &CafeCreate) -> RepoResult<Cafe> {
    let currency = payload.currency.as_deref().unwrap_or("EUR");
    let id = sqlx::query(
        "INSERT INTO cafe (name, owner_name, tax_rate, service_charge, currency) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&payload.name)
    .bind(&payload.owner_name)
    .bind(payload.tax_rate)
    .bind(payload.service_charge)
    .bind(currency)
    .execute(pool)
    .await?
    .last_insert_rowid();

    get_by_id(pool, id).await
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Cafe> {
    sqlx::query_as::<_, Cafe>(
        "SELECT id, name, owner_name, tax_rate, service_charge, currency, approval, is_active \
         FROM cafe WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepoError::NotFound)
}

pub async fn list(pool: &SqlitePool) -> RepoResult<Vec<Cafe>> {
    let cafes = sqlx::query_as::<_, Cafe>(
        "SELECT id, name, owner_name, tax_rate, service_charge, currency, approval, is_active \
         FROM cafe ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(cafes)
}

pub async fn set_approval(
    pool: &SqlitePool,
    id: i64,
    approval: ApprovalState,
) -> RepoResult<Cafe> {
    let result = sqlx::query("UPDATE cafe SET approval = ? WHERE id = ?")
        .bind(approval)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    get_by_id(pool, id).await
}

pub async fn set_active(pool: &SqlitePool, id: i64, is_active: bool) -> RepoResult<Cafe> {
    let result = sqlx::query("UPDATE cafe SET is_active = ? WHERE id = ?")
        .bind(is_active)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    get_by_id(pool, id).await
}
