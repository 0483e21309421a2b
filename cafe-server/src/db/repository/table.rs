//! Cafe table repository

use shared::models::{CafeTable, TableStatus};
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoError, RepoResult, insert_err};

const COLUMNS: &str =
    "id, cafe_id, table_number, capacity, location, status, qr_payload, qr_image";

/// A table ready to insert (QR payload already generated)
pub struct NewTable {
    pub cafe_id: i64,
    pub table_number: i64,
    pub capacity: i32,
    pub location: String,
    pub qr_payload: String,
    pub qr_image: Option<String>,
}

/// Insert a batch of tables atomically
///
/// Any duplicate (cafe_id, table_number) aborts the whole batch.
pub async fn create_batch(pool: &SqlitePool, tables: &[NewTable]) -> RepoResult<Vec<CafeTable>> {
    let mut tx: Transaction<'_, Sqlite> = pool.begin().await?;
    let mut ids = Vec::with_capacity(tables.len());

    for table in tables {
        let result = sqlx::query(
            "INSERT INTO cafe_table (cafe_id, table_number, capacity, location, qr_payload, qr_image) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(table.cafe_id)
        .bind(table.table_number)
        .bind(table.capacity)
        .bind(&table.location)
        .bind(&table.qr_payload)
        .bind(&table.qr_image)
        .execute(&mut *tx)
        .await
        .map_err(|e| insert_err(e, &format!("table number {}", table.table_number)))?;
        ids.push(result.last_insert_rowid());
    }

    tx.commit().await?;

    let mut created = Vec::with_capacity(ids.len());
    for id in ids {
        created.push(get_by_id(pool, id).await?);
    }
    Ok(created)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<CafeTable> {
    sqlx::query_as::<_, CafeTable>(&format!("SELECT {COLUMNS} FROM cafe_table WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(RepoError::NotFound)
}

pub async fn list_by_cafe(pool: &SqlitePool, cafe_id: i64) -> RepoResult<Vec<CafeTable>> {
    let tables = sqlx::query_as::<_, CafeTable>(&format!(
        "SELECT {COLUMNS} FROM cafe_table WHERE cafe_id = ? ORDER BY table_number"
    ))
    .bind(cafe_id)
    .fetch_all(pool)
    .await?;
    Ok(tables)
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: TableStatus,
) -> RepoResult<CafeTable> {
    let result = sqlx::query("UPDATE cafe_table SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    get_by_id(pool, id).await
}

/// Replace the rendered QR image; the payload is never touched
pub async fn update_qr_image(
    pool: &SqlitePool,
    id: i64,
    qr_image: Option<&str>,
) -> RepoResult<CafeTable> {
    let result = sqlx::query("UPDATE cafe_table SET qr_image = ? WHERE id = ?")
        .bind(qr_image)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    get_by_id(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let result = sqlx::query("DELETE FROM cafe_table WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}
