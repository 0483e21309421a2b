//! Order repository
//!
//! Orders are written once at creation (header plus immutable item
//! snapshots, in one transaction) and afterwards mutated only through
//! narrow compare-and-set updates on status and payment_status.

use chrono::{DateTime, Utc};
use shared::order::{
    OrderFilters, OrderItemSnapshot, OrderSnapshot, OrderStatus, PaymentMethod, PaymentStatus,
};
use shared::request::Pagination;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{RepoError, RepoResult, insert_err};

const ORDER_COLUMNS: &str = "id, order_number, cafe_id, table_number, customer_name, \
     customer_phone, customer_email, status, payment_method, payment_status, \
     subtotal, tax, service_charge, total_amount, created_at, updated_at";

/// Order header row as stored; items are loaded separately
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    order_number: String,
    cafe_id: i64,
    table_number: Option<i64>,
    customer_name: String,
    customer_phone: Option<String>,
    customer_email: Option<String>,
    status: OrderStatus,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    subtotal: f64,
    tax: f64,
    service_charge: f64,
    total_amount: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_snapshot(self, items: Vec<OrderItemSnapshot>) -> OrderSnapshot {
        OrderSnapshot {
            id: self.id,
            order_number: self.order_number,
            cafe_id: self.cafe_id,
            table_number: self.table_number,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_email: self.customer_email,
            status: self.status,
            payment_method: self.payment_method,
            payment_status: self.payment_status,
            subtotal: self.subtotal,
            tax: self.tax,
            service_charge: self.service_charge,
            total_amount: self.total_amount,
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Order header ready to insert; totals already computed
pub struct NewOrder {
    pub order_number: String,
    pub cafe_id: i64,
    pub table_number: Option<i64>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_email: Option<String>,
    pub payment_method: PaymentMethod,
    pub subtotal: f64,
    pub tax: f64,
    pub service_charge: f64,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

/// Line item snapshot ready to insert
pub struct NewOrderItem {
    pub menu_item_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    pub total_price: f64,
    pub special_instructions: Option<String>,
}

/// Insert an order and its item snapshots in one transaction
///
/// An order_number collision surfaces as [`RepoError::Duplicate`] so the
/// caller can regenerate and retry.
pub async fn create(
    pool: &SqlitePool,
    order: &NewOrder,
    items: &[NewOrderItem],
) -> RepoResult<OrderSnapshot> {
    let mut tx = pool.begin().await?;

    let order_id = sqlx::query(
        "INSERT INTO orders (order_number, cafe_id, table_number, customer_name, \
         customer_phone, customer_email, payment_method, subtotal, tax, \
         service_charge, total_amount, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&order.order_number)
    .bind(order.cafe_id)
    .bind(order.table_number)
    .bind(&order.customer_name)
    .bind(&order.customer_phone)
    .bind(&order.customer_email)
    .bind(order.payment_method)
    .bind(order.subtotal)
    .bind(order.tax)
    .bind(order.service_charge)
    .bind(order.total_amount)
    .bind(order.created_at)
    .bind(order.created_at)
    .execute(&mut *tx)
    .await
    .map_err(|e| insert_err(e, "order number"))?
    .last_insert_rowid();

    for item in items {
        sqlx::query(
            "INSERT INTO order_item (order_id, menu_item_name, unit_price, quantity, \
             total_price, special_instructions) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(order_id)
        .bind(&item.menu_item_name)
        .bind(item.unit_price)
        .bind(item.quantity)
        .bind(item.total_price)
        .bind(&item.special_instructions)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get_by_id(pool, order_id).await
}

async fn load_items(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItemSnapshot>> {
    let items = sqlx::query_as::<_, OrderItemSnapshot>(
        "SELECT id, menu_item_name, unit_price, quantity, total_price, special_instructions \
         FROM order_item WHERE order_id = ? ORDER BY id",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> RepoResult<OrderSnapshot> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(RepoError::NotFound)?;

    let items = load_items(pool, row.id).await?;
    Ok(row.into_snapshot(items))
}

pub async fn get_by_order_number(pool: &SqlitePool, order_number: &str) -> RepoResult<OrderSnapshot> {
    let row = sqlx::query_as::<_, OrderRow>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE order_number = ?"
    ))
    .bind(order_number)
    .fetch_optional(pool)
    .await?
    .ok_or(RepoError::NotFound)?;

    let items = load_items(pool, row.id).await?;
    Ok(row.into_snapshot(items))
}

fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, cafe_id: i64, filters: &OrderFilters) {
    builder.push(" WHERE cafe_id = ").push_bind(cafe_id);
    if let Some(status) = filters.status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(method) = filters.payment_method {
        builder.push(" AND payment_method = ").push_bind(method);
    }
    if let Some(from) = filters.from {
        builder.push(" AND created_at >= ").push_bind(from);
    }
    if let Some(to) = filters.to {
        builder.push(" AND created_at <= ").push_bind(to);
    }
}

/// Filtered, paginated listing for the staff console, newest first
///
/// Returns the page plus the total matching count.
pub async fn list_by_cafe(
    pool: &SqlitePool,
    cafe_id: i64,
    filters: &OrderFilters,
    pagination: Pagination,
) -> RepoResult<(Vec<OrderSnapshot>, i64)> {
    let mut count_builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM orders");
    push_filters(&mut count_builder, cafe_id, filters);
    let total: i64 = count_builder.build_query_scalar().fetch_one(pool).await?;

    let mut builder =
        QueryBuilder::<Sqlite>::new(format!("SELECT {ORDER_COLUMNS} FROM orders"));
    push_filters(&mut builder, cafe_id, filters);
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(pagination.limit())
        .push(" OFFSET ")
        .push_bind(pagination.offset());

    let rows: Vec<OrderRow> = builder.build_query_as().fetch_all(pool).await?;

    let mut snapshots = Vec::with_capacity(rows.len());
    for row in rows {
        let items = load_items(pool, row.id).await?;
        snapshots.push(row.into_snapshot(items));
    }
    Ok((snapshots, total))
}

/// Compare-and-set status update
///
/// Succeeds only if the stored status still equals `from`; returns false
/// when another writer got there first.
pub async fn cas_update_status(
    pool: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
    updated_at: DateTime<Utc>,
) -> RepoResult<bool> {
    let result = sqlx::query(
        "UPDATE orders SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
    )
    .bind(to)
    .bind(updated_at)
    .bind(id)
    .bind(from)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn update_payment_status(
    pool: &SqlitePool,
    id: i64,
    payment_status: PaymentStatus,
    updated_at: DateTime<Utc>,
) -> RepoResult<()> {
    let result = sqlx::query("UPDATE orders SET payment_status = ?, updated_at = ? WHERE id = ?")
        .bind(payment_status)
        .bind(updated_at)
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(RepoError::NotFound);
    }
    Ok(())
}
