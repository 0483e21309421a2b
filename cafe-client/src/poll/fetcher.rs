//! Fetch seams for the reconciliation loops
//!
//! The loops are generic over these traits so the reconciliation logic is
//! unit testable without a server.

use async_trait::async_trait;
use shared::order::{OrderFilters, OrderSnapshot};
use shared::request::{PaginatedResponse, Pagination};

use crate::{ClientResult, HttpClient};

/// Fetches one order snapshot by its shareable number
#[async_trait]
pub trait OrderFetch: Send + Sync {
    async fn fetch_order(&self, order_number: &str) -> ClientResult<OrderSnapshot>;
}

/// Fetches a filtered page of order snapshots for a cafe
#[async_trait]
pub trait OrderListFetch: Send + Sync {
    async fn fetch_orders(
        &self,
        cafe_id: i64,
        filters: &OrderFilters,
        pagination: Pagination,
    ) -> ClientResult<PaginatedResponse<OrderSnapshot>>;
}

#[async_trait]
impl OrderFetch for HttpClient {
    async fn fetch_order(&self, order_number: &str) -> ClientResult<OrderSnapshot> {
        self.order_by_number(order_number).await
    }
}

#[async_trait]
impl OrderListFetch for HttpClient {
    async fn fetch_orders(
        &self,
        cafe_id: i64,
        filters: &OrderFilters,
        pagination: Pagination,
    ) -> ClientResult<PaginatedResponse<OrderSnapshot>> {
        self.list_orders(cafe_id, filters, pagination).await
    }
}
