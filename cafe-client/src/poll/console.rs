//! Cafe and admin console view
//!
//! Polls the filtered order listing for one cafe and keeps a wholesale
//! copy of the current page. Staff consoles and the admin console share
//! this loop; they differ only in the actor role they attach to mutations.

use std::time::Duration;

use shared::order::{OrderFilters, OrderSnapshot};
use shared::request::Pagination;
use tokio_util::sync::CancellationToken;

use super::fetcher::OrderListFetch;

pub struct CafeConsole<F: OrderListFetch> {
    fetcher: F,
    cafe_id: i64,
    filters: OrderFilters,
    pagination: Pagination,
    orders: Vec<OrderSnapshot>,
    total: i64,
    stale: bool,
    loaded: bool,
}

impl<F: OrderListFetch> CafeConsole<F> {
    pub fn new(fetcher: F, cafe_id: i64) -> Self {
        Self {
            fetcher,
            cafe_id,
            filters: OrderFilters::default(),
            pagination: Pagination::default(),
            orders: Vec::new(),
            total: 0,
            stale: false,
            loaded: false,
        }
    }

    /// Change the filters; takes effect on the next tick
    pub fn set_filters(&mut self, filters: OrderFilters) {
        self.filters = filters;
    }

    /// Change the page; takes effect on the next tick
    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.pagination = pagination.clamped();
    }

    /// Current page of orders (possibly stale)
    pub fn orders(&self) -> &[OrderSnapshot] {
        &self.orders
    }

    /// Total matching the filters, as of the last successful poll
    pub fn total(&self) -> i64 {
        self.total
    }

    /// True when the most recent poll failed and the page is a carryover
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// True once at least one poll has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// One reconciliation step: fetch the page and replace it wholesale
    pub async fn tick(&mut self) {
        match self
            .fetcher
            .fetch_orders(self.cafe_id, &self.filters, self.pagination)
            .await
        {
            Ok(page) => {
                self.orders = page.items;
                self.total = page.total;
                self.stale = false;
                self.loaded = true;
            }
            Err(e) => {
                tracing::warn!(cafe_id = self.cafe_id, "Console poll failed: {e}");
                self.stale = true;
            }
        }
    }

    /// Apply a mutation response immediately as the new canonical state
    ///
    /// Replaces the matching entry in place; the next tick may overwrite
    /// it if a concurrent writer won. Orders outside the current page are
    /// ignored rather than spliced in out of order.
    pub fn apply_snapshot(&mut self, snapshot: OrderSnapshot) {
        if let Some(existing) = self.orders.iter_mut().find(|o| o.id == snapshot.id) {
            *existing = snapshot;
        }
    }

    /// Poll until cancelled
    pub async fn run(&mut self, interval: Duration, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => self.tick().await,
            }
        }
    }
}
