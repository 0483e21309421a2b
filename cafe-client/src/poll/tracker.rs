//! Customer order tracker
//!
//! One order, identified by its shareable number, reconciled on a fixed
//! interval. The tracker is read-only: it never writes order state back.

use std::time::Duration;

use shared::order::OrderSnapshot;
use tokio_util::sync::CancellationToken;

use super::fetcher::OrderFetch;
use super::view::ViewState;

pub struct OrderTracker<F: OrderFetch> {
    fetcher: F,
    order_number: String,
    view: ViewState,
}

impl<F: OrderFetch> OrderTracker<F> {
    pub fn new(fetcher: F, order_number: impl Into<String>) -> Self {
        Self {
            fetcher,
            order_number: order_number.into(),
            view: ViewState::Loading,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    /// One reconciliation step: fetch and replace wholesale
    pub async fn tick(&mut self) {
        let result = self.fetcher.fetch_order(&self.order_number).await;
        if let Err(e) = &result {
            tracing::warn!(order_number = %self.order_number, "Poll failed: {e}");
        }
        self.view = std::mem::replace(&mut self.view, ViewState::Loading).apply(result);
    }

    /// Apply a mutation response immediately as the new canonical state
    ///
    /// The next tick may overwrite it if a concurrent writer won.
    pub fn apply_snapshot(&mut self, snapshot: OrderSnapshot) {
        if snapshot.order_number == self.order_number {
            self.view = ViewState::Live(snapshot);
        }
    }

    /// Poll until cancelled
    ///
    /// Fires an immediate first tick, then one per interval. In-flight
    /// polls are abandoned on cancellation.
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClientError, ClientResult};
    use async_trait::async_trait;
    use chrono::Utc;
    use shared::order::{OrderStatus, PaymentMethod, PaymentStatus};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn snapshot(number: &str, status: OrderStatus) -> OrderSnapshot {
        OrderSnapshot {
            id: 1,
            order_number: number.to_string(),
            cafe_id: 1,
            table_number: None,
            customer_name: "Ana".to_string(),
            customer_phone: None,
            customer_email: None,
            status,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Unpaid,
            subtotal: 10.0,
            tax: 0.0,
            service_charge: 0.0,
            total_amount: 10.0,
            items: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Scripted fetcher: pops one pre-loaded result per call
    struct ScriptedFetch {
        responses: Mutex<VecDeque<ClientResult<OrderSnapshot>>>,
    }

    impl ScriptedFetch {
        fn new(responses: Vec<ClientResult<OrderSnapshot>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl OrderFetch for ScriptedFetch {
        async fn fetch_order(&self, _order_number: &str) -> ClientResult<OrderSnapshot> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ClientError::Internal("script exhausted".into())))
        }
    }

    const NUMBER: &str = "ORD-9M4KTE2XQP";

    #[tokio::test]
    async fn test_tick_replaces_state_wholesale() {
        let fetcher = ScriptedFetch::new(vec![
            Ok(snapshot(NUMBER, OrderStatus::Pending)),
            Ok(snapshot(NUMBER, OrderStatus::Preparing)),
        ]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);
        assert_eq!(*tracker.view(), ViewState::Loading);

        tracker.tick().await;
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Pending);

        tracker.tick().await;
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_poll_failure_goes_stale_then_recovers() {
        let fetcher = ScriptedFetch::new(vec![
            Ok(snapshot(NUMBER, OrderStatus::Confirmed)),
            Err(ClientError::Internal("connection refused".into())),
            Ok(snapshot(NUMBER, OrderStatus::Ready)),
        ]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);

        tracker.tick().await;
        tracker.tick().await;
        assert!(tracker.view().is_stale());
        // Last known-good still rendered
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Confirmed);

        tracker.tick().await;
        assert!(!tracker.view().is_stale());
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Ready);
    }

    #[tokio::test]
    async fn test_not_found_discards_snapshot() {
        let fetcher = ScriptedFetch::new(vec![
            Ok(snapshot(NUMBER, OrderStatus::Pending)),
            Err(ClientError::NotFound("no such order".into())),
        ]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);

        tracker.tick().await;
        tracker.tick().await;
        assert_eq!(*tracker.view(), ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_mutation_response_applied_immediately_then_overwritten() {
        let fetcher = ScriptedFetch::new(vec![Ok(snapshot(NUMBER, OrderStatus::Cancelled))]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);

        // Mutation response becomes canonical without waiting for a poll
        tracker.apply_snapshot(snapshot(NUMBER, OrderStatus::Confirmed));
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Confirmed);

        // The next tick wins, even if it contradicts the mutation
        tracker.tick().await;
        assert_eq!(tracker.view().snapshot().unwrap().status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_mutation_for_other_order_ignored() {
        let fetcher = ScriptedFetch::new(vec![]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);
        tracker.apply_snapshot(snapshot("ORD-0000000000", OrderStatus::Ready));
        assert_eq!(*tracker.view(), ViewState::Loading);
    }

    #[tokio::test]
    async fn test_run_stops_on_cancellation() {
        let fetcher = ScriptedFetch::new(vec![Ok(snapshot(NUMBER, OrderStatus::Pending))]);
        let mut tracker = OrderTracker::new(fetcher, NUMBER);

        let cancel = CancellationToken::new();
        cancel.cancel();
        // Already-cancelled token: run must return without polling forever
        tracker.run(Duration::from_millis(10), cancel).await;
    }
}
