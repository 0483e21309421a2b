//! Single-order view state

use shared::order::OrderSnapshot;

use crate::{ClientError, ClientResult};

/// What the customer tracker currently knows about its order
///
/// `Stale` keeps the last known-good snapshot after a failed poll and is
/// deliberately distinct from `NotFound`: a transport hiccup must not be
/// rendered as "order does not exist".
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No snapshot received yet
    Loading,
    /// Fresh snapshot from the latest successful poll
    Live(OrderSnapshot),
    /// Last known-good snapshot; the most recent poll failed
    Stale(OrderSnapshot),
    /// The server definitively reported the order missing
    NotFound,
}

impl ViewState {
    /// The snapshot to render, if any
    pub fn snapshot(&self) -> Option<&OrderSnapshot> {
        match self {
            Self::Live(s) | Self::Stale(s) => Some(s),
            Self::Loading | Self::NotFound => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale(_))
    }

    /// Fold a poll result into the view
    ///
    /// Success replaces the snapshot wholesale. A definitive not-found
    /// discards any previous snapshot. Any other failure degrades a live
    /// view to stale and otherwise leaves the state as it was.
    pub fn apply(self, result: ClientResult<OrderSnapshot>) -> Self {
        match result {
            Ok(snapshot) => Self::Live(snapshot),
            Err(ClientError::NotFound(_)) => Self::NotFound,
            Err(_) => match self {
                Self::Live(s) | Self::Stale(s) => Self::Stale(s),
                other => other,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::order::{OrderStatus, PaymentMethod, PaymentStatus};

    fn snapshot(status: OrderStatus) -> OrderSnapshot {
        OrderSnapshot {
            id: 1,
            order_number: "ORD-9M4KTE2XQP".to_string(),
            cafe_id: 1,
            table_number: Some(4),
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

    #[test]
    fn test_success_replaces_wholesale() {
        let view = ViewState::Live(snapshot(OrderStatus::Pending));
        let view = view.apply(Ok(snapshot(OrderStatus::Ready)));
        assert_eq!(view.snapshot().unwrap().status, OrderStatus::Ready);
        assert!(!view.is_stale());
    }

    #[test]
    fn test_failure_keeps_last_known_good_as_stale() {
        let view = ViewState::Live(snapshot(OrderStatus::Preparing));
        let view = view.apply(Err(ClientError::Internal("boom".into())));
        assert!(view.is_stale());
        assert_eq!(view.snapshot().unwrap().status, OrderStatus::Preparing);
    }

    #[test]
    fn test_not_found_is_distinct_from_stale() {
        let view = ViewState::Live(snapshot(OrderStatus::Pending));
        let view = view.apply(Err(ClientError::NotFound("gone".into())));
        assert_eq!(view, ViewState::NotFound);
        assert!(view.snapshot().is_none());
    }

    #[test]
    fn test_failure_before_first_snapshot_stays_loading() {
        let view = ViewState::Loading.apply(Err(ClientError::Internal("boom".into())));
        assert_eq!(view, ViewState::Loading);
    }

    #[test]
    fn test_status_regression_rendered_as_is() {
        // A snapshot that moves "backwards" is still the canonical truth
        let view = ViewState::Live(snapshot(OrderStatus::Ready));
        let view = view.apply(Ok(snapshot(OrderStatus::Confirmed)));
        assert_eq!(view.snapshot().unwrap().status, OrderStatus::Confirmed);
    }
}
