//! Order business rules
//!
//! Creation snapshots menu prices server-side; transitions are enforced
//! against the status state machine and persisted with a compare-and-set
//! so two consoles cannot silently overwrite each other.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use shared::error::ErrorCode;
use shared::money;
use shared::order::{
    ActorRole, CreateOrderRequest, OrderSnapshot, OrderStatus, PaymentStatus, TransitionRequest,
};
use shared::order_number;
use sqlx::SqlitePool;

use crate::db::repository::{self, RepoError, order::NewOrder, order::NewOrderItem};
use crate::utils::validation;
use crate::utils::{AppError, AppResult};

/// Attempts at a fresh order number before giving up
const ORDER_NUMBER_ATTEMPTS: u32 = 5;

/// Create an order with server-side price snapshots and totals
///
/// Client-supplied prices are ignored entirely: every line item is priced
/// from the current menu row, and totals are recomputed from scratch.
pub async fn create_order(pool: &SqlitePool, req: &CreateOrderRequest) -> AppResult<OrderSnapshot> {
    if req.items.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyOrder));
    }

    let mut field_errors = validation::validate_customer(&req.customer);
    field_errors.extend(validation::validate_items(&req.items));
    if !field_errors.is_empty() {
        return Err(AppError::validation_fields(field_errors));
    }

    let cafe = match repository::cafe::get_by_id(pool, req.cafe_id).await {
        Ok(cafe) => cafe,
        Err(RepoError::NotFound) => return Err(AppError::not_found("Cafe")),
        Err(e) => return Err(e.into()),
    };
    if cafe.approval != shared::models::ApprovalState::Approved {
        return Err(AppError::new(ErrorCode::CafeNotApproved));
    }
    if !cafe.is_active {
        return Err(AppError::new(ErrorCode::CafeInactive));
    }

    let ids: Vec<i64> = req.items.iter().map(|i| i.menu_item_id).collect();
    let menu_items = repository::menu_item::get_many(pool, &ids).await?;
    let by_id: HashMap<i64, _> = menu_items.into_iter().map(|m| (m.id, m)).collect();

    let mut new_items = Vec::with_capacity(req.items.len());
    let mut priced = Vec::with_capacity(req.items.len());
    for input in &req.items {
        let item = by_id
            .get(&input.menu_item_id)
            .ok_or_else(|| {
                AppError::not_found("Menu item").with_detail("menu_item_id", input.menu_item_id)
            })?;
        if item.cafe_id != req.cafe_id {
            return Err(AppError::new(ErrorCode::MenuItemWrongCafe)
                .with_detail("menu_item_id", item.id));
        }
        if !item.is_available {
            return Err(AppError::new(ErrorCode::MenuItemUnavailable)
                .with_detail("menu_item_id", item.id)
                .with_detail("name", item.name.clone()));
        }

        priced.push((item.price, input.quantity));
        new_items.push(NewOrderItem {
            menu_item_name: item.name.clone(),
            unit_price: item.price,
            quantity: input.quantity,
            total_price: money::line_total(item.price, input.quantity),
            special_instructions: input.special_instructions.clone(),
        });
    }

    let totals = money::compute_totals(&priced, cafe.tax_rate, cafe.service_charge);
    let customer_phone = req
        .customer
        .phone
        .as_deref()
        .and_then(validation::normalize_phone);

    // Random order numbers can collide; regenerate on a UNIQUE violation
    for _ in 0..ORDER_NUMBER_ATTEMPTS {
        let new_order = NewOrder {
            order_number: order_number::generate(),
            cafe_id: req.cafe_id,
            table_number: req.table_number,
            customer_name: req.customer.name.trim().to_string(),
            customer_phone: customer_phone.clone(),
            customer_email: req.customer.email.clone(),
            payment_method: req.payment_method,
            subtotal: totals.subtotal,
            tax: totals.tax,
            service_charge: totals.service_charge,
            total_amount: totals.total_amount,
            created_at: Utc::now(),
        };
        match repository::order::create(pool, &new_order, &new_items).await {
            Ok(snapshot) => {
                tracing::info!(
                    order_number = %snapshot.order_number,
                    cafe_id = snapshot.cafe_id,
                    total = snapshot.total_amount,
                    "Order created"
                );
                return Ok(snapshot);
            }
            Err(RepoError::Duplicate(_)) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::internal("Could not allocate a unique order number"))
}

/// Look up an order by its shareable number
pub async fn get_by_order_number(pool: &SqlitePool, number: &str) -> AppResult<OrderSnapshot> {
    if !order_number::is_valid_format(number) {
        return Err(AppError::not_found("Order").with_detail("order_number", number));
    }
    match repository::order::get_by_order_number(pool, number).await {
        Ok(snapshot) => Ok(snapshot),
        Err(RepoError::NotFound) => {
            Err(AppError::not_found("Order").with_detail("order_number", number))
        }
        Err(e) => Err(e.into()),
    }
}

/// updated_at stays strictly increasing even if the wall clock stalls
fn bump_updated_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}

fn check_transition(
    current: OrderStatus,
    target: OrderStatus,
    actor_role: ActorRole,
    payment_status: PaymentStatus,
) -> AppResult<()> {
    if !current.can_transition_to(target) {
        return Err(AppError::invalid_transition(
            current.as_str().to_uppercase(),
            target.as_str().to_uppercase(),
        ));
    }
    if target == OrderStatus::Refunded {
        if actor_role != ActorRole::Admin {
            return Err(AppError::new(ErrorCode::AdminOnlyTransition));
        }
        if payment_status != PaymentStatus::Paid {
            return Err(AppError::new(ErrorCode::RefundRequiresPayment));
        }
    }
    Ok(())
}

/// Transition an order to a new status
///
/// A request for the current status is an idempotent no-op that returns
/// the snapshot untouched. A lost compare-and-set race is retried once
/// against the fresh state, then reported as a conflict.
pub async fn transition_status(
    pool: &SqlitePool,
    order_id: i64,
    req: &TransitionRequest,
) -> AppResult<OrderSnapshot> {
    let mut order = match repository::order::get_by_id(pool, order_id).await {
        Ok(o) => o,
        Err(RepoError::NotFound) => return Err(AppError::not_found("Order")),
        Err(e) => return Err(e.into()),
    };

    for attempt in 0..2 {
        if order.status == req.status {
            return Ok(order);
        }
        check_transition(order.status, req.status, req.actor_role, order.payment_status)?;

        let updated_at = bump_updated_at(order.updated_at);
        let won =
            repository::order::cas_update_status(pool, order.id, order.status, req.status, updated_at)
                .await?;
        if won {
            if req.status == OrderStatus::Refunded {
                repository::order::update_payment_status(
                    pool,
                    order.id,
                    PaymentStatus::Refunded,
                    updated_at,
                )
                .await?;
            }
            tracing::info!(
                order_number = %order.order_number,
                from = %order.status,
                to = %req.status,
                "Order status changed"
            );
            return repository::order::get_by_id(pool, order.id)
                .await
                .map_err(Into::into);
        }

        // Lost the race: re-read and re-validate against the fresh state
        if attempt == 0 {
            order = repository::order::get_by_id(pool, order.id).await?;
        }
    }

    Err(AppError::transition_conflict())
}

/// Record a payment status change, returning the fresh snapshot
pub async fn set_payment_status(
    pool: &SqlitePool,
    order_id: i64,
    payment_status: PaymentStatus,
) -> AppResult<OrderSnapshot> {
    let order = match repository::order::get_by_id(pool, order_id).await {
        Ok(o) => o,
        Err(RepoError::NotFound) => return Err(AppError::not_found("Order")),
        Err(e) => return Err(e.into()),
    };

    if order.payment_status == payment_status {
        return Ok(order);
    }

    let updated_at = bump_updated_at(order.updated_at);
    repository::order::update_payment_status(pool, order.id, payment_status, updated_at).await?;
    repository::order::get_by_id(pool, order.id)
        .await
        .map_err(Into::into)
}
