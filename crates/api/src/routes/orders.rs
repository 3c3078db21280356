//! Order route handlers.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Local;
use tracing::instrument;

use safecart_core::{Order, OrderPayload};

use crate::auth::Identity;
use crate::db::{OrderRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::validate::validate_order;

/// Submit a new order.
///
/// The caller's profile is resolved (and upserted) first so the order's
/// user reference always lands on an existing row; the payload is then
/// validated against today's local date and the configured policy. Every
/// field failure is returned at once.
#[instrument(skip_all, fields(subject = %identity.subject))]
pub async fn create_order(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<OrderPayload>,
) -> Result<(StatusCode, Json<Order>)> {
    let user = UserRepository::new(state.pool())
        .sync_on_auth(&identity.subject, &identity.claims)
        .await?;

    let today = Local::now().date_naive();
    let valid = validate_order(&payload, today, &state.config().policy)
        .map_err(AppError::Validation)?;

    let order = OrderRepository::new(state.pool())
        .create(user.id, &user.username, &valid)
        .await?;

    tracing::info!(order_id = %order.id, "Order created");
    Ok((StatusCode::CREATED, Json(order)))
}

/// List the caller's orders, newest first.
#[instrument(skip_all, fields(subject = %identity.subject))]
pub async fn list_orders(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<Order>>> {
    let user = UserRepository::new(state.pool())
        .sync_on_auth(&identity.subject, &identity.claims)
        .await?;

    let orders = OrderRepository::new(state.pool())
        .list_for_user(user.id)
        .await?;

    Ok(Json(orders))
}
