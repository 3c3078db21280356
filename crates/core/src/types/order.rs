//! Order wire types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::id::{OrderId, UserId};
use super::slot::DeliverySlot;
use super::status::OrderStatus;

/// A persisted order.
///
/// Immutable after creation except for `status`, which only the external
/// fulfillment process advances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Order {
    /// Internal order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Username snapshot taken at creation.
    pub username: String,
    /// Requested delivery date (calendar day, no time component).
    pub purchase_date: NaiveDate,
    /// Delivery time slot.
    pub delivery_time: DeliverySlot,
    /// Delivery location (sanitized free text).
    pub delivery_location: String,
    /// Product name (sanitized free text).
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: i32,
    /// Optional message (sanitized free text).
    pub message: Option<String>,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// When the order was submitted.
    pub created_at: DateTime<Utc>,
}

/// An order submission as received from the client, before validation.
///
/// Every field is optional at the serde level so that a missing or oddly
/// typed field surfaces as an itemized validation error rather than a
/// deserialization failure. `quantity` stays a raw JSON value for the same
/// reason: the validator decides what counts as an integer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Requested delivery date, `YYYY-MM-DD`.
    #[serde(default)]
    pub purchase_date: Option<String>,
    /// Delivery time slot label.
    #[serde(default)]
    pub delivery_time: Option<String>,
    /// Delivery location.
    #[serde(default)]
    pub delivery_location: Option<String>,
    /// Product name.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Quantity; validated as an integer in the configured bounds.
    #[serde(default)]
    pub quantity: serde_json::Value,
    /// Optional message.
    #[serde(default)]
    pub message: Option<String>,
}
