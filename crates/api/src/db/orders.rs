//! Order store repository.
//!
//! Orders are write-once from this service's perspective: created in
//! `pending` and read back newest-first. Status changes belong to the
//! external fulfillment process.

use sqlx::PgPool;

use safecart_core::{Order, UserId};

use super::RepositoryError;
use crate::validate::ValidOrder;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated order for `user_id`, snapshotting `username`.
    ///
    /// The row is created with the default `pending` status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// foreign-key failure if the user row vanished).
    pub async fn create(
        &self,
        user_id: UserId,
        username: &str,
        order: &ValidOrder,
    ) -> Result<Order, RepositoryError> {
        let created = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, username, purchase_date, delivery_time,
                                delivery_location, product_name, quantity, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, username, purchase_date, delivery_time,
                      delivery_location, product_name, quantity, message,
                      status, created_at
            ",
        )
        .bind(user_id)
        .bind(username)
        .bind(order.purchase_date)
        .bind(order.delivery_time)
        .bind(&order.delivery_location)
        .bind(&order.product_name)
        .bind(order.quantity)
        .bind(order.message.as_deref())
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// List a user's orders, newest first.
    ///
    /// A user with no orders gets an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, username, purchase_date, delivery_time,
                   delivery_location, product_name, quantity, message,
                   status, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
