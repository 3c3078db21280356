//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health          - Liveness probe (no auth)
//! GET  /health/ready    - Readiness probe, checks the database (no auth)
//! GET  /options         - Static enumerations (no auth)
//!
//! # Authenticated (bearer credential required)
//! GET  /user/profile    - Return/create the caller's profile
//! PUT  /user/profile    - Update contact number / country
//! POST /orders          - Submit an order (validated)
//! GET  /orders          - The caller's orders, newest first
//! ```

pub mod health;
pub mod options;
pub mod orders;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the user profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(profile::get_profile).put(profile::update_profile),
    )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/", post(orders::create_order).get(orders::list_orders))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/user", profile_routes())
        .nest("/orders", order_routes())
        .route("/options", get(options::get_options))
}

/// Fallback for unknown routes: the original API's 404 envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_owned())
}
