//! Shared helpers for SafeCart integration tests.
//!
//! These tests run against a live stack:
//! - A running `PostgreSQL` database, migrated (`safecart-cli migrate`)
//! - The API server running (`cargo run -p safecart-api`)
//! - A valid bearer credential from the identity provider in
//!   `SAFECART_TEST_TOKEN`
//!
//! Run with: `cargo test -p safecart-integration-tests -- --ignored`

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("SAFECART_API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Bearer credential for the test user.
///
/// # Panics
///
/// Panics if `SAFECART_TEST_TOKEN` is unset - the ignored tests cannot run
/// without a real credential.
#[must_use]
pub fn bearer_token() -> String {
    std::env::var("SAFECART_TEST_TOKEN")
        .expect("SAFECART_TEST_TOKEN must hold a valid bearer credential")
}

/// An HTTP client for the API.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}

/// The next date on `weekday`, strictly after today.
#[must_use]
pub fn next_weekday(weekday: Weekday) -> NaiveDate {
    let mut date = Utc::now().date_naive() + Duration::days(1);
    while date.weekday() != weekday {
        date += Duration::days(1);
    }
    date
}

/// A well-formed order submission for `date`.
#[must_use]
pub fn order_body(date: NaiveDate) -> serde_json::Value {
    serde_json::json!({
        "purchaseDate": date.format("%Y-%m-%d").to_string(),
        "deliveryTime": "10 AM",
        "deliveryLocation": "Colombo",
        "productName": "Laptop",
        "quantity": 2,
    })
}
