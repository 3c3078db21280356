//! Integration tests for order submission and listing.
//!
//! Run with: `cargo test -p safecart-integration-tests -- --ignored`

use chrono::Weekday;
use reqwest::StatusCode;
use serde_json::Value;

use safecart_integration_tests::{api_base_url, bearer_token, client, next_weekday, order_body};

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_health_requires_no_credential() {
    let resp = client()
        .get(format!("{}/health", api_base_url()))
        .send()
        .await
        .expect("health request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("health body");
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_options_catalog_is_public() {
    let resp = client()
        .get(format!("{}/options", api_base_url()))
        .send()
        .await
        .expect("options request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("options body");
    assert_eq!(body["deliveryTimes"][0], "10 AM");
    assert_eq!(body["locations"].as_array().expect("locations").len(), 25);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_order_submission_happy_path() {
    let monday = next_weekday(Weekday::Mon);
    let resp = client()
        .post(format!("{}/orders", api_base_url()))
        .bearer_auth(bearer_token())
        .json(&order_body(monday))
        .send()
        .await
        .expect("order request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: safecart_core::Order = resp.json().await.expect("order body");
    assert_eq!(order.status, safecart_core::OrderStatus::Pending);
    assert_eq!(order.delivery_time, safecart_core::DeliverySlot::TenAm);
    assert_eq!(order.quantity, 2);
    assert_eq!(order.purchase_date, monday);
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_sunday_submission_rejected() {
    let sunday = next_weekday(Weekday::Sun);
    let resp = client()
        .post(format!("{}/orders", api_base_url()))
        .bearer_auth(bearer_token())
        .json(&order_body(sunday))
        .send()
        .await
        .expect("order request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body");
    assert_eq!(body["error"], "Validation failed");

    let details = body["details"].as_array().expect("details array");
    assert!(
        details
            .iter()
            .any(|d| d["message"].as_str().unwrap_or_default().contains("Sunday")),
        "expected a Sunday-specific message in {details:?}"
    );
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_validation_failures_collected_across_fields() {
    let resp = client()
        .post(format!("{}/orders", api_base_url()))
        .bearer_auth(bearer_token())
        .json(&serde_json::json!({
            "purchaseDate": "not-a-date",
            "deliveryTime": "midnight",
            "deliveryLocation": "X",
            "productName": "Y",
            "quantity": 0,
        }))
        .send()
        .await
        .expect("order request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body");
    let details = body["details"].as_array().expect("details array");
    assert!(details.len() >= 5, "expected all field failures, got {details:?}");
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_orders_list_newest_first() {
    let base_url = api_base_url();
    let token = bearer_token();
    let monday = next_weekday(Weekday::Mon);

    // Two submissions in sequence...
    for _ in 0..2 {
        let resp = client()
            .post(format!("{base_url}/orders"))
            .bearer_auth(&token)
            .json(&order_body(monday))
            .send()
            .await
            .expect("order request failed");
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // ...come back in reverse submission order.
    let resp = client()
        .get(format!("{base_url}/orders"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("list request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let orders: Vec<Value> = resp.json().await.expect("orders body");
    assert!(orders.len() >= 2);

    let ids: Vec<i64> = orders
        .iter()
        .filter_map(|o| o["id"].as_i64())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted, "orders should be newest first");
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_submitted_markup_comes_back_neutralized() {
    let monday = next_weekday(Weekday::Mon);
    let mut body = order_body(monday);
    body["message"] = Value::from("<script>alert('x')</script>");

    let resp = client()
        .post(format!("{}/orders", api_base_url()))
        .bearer_auth(bearer_token())
        .json(&body)
        .send()
        .await
        .expect("order request failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Value = resp.json().await.expect("order body");
    let message = order["message"].as_str().expect("message");
    assert!(!message.contains('<'));
    assert!(message.contains("&lt;script&gt;"));
}

#[tokio::test]
#[ignore = "Requires running API server, database, and SAFECART_TEST_TOKEN"]
async fn test_missing_credential_is_unauthorized() {
    let resp = client()
        .get(format!("{}/orders", api_base_url()))
        .send()
        .await
        .expect("list request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
