//! SafeCart API library.
//!
//! This crate provides the order-placement service as a library, allowing
//! the router to be exercised in tests and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod validate;

use axum::Router;
use axum::http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the full application router: routes, fallback, and the middleware
/// stack (rate limiting innermost, tracing outermost; Sentry layers are
/// added by the binary).
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().client_origin);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/health/ready", get(routes::health::readiness))
        .merge(routes::routes())
        .fallback(routes::not_found)
        .layer(middleware::general_rate_limiter())
        .layer(cors)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to the configured client origin, with credentials, the
/// four verbs the API serves, and the two headers the client sends.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true);

    // Config loading validated the origin as a URL, so this parse succeeds
    // outside of hand-built test configs.
    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => layer,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;
    use tower::util::ServiceExt;

    use super::*;
    use crate::config::{ApiConfig, AuthConfig, OrderPolicy};

    fn test_state() -> AppState {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://localhost/safecart_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 5000,
            client_origin: "http://localhost:3000".to_string(),
            auth: AuthConfig {
                issuer: "https://tenant.auth0.com/".to_string(),
                audience: "https://api.safecart.example".to_string(),
            },
            policy: OrderPolicy::default(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        // Lazy pool: no connection is made until a query runs, and the
        // routes under test never touch the database.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/safecart_test")
            .unwrap();

        AppState::new(config, pool)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_requires_no_credential() {
        let response = app(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
        assert!(json.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn test_options_serves_catalog_without_auth() {
        let response = app(test_state())
            .oneshot(Request::get("/options").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["deliveryTimes"][0], "10 AM");
        assert_eq!(json["locations"].as_array().unwrap().len(), 25);
        assert_eq!(json["products"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_orders_reject_missing_credential() {
        let response = app(test_state())
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Invalid token");
    }

    #[tokio::test]
    async fn test_profile_rejects_malformed_credential() {
        let response = app(test_state())
            .oneshot(
                Request::get("/user/profile")
                    .header("authorization", "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_route_envelope() {
        let response = app(test_state())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Route not found");
    }

    #[tokio::test]
    async fn test_security_headers_applied() {
        let response = app(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
        assert!(headers.get("strict-transport-security").is_some());
        assert!(headers.get("content-security-policy").is_some());
        assert!(headers.get("x-request-id").is_some());
    }
}
