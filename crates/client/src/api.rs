//! HTTP client for the SafeCart API.
//!
//! Attaches the stored bearer credential to every call and translates the
//! API's error envelope into typed errors. A 401 response clears the
//! stored credential before surfacing, so the caller's next bootstrap
//! routes back through login.

use std::sync::Arc;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use safecart_core::{Order, OrderPayload, ProfileUpdate, User};

use crate::session::CredentialStore;

/// A field-level failure from the API's validation envelope.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

/// The `/options` catalog as the client consumes it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionsCatalog {
    /// Delivery slot labels.
    pub delivery_times: Vec<String>,
    /// Delivery locations.
    pub locations: Vec<String>,
    /// Product names.
    pub products: Vec<String>,
}

/// Errors surfaced to the view layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The credential was missing, expired, or revoked; it has been
    /// cleared from the store and the user must log in again.
    #[error("not authenticated")]
    Unauthorized,

    /// The submission failed validation; every offending field is listed.
    #[error("{message}")]
    Validation {
        /// Envelope message, e.g. "Validation failed".
        message: String,
        /// Per-field failures.
        details: Vec<FieldIssue>,
    },

    /// Any other API-reported failure.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Envelope message.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// The API error envelope: `{error}` or `{error, details}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    details: Vec<FieldIssue>,
}

/// Everything the dashboard needs before first render.
#[derive(Debug, Clone)]
pub struct DashboardPayload {
    /// The caller's profile.
    pub profile: User,
    /// The caller's orders, newest first.
    pub orders: Vec<Order>,
    /// The static catalog.
    pub options: OptionsCatalog,
}

/// Client for the SafeCart API.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a client for `base_url` (no trailing slash) using
    /// `credentials` for bearer attachment.
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Fetch (or implicitly create) the caller's profile.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on auth, API, or transport failure.
    pub async fn get_profile(&self) -> Result<User, ClientError> {
        let resp = self.send(self.http.get(self.url("/user/profile"))).await?;
        Self::json_or_error(resp).await
    }

    /// Update the caller's contact number / country.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on auth, validation, API, or transport failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ClientError> {
        let resp = self
            .send(self.http.put(self.url("/user/profile")).json(update))
            .await?;
        Self::json_or_error(resp).await
    }

    /// Submit an order.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` with every offending field on 400.
    pub async fn create_order(&self, payload: &OrderPayload) -> Result<Order, ClientError> {
        let resp = self
            .send(self.http.post(self.url("/orders")).json(payload))
            .await?;
        Self::json_or_error(resp).await
    }

    /// Fetch the caller's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on auth, API, or transport failure.
    pub async fn list_orders(&self) -> Result<Vec<Order>, ClientError> {
        let resp = self.send(self.http.get(self.url("/orders"))).await?;
        Self::json_or_error(resp).await
    }

    /// Fetch the static options catalog.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on API or transport failure.
    pub async fn get_options(&self) -> Result<OptionsCatalog, ClientError> {
        let resp = self.send(self.http.get(self.url("/options"))).await?;
        Self::json_or_error(resp).await
    }

    /// Fetch profile, orders, and options concurrently for first render.
    ///
    /// The three fetches are joined; if any one fails the whole bootstrap
    /// fails - no partial-data rendering.
    ///
    /// # Errors
    ///
    /// Returns the first `ClientError` any fetch produced.
    pub async fn load_dashboard(&self) -> Result<DashboardPayload, ClientError> {
        let (profile, orders, options) =
            tokio::try_join!(self.get_profile(), self.list_orders(), self.get_options())?;

        Ok(DashboardPayload {
            profile,
            orders,
            options,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the stored credential and send; a 401 clears the credential.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = match self.credentials.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!("credential rejected, clearing stored token");
            self.credentials.clear();
            return Err(ClientError::Unauthorized);
        }

        Ok(response)
    }

    /// Decode a success body, or translate the error envelope.
    async fn json_or_error<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let envelope = response
            .json::<ErrorEnvelope>()
            .await
            .unwrap_or_else(|_| ErrorEnvelope {
                error: "Unexpected error".to_owned(),
                details: Vec::new(),
            });

        Err(interpret_failure(status.as_u16(), envelope))
    }
}

/// Map a non-success status plus envelope to a typed error.
fn interpret_failure(status: u16, envelope: ErrorEnvelope) -> ClientError {
    if status == 400 && !envelope.details.is_empty() {
        ClientError::Validation {
            message: envelope.error,
            details: envelope.details,
        }
    } else {
        ClientError::Api {
            status,
            message: envelope.error,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> ErrorEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_validation_envelope_interpreted() {
        let err = interpret_failure(
            400,
            envelope(
                r#"{"error":"Validation failed","details":[
                    {"field":"purchaseDate","message":"Delivery not available on Sundays"}
                ]}"#,
            ),
        );
        match err {
            ClientError::Validation { message, details } => {
                assert_eq!(message, "Validation failed");
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "purchaseDate");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_envelope_interpreted() {
        let err = interpret_failure(404, envelope(r#"{"error":"User not found"}"#));
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "User not found");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_request_without_details_is_plain_api_error() {
        let err = interpret_failure(400, envelope(r#"{"error":"Bad request"}"#));
        assert!(matches!(err, ClientError::Api { status: 400, .. }));
    }

    #[test]
    fn test_options_catalog_decodes_wire_shape() {
        let catalog: OptionsCatalog = serde_json::from_str(
            r#"{
                "deliveryTimes": ["10 AM", "11 AM", "12 PM"],
                "locations": ["Colombo"],
                "products": ["Laptop"]
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.delivery_times.len(), 3);
        assert_eq!(catalog.locations[0], "Colombo");
    }
}
