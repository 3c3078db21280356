//! Identity verification and the authenticated-caller extractor.
//!
//! Every user-scoped route takes an [`Identity`] argument; the extractor
//! pulls the bearer credential off the request, verifies it against the
//! issuer, and validates the subject claim. Profile upserts are NOT done
//! here - handlers call the user directory explicitly so the
//! upsert-on-auth coupling stays visible in one place.

pub mod claims;
pub mod error;
pub mod verifier;

pub use claims::{Claims, bearer_token};
pub use error::AuthError;
pub use verifier::TokenVerifier;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use safecart_core::SubjectId;

use crate::error::AppError;
use crate::state::AppState;

/// A verified caller: validated subject identifier plus profile claims.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(identity: Identity) -> impl IntoResponse {
///     format!("hello, {}", identity.claims.username())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    /// Validated subject identifier.
    pub subject: SubjectId,
    /// Profile claims from the credential.
    pub claims: Claims,
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let claims = state.verifier().verify(token).await?;
        let subject = claims.subject_id().map_err(AuthError::Subject)?;

        Ok(Self { subject, claims })
    }
}
