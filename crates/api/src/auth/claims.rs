//! Profile claims carried by a verified bearer credential.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use serde::Deserialize;

use safecart_core::{SubjectId, SubjectIdError};

/// Claims extracted from a verified credential.
///
/// Only the profile-relevant subset is kept; registered claims (`exp`,
/// `iss`, `aud`) are checked during verification and then dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject identifier, verbatim from the issuer.
    pub sub: String,
    /// Full name, if the issuer asserted one.
    #[serde(default)]
    pub name: Option<String>,
    /// Nickname / handle, if asserted.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Email address, if asserted.
    #[serde(default)]
    pub email: Option<String>,
}

impl Claims {
    /// Parse the `sub` claim into a validated subject identifier.
    ///
    /// # Errors
    ///
    /// Returns `SubjectIdError` if the claim is empty, oversized, or
    /// contains control characters.
    pub fn subject_id(&self) -> Result<SubjectId, SubjectIdError> {
        SubjectId::parse(&self.sub)
    }

    /// Display username: nickname, falling back to email, then name, then
    /// the raw subject.
    #[must_use]
    pub fn username(&self) -> &str {
        self.nickname
            .as_deref()
            .or(self.email.as_deref())
            .or(self.name.as_deref())
            .unwrap_or(&self.sub)
    }

    /// Full name: name, falling back to nickname, then email, then the raw
    /// subject.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.nickname.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.sub)
    }

    /// Email, or empty when the issuer asserted none.
    #[must_use]
    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

/// Pull the bearer token out of the `Authorization` header, if present and
/// well-formed.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();
    if token.is_empty() { None } else { Some(token) }
}
