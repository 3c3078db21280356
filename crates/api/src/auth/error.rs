//! Identity verification errors.

use safecart_core::SubjectIdError;
use thiserror::Error;

/// Errors raised while verifying a bearer credential.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request.
    #[error("missing bearer credential")]
    MissingToken,

    /// The credential failed signature, claim, or expiry checks.
    #[error("invalid bearer credential: {0}")]
    InvalidToken(String),

    /// The credential header names no signing key.
    #[error("credential has no key id")]
    MissingKeyId,

    /// The issuer's key set has no key with the credential's `kid`.
    #[error("no signing key matches kid {0}")]
    UnknownKeyId(String),

    /// The `sub` claim is not a usable subject identifier.
    #[error("subject claim rejected: {0}")]
    Subject(#[from] SubjectIdError),

    /// Fetching the issuer's JWKS document failed.
    #[error("key discovery failed: {0}")]
    KeyDiscovery(#[from] reqwest::Error),
}

impl AuthError {
    /// Whether this failure is the caller's credential's fault (401) rather
    /// than ours (500).
    #[must_use]
    pub const fn is_credential_fault(&self) -> bool {
        !matches!(self, Self::KeyDiscovery(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_faults_map_to_unauthorized() {
        assert!(AuthError::MissingToken.is_credential_fault());
        assert!(AuthError::InvalidToken("expired".to_owned()).is_credential_fault());
        assert!(AuthError::MissingKeyId.is_credential_fault());
        assert!(AuthError::UnknownKeyId("abc".to_owned()).is_credential_fault());
    }
}
